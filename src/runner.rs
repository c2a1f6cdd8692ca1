//! Generational evolution loop.
//!
//! [`EvolutionRunner`] owns the whole run: initialize a random population,
//! then per generation evaluate → rank → preserve the elite → breed, until
//! the iteration budget is spent or the target-matching policy reports an
//! exact match. All randomness flows through one seedable generator built
//! from the configuration, so a seeded run is fully reproducible.
//!
//! Breeding is deliberately narrow: every offspring of a generation
//! descends from the same two top-ranked individuals. The elite is copied
//! verbatim into the next generation, which makes the elite fitness
//! non-decreasing across generations.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::EvolutionConfig;
use crate::error::Error;
use crate::fitness::{is_valid_cover, FitnessPolicy};
use crate::genome::{Genome, Individual};
use crate::graph::Graph;
use crate::operators::{bit_flip_mutation, two_point_crossover};

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult {
    /// The reported solution. Under size minimization this is the
    /// smallest valid cover observed anywhere in the run; if none was
    /// ever observed (or under target matching) it is the final
    /// generation's elite.
    pub best: Individual,

    /// Fitness of `best` (same as `best.fitness`).
    pub best_fitness: f64,

    /// Whether `best` covers every edge. A `false` here is not an error:
    /// the budget simply ran out before a valid cover appeared.
    pub valid: bool,

    /// Whether the target-matching policy stopped the run early on an
    /// exact fitness-0 match. Always `false` under size minimization.
    pub reached_optimum: bool,

    /// Number of generations actually evaluated.
    pub generations: usize,

    /// Elite fitness after each generation's ranking. With elitism this
    /// sequence is non-decreasing.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use mincover::{EvolutionConfig, EvolutionRunner, Graph};
///
/// let graph = Graph::new(3, vec![(0, 1), (1, 2), (0, 2)])?;
/// let config = EvolutionConfig::default().with_seed(42);
/// let result = EvolutionRunner::run(&graph, &config)?;
/// assert_eq!(result.fitness_history.len(), result.generations);
/// # Ok::<(), mincover::Error>(())
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the configured evolutionary search against `graph`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] for an invalid configuration, a
    /// graph with fewer than 2 vertices (two-point crossover needs two
    /// cut points), or a target size exceeding the vertex count. Once the
    /// loop starts, no operation can fail.
    pub fn run(graph: &Graph, config: &EvolutionConfig) -> Result<EvolutionResult, Error> {
        config.validate()?;
        if graph.vertex_count() < 2 {
            return Err(Error::InvalidConfig(
                "graph must have at least 2 vertices for two-point crossover".into(),
            ));
        }
        if let FitnessPolicy::MatchTargetSize { target_size, .. } = config.fitness {
            if target_size > graph.vertex_count() {
                return Err(Error::InvalidConfig(format!(
                    "target_size {target_size} exceeds vertex count {}",
                    graph.vertex_count()
                )));
            }
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::new(Genome::random(graph.vertex_count(), &mut rng)))
            .collect();

        let mut tracked_best: Option<Individual> = None;
        let mut fitness_history = Vec::with_capacity(config.max_iterations);
        let mut reached_optimum = false;
        let mut generations = 0;

        for iteration in 1..=config.max_iterations {
            generations = iteration;

            // Refresh every cached score before any comparison.
            for ind in &mut population {
                ind.cover_size = ind.genome.count_ones();
                ind.fitness = config.fitness.evaluate(graph, &ind.genome);
            }

            rank(&mut population, config.deterministic_ranking);

            let elite = &population[0];
            fitness_history.push(elite.fitness);
            debug!(
                iteration,
                fitness = elite.fitness,
                cover_size = elite.cover_size,
                "generation ranked"
            );

            // Remember the smallest valid cover seen anywhere in the run.
            if matches!(config.fitness, FitnessPolicy::MinimizeSize { .. })
                && is_valid_cover(graph, &elite.genome)
                && tracked_best
                    .as_ref()
                    .map_or(true, |best| elite.cover_size < best.cover_size)
            {
                tracked_best = Some(elite.clone());
            }

            if config.fitness.optimum_reached(elite.fitness) {
                info!(
                    iteration,
                    cover_size = elite.cover_size,
                    "exact target cover found"
                );
                reached_optimum = true;
                break;
            }

            // The final generation is only evaluated, never bred from.
            if iteration == config.max_iterations {
                break;
            }

            population = breed(&population, config, &mut rng)?;
        }

        let best = tracked_best.unwrap_or_else(|| population[0].clone());
        let valid = is_valid_cover(graph, &best.genome);
        Ok(EvolutionResult {
            best_fitness: best.fitness,
            valid,
            reached_optimum,
            generations,
            fitness_history,
            best,
        })
    }
}

/// Sorts descending by fitness. The default comparator leaves equal-fitness
/// order unspecified; the deterministic comparator breaks ties by smaller
/// cover, then genome order.
fn rank(population: &mut [Individual], deterministic: bool) {
    if deterministic {
        population.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.cover_size.cmp(&b.cover_size))
                .then_with(|| a.genome.bits().cmp(b.genome.bits()))
        });
    } else {
        population.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));
    }
}

/// Builds the next generation from a ranked population: a verbatim copy of
/// the elite, then crossover-plus-mutation offspring of the fixed top pair
/// until the size target is met. The odd final child of a pair is dropped.
fn breed<R: Rng>(
    ranked: &[Individual],
    config: &EvolutionConfig,
    rng: &mut R,
) -> Result<Vec<Individual>, Error> {
    let mut next = Vec::with_capacity(config.population_size);
    next.push(ranked[0].clone());

    while next.len() < config.population_size {
        let (mut g1, mut g2) = two_point_crossover(&ranked[0].genome, &ranked[1].genome, rng)?;
        bit_flip_mutation(&mut g1, config.mutation_probability, rng);
        bit_flip_mutation(&mut g2, config.mutation_probability, rng);
        next.push(Individual::new(g1));
        if next.len() < config.population_size {
            next.push(Individual::new(g2));
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::new(3, vec![(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    fn target_policy(target_size: usize) -> FitnessPolicy {
        FitnessPolicy::MatchTargetSize {
            target_size,
            uncovered_penalty: 1000.0,
            deviation_penalty: 10.0,
        }
    }

    #[test]
    fn test_triangle_finds_minimum_cover() {
        let config = EvolutionConfig::default()
            .with_population_size(30)
            .with_max_iterations(200)
            .with_mutation_probability(0.05)
            .with_seed(42);
        let result = EvolutionRunner::run(&triangle(), &config).unwrap();

        assert!(result.valid, "triangle cover must be found");
        assert_eq!(result.best.cover_size, 2, "minimum cover of a triangle");
        assert_eq!(result.best_fitness, -2.0);
        assert!(!result.reached_optimum, "size minimization never stops early");
    }

    #[test]
    fn test_grid_target_matching_reaches_optimum() {
        // Stochastic end-to-end: retry a few seeds, any one success is
        // enough. The 5x3 grid has minimum cover 7 (middle row plus
        // middle column).
        let graph = Graph::grid(5, 3);
        for seed in 1..=6u64 {
            let config = EvolutionConfig::default()
                .with_population_size(100)
                .with_max_iterations(6000)
                .with_mutation_probability(0.05)
                .with_fitness(target_policy(7))
                .with_seed(seed);
            let result = EvolutionRunner::run(&graph, &config).unwrap();
            if result.reached_optimum {
                assert_eq!(result.best_fitness, 0.0);
                assert_eq!(result.best.cover_size, 7);
                assert!(result.valid);
                assert!(result.generations < 6000, "must have stopped early");
                return;
            }
        }
        panic!("no seed reached the exact size-7 cover");
    }

    #[test]
    fn test_target_match_stops_in_first_generation() {
        // Single edge, target 1: half of all random genomes are perfect,
        // so generation 1 contains one with near certainty.
        let graph = Graph::new(2, vec![(0, 1)]).unwrap();
        let config = EvolutionConfig::default()
            .with_population_size(32)
            .with_max_iterations(50)
            .with_fitness(target_policy(1))
            .with_seed(3);
        let result = EvolutionRunner::run(&graph, &config).unwrap();

        assert!(result.reached_optimum);
        assert_eq!(result.generations, 1);
        assert_eq!(result.best_fitness, 0.0);
        assert_eq!(result.best.cover_size, 1);
    }

    #[test]
    fn test_elite_fitness_never_regresses() {
        let config = EvolutionConfig::default()
            .with_population_size(40)
            .with_max_iterations(120)
            .with_mutation_probability(0.02)
            .with_seed(9);
        let result = EvolutionRunner::run(&Graph::grid(4, 4), &config).unwrap();

        assert_eq!(result.fitness_history.len(), result.generations);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "elitism must keep elite fitness non-decreasing: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_empty_edge_graph_converges_to_empty_cover() {
        let graph = Graph::new(8, vec![]).unwrap();
        let config = EvolutionConfig::default()
            .with_population_size(30)
            .with_max_iterations(300)
            .with_mutation_probability(0.02)
            .with_seed(5);
        let result = EvolutionRunner::run(&graph, &config).unwrap();

        assert!(result.valid);
        assert_eq!(result.best.cover_size, 0);
        assert_eq!(result.best_fitness, 0.0);
    }

    #[test]
    fn test_same_seed_reproduces_run() {
        let graph = Graph::grid(4, 4);
        let config = EvolutionConfig::default()
            .with_population_size(30)
            .with_max_iterations(60)
            .with_seed(1234);

        let first = EvolutionRunner::run(&graph, &config).unwrap();
        let second = EvolutionRunner::run(&graph, &config).unwrap();

        assert_eq!(first.fitness_history, second.fitness_history);
        assert_eq!(first.best.genome, second.best.genome);
        assert_eq!(first.generations, second.generations);
    }

    #[test]
    fn test_fallback_flagged_invalid_when_budget_tiny() {
        // Two random 30-bit genomes almost surely leave one of the 49
        // edges of a 6x5 grid uncovered; with a single generation the
        // run must report its best effort flagged invalid.
        let graph = Graph::grid(6, 5);
        let config = EvolutionConfig::default()
            .with_population_size(2)
            .with_max_iterations(1)
            .with_seed(11);
        let result = EvolutionRunner::run(&graph, &config).unwrap();

        assert!(!result.valid);
        assert!(!result.reached_optimum);
        assert_eq!(result.generations, 1);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_rejects_tiny_graph() {
        let graph = Graph::new(1, vec![]).unwrap();
        let err = EvolutionRunner::run(&graph, &EvolutionConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_invalid_population() {
        let config = EvolutionConfig::default().with_population_size(0);
        let err = EvolutionRunner::run(&triangle(), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_target_size_exceeding_vertices() {
        let config = EvolutionConfig::default().with_fitness(target_policy(4));
        let err = EvolutionRunner::run(&triangle(), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rank_sorts_descending() {
        let mut population: Vec<Individual> = [-5.0, -1.0, -3.0]
            .iter()
            .map(|&f| {
                let mut ind = Individual::new(Genome::zeros(2));
                ind.fitness = f;
                ind
            })
            .collect();
        rank(&mut population, false);
        let fitnesses: Vec<f64> = population.iter().map(|i| i.fitness).collect();
        assert_eq!(fitnesses, vec![-1.0, -3.0, -5.0]);
    }

    #[test]
    fn test_rank_deterministic_tie_break() {
        let make = |bits: Vec<bool>| {
            let mut ind = Individual::new(Genome::from_bits(bits));
            ind.cover_size = ind.genome.count_ones();
            ind.fitness = -10.0;
            ind
        };
        // Equal fitness: smaller cover wins, then genome order.
        let mut population = vec![
            make(vec![true, true, false]),
            make(vec![false, true, false]),
            make(vec![true, false, false]),
        ];
        rank(&mut population, true);
        assert_eq!(population[0].genome.bits(), &[false, true, false]);
        assert_eq!(population[1].genome.bits(), &[true, false, false]);
        assert_eq!(population[2].genome.bits(), &[true, true, false]);
    }

    #[test]
    fn test_deterministic_ranking_run_is_reproducible() {
        let graph = Graph::grid(4, 3);
        let config = EvolutionConfig::default()
            .with_population_size(20)
            .with_max_iterations(40)
            .with_deterministic_ranking(true)
            .with_seed(77);
        let first = EvolutionRunner::run(&graph, &config).unwrap();
        let second = EvolutionRunner::run(&graph, &config).unwrap();
        assert_eq!(first.best.genome, second.best.genome);
        assert_eq!(first.fitness_history, second.fitness_history);
    }
}
