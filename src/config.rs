//! Run configuration.
//!
//! [`EvolutionConfig`] holds every parameter of the evolutionary loop.
//! Defaults reproduce a small benchmark setup (population 40, 50
//! iterations, 1% mutation) that solves toy instances in milliseconds;
//! real instances want larger budgets.

use crate::error::Error;
use crate::fitness::FitnessPolicy;

/// Configuration for an evolutionary vertex cover run.
///
/// # Defaults
///
/// ```
/// use mincover::{EvolutionConfig, FitnessPolicy};
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 40);
/// assert_eq!(config.max_iterations, 50);
/// assert_eq!(config.mutation_probability, 0.01);
/// assert_eq!(
///     config.fitness,
///     FitnessPolicy::MinimizeSize { uncovered_penalty: 1000.0 }
/// );
/// ```
///
/// # Builder Pattern
///
/// ```
/// use mincover::{EvolutionConfig, FitnessPolicy};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(80)
///     .with_max_iterations(500)
///     .with_mutation_probability(0.02)
///     .with_fitness(FitnessPolicy::MatchTargetSize {
///         target_size: 7,
///         uncovered_penalty: 1000.0,
///         deviation_penalty: 10.0,
///     })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of individuals per generation. Constant across the run;
    /// must be at least 2 so a breeding pair exists.
    pub population_size: usize,

    /// Iteration budget. The run stops here unless the target-matching
    /// policy finds an exact match earlier.
    pub max_iterations: usize,

    /// Per-gene bit-flip probability applied to every offspring.
    pub mutation_probability: f64,

    /// Scoring policy; also decides the early-stop and best-tracking
    /// behavior of the run.
    pub fitness: FitnessPolicy,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Break fitness ties deterministically (smaller cover first, then
    /// genome order). Off by default: tie order is unspecified and must
    /// not be relied on.
    pub deterministic_ranking: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 40,
            max_iterations: 50,
            mutation_probability: 0.01,
            fitness: FitnessPolicy::default(),
            seed: None,
            deterministic_ranking: false,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the per-gene mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the fitness policy.
    pub fn with_fitness(mut self, fitness: FitnessPolicy) -> Self {
        self.fitness = fitness;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables deterministic tie-breaking in the ranking.
    pub fn with_deterministic_ranking(mut self, deterministic: bool) -> Self {
        self.deterministic_ranking = deterministic;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] for a population smaller than the
    /// breeding pair, a zero iteration budget, an out-of-range mutation
    /// probability, or invalid fitness penalties.
    pub fn validate(&self) -> Result<(), Error> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(Error::InvalidConfig(
                "mutation_probability must be within [0, 1]".into(),
            ));
        }
        self.fitness.validate()
    }
}
