//! Evolutionary heuristic solver for the Minimum Vertex Cover problem.
//!
//! Given an undirected graph, find a small subset of vertices touching
//! every edge. Exact solving is NP-hard (Karp, 1972); this crate trades
//! optimality guarantees for scalability using a genetic algorithm:
//! bit-vector genomes, elitist selection, two-point crossover, and
//! per-gene bit-flip mutation.
//!
//! # Components
//!
//! - [`Graph`]: immutable vertex count + edge set, built from an explicit
//!   edge list, a PACE-style input stream, or a procedural grid
//! - [`Genome`] / [`Individual`]: candidate cover and its cached scores
//! - [`FitnessPolicy`]: interchangeable scoring — minimize the cover size,
//!   or match an exact target size (which also enables early stopping)
//! - [`operators`]: two-point crossover and bit-flip mutation
//! - [`EvolutionConfig`] / [`EvolutionRunner`]: parameters and the
//!   generational loop
//! - [`report`]: wall-clock timing and the final summary
//!
//! The run is single-threaded; all randomness flows through one seedable
//! generator, so setting [`EvolutionConfig::seed`] makes results exactly
//! reproducible.
//!
//! # Example
//!
//! ```
//! use mincover::{EvolutionConfig, EvolutionRunner, Graph};
//!
//! let graph = Graph::new(3, vec![(0, 1), (1, 2), (0, 2)])?;
//! let config = EvolutionConfig::default()
//!     .with_population_size(30)
//!     .with_max_iterations(100)
//!     .with_seed(7);
//! let result = EvolutionRunner::run(&graph, &config)?;
//! assert!(result.best_fitness <= 0.0);
//! assert_eq!(result.fitness_history.len(), result.generations);
//! # Ok::<(), mincover::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod graph;
pub mod operators;
pub mod report;
pub mod runner;

pub use config::EvolutionConfig;
pub use error::Error;
pub use fitness::{is_valid_cover, uncovered_edges, FitnessPolicy};
pub use genome::{Genome, Individual};
pub use graph::Graph;
pub use report::{run_timed, RunReport};
pub use runner::{EvolutionResult, EvolutionRunner};
