//! Result reporting.
//!
//! Wall-clock measurement and the human-readable final summary live here,
//! outside the evolutionary core. Per-generation progress is the runner's
//! `tracing` event stream; this module adds the one-time timing wrapper
//! and the end-of-run block.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::EvolutionConfig;
use crate::error::Error;
use crate::graph::Graph;
use crate::runner::{EvolutionResult, EvolutionRunner};

/// A finished run together with its wall-clock duration.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The run's outcome.
    pub result: EvolutionResult,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

/// Runs the evolutionary search and measures its wall-clock time.
///
/// # Errors
/// Propagates any configuration error from [`EvolutionRunner::run`].
pub fn run_timed(graph: &Graph, config: &EvolutionConfig) -> Result<RunReport, Error> {
    let started = Instant::now();
    let result = EvolutionRunner::run(graph, config)?;
    let elapsed = started.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis() as u64,
        fitness = result.best_fitness,
        cover_size = result.best.cover_size,
        valid = result.valid,
        generations = result.generations,
        "run finished"
    );
    Ok(RunReport { result, elapsed })
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fitness     = {}", self.result.best_fitness)?;
        writeln!(f, "cover size  = {}", self.result.best.cover_size)?;
        writeln!(f, "genome      = {}", self.result.best.genome)?;
        writeln!(f, "valid cover = {}", self.result.valid)?;
        write!(f, "elapsed     = {:?}", self.elapsed)
    }
}
