//! Fitness policies for scoring candidate covers.
//!
//! Scoring is a pure function of (graph, genome): identical genomes always
//! score identically within one run. Fitness is maximized; every score is
//! `<= 0` and `0` is the theoretical optimum.
//!
//! Two interchangeable policies exist, selected by configuration:
//!
//! - [`FitnessPolicy::MinimizeSize`] rewards small valid covers,
//! - [`FitnessPolicy::MatchTargetSize`] rewards valid covers of an exact
//!   target size.
//!
//! In both, the uncovered-edge penalty must dominate the size/deviation
//! term by at least an order of magnitude so that covering correctness is
//! always won before size is optimized.

use crate::error::Error;
use crate::genome::Genome;
use crate::graph::Graph;

/// Scoring policy for candidate covers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessPolicy {
    /// Penalize uncovered edges, then cover size (implicit weight 1):
    ///
    /// `fitness = -(uncovered_penalty * uncovered) - cover_size`
    ///
    /// The maximum 0 is reached only by the empty cover on an edgeless
    /// graph. `uncovered_penalty` should exceed the vertex count by an
    /// order of magnitude (1000–10000 is typical) so that an invalid
    /// cover never outscores a valid one.
    MinimizeSize {
        /// Penalty per uncovered edge.
        uncovered_penalty: f64,
    },

    /// Penalize uncovered edges, then deviation from a target size:
    ///
    /// `fitness = -(uncovered_penalty * uncovered)
    ///            - deviation_penalty * |cover_size - target_size|`
    ///
    /// The maximum is exactly 0, reached iff the cover is valid and has
    /// exactly `target_size` vertices.
    MatchTargetSize {
        /// Desired cover size.
        target_size: usize,
        /// Penalty per uncovered edge.
        uncovered_penalty: f64,
        /// Penalty per vertex of deviation from `target_size`.
        deviation_penalty: f64,
    },
}

impl Default for FitnessPolicy {
    fn default() -> Self {
        Self::MinimizeSize {
            uncovered_penalty: 1000.0,
        }
    }
}

impl FitnessPolicy {
    /// Scores a genome against a graph. Higher is better.
    pub fn evaluate(&self, graph: &Graph, genome: &Genome) -> f64 {
        let uncovered = uncovered_edges(graph, genome) as f64;
        match *self {
            Self::MinimizeSize { uncovered_penalty } => {
                -(uncovered_penalty * uncovered) - genome.count_ones() as f64
            }
            Self::MatchTargetSize {
                target_size,
                uncovered_penalty,
                deviation_penalty,
            } => {
                let deviation = genome.count_ones().abs_diff(target_size) as f64;
                -(uncovered_penalty * uncovered) - deviation_penalty * deviation
            }
        }
    }

    /// True iff this policy terminates the run early on `fitness`.
    ///
    /// Only target matching stops early, on an exact 0. The comparison is
    /// exact: a zero score arises only from zero uncovered edges and zero
    /// deviation, both integral multiples of the penalties.
    pub fn optimum_reached(&self, fitness: f64) -> bool {
        matches!(self, Self::MatchTargetSize { .. }) && fitness == 0.0
    }

    /// Validates the policy parameters.
    ///
    /// # Errors
    /// Non-positive penalties are rejected, as is an uncovered penalty
    /// less than ten times the deviation penalty (coverage must dominate).
    pub fn validate(&self) -> Result<(), Error> {
        match *self {
            Self::MinimizeSize { uncovered_penalty } => {
                if uncovered_penalty <= 0.0 {
                    return Err(Error::InvalidConfig(
                        "uncovered_penalty must be positive".into(),
                    ));
                }
            }
            Self::MatchTargetSize {
                uncovered_penalty,
                deviation_penalty,
                ..
            } => {
                if deviation_penalty <= 0.0 {
                    return Err(Error::InvalidConfig(
                        "deviation_penalty must be positive".into(),
                    ));
                }
                if uncovered_penalty < 10.0 * deviation_penalty {
                    return Err(Error::InvalidConfig(
                        "uncovered_penalty must dominate deviation_penalty by at least 10x".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Counts edges with both endpoints outside the cover.
pub fn uncovered_edges(graph: &Graph, genome: &Genome) -> usize {
    graph
        .edges()
        .iter()
        .filter(|&&(u, v)| !genome.get(u) && !genome.get(v))
        .count()
}

/// True iff every edge has at least one endpoint in the cover.
pub fn is_valid_cover(graph: &Graph, genome: &Genome) -> bool {
    graph.edges().iter().all(|&(u, v)| genome.get(u) || genome.get(v))
}
