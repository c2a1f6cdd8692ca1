//! Crate-wide error type.
//!
//! All fatal conditions (malformed graph input, rejected configuration)
//! surface through [`Error`] before or at the start of a run. The
//! evolutionary loop itself has no recoverable failure modes: once a run
//! starts on well-formed data, every operation succeeds. Exhausting the
//! iteration budget without finding a valid cover is *not* an error; it is
//! reported through the result's validity flag.

use thiserror::Error;

/// Errors produced by graph loading and run configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration rejected before the run started.
    ///
    /// Covers non-positive population sizes, a zero iteration budget,
    /// out-of-range operator parameters, and graphs too small for
    /// two-point crossover.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Graph input that could not be parsed.
    #[error("malformed graph input at line {line}: {reason}")]
    MalformedGraph {
        /// 1-based line number in the input stream.
        line: usize,
        /// What went wrong on that line.
        reason: String,
    },

    /// An edge endpoint outside `0..vertex_count`.
    #[error("edge ({u}, {v}) out of range for {vertex_count} vertices")]
    EdgeOutOfRange {
        /// First endpoint, 0-based.
        u: usize,
        /// Second endpoint, 0-based.
        v: usize,
        /// Number of vertices in the graph under construction.
        vertex_count: usize,
    },

    /// The underlying reader failed while parsing graph input.
    #[error("graph input could not be read")]
    Io(#[from] std::io::Error),
}
