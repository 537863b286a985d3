//! Error types for the automaton engine.
//!
//! Every variant is a local precondition failure. The computation is pure,
//! so callers should propagate rather than retry.

use thiserror::Error;

/// Main error type for cellblock_core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaError {
    /// Rule index outside `0..=255`
    #[error("Invalid rule {0}: must be in 0..=255")]
    InvalidRule(i64),

    /// Non-positive canvas size, scale, or derived row/column count
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Stepping a simulation that already produced every generation
    #[error("Simulation already complete after {generations} generations")]
    AlreadyComplete { generations: usize },

    /// Restarting a run that already produced generation 0
    #[error("Simulation already started at generation {generation}")]
    AlreadyStarted { generation: usize },

    /// Stepping a simulation that was never initialised
    #[error("Simulation has not been started")]
    NotStarted,

    /// Block hash too short, bad hex, or no transactions
    #[error("Malformed block data: {0}")]
    MalformedBlockData(String),
}

/// Result type alias for cellblock_core operations.
pub type Result<T> = std::result::Result<T, CaError>;

impl CaError {
    /// Creates a new dimension error.
    #[must_use]
    pub fn dimension<S: Into<String>>(msg: S) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Creates a new block data error.
    #[must_use]
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedBlockData(msg.into())
    }
}
