//! Error types raised while configuring a coach.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when configuring a [`PatternCoach`](crate::PatternCoach).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CoachError {
    /// Factor weights summed to zero or exceeded the 100-point scale.
    #[error("factor weights must sum to between 1 and 100, got {total}")]
    InvalidWeights {
        /// Sum of the rejected weights.
        total: u16,
    },
}
