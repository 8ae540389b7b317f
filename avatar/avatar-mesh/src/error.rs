//! Error types for figure generation.

use thiserror::Error;

/// Result type for figure generation operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while generating figure geometry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MeshError {
    /// Revolution profile has too few points.
    #[error("profile needs at least {min} points, got {actual}")]
    TooFewProfilePoints {
        /// Minimum required points.
        min: usize,
        /// Actual point count.
        actual: usize,
    },

    /// Revolution segment count is too low.
    #[error("segments must be at least {min}, got {actual}")]
    TooFewSegments {
        /// Minimum required segments.
        min: usize,
        /// Actual segment count.
        actual: usize,
    },

    /// A profile radius is negative or non-finite.
    #[error("invalid profile radius: {0}")]
    InvalidRadius(f64),
}
