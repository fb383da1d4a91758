//! Scorer error types

use thiserror::Error;

/// Errors raised when validating scorer input at the API boundary.
///
/// Scoring itself never fails; these only come from constructing a
/// [`Fuzziness`](crate::Fuzziness) or a [`Scorer`](crate::Scorer).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// Fuzziness outside [0, 1), or NaN
    #[error("fuzziness must be in [0, 1), got {0}")]
    FuzzinessOutOfRange(f64),

    /// Scorer configuration could not be parsed
    #[error("invalid scorer config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        ScoreError::InvalidConfig(err.to_string())
    }
}

/// Result type for scorer construction
pub type ScoreResult<T> = Result<T, ScoreError>;
