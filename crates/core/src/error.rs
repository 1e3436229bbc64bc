use thiserror::Error;

/// Errors raised when progress inputs fail boundary validation.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("goal must be greater than zero")]
    InvalidGoal,

    #[error("distance must be finite and non-negative, got {value}")]
    InvalidDistance { value: f64 },

    #[error("failed to parse goal from {raw:?}")]
    ParseGoal { raw: String },
}

/// Validates a distance in metres.
pub(crate) fn check_distance(value: f64) -> Result<f64, ProgressError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ProgressError::InvalidDistance { value })
    }
}
