use thiserror::Error;

/// Errors raised by the formula and validation layer.
///
/// These are caller errors: the UI layer is expected to validate input
/// before calling in, and the engine never coerces bad numbers silently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitnessError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing input: {0}")]
    MissingInput(String),
}

pub type FitnessResult<T> = Result<T, FitnessError>;

impl FitnessError {
    pub fn invalid(message: impl Into<String>) -> Self {
        FitnessError::InvalidInput(message.into())
    }

    pub fn missing(message: impl Into<String>) -> Self {
        FitnessError::MissingInput(message.into())
    }
}

/// Fails with `InvalidInput` unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> FitnessResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FitnessError::invalid(format!("{} must be positive, got {}", name, value)))
    }
}
