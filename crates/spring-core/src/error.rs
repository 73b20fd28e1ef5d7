use thiserror::Error;

/// Everything the core can reject. All variants are configuration problems
/// detected before any state is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigIssue {
    #[error("trail capacity must be at least 1")]
    ZeroCapacity,
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("shape size must be finite and non-negative, got {width}x{height}")]
    BadShapeSize { width: f64, height: f64 },
}

impl From<ConfigIssue> for Error {
    fn from(issue: ConfigIssue) -> Self {
        Error::InvalidConfiguration(issue)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigIssue::NonFinite { name, value }.into())
    }
}
