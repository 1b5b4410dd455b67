use crate::category::Category;
use thiserror::Error;

/// Error type for invalid model inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FootprintError {
    #[error("Invalid reading for {category}: {value}. Readings must be finite and non-negative")]
    InvalidReading { category: Category, value: f64 },
    #[error("Invalid emission factor for {category}: {value}. Factors must be finite and positive")]
    InvalidFactor { category: Category, value: f64 },
    #[error("Unknown category '{0}'. Expected one of: {1}")]
    UnknownCategory(String, String),
}

/// Convenience type for `Result<T, FootprintError>`.
pub type FootprintResult<T> = Result<T, FootprintError>;
