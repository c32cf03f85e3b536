//! Formula and registry errors.

use ck_core::CoreError;
use thiserror::Error;

/// Result type for formula evaluation.
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Result type for registry construction and lookup.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Failures raised by a formula body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// The formula read a key that was not supplied.
    #[error("missing parameter '{key}'")]
    MissingParameter { key: String },

    /// A divisor evaluated to exactly zero.
    #[error("division by zero ({what} is zero)")]
    DivisionByZero { what: &'static str },

    /// Logarithm or fractional power of a value outside its domain.
    #[error("math domain error: {what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    /// Overflow or NaN.
    #[error("non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl FormulaError {
    /// Arithmetic failures, as opposed to a formula reading an undeclared key.
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::MissingParameter { .. })
    }
}

impl From<CoreError> for FormulaError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => FormulaError::NonFinite { what, value },
        }
    }
}

/// Failures building or querying a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Formula not found: {name}")]
    NotFound { name: String },

    #[error("Duplicate formula name: {name}")]
    DuplicateFormula { name: String },

    #[error("Duplicate parameter '{key}' in formula {formula}")]
    DuplicateParameter { formula: String, key: String },
}
