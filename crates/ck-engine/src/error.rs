//! Evaluation and sweep errors.

use ck_formulas::FormulaError;
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// A formula failed inside its own domain. Carried as data, never fatal.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{formula}: {cause}")]
pub struct ComputationError {
    pub formula: String,
    pub cause: FormulaError,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Unknown parameter (or other named item) for this formula.
    #[error("{what} not found: {name}")]
    NotFound { what: &'static str, name: String },

    #[error("{formula}: missing parameter '{key}'")]
    MissingParameter { formula: String, key: String },

    /// Sample count or bounds unusable.
    #[error("Invalid range: {what}")]
    InvalidRange { what: String },

    #[error("Computation error: {0}")]
    Computation(#[from] ComputationError),
}

impl EngineError {
    /// The only recoverable kind; everything else is a caller mistake.
    pub fn is_computation(&self) -> bool {
        matches!(self, Self::Computation(_))
    }
}
