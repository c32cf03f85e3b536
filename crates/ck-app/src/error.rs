//! Error types for the ck-app service layer.

use ck_engine::{ComputationError, EngineError};
use ck_formulas::RegistryError;
use ck_units::UnitError;
use std::path::PathBuf;

/// Application error type that wraps errors from the library crates and
/// gives the front ends one error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Unknown formula, parameter, dimension or unit.
    #[error("{what} not found: {name}")]
    NotFound { what: &'static str, name: String },

    #[error("{formula}: missing parameter '{key}'")]
    MissingParameter { formula: String, key: String },

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// The formula failed inside its domain (division by zero, log of a
    /// non-positive value). Recoverable: the user changes an input.
    #[error("Calculation error: {0}")]
    Computation(ComputationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    /// A built-in formula or unit table breaks its own invariants.
    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Failed to write {path}")]
    ExportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ck-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn is_computation(&self) -> bool {
        matches!(self, Self::Computation(_))
    }
}

// Conversions from library error types
impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { name } => AppError::NotFound {
                what: "Formula",
                name,
            },
            other @ (RegistryError::DuplicateFormula { .. }
            | RegistryError::DuplicateParameter { .. }) => AppError::Catalog(other.to_string()),
        }
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotFound { what, name } => AppError::NotFound { what, name },
            EngineError::MissingParameter { formula, key } => {
                AppError::MissingParameter { formula, key }
            }
            EngineError::InvalidRange { what } => AppError::InvalidRange(what),
            EngineError::Computation(err) => AppError::Computation(err),
        }
    }
}

impl From<UnitError> for AppError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::UnknownDimension { dimension } => AppError::NotFound {
                what: "Dimension",
                name: dimension,
            },
            UnitError::UnknownUnit { unit, dimension } => AppError::NotFound {
                what: "Unit",
                name: format!("{unit} (in {dimension})"),
            },
            other @ UnitError::InvalidDefinition { .. } => AppError::Catalog(other.to_string()),
            other => AppError::InvalidInput(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ck_formulas::FormulaError;

    #[test]
    fn engine_errors_keep_their_kind() {
        let err: AppError = EngineError::InvalidRange {
            what: "sample count must be at least 2, got 1".into(),
        }
        .into();
        assert!(matches!(err, AppError::InvalidRange(_)));

        let err: AppError = EngineError::Computation(ComputationError {
            formula: "CSTR".into(),
            cause: FormulaError::DivisionByZero { what: "1 + kτ" },
        })
        .into();
        assert!(err.is_computation());
        assert!(err.to_string().contains("CSTR"));
    }

    #[test]
    fn unit_errors_become_not_found() {
        let err: AppError = UnitError::UnknownUnit {
            unit: "furlong".into(),
            dimension: "Length".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Unit not found: furlong (in Length)");
    }

    #[test]
    fn registry_invariants_are_catalog_errors() {
        let err: AppError = RegistryError::DuplicateFormula {
            name: "LMTD".into(),
        }
        .into();
        assert!(matches!(err, AppError::Catalog(_)));
        assert!(err.to_string().contains("LMTD"));

        let err: AppError = RegistryError::DuplicateParameter {
            formula: "CSTR".into(),
            key: "k".into(),
        }
        .into();
        assert!(matches!(err, AppError::Catalog(_)));

        let err: AppError = RegistryError::NotFound {
            name: "Bernoulli".into(),
        }
        .into();
        assert!(matches!(err, AppError::NotFound { what: "Formula", .. }));
    }
}
