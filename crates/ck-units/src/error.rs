//! Unit conversion errors.

use thiserror::Error;

/// Result type for unit operations.
pub type UnitResult<T> = Result<T, UnitError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Dimension name not in the table.
    #[error("Unknown dimension '{dimension}'")]
    UnknownDimension { dimension: String },

    /// Unit symbol not registered for this dimension.
    #[error("Unknown unit '{unit}' for {dimension}")]
    UnknownUnit { unit: String, dimension: String },

    /// Input or converted value is NaN or infinite.
    #[error("Non-finite value {value} converting {what}")]
    NonFinite { what: String, value: f64 },

    /// Malformed table (zero factor, duplicate symbol, missing base unit).
    #[error("Invalid unit definition: {what}")]
    InvalidDefinition { what: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = UnitError::UnknownUnit {
            unit: "furlong".into(),
            dimension: "Length".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("furlong"));
        assert!(msg.contains("Length"));
    }
}
