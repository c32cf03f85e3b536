//! Common utilities for formula bodies.
//!
//! Every helper turns an IEEE special case (inf, NaN) into a typed
//! `FormulaError` so that formula bodies never hand back a silent NaN.

use crate::descriptor::Inputs;
use crate::error::{FormulaError, FormulaResult};
use ck_core::numeric::ensure_finite;

/// Read one named input.
pub fn input(inputs: &Inputs, key: &'static str) -> FormulaResult<f64> {
    inputs
        .get(key)
        .copied()
        .ok_or_else(|| FormulaError::MissingParameter {
            key: key.to_string(),
        })
}

/// Ensure a value is finite, returning FormulaError if not.
pub fn check_finite(value: f64, what: &'static str) -> FormulaResult<f64> {
    Ok(ensure_finite(value, what)?)
}

/// Divide, failing on an exactly-zero divisor.
pub fn checked_div(num: f64, den: f64, what: &'static str) -> FormulaResult<f64> {
    if den == 0.0 {
        return Err(FormulaError::DivisionByZero { what });
    }
    check_finite(num / den, what)
}

/// Natural logarithm of a strictly positive value.
pub fn checked_ln(x: f64, what: &'static str) -> FormulaResult<f64> {
    if x.is_nan() || x <= 0.0 {
        return Err(FormulaError::NonPositive { what, value: x });
    }
    check_finite(x.ln(), what)
}

/// Exponential, failing on overflow.
pub fn checked_exp(x: f64, what: &'static str) -> FormulaResult<f64> {
    check_finite(x.exp(), what)
}

/// `base.powf(exponent)`, rejecting negative bases with fractional exponents.
pub fn checked_powf(base: f64, exponent: f64, what: &'static str) -> FormulaResult<f64> {
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(FormulaError::NonPositive { what, value: base });
    }
    check_finite(base.powf(exponent), what)
}
