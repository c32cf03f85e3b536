use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Format a value with a fixed number of decimals, the way results are shown
/// to the user. Non-finite values are spelled out instead of printed as `inf`.
pub fn format_fixed(v: Real, precision: usize) -> String {
    if v.is_nan() {
        "undefined".to_string()
    } else if v.is_infinite() {
        let sign = if v > 0.0 { "+" } else { "-" };
        format!("{sign}inf")
    } else {
        format!("{v:.precision$}")
    }
}
