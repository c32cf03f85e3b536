//! Parametric sweeps with session defaults.

use crate::error::{AppError, AppResult};
use crate::formula_service::{resolve_formula, resolve_inputs};
use crate::session::Session;
use ck_engine::{Spacing, SweepResult, sweep_with_spacing};
use ck_formulas::Inputs;

/// Sweep request. Unset bounds and step count come from the session config.
#[derive(Debug, Clone, Default)]
pub struct SweepRequest {
    pub formula: String,
    /// Key of the parameter to vary
    pub vary: String,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub steps: Option<usize>,
    pub spacing: Spacing,
    /// Values for the constant parameters (defaults fill the rest)
    pub overrides: Inputs,
}

impl SweepRequest {
    pub fn new(formula: impl Into<String>, vary: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            vary: vary.into(),
            ..Default::default()
        }
    }
}

/// Run a sweep. Sweeps are not recorded in the ledger.
pub fn run_sweep(session: &Session, request: &SweepRequest) -> AppResult<SweepResult> {
    let defaults = &session.config().sweep;
    let descriptor = resolve_formula(&request.formula)?;

    let steps = request.steps.unwrap_or(defaults.steps);
    if steps > defaults.max_steps {
        return Err(AppError::InvalidInput(format!(
            "at most {} steps per sweep, got {steps}",
            defaults.max_steps
        )));
    }

    let constants = resolve_inputs(descriptor, &request.overrides)?;
    let result = sweep_with_spacing(
        descriptor,
        &request.vary,
        request.start.unwrap_or(defaults.start),
        request.end.unwrap_or(defaults.end),
        steps,
        request.spacing,
        &constants,
    )?;
    Ok(result)
}
