//! Single evaluation of a formula.

use crate::error::{ComputationError, EngineError, EngineResult};
use ck_formulas::{FormulaDescriptor, FormulaError, Inputs};

/// Evaluate `descriptor` at `inputs`.
///
/// Every declared key must be present; extra keys are ignored. A domain
/// failure in the formula body becomes [`EngineError::Computation`]. The
/// value is in the descriptor's result unit.
pub fn evaluate(descriptor: &FormulaDescriptor, inputs: &Inputs) -> EngineResult<f64> {
    check_declared(descriptor, inputs, None)?;

    match descriptor.compute(inputs) {
        Ok(value) => {
            tracing::debug!(formula = descriptor.name(), value, "evaluated");
            Ok(value)
        }
        Err(cause) => {
            tracing::debug!(formula = descriptor.name(), %cause, "evaluation failed");
            Err(lift(descriptor, cause))
        }
    }
}

/// Fail on the first declared key missing from `inputs`, skipping `except`.
pub(crate) fn check_declared(
    descriptor: &FormulaDescriptor,
    inputs: &Inputs,
    except: Option<&str>,
) -> EngineResult<()> {
    for key in descriptor.keys() {
        if Some(key) != except && !inputs.contains_key(key) {
            return Err(EngineError::MissingParameter {
                formula: descriptor.name().to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn lift(descriptor: &FormulaDescriptor, cause: FormulaError) -> EngineError {
    match cause {
        // only reachable if a body reads an undeclared key
        FormulaError::MissingParameter { key } => EngineError::MissingParameter {
            formula: descriptor.name().to_string(),
            key,
        },
        cause => EngineError::Computation(ComputationError {
            formula: descriptor.name().to_string(),
            cause,
        }),
    }
}
