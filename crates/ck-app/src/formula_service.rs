//! Formula lookup, input resolution and calculate-and-record.

use crate::error::{AppError, AppResult};
use crate::session::Session;
use ck_core::normalize_name;
use ck_engine::evaluate;
use ck_formulas::fluids::FlowRegime;
use ck_formulas::{FormulaDescriptor, FormulaRegistry, Inputs};

/// Find a formula by name.
///
/// Exact names win; otherwise the comparison ignores case, spaces, `-` and
/// `_`, so `reynolds-number` finds `Reynolds Number`.
pub fn resolve_formula(query: &str) -> AppResult<&'static FormulaDescriptor> {
    let registry = FormulaRegistry::standard();
    if let Ok(descriptor) = registry.get(query) {
        return Ok(descriptor);
    }

    let wanted = normalize_name(query);
    registry
        .all()
        .iter()
        .find(|d| normalize_name(d.name()) == wanted)
        .ok_or_else(|| AppError::NotFound {
            what: "Formula",
            name: query.trim().to_string(),
        })
}

/// Formulas matching `search` (all of them for `None`), in catalog order.
pub fn list_formulas(search: Option<&str>) -> Vec<&'static FormulaDescriptor> {
    FormulaRegistry::standard().search(search.unwrap_or(""))
}

/// The declared defaults overlaid with `overrides`.
///
/// Override keys must be declared by the formula and values finite.
pub fn resolve_inputs(descriptor: &FormulaDescriptor, overrides: &Inputs) -> AppResult<Inputs> {
    let mut inputs = descriptor.defaults();
    for (key, value) in overrides {
        if !descriptor.has_param(key) {
            let known: Vec<_> = descriptor.keys().collect();
            return Err(AppError::InvalidInput(format!(
                "{} has no parameter '{}' (expected one of: {})",
                descriptor.name(),
                key,
                known.join(", ")
            )));
        }
        if !value.is_finite() {
            return Err(AppError::InvalidInput(format!(
                "{key} must be a finite number, got {value}"
            )));
        }
        inputs.insert(key.clone(), *value);
    }
    Ok(inputs)
}

/// Parse `KEY=VALUE` arguments.
pub fn parse_assignments<S: AsRef<str>>(args: &[S]) -> AppResult<Inputs> {
    let mut inputs = Inputs::new();
    for arg in args {
        let arg = arg.as_ref();
        let Some((key, value)) = arg.split_once('=') else {
            return Err(AppError::InvalidInput(format!(
                "expected KEY=VALUE, got '{arg}'"
            )));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::InvalidInput(format!("missing key in '{arg}'")));
        }
        let value: f64 = value.trim().parse().map_err(|_| {
            AppError::InvalidInput(format!("'{}' is not a number (for {key})", value.trim()))
        })?;
        if inputs.insert(key.to_string(), value).is_some() {
            return Err(AppError::InvalidInput(format!("{key} given more than once")));
        }
    }
    Ok(inputs)
}

/// A successful calculation, as recorded in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub formula: &'static str,
    pub inputs: Inputs,
    pub value: f64,
    pub result_label: &'static str,
    pub result_unit: &'static str,
    /// Flow regime, for Reynolds number results
    pub regime: Option<FlowRegime>,
}

impl Calculation {
    /// `"<label>: <value> <unit>"` at the given precision.
    pub fn display(&self, precision: usize) -> String {
        let value = ck_core::format_fixed(self.value, precision);
        if self.result_unit.is_empty() {
            format!("{}: {}", self.result_label, value)
        } else {
            format!("{}: {} {}", self.result_label, value, self.result_unit)
        }
    }
}

/// Evaluate `formula` at its defaults overlaid with `overrides` and record
/// the result in the session ledger. Failed evaluations are not recorded.
pub fn calculate(session: &mut Session, formula: &str, overrides: &Inputs) -> AppResult<Calculation> {
    let descriptor = resolve_formula(formula)?;
    let inputs = resolve_inputs(descriptor, overrides)?;
    let value = evaluate(descriptor, &inputs)?;

    session
        .ledger_mut()
        .record(descriptor.name(), inputs.clone(), value);

    let regime = (descriptor.name() == "Reynolds Number").then(|| FlowRegime::classify(value));
    Ok(Calculation {
        formula: descriptor.name(),
        inputs,
        value,
        result_label: descriptor.result_label(),
        result_unit: descriptor.result_unit(),
        regime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_exact_and_normalized() {
        assert_eq!(resolve_formula("LMTD").unwrap().name(), "LMTD");
        assert_eq!(
            resolve_formula("reynolds-number").unwrap().name(),
            "Reynolds Number"
        );
        assert_eq!(
            resolve_formula("darcy_weisbach").unwrap().name(),
            "Darcy-Weisbach"
        );
        assert_eq!(resolve_formula(" cstr ").unwrap().name(), "CSTR");
        assert!(matches!(
            resolve_formula("Bernoulli"),
            Err(AppError::NotFound { what: "Formula", .. })
        ));
    }

    #[test]
    fn list_with_and_without_search() {
        assert_eq!(list_formulas(None).len(), FormulaRegistry::standard().len());
        let names: Vec<_> = list_formulas(Some("pump")).iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Pump Power"]);
    }

    #[test]
    fn overrides_overlay_defaults() {
        let d = resolve_formula("Reynolds Number").unwrap();
        let overrides = parse_assignments(&["v=2"]).unwrap();
        let inputs = resolve_inputs(d, &overrides).unwrap();
        assert_eq!(inputs["v"], 2.0);
        assert_eq!(inputs["rho"], 1000.0);
        assert_eq!(inputs.len(), 4);
    }

    #[test]
    fn unknown_override_is_rejected() {
        let d = resolve_formula("Reynolds Number").unwrap();
        let overrides = parse_assignments(&["Q=1"]).unwrap();
        let err = resolve_inputs(d, &overrides).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(err.to_string().contains("rho, v, D, mu"));
    }

    #[test]
    fn assignment_parsing() {
        let inputs = parse_assignments(&["rho = 998.2", "mu=1e-3"]).unwrap();
        assert_eq!(inputs["rho"], 998.2);
        assert_eq!(inputs["mu"], 0.001);

        for bad in ["rho", "=1", "rho=abc", "rho="] {
            assert!(
                matches!(parse_assignments(&[bad]), Err(AppError::InvalidInput(_))),
                "{bad}"
            );
        }
        assert!(parse_assignments(&["v=1", "v=2"]).is_err());
        assert!(parse_assignments::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn non_finite_override_rejected() {
        let d = resolve_formula("CSTR").unwrap();
        let overrides = parse_assignments(&["k=inf"]).unwrap();
        assert!(matches!(
            resolve_inputs(d, &overrides),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn calculate_records_success_only() {
        let mut session = Session::default();
        let calc = calculate(&mut session, "Reynolds Number", &Inputs::new()).unwrap();
        assert!((calc.value - 50_000.0).abs() < 1e-6);
        assert_eq!(calc.regime, Some(FlowRegime::Turbulent));
        assert_eq!(calc.display(2), "Reynolds Number: 50000.00");
        assert_eq!(session.ledger().len(), 1);

        let overrides = parse_assignments(&["mu=0"]).unwrap();
        let err = calculate(&mut session, "Reynolds Number", &overrides).unwrap_err();
        assert!(err.is_computation());
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn display_includes_unit() {
        let mut session = Session::default();
        let calc = calculate(&mut session, "LMTD", &Inputs::new()).unwrap();
        assert_eq!(calc.display(4), "LMTD: 18.2048 K");
        assert!(calc.regime.is_none());
    }
}
