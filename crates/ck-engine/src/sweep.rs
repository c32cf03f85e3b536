//! Parametric sweeps: vary one input, hold the rest, evaluate per sample.

use crate::error::{ComputationError, EngineError, EngineResult};
use crate::evaluate::{check_declared, lift};
use ck_formulas::{FormulaDescriptor, Inputs};
use std::fmt;

/// How samples are spread between the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Uniformly spaced samples
    #[default]
    Linear,
    /// Uniform in `ln(x)`; both bounds must be positive
    Logarithmic,
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

/// One sample of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub x: f64,
    /// Result, or why this sample is undefined
    pub y: Result<f64, ComputationError>,
}

impl SweepPoint {
    pub fn is_defined(&self) -> bool {
        self.y.is_ok()
    }

    /// `y`, or NaN for an undefined sample (for plotting and export).
    pub fn y_or_nan(&self) -> f64 {
        self.y.as_ref().copied().unwrap_or(f64::NAN)
    }
}

/// Outcome of a sweep. Always complete: one point per requested sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub formula: String,
    pub varying_key: String,
    /// Label of the varying parameter, e.g. `"Dynamic Viscosity"`
    pub x_name: String,
    pub y_name: String,
    /// Axis label of the varying parameter, e.g. `"Dynamic Viscosity (Pa·s)"`
    pub x_label: String,
    /// Axis label of the result
    pub y_label: String,
    pub spacing: Spacing,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Results with NaN marking undefined samples.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(SweepPoint::y_or_nan).collect()
    }

    pub fn num_defined(&self) -> usize {
        self.points.iter().filter(|p| p.is_defined()).count()
    }

    pub fn num_undefined(&self) -> usize {
        self.len() - self.num_defined()
    }

    pub fn all_undefined(&self) -> bool {
        self.points.iter().all(|p| !p.is_defined())
    }

    /// `(x, y)` for the defined samples only.
    pub fn defined_pairs(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| p.y.as_ref().ok().map(|y| (p.x, *y)))
            .collect()
    }
}

/// Generate `count` samples over `[start, end]`, last sample pinned to `end`.
///
/// `start == end` gives `count` identical samples and `start > end` a
/// descending series.
pub fn sample_points(start: f64, end: f64, count: usize, spacing: Spacing) -> EngineResult<Vec<f64>> {
    if count < 2 {
        return Err(EngineError::InvalidRange {
            what: format!("sample count must be at least 2, got {count}"),
        });
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(EngineError::InvalidRange {
            what: format!("bounds must be finite, got {start} to {end}"),
        });
    }

    let mut points = match spacing {
        Spacing::Linear => linear(start, end, count),
        Spacing::Logarithmic => {
            if start <= 0.0 || end <= 0.0 {
                return Err(EngineError::InvalidRange {
                    what: format!("logarithmic bounds must be positive, got {start} to {end}"),
                });
            }
            linear(start.ln(), end.ln(), count)
                .into_iter()
                .map(f64::exp)
                .collect()
        }
    };

    // Exact endpoints
    points[0] = start;
    points[count - 1] = end;
    Ok(points)
}

fn linear(start: f64, end: f64, count: usize) -> Vec<f64> {
    let last = (count - 1) as f64;
    let span = end - start;
    (0..count)
        .map(|i| {
            let t = i as f64 / last;
            if span.is_finite() {
                start + span * t
            } else {
                // span overflows for far-apart finite bounds
                start * (1.0 - t) + end * t
            }
        })
        .collect()
}

/// Linear sweep of `varying_key` from `start` to `end`.
///
/// `constants` must cover every declared key except `varying_key`; a
/// `varying_key` entry in it is overridden per sample.
pub fn sweep(
    descriptor: &FormulaDescriptor,
    varying_key: &str,
    start: f64,
    end: f64,
    count: usize,
    constants: &Inputs,
) -> EngineResult<SweepResult> {
    sweep_with_spacing(
        descriptor,
        varying_key,
        start,
        end,
        count,
        Spacing::Linear,
        constants,
    )
}

pub fn sweep_with_spacing(
    descriptor: &FormulaDescriptor,
    varying_key: &str,
    start: f64,
    end: f64,
    count: usize,
    spacing: Spacing,
    constants: &Inputs,
) -> EngineResult<SweepResult> {
    let param = descriptor
        .param(varying_key)
        .ok_or_else(|| EngineError::NotFound {
            what: "Parameter",
            name: format!("{varying_key} (in {})", descriptor.name()),
        })?;
    let xs = sample_points(start, end, count, spacing)?;
    check_declared(descriptor, constants, Some(param.key))?;

    let mut inputs = constants.clone();
    let mut points = Vec::with_capacity(xs.len());
    for x in xs {
        inputs.insert(param.key.to_string(), x);
        let y = match descriptor.compute(&inputs) {
            Ok(y) => Ok(y),
            Err(cause) => match lift(descriptor, cause) {
                EngineError::Computation(err) => {
                    tracing::debug!(formula = descriptor.name(), x, cause = %err.cause, "undefined sample");
                    Err(err)
                }
                other => return Err(other),
            },
        };
        points.push(SweepPoint { x, y });
    }

    let result = SweepResult {
        formula: descriptor.name().to_string(),
        varying_key: param.key.to_string(),
        x_name: param.label.to_string(),
        y_name: descriptor.result_label().to_string(),
        x_label: param.axis_label(),
        y_label: descriptor.result_axis_label(),
        spacing,
        points,
    };

    if result.all_undefined() {
        tracing::warn!(
            formula = descriptor.name(),
            key = param.key,
            "every sample of the sweep is undefined"
        );
    } else {
        tracing::info!(
            formula = descriptor.name(),
            key = param.key,
            defined = result.num_defined(),
            undefined = result.num_undefined(),
            "sweep complete"
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ck_formulas::{FormulaError, FormulaRegistry};

    fn reynolds() -> &'static FormulaDescriptor {
        FormulaRegistry::standard().get("Reynolds Number").unwrap()
    }

    #[test]
    fn linear_points_pin_endpoints() {
        let xs = sample_points(0.1, 10.0, 50, Spacing::Linear).unwrap();
        assert_eq!(xs.len(), 50);
        assert_eq!(xs[0], 0.1);
        assert_eq!(xs[49], 10.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn descending_and_constant_ranges() {
        let xs = sample_points(5.0, 1.0, 5, Spacing::Linear).unwrap();
        assert_eq!(xs, vec![5.0, 4.0, 3.0, 2.0, 1.0]);

        let xs = sample_points(5.0, 5.0, 10, Spacing::Linear).unwrap();
        assert_eq!(xs, vec![5.0; 10]);
    }

    #[test]
    fn extreme_bounds_stay_finite() {
        let xs = sample_points(-1e308, 1e308, 3, Spacing::Linear).unwrap();
        assert_eq!(xs, vec![-1e308, 0.0, 1e308]);

        let xs = sample_points(-f64::MAX, f64::MAX, 101, Spacing::Linear).unwrap();
        assert!(xs.iter().all(|x| x.is_finite()));
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn logarithmic_points() {
        let xs = sample_points(1.0, 1000.0, 4, Spacing::Logarithmic).unwrap();
        assert_eq!(xs[0], 1.0);
        assert!((xs[1] - 10.0).abs() < 1e-9);
        assert!((xs[2] - 100.0).abs() < 1e-9);
        assert_eq!(xs[3], 1000.0);
    }

    #[test]
    fn invalid_ranges() {
        for (start, end, count, spacing) in [
            (0.0, 1.0, 1, Spacing::Linear),
            (0.0, 1.0, 0, Spacing::Linear),
            (f64::NAN, 1.0, 10, Spacing::Linear),
            (0.0, f64::INFINITY, 10, Spacing::Linear),
            (0.0, 10.0, 10, Spacing::Logarithmic),
            (-1.0, 10.0, 10, Spacing::Logarithmic),
        ] {
            assert!(
                matches!(
                    sample_points(start, end, count, spacing),
                    Err(EngineError::InvalidRange { .. })
                ),
                "{start} {end} {count} {spacing}"
            );
        }
    }

    #[test]
    fn viscosity_through_zero_marks_one_sample() {
        let d = reynolds();
        let result = sweep(d, "mu", -0.002, 0.002, 5, &d.defaults()).unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(result.num_undefined(), 1);

        let undefined = &result.points[2];
        assert_eq!(undefined.x, 0.0);
        let err = undefined.y.as_ref().unwrap_err();
        assert!(matches!(err.cause, FormulaError::DivisionByZero { .. }));
        assert!(undefined.y_or_nan().is_nan());

        assert_eq!(result.defined_pairs().len(), 4);
        assert_eq!(result.x_name, "Dynamic Viscosity");
        assert_eq!(result.x_label, "Dynamic Viscosity (Pa·s)");
        assert_eq!(result.y_label, "Reynolds Number");
    }

    #[test]
    fn all_undefined_still_returns() {
        let d = reynolds();
        let mut constants = d.defaults();
        constants.insert("mu".into(), 0.0);
        let result = sweep(d, "v", 1.0, 2.0, 3, &constants).unwrap();
        assert!(result.all_undefined());
        assert_eq!(result.num_defined(), 0);
        assert!(result.defined_pairs().is_empty());
    }

    #[test]
    fn varying_key_overrides_constant() {
        let d = reynolds();
        let result = sweep(d, "v", 1.0, 2.0, 2, &d.defaults()).unwrap();
        assert!((result.points[1].y.clone().unwrap() - 100_000.0).abs() < 1e-6);
    }

    #[test]
    fn varying_key_need_not_be_in_constants() {
        let d = reynolds();
        let mut constants = d.defaults();
        constants.remove("rho");
        assert!(sweep(d, "rho", 500.0, 1000.0, 3, &constants).is_ok());
    }

    #[test]
    fn contract_violations() {
        let d = reynolds();
        assert!(matches!(
            sweep(d, "Q", 0.0, 1.0, 10, &d.defaults()),
            Err(EngineError::NotFound { .. })
        ));

        let mut constants = d.defaults();
        constants.remove("D");
        assert!(matches!(
            sweep(d, "v", 0.0, 1.0, 10, &constants),
            Err(EngineError::MissingParameter { key, .. }) if key == "D"
        ));

        assert!(matches!(
            sweep(d, "v", 0.0, 1.0, 1, &d.defaults()),
            Err(EngineError::InvalidRange { .. })
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn length_matches_count(
                start in -1e3_f64..1e3,
                end in -1e3_f64..1e3,
                count in 2_usize..300,
            ) {
                let xs = sample_points(start, end, count, Spacing::Linear).unwrap();
                prop_assert_eq!(xs.len(), count);
                prop_assert_eq!(xs[0], start);
                prop_assert_eq!(xs[count - 1], end);
            }

            #[test]
            fn sweep_never_aborts_on_domain_errors(
                start in -1.0_f64..1.0,
                end in -1.0_f64..1.0,
                count in 2_usize..60,
            ) {
                let d = FormulaRegistry::standard().get("LMTD").unwrap();
                let result = sweep(d, "dT2", start, end, count, &d.defaults()).unwrap();
                prop_assert_eq!(result.len(), count);
                prop_assert_eq!(result.num_defined() + result.num_undefined(), count);
            }
        }
    }
}
