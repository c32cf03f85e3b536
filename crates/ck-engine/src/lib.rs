//! ck-engine: evaluation and parametric sweeps over registered formulas.
//!
//! - [`evaluate`] checks the declared inputs and runs one formula
//! - [`sweep`] scans one input across a range while holding the rest fixed
//!
//! A domain failure (division by zero, log of a non-positive value) is a
//! [`ComputationError`] value. During a sweep it marks that sample undefined
//! and the scan carries on.

pub mod error;
pub mod evaluate;
pub mod sweep;

pub use error::{ComputationError, EngineError, EngineResult};
pub use evaluate::evaluate;
pub use sweep::{Spacing, SweepPoint, SweepResult, sample_points, sweep, sweep_with_spacing};
