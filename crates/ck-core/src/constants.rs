//! Physical constants used by the formula catalog.
//!
//! Values match the published calculator tables rather than CODATA, so that
//! results reproduce the hand-checked reference numbers.

/// Gravitational acceleration [m/s²]
pub const G_MPS2: f64 = 9.81;

/// Universal gas constant [J/(mol·K)]
pub const R_J_PER_MOL_K: f64 = 8.314;

/// Offset between the Celsius and Kelvin scales [K]
pub const CELSIUS_OFFSET_K: f64 = 273.15;

/// Offset between the Fahrenheit and Rankine scales [°R]
pub const FAHRENHEIT_OFFSET_R: f64 = 459.67;
