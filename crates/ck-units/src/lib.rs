//! ck-units: unit conversion through one base unit per dimension.
//!
//! # Key Design
//!
//! - **Dimension**: a quantity family (Temperature, Pressure, ...)
//! - **Base unit**: one reference unit per dimension
//! - **Unit scale**: a linear or affine map to and from the base unit
//!
//! Converting `a -> b` always goes `a -> base -> b`, so adding a unit costs one
//! pair of maps instead of one per existing unit. Temperature is affine, so the
//! converter never takes ratio shortcuts.
//!
//! # Example
//!
//! ```
//! use ck_units::UnitConverter;
//!
//! let converter = UnitConverter::standard();
//! let k = converter.convert("Temperature", "°C", "K", 0.0).unwrap();
//! assert_eq!(k, 273.15);
//! ```

pub mod converter;
pub mod dimension;
pub mod error;
pub mod tables;

pub use converter::UnitConverter;
pub use dimension::{UnitDef, UnitDimension, UnitScale};
pub use error::{UnitError, UnitResult};
pub use tables::UnitTable;
