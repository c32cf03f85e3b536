//! Conversion checks against known values, `uom` and round trips.

use ck_core::{Tolerances, nearly_equal};
use ck_units::{UnitConverter, UnitError, UnitTable};
use proptest::prelude::*;
use uom::si::f64::{Length, Pressure, ThermodynamicTemperature};
use uom::si::{length, pressure, thermodynamic_temperature};

/// The engineering constants are rounded to about six significant digits.
const ENGINEERING: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 1e-5,
};

const ROUND_TRIP: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 1e-9,
};

#[test]
fn temperature_reference_points() {
    let c = UnitConverter::standard();
    assert_eq!(c.convert("Temperature", "°C", "K", 0.0).unwrap(), 273.15);

    let f = c.convert("Temperature", "K", "°F", 273.15).unwrap();
    assert!((f - 32.0).abs() < 1e-9, "{f}");

    let f = c.convert("Temperature", "°C", "°F", 100.0).unwrap();
    assert!((f - 212.0).abs() < 1e-9, "{f}");

    let r = c.convert("Temperature", "°F", "R", 0.0).unwrap();
    assert!((r - 459.67).abs() < 1e-9, "{r}");

    // -40 is the same on both scales
    let f = c.convert("Temperature", "°C", "°F", -40.0).unwrap();
    assert!((f + 40.0).abs() < 1e-9, "{f}");
}

#[test]
fn temperature_agrees_with_uom() {
    let c = UnitConverter::standard();
    for celsius in [-50.0, 0.0, 25.0, 300.0] {
        let t = ThermodynamicTemperature::new::<thermodynamic_temperature::degree_celsius>(celsius);
        let expected = t.get::<thermodynamic_temperature::degree_fahrenheit>();
        let got = c.convert("Temperature", "°C", "°F", celsius).unwrap();
        assert!(nearly_equal(got, expected, ENGINEERING), "{got} vs {expected}");
    }
}

#[test]
fn pressure_agrees_with_uom() {
    let c = UnitConverter::standard();
    let one_pa = Pressure::new::<pressure::pascal>(1.0);

    let cases = [
        ("psi", one_pa.get::<pressure::pound_force_per_square_inch>()),
        ("atm", one_pa.get::<pressure::atmosphere>()),
        ("mmHg", one_pa.get::<pressure::millimeter_of_mercury>()),
        ("bar", one_pa.get::<pressure::bar>()),
        ("kPa", one_pa.get::<pressure::kilopascal>()),
    ];
    for (unit, expected) in cases {
        let got = c.convert("Pressure", "Pa", unit, 1.0).unwrap();
        assert!(nearly_equal(got, expected, ENGINEERING), "{unit}: {got} vs {expected}");
    }
}

#[test]
fn length_agrees_with_uom() {
    let c = UnitConverter::standard();
    let one_m = Length::new::<length::meter>(1.0);

    let cases = [
        ("ft", one_m.get::<length::foot>()),
        ("in", one_m.get::<length::inch>()),
        ("cm", one_m.get::<length::centimeter>()),
        ("mm", one_m.get::<length::millimeter>()),
    ];
    for (unit, expected) in cases {
        let got = c.convert("Length", "m", unit, 1.0).unwrap();
        assert!(nearly_equal(got, expected, ENGINEERING), "{unit}: {got} vs {expected}");
    }
}

#[test]
fn flow_rate_examples() {
    let c = UnitConverter::standard();
    let lpm = c.convert("Flow Rate", "m³/s", "L/min", 1.0).unwrap();
    assert!(nearly_equal(lpm, 60_000.0, ROUND_TRIP), "{lpm}");

    let gpm = c.convert("Flow Rate", "L/s", "gpm", 1.0).unwrap();
    assert!(nearly_equal(gpm, 15.850_372, ENGINEERING), "{gpm}");

    // ASCII alias resolves to the same unit
    let via_alias = c.convert("Flow Rate", "m3/h", "m3/s", 3600.0).unwrap();
    assert!(nearly_equal(via_alias, 1.0, ROUND_TRIP));
}

#[test]
fn energy_and_mass_examples() {
    let c = UnitConverter::standard();
    let kj = c.convert("Energy", "kWh", "kJ", 1.0).unwrap();
    assert!(nearly_equal(kj, 3600.0, ROUND_TRIP), "{kj}");

    let oz = c.convert("Mass", "lb", "oz", 1.0).unwrap();
    assert_eq!(oz, 16.0);
    assert_eq!(c.convert("Mass", "lb", "kg", 1.0).unwrap(), 0.453_592_37);

    let j = c.convert("Energy", "BTU", "J", 1.0).unwrap();
    assert!(nearly_equal(j, 1_055.055_852_62, ROUND_TRIP), "{j}");
    let cal = c.convert("Energy", "kJ", "cal", 4.184).unwrap();
    assert!(nearly_equal(cal, 1000.0, ROUND_TRIP), "{cal}");
}

#[test]
fn errors_name_the_offender() {
    let c = UnitConverter::standard();
    match c.convert("Length", "m", "furlong", 1.0) {
        Err(UnitError::UnknownUnit { unit, dimension }) => {
            assert_eq!(unit, "furlong");
            assert_eq!(dimension, "Length");
        }
        other => panic!("unexpected {other:?}"),
    }
    match c.convert("Voltage", "V", "mV", 1.0) {
        Err(UnitError::UnknownDimension { dimension }) => assert_eq!(dimension, "Voltage"),
        other => panic!("unexpected {other:?}"),
    }
}

proptest! {
    #[test]
    fn same_unit_is_identity(x in -1e6_f64..1e6_f64) {
        let c = UnitConverter::standard();
        for dim in UnitTable::standard().dimensions() {
            for unit in dim.symbols() {
                prop_assert_eq!(c.convert(dim.name(), unit, unit, x).unwrap(), x);
            }
        }
    }

    #[test]
    fn round_trip_every_pair(x in -1e6_f64..1e6_f64) {
        let c = UnitConverter::standard();
        for dim in UnitTable::standard().dimensions() {
            for a in dim.symbols() {
                for b in dim.symbols() {
                    let there = c.convert(dim.name(), b, a, x).unwrap();
                    let back = c.convert(dim.name(), a, b, there).unwrap();
                    prop_assert!(
                        nearly_equal(back, x, ROUND_TRIP),
                        "{} {} -> {} -> {}: {} vs {}", dim.name(), b, a, b, back, x
                    );
                }
            }
        }
    }
}
