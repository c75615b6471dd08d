//! Conversion resolver
//!
//! Picks a strategy for a (source, target) pair and applies it:
//! - same unit: identity
//! - length and weight: through the family's base unit using scale factors
//! - temperature: a fixed table of affine pairs

use tracing::debug;
use unitconv_core::ConvertError;
use crate::{Unit, Value};
use crate::parse::ConversionRequest;

const CK_SHIFT: f64 = 273.15;
const CF_K: f64 = 1.8;
const CF_B: f64 = 32.0;
const KF_B: f64 = -459.67;

/// One directed temperature conversion: `result = value * k + b`
#[derive(Debug, Clone, Copy, PartialEq)]
struct AffinePair {
    from: Unit,
    to: Unit,
    k: f64,
    b: f64,
}

static TEMPERATURE_TABLE: [AffinePair; 6] = [
    AffinePair { from: Unit::Celsius, to: Unit::Kelvin, k: 1.0, b: CK_SHIFT },
    AffinePair { from: Unit::Kelvin, to: Unit::Celsius, k: 1.0, b: -CK_SHIFT },
    AffinePair { from: Unit::Celsius, to: Unit::Fahrenheit, k: CF_K, b: CF_B },
    AffinePair { from: Unit::Fahrenheit, to: Unit::Celsius, k: 1.0 / CF_K, b: -CF_B / CF_K },
    AffinePair { from: Unit::Kelvin, to: Unit::Fahrenheit, k: CF_K, b: KF_B },
    AffinePair { from: Unit::Fahrenheit, to: Unit::Kelvin, k: 1.0 / CF_K, b: -KF_B / CF_K },
];

/// How a magnitude is carried from one unit to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Same unit on both sides
    Identity,
    /// `value * from_k` to the base unit, then `/ to_k` to the target
    TwoStep { from_k: f64, to_k: f64 },
    /// `value * k + b`
    Affine { k: f64, b: f64 },
}

impl Strategy {
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Strategy::Identity => value,
            Strategy::TwoStep { from_k, to_k } => {
                let base_value = value * from_k;
                base_value / to_k
            }
            Strategy::Affine { k, b } => value * k + b,
        }
    }
}

fn conversion_error(from: Option<Unit>, to: Option<Unit>) -> ConvertError {
    ConvertError::conversion(from.map(|u| u.plural()), to.map(|u| u.plural()))
}

/// Select the strategy converting `from` into `to`.
///
/// Fails when either unit is unresolved or the families differ.
pub fn resolve(from: Option<Unit>, to: Option<Unit>) -> Result<Strategy, ConvertError> {
    let (from_unit, to_unit) = match (from, to) {
        (Some(f), Some(t)) if f.is_compatible(&t) => (f, t),
        _ => return Err(conversion_error(from, to)),
    };

    if from_unit == to_unit {
        return Ok(Strategy::Identity);
    }

    let strategy = if from_unit.family().is_linear() {
        Strategy::TwoStep {
            from_k: from_unit.k(),
            to_k: to_unit.k(),
        }
    } else {
        TEMPERATURE_TABLE.iter()
            .find(|p| p.from == from_unit && p.to == to_unit)
            .map(|p| Strategy::Affine { k: p.k, b: p.b })
            .ok_or_else(|| conversion_error(from, to))?
    };
    debug!(from = %from_unit, to = %to_unit, ?strategy, "resolved conversion");
    Ok(strategy)
}

/// Split a request into its source value and target unit.
///
/// Fails with the conversion error naming both sides if either is unresolved.
pub fn endpoints(request: &ConversionRequest) -> Result<(Value, Unit), ConvertError> {
    match (request.from, request.to) {
        (Some(source), Some(target)) => Ok((source, target)),
        (from, to) => Err(conversion_error(from.map(|v| v.unit()), to)),
    }
}

/// Convert a parsed request into a new value in the target unit
pub fn convert(request: &ConversionRequest) -> Result<Value, ConvertError> {
    let (source, target) = endpoints(request)?;
    source.convert_to(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_core::Family;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS * b.abs().max(1.0)
    }

    fn request(value: f64, from: Unit, to: Unit) -> ConversionRequest {
        ConversionRequest { from: Some(Value::new(value, from)), to: Some(to) }
    }

    #[test]
    fn test_identity_for_every_unit() {
        for unit in Unit::ALL {
            assert_eq!(resolve(Some(unit), Some(unit)).unwrap(), Strategy::Identity);
            let result = convert(&request(42.5, unit, unit)).unwrap();
            assert_eq!(result.value(), 42.5);
            assert_eq!(result.unit(), unit);
        }
    }

    #[test]
    fn test_two_step_linear() {
        let result = convert(&request(1.0, Unit::Kilometer, Unit::Meter)).unwrap();
        assert_eq!(result.value(), 1000.0);

        let result = convert(&request(12.0, Unit::Inch, Unit::Foot)).unwrap();
        assert!(approx(result.value(), 1.0));

        let result = convert(&request(1.0, Unit::Kilogram, Unit::Pound)).unwrap();
        assert!(approx(result.value(), 1000.0 / 453.592));
    }

    #[test]
    fn test_temperature_table() {
        let cases = [
            (0.0, Unit::Celsius, Unit::Fahrenheit, 32.0),
            (32.0, Unit::Fahrenheit, Unit::Celsius, 0.0),
            (0.0, Unit::Celsius, Unit::Kelvin, 273.15),
            (-1.0, Unit::Celsius, Unit::Kelvin, 272.15),
            (273.15, Unit::Kelvin, Unit::Celsius, 0.0),
            (100.0, Unit::Celsius, Unit::Fahrenheit, 212.0),
            (0.0, Unit::Kelvin, Unit::Fahrenheit, -459.67),
            (-459.67, Unit::Fahrenheit, Unit::Kelvin, 0.0),
        ];
        for (value, from, to, expected) in cases {
            let result = convert(&request(value, from, to)).unwrap();
            assert!(
                approx(result.value(), expected),
                "{} {:?} -> {:?}: got {}, expected {}", value, from, to, result.value(), expected
            );
            assert_eq!(result.unit(), to);
        }
    }

    #[test]
    fn test_exact_table_values() {
        assert_eq!(convert(&request(0.0, Unit::Celsius, Unit::Fahrenheit)).unwrap().value(), 32.0);
        assert_eq!(convert(&request(0.0, Unit::Celsius, Unit::Kelvin)).unwrap().value(), 273.15);
    }

    #[test]
    fn test_round_trip_within_family() {
        for family in Family::ALL {
            let units: Vec<Unit> = Unit::ALL.iter().copied().filter(|u| u.family() == family).collect();
            for &a in &units {
                for &b in &units {
                    let x = 123.456;
                    let there = Value::new(x, a).convert_to(b).unwrap();
                    let back = there.convert_to(a).unwrap();
                    assert!(approx(back.value(), x), "{:?} <-> {:?}: {}", a, b, back.value());
                }
            }
        }
    }

    #[test]
    fn test_family_guard() {
        for a in Unit::ALL {
            for b in Unit::ALL {
                if a.family() == b.family() {
                    continue;
                }
                let err = convert(&request(1.0, a, b)).unwrap_err();
                assert_eq!(err, ConvertError::conversion(Some(a.plural()), Some(b.plural())));
            }
        }
    }

    #[test]
    fn test_unresolved_units() {
        let req = ConversionRequest { from: None, to: Some(Unit::Kelvin) };
        assert_eq!(convert(&req).unwrap_err().to_string(), "Conversion from ??? to kelvins is impossible");

        let req = ConversionRequest { from: Some(Value::new(1.0, Unit::Celsius)), to: None };
        assert_eq!(
            convert(&req).unwrap_err().to_string(),
            "Conversion from degrees Celsius to ??? is impossible"
        );

        let req = ConversionRequest { from: None, to: None };
        assert!(matches!(convert(&req), Err(ConvertError::Conversion { from: None, to: None })));
    }

    #[test]
    fn test_endpoints() {
        let req = request(3.0, Unit::Ounce, Unit::Gram);
        assert_eq!(endpoints(&req).unwrap(), (Value::new(3.0, Unit::Ounce), Unit::Gram));

        let req = ConversionRequest { from: Some(Value::new(3.0, Unit::Ounce)), to: None };
        assert_eq!(
            endpoints(&req).unwrap_err(),
            ConvertError::conversion(Some("ounces"), None)
        );
    }

    #[test]
    fn test_result_is_new_value() {
        let req = request(2.0, Unit::Mile, Unit::Yard);
        let result = convert(&req).unwrap();
        assert_eq!(req.from.unwrap().value(), 2.0);
        assert_eq!(result.unit(), Unit::Yard);
        assert!(approx(result.value(), 2.0 * 1609.35 / 0.9144));
    }
}
