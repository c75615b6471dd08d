//! Unitconv Units - Parsing and converting measurement requests
//!
//! Turns requests like "10 km to miles" into converted values.
//!
//! Families:
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Weight (g, kg, mg, lb, oz)
//! - Temperature (C, K, F)
//!
//! Pipeline: text -> [`parse`] -> [`ConversionRequest`] -> [`convert`] -> [`Value`]

mod unit;
mod value;
mod units;
mod parse;
mod convert;
mod engine;

pub use unit::{Unit, UnitInfo};
pub use value::{Value, format_magnitude, parse_magnitude};
pub use units::{UnitRegistry, UNITS};
pub use parse::{parse, ConversionRequest};
pub use convert::{convert, endpoints, resolve, Strategy};
pub use engine::{Converter, Outcome, OutcomeReport, EXIT_COMMAND};
pub use unitconv_core::{ConvertError, ErrorReport, Family};
