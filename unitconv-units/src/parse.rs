//! Request parsing - turn "10 km to miles" into a conversion request
//!
//! Grammar, after trimming and splitting on single spaces (4 to 6 tokens):
//!
//! ```text
//! <number> <unit-name> <connector> <unit-name>
//! ```
//!
//! A unit name is two tokens when the first is "degree" or "degrees"
//! ("degree Celsius"). The connector is consumed but not checked, so
//! "10 km in miles" parses the same as "10 km to miles".

use tracing::debug;
use unitconv_core::ConvertError;
use crate::{Unit, Value};
use crate::value::parse_magnitude;
use crate::units::UnitRegistry;

const DEGREE_PREFIXES: [&str; 2] = ["degree", "degrees"];
const MIN_TOKENS: usize = 4;
const MAX_TOKENS: usize = 6;

/// A parsed request. Unresolved unit names are `None`; the resolver reports them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    /// Source magnitude and unit, `None` if the source unit is unknown
    pub from: Option<Value>,
    /// Target unit, `None` if unknown
    pub to: Option<Unit>,
}

/// Parse one line of input against the given registry
pub fn parse(registry: &UnitRegistry, input: &str) -> Result<ConversionRequest, ConvertError> {
    Parser::new(registry, input).parse()
}

struct Parser<'a> {
    registry: &'a UnitRegistry,
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(registry: &'a UnitRegistry, input: &'a str) -> Self {
        Parser {
            registry,
            tokens: input.trim().split(' ').collect(),
            pos: 0,
        }
    }

    fn parse(mut self) -> Result<ConversionRequest, ConvertError> {
        if !(MIN_TOKENS..=MAX_TOKENS).contains(&self.tokens.len()) {
            debug!(tokens = self.tokens.len(), "wrong token count");
            return Err(ConvertError::Parse);
        }

        let value = self.parse_value()?;
        let unit = self.parse_unit()?;
        validate(value, unit)?;
        // connector word, usually "to"
        self.next_token()?;
        let target = self.parse_unit()?;

        let request = ConversionRequest {
            from: unit.map(|u| Value::new(value, u)),
            to: target,
        };
        debug!(?request, "parsed request");
        Ok(request)
    }

    fn next_token(&mut self) -> Result<&'a str, ConvertError> {
        let token = self.tokens.get(self.pos).copied().ok_or(ConvertError::Parse)?;
        self.pos += 1;
        Ok(token)
    }

    fn parse_value(&mut self) -> Result<f64, ConvertError> {
        parse_magnitude(self.next_token()?).ok_or(ConvertError::Parse)
    }

    fn parse_unit(&mut self) -> Result<Option<Unit>, ConvertError> {
        let name = self.extract_name()?;
        Ok(self.registry.lookup(&name))
    }

    fn extract_name(&mut self) -> Result<String, ConvertError> {
        let token = self.next_token()?.to_lowercase();
        if !DEGREE_PREFIXES.contains(&token.as_str()) {
            return Ok(token);
        }
        let next = self.next_token()?;
        Ok(format!("{} {}", token, next.to_lowercase()))
    }
}

fn validate(value: f64, unit: Option<Unit>) -> Result<(), ConvertError> {
    match unit {
        Some(u) if value < 0.0 && u.family().is_non_negative() => {
            Err(ConvertError::NegativeValue(u.family()))
        }
        _ => Ok(()),
    }
}
