//! Converter engine - parse, resolve and render one request per line

use serde::Serialize;
use unitconv_core::{ConvertError, ErrorReport};
use crate::Value;
use crate::convert::endpoints;
use crate::parse::parse;
use crate::units::{UnitRegistry, UNITS};

/// Input that ends an interactive session
pub const EXIT_COMMAND: &str = "exit";

/// Conversion engine bound to a unit registry
#[derive(Debug, Clone, Copy)]
pub struct Converter<'r> {
    registry: &'r UnitRegistry,
}

impl Converter<'static> {
    /// Engine over the standard catalog
    pub fn standard() -> Self {
        Converter { registry: &UNITS }
    }
}

impl<'r> Converter<'r> {
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Converter { registry }
    }

    pub fn registry(&self) -> &'r UnitRegistry {
        self.registry
    }

    /// Parse and convert one line of input
    pub fn convert_line(&self, input: &str) -> Result<(Value, Value), ConvertError> {
        let request = parse(self.registry, input)?;
        let (source, target) = endpoints(&request)?;
        Ok((source, source.convert_to(target)?))
    }

    /// Process one line, capturing failures as part of the outcome
    pub fn process(&self, input: &str) -> Outcome {
        match self.convert_line(input) {
            Ok((source, result)) => Outcome::Converted { source, result },
            Err(error) => Outcome::Failed(error),
        }
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of processing one line
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Converted { source: Value, result: Value },
    Failed(ConvertError),
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }

    /// The message line, without the trailing blank line
    pub fn message(&self) -> String {
        match self {
            Outcome::Converted { source, result } => format!("{} is {}", source, result),
            Outcome::Failed(error) => error.to_string(),
        }
    }

    /// Text output: the message followed by a blank line
    pub fn render(&self) -> String {
        format!("{}\n\n", self.message())
    }

    pub fn report<'a>(&'a self, input: &'a str) -> OutcomeReport<'a> {
        match self {
            Outcome::Converted { source, result } => OutcomeReport {
                input,
                ok: true,
                source: Some(source),
                result: Some(result),
                message: self.message(),
                error: None,
            },
            Outcome::Failed(error) => OutcomeReport {
                input,
                ok: false,
                source: None,
                result: None,
                message: self.message(),
                error: Some(error.report()),
            },
        }
    }
}

/// Machine-readable form of an outcome
#[derive(Debug, Serialize)]
pub struct OutcomeReport<'a> {
    pub input: &'a str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a Value>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}
