//! Conversion errors
//!
//! Every error is local to one request. The session reports it and moves
//! on to the next line; nothing here is fatal to the process.

use crate::Family;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const NEGATIVE_VALUE: &str = "NEGATIVE_VALUE";
    pub const CONVERSION_ERROR: &str = "CONVERSION_ERROR";
}

/// Placeholder shown in messages for a unit name that did not resolve
pub const UNKNOWN_UNIT: &str = "???";

/// Error produced while parsing or converting a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Wrong token count, non-numeric magnitude, or missing unit token
    #[error("Parse error")]
    Parse,

    #[error("{0} shouldn't be negative")]
    NegativeValue(Family),

    /// Unresolved unit on either side, or a cross-family pair.
    /// Fields hold plural display names; `None` for an unresolved unit.
    #[error("Conversion from {} to {} is impossible", unit_label(.from), unit_label(.to))]
    Conversion {
        from: Option<String>,
        to: Option<String>,
    },
}

fn unit_label(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or(UNKNOWN_UNIT)
}

impl ConvertError {
    pub fn conversion(from: Option<&str>, to: Option<&str>) -> Self {
        ConvertError::Conversion {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::Parse => codes::PARSE_ERROR,
            ConvertError::NegativeValue(_) => codes::NEGATIVE_VALUE,
            ConvertError::Conversion { .. } => codes::CONVERSION_ERROR,
        }
    }

    /// Hint for fixing the input
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ConvertError::Parse => {
                Some("Use the form '<number> <unit> to <unit>', e.g. '10 km to miles'".to_string())
            }
            ConvertError::NegativeValue(family) => {
                Some(format!("Enter a non-negative {} value", family.name().to_lowercase()))
            }
            ConvertError::Conversion { from: None, .. } | ConvertError::Conversion { to: None, .. } => {
                Some("Check the unit spelling".to_string())
            }
            ConvertError::Conversion { .. } => {
                Some("Both units must measure the same quantity".to_string())
            }
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

/// Errors raised while building a unit registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Token '{token}' is claimed by both {first} and {second}")]
    DuplicateToken {
        token: String,
        first: String,
        second: String,
    },
}

/// Structured error for machine-readable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&ConvertError> for ErrorReport {
    fn from(err: &ConvertError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion(),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message() {
        assert_eq!(ConvertError::Parse.to_string(), "Parse error");
    }

    #[test]
    fn test_negative_value_names_family() {
        let err = ConvertError::NegativeValue(Family::Weight);
        assert_eq!(err.to_string(), "Weight shouldn't be negative");
        assert_eq!(err.code(), codes::NEGATIVE_VALUE);
    }

    #[test]
    fn test_conversion_message_with_placeholders() {
        let err = ConvertError::conversion(None, Some("kelvins"));
        assert_eq!(err.to_string(), "Conversion from ??? to kelvins is impossible");

        let err = ConvertError::conversion(Some("meters"), None);
        assert_eq!(err.to_string(), "Conversion from meters to ??? is impossible");

        let err = ConvertError::conversion(None, None);
        assert_eq!(err.to_string(), "Conversion from ??? to ??? is impossible");
    }

    #[test]
    fn test_report() {
        let report = ConvertError::conversion(Some("meters"), Some("grams")).report();
        assert_eq!(report.code, codes::CONVERSION_ERROR);
        assert_eq!(report.message, "Conversion from meters to grams is impossible");
        assert!(report.suggestion.is_some());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["code"], "CONVERSION_ERROR");
    }

    #[test]
    fn test_report_display() {
        let report = ConvertError::Parse.report();
        let text = format!("{}", report);
        assert!(text.starts_with("[PARSE_ERROR] Parse error"));
        assert!(text.contains("suggestion:"));
    }

    #[test]
    fn test_duplicate_token_message() {
        let err = RegistryError::DuplicateToken {
            token: "m".to_string(),
            first: "meter".to_string(),
            second: "mile".to_string(),
        };
        assert_eq!(err.to_string(), "Token 'm' is claimed by both meter and mile");
    }
}
