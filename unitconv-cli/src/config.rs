//! Runtime configuration from environment variables

use std::env;
use std::str::FromStr;

pub const DEFAULT_PROMPT: &str = "Enter what you want to convert (or exit): ";

/// How each outcome is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Message line followed by a blank line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}', expected text or json", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Shown before each line in text mode
    pub prompt: String,
    pub format: OutputFormat,
    /// Invalid settings that fell back to defaults, reported once logging is up
    pub issues: Vec<String>,
}

impl Config {
    /// Read UNITCONV_PROMPT and UNITCONV_FORMAT. RUST_LOG belongs to the log filter.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut issues = Vec::new();

        let prompt = lookup("UNITCONV_PROMPT").unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        let format = match lookup("UNITCONV_FORMAT") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                issues.push(e);
                OutputFormat::default()
            }),
            None => OutputFormat::default(),
        };

        Config { prompt, format, issues }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
