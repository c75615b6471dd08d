//! Unitconv - interactive unit converter
//!
//! Reads requests like "10 km to miles" from stdin, one per line, and prints
//! "<source> is <result>" or the error message, each followed by a blank line.
//! Type "exit" to quit.
//!
//! With arguments, the arguments form a single request:
//!
//! ```text
//! unitconv 100 degrees Fahrenheit to celsius
//! ```
//!
//! Environment:
//! - UNITCONV_PROMPT: prompt text
//! - UNITCONV_FORMAT: "text" (default) or "json"
//! - RUST_LOG: log filter directives for stderr (default "warn")

mod cli;
mod config;
mod session;

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use unitconv_units::Converter;
use cli::Cli;
use config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_logging();
    for issue in &config.issues {
        warn!("{}", issue);
    }

    let converter = Converter::standard();
    info!(version = VERSION, units = converter.registry().len(), "unitconv started");

    if let Some(request) = cli.request_line() {
        return run_once(&converter, &config, &request);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match session::run(&converter, &config, stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// One-shot mode: convert the request given on the command line
fn run_once(converter: &Converter<'_>, config: &Config, input: &str) -> ExitCode {
    let outcome = converter.process(input);
    let mut stdout = io::stdout().lock();
    if let Err(e) = session::write_outcome(&mut stdout, config.format, input, &outcome) {
        error!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }
    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
