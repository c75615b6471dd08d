//! Line-based conversion session

use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use unitconv_units::{Converter, Outcome, EXIT_COMMAND};
use crate::config::{Config, OutputFormat};

/// Write one outcome in the configured format
pub fn write_outcome<W: Write>(
    out: &mut W,
    format: OutputFormat,
    input: &str,
    outcome: &Outcome,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", outcome.render())?,
        OutputFormat::Json => {
            let json = serde_json::to_string(&outcome.report(input)).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()
}

/// Run the interactive loop until "exit" or end of input.
///
/// Returns the number of processed requests.
pub fn run<R: BufRead, W: Write>(
    converter: &Converter<'_>,
    config: &Config,
    mut reader: R,
    mut out: W,
) -> io::Result<usize> {
    let mut processed = 0;

    loop {
        if config.format == OutputFormat::Text {
            write!(out, "{}", config.prompt)?;
            out.flush()?;
        }

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            debug!("end of input");
            break;
        }
        let input = line.trim_end_matches(['\n', '\r']);
        if input == EXIT_COMMAND {
            break;
        }

        let outcome = converter.process(input);
        debug!(input, ok = outcome.is_ok(), "processed request");
        write_outcome(&mut out, config.format, input, &outcome)?;
        processed += 1;
    }

    info!(processed, "session finished");
    Ok(processed)
}
