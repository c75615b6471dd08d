//! Command-line arguments

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "unitconv", version)]
#[command(about = "Convert lengths, weights and temperatures", long_about = None)]
pub struct Cli {
    /// One request to convert, e.g. "10 km to miles". Starts an interactive session when omitted.
    #[arg(trailing_var_arg = true, allow_negative_numbers = true)]
    pub request: Vec<String>,
}

impl Cli {
    /// The one-shot request, if any words were given
    pub fn request_line(&self) -> Option<String> {
        if self.request.is_empty() {
            None
        } else {
            Some(self.request.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_args_is_interactive() {
        let cli = Cli::try_parse_from(["unitconv"]).unwrap();
        assert_eq!(cli.request_line(), None);
    }

    #[test]
    fn test_request_words_joined() {
        let cli = Cli::try_parse_from(["unitconv", "100", "degrees", "Fahrenheit", "to", "celsius"]).unwrap();
        assert_eq!(cli.request_line().as_deref(), Some("100 degrees Fahrenheit to celsius"));
    }

    #[test]
    fn test_negative_number_is_a_request() {
        let cli = Cli::try_parse_from(["unitconv", "-1", "celsius", "to", "kelvin"]).unwrap();
        assert_eq!(cli.request.len(), 4);
        assert_eq!(cli.request_line().as_deref(), Some("-1 celsius to kelvin"));
    }

    #[test]
    fn test_help_and_version() {
        let err = Cli::try_parse_from(["unitconv", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["unitconv", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
