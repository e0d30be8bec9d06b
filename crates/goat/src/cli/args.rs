use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Render structured data (CSV, JSON, XML, YAML) through a text or HTML template.
#[derive(Debug, Parser)]
#[command(name = "goat", version, about, long_about = None)]
pub struct Args {
    /// The template file to use
    #[arg(
        long,
        value_name = "FILE",
        required_unless_present = "list_formats"
    )]
    pub template: Option<PathBuf>,

    /// The input file to use, defaults to stdin if not set
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Override the input file format. This is otherwise determined by the
    /// file extension and is required if the input comes from stdin.
    #[arg(long = "informat", value_name = "FORMAT")]
    pub input_format: Option<String>,

    /// The output file to use, defaults to stdout if not set
    #[arg(long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// The output format (text|html)
    #[arg(long = "outformat", value_name = "FORMAT", default_value = "text")]
    pub output_format: String,

    /// List the registered input formats and exit
    #[arg(long)]
    pub list_formats: bool,

    /// Log more (-v for info, -vv for debug). GOAT_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The log filter implied by `--verbose`.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_debug_assert() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_template_is_required() {
        let err = Args::try_parse_from(["goat", "--in", "data.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_outformat_defaults_to_text() {
        let args = Args::try_parse_from(["goat", "--template", "t.txt"]).unwrap();
        assert_eq!(args.output_format, "text");
        assert_eq!(args.input, None);
        assert_eq!(args.output, None);
    }

    #[test]
    fn test_outformat_is_not_validated_by_clap() {
        let args =
            Args::try_parse_from(["goat", "--template", "t.txt", "--outformat", "pdf"]).unwrap();
        assert_eq!(args.output_format, "pdf");
    }

    #[test]
    fn test_verbosity() {
        let quiet = Args::try_parse_from(["goat", "--list-formats"]).unwrap();
        assert_eq!(quiet.log_level(), "warn");
        let loud = Args::try_parse_from(["goat", "--list-formats", "-vv"]).unwrap();
        assert_eq!(loud.log_level(), "debug");
    }
}
