//! CLI argument definitions using Clap v4

use clap::{ArgAction, Parser, ValueEnum};
use runes_export::OutputFormat;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Print information about Unicode code points: general categories, the code
point itself, its UTF-8 bytes, its UTF-16 code units and its name.

Without arguments every code point is printed. Code points starting with '0x'
or 'u+' are hexadecimal (the 'x' and 'u' are case insensitive), anything else
is decimal. START-END prints an inclusive range; surrogates inside ranges are
skipped.

Examples:
    runes
    runes 0x2318 40-60
    runes u+1f970
    runes --json -s 'héllo'";

/// runes - inspect Unicode code points
#[derive(Parser, Debug)]
#[command(name = "runes")]
#[command(version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Code points (65, 0x41, u+41) or ranges (0x41-0x5A)
    #[arg(value_name = "CODEPOINT")]
    pub codepoints: Vec<String>,

    /// Print the characters of a literal string
    #[arg(short = 's', long = "string", value_name = "TEXT", action = ArgAction::Append)]
    pub strings: Vec<String>,

    /// Output format
    #[arg(long = "format", value_enum, env = "RUNES_FORMAT", default_value = "text")]
    pub format: FormatArg,

    /// Output JSON data (same as --format json)
    #[arg(long = "json")]
    pub json: bool,

    /// Print each requested code point once, in ascending order
    #[arg(long = "merge")]
    pub merge: bool,

    /// Print the requested code points as compressed ranges instead of one per line
    #[arg(long = "ranges", conflicts_with_all = ["json", "merge"])]
    pub ranges: bool,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,
}

impl Cli {
    /// The format after `--json` has been applied.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format.into()
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Aligned columns, one line per code point
    Text,
    /// One JSON array
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_flag_overrides_format() {
        let cli = Cli::try_parse_from(["runes", "--json", "0x41"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert_eq!(cli.codepoints, vec!["0x41"]);
    }

    #[test]
    fn test_strings_accumulate() {
        let cli = Cli::try_parse_from(["runes", "-s", "ab", "--string", "c"]).unwrap();
        assert_eq!(cli.strings, vec!["ab", "c"]);
        assert!(cli.codepoints.is_empty());
    }

    #[test]
    fn test_ranges_conflicts_with_json() {
        assert!(Cli::try_parse_from(["runes", "--ranges", "--json"]).is_err());
    }
}
