//! Output formats for resolved runes
//!
//! Two printers share the [`RunePrinter`] protocol:
//!
//! - [`TextPrinter`] streams one aligned line per rune
//! - [`JsonPrinter`] collects the run and writes one JSON array at the end
//!
//! The format is picked once per run with [`OutputFormat`], and
//! [`print_runes`] drives the begin/emit/end lifecycle.

use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use runes_core::{
    error::{Result, RunesError},
    traits::{RunePrinter, WidthEstimator},
    RuneInfo,
};

pub mod json;
pub mod text;

pub use json::{JsonPrinter, JsonRune};
pub use text::TextPrinter;

/// Which printer a run uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned columns, one line per rune
    #[default]
    Text,
    /// A single JSON array
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Build the printer for this format.
    ///
    /// `width` is only consulted by the text printer.
    pub fn printer<'a, W: Write + 'a>(
        self,
        width: Arc<dyn WidthEstimator>,
    ) -> Box<dyn RunePrinter<W> + 'a> {
        match self {
            Self::Text => Box::new(TextPrinter::new(width)),
            Self::Json => Box::new(JsonPrinter::new()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = RunesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(RunesError::InvalidInput(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

/// Run `records` through `printer` into `sink`.
///
/// `end()` is called on every path so buffered output is released; when an
/// `emit` fails, that error is returned and the one from `end()` dropped.
/// Returns the number of records emitted.
pub fn print_runes<W, I>(printer: &mut dyn RunePrinter<W>, sink: W, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = RuneInfo>,
{
    printer.begin(sink)?;

    let mut count = 0usize;
    for info in records {
        if let Err(err) = printer.emit(info) {
            log::warn!("{} printer stopped after {count} records: {err}", printer.name());
            let _ = printer.end();
            return Err(err);
        }
        count += 1;
    }

    printer.end()?;
    log::debug!("{} printer finished {count} records", printer.name());
    Ok(count)
}
