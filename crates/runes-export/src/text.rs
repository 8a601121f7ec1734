//! Columnar text output
//!
//! One line per rune, written as soon as it arrives:
//!
//! ```text
//! [L Lu] U+0041 'A'     [41]        [41]        LATIN CAPITAL LETTER A
//! [L Lo] U+4E00 '一'    [E4 B8 80]  [4E00]      CJK UNIFIED IDEOGRAPH-4E00
//! [!]    U+D800         []          []
//! ```

use std::fmt::Write as _;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use runes_core::{
    error::{ExportError, Result},
    traits::{RunePrinter, WidthEstimator},
    CodePointLiteral, RuneInfo,
};

const CATEGORY_COLUMN: usize = 7;
const LITERAL_COLUMN: usize = 15;
const BYTES_COLUMN: usize = 12;
const UNITS_COLUMN: usize = 12;
const INVALID_MARKER: &str = "[!]";

/// Streams one line per rune.
///
/// Write failures are reported by the `emit` or `end` call that runs into
/// them. Lines go through a `BufWriter`, so that is the call whose line
/// overflows the buffer, or `end` for the final flush.
pub struct TextPrinter<W: Write> {
    out: Option<BufWriter<W>>,
    width: Arc<dyn WidthEstimator>,
    line: String,
}

impl<W: Write> TextPrinter<W> {
    pub fn new(width: Arc<dyn WidthEstimator>) -> Self {
        Self {
            out: None,
            width,
            line: String::with_capacity(128),
        }
    }

    /// Render the line for `info`, without the trailing newline.
    fn format_line(&mut self, info: &RuneInfo) {
        self.line.clear();

        let categories = if info.valid {
            format!("[{}]", info.categories.join(" "))
        } else {
            INVALID_MARKER.to_string()
        };
        let _ = write!(self.line, "{categories:<CATEGORY_COLUMN$}");

        // Pad the literal by columns, not bytes: a wide glyph takes two.
        let literal = CodePointLiteral(info.rune);
        let glyph_width = match literal.glyph() {
            Some(_) => self.width.width(info.rune),
            None => 1,
        };
        let literal = literal.to_string();
        let columns = (literal.chars().count() + glyph_width).saturating_sub(1);
        self.line.push_str(&literal);
        for _ in columns..LITERAL_COLUMN {
            self.line.push(' ');
        }

        let bytes = hex_list(info.utf8.iter().map(|b| format!("{b:02X}")));
        let _ = write!(self.line, "{bytes:<BYTES_COLUMN$}");

        let units = hex_list(info.utf16.iter().map(|u| format!("{u:X}")));
        let _ = write!(self.line, "{units:<UNITS_COLUMN$}");

        self.line.push_str(&info.name);
    }
}

fn hex_list(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(" "))
}

impl<W: Write> RunePrinter<W> for TextPrinter<W> {
    fn name(&self) -> &'static str {
        "text"
    }

    fn begin(&mut self, sink: W) -> Result<()> {
        self.out = Some(BufWriter::new(sink));
        self.line.clear();
        Ok(())
    }

    fn emit(&mut self, info: RuneInfo) -> Result<()> {
        self.format_line(&info);
        let out = self.out.as_mut().ok_or(ExportError::NotStarted)?;
        writeln!(out, "{}", self.line)?;
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        let mut out = self.out.take().ok_or(ExportError::NotStarted)?;
        out.flush()?;
        log::debug!("text printer flushed");
        Ok(())
    }
}
