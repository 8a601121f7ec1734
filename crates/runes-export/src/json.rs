//! JSON output
//!
//! Records are collected for the whole run and written at `end()` as one
//! pretty-printed array:
//!
//! ```json
//! [
//!   {
//!     "rune": 65,
//!     "name": "LATIN CAPITAL LETTER A",
//!     "valid": true,
//!     "categories": ["L", "Lu"],
//!     "utf16": [65],
//!     "utf8": [65]
//!   }
//! ]
//! ```

use std::io::{BufWriter, Write};

use runes_core::{
    error::{ExportError, Result, RunesError},
    traits::RunePrinter,
    RuneInfo,
};
use serde::{Deserialize, Serialize};

/// Initial record capacity; grows as needed.
const INITIAL_CAPACITY: usize = 1024;

/// Buffers every rune and writes a single JSON document at the end.
pub struct JsonPrinter<W: Write> {
    out: Option<BufWriter<W>>,
    records: Vec<JsonRune>,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new() -> Self {
        Self {
            out: None,
            records: Vec::new(),
        }
    }

    /// Records collected so far
    pub fn pending(&self) -> usize {
        self.records.len()
    }
}

impl<W: Write> Default for JsonPrinter<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> RunePrinter<W> for JsonPrinter<W> {
    fn name(&self) -> &'static str {
        "json"
    }

    fn begin(&mut self, sink: W) -> Result<()> {
        self.out = Some(BufWriter::new(sink));
        self.records = Vec::with_capacity(INITIAL_CAPACITY);
        Ok(())
    }

    fn emit(&mut self, info: RuneInfo) -> Result<()> {
        if self.out.is_none() {
            return Err(ExportError::NotStarted.into());
        }
        self.records.push(JsonRune::from(info));
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        let mut out = self.out.take().ok_or(ExportError::NotStarted)?;
        let records = std::mem::take(&mut self.records);

        serde_json::to_writer_pretty(&mut out, &records).map_err(|e| {
            if e.is_io() {
                RunesError::Io(e.into())
            } else {
                ExportError::EncodingFailed(e.to_string()).into()
            }
        })?;
        writeln!(out)?;
        out.flush()?;

        log::debug!("json printer wrote {} records", records.len());
        Ok(())
    }
}

/// Serialized form of one rune.
///
/// Fields that only exist for valid runes are `null` for invalid ones. UTF-8
/// bytes are written as an array of numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRune {
    pub rune: u32,
    pub name: String,
    pub valid: bool,
    pub categories: Option<Vec<String>>,
    pub utf16: Option<Vec<u16>>,
    pub utf8: Option<Vec<u8>>,
}

impl From<RuneInfo> for JsonRune {
    fn from(info: RuneInfo) -> Self {
        if !info.valid {
            return Self {
                rune: info.rune,
                name: info.name,
                valid: false,
                categories: None,
                utf16: None,
                utf8: None,
            };
        }
        Self {
            rune: info.rune,
            name: info.name,
            valid: true,
            categories: Some(info.categories),
            utf16: Some(info.utf16),
            utf8: Some(info.utf8),
        }
    }
}
