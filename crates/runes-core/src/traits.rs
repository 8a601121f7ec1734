//! The seams of the inspector
//!
//! Unicode data is reached through three lookup traits so the resolver can be
//! driven by a small fake registry in tests. Output goes through
//! [`RunePrinter`], which has one implementation per output format.

use std::io::Write;

use crate::{types::RuneInfo, Result};

/// Character names
pub trait NameRegistry: Send + Sync {
    /// The name of `ch`, or an empty string when it has none.
    fn name(&self, ch: char) -> String;
}

/// Named classification predicates over characters
///
/// ```ignore
/// struct AsciiOnly;
///
/// impl CategoryRegistry for AsciiOnly {
///     fn codes(&self) -> &[&'static str] {
///         &["Ascii"]
///     }
///
///     fn contains(&self, code: &str, ch: char) -> bool {
///         code == "Ascii" && ch.is_ascii()
///     }
/// }
/// ```
pub trait CategoryRegistry: Send + Sync {
    /// Every short code the registry knows, in no particular order.
    fn codes(&self) -> &[&'static str];

    /// Whether `ch` belongs to the category named `code`.
    fn contains(&self, code: &str, ch: char) -> bool;
}

/// Terminal column estimates
pub trait WidthEstimator: Send + Sync {
    /// Columns occupied by `rune` when printed: 0, 1 or 2.
    fn width(&self, rune: u32) -> usize;
}

/// A streaming sink for resolved runes
///
/// A run calls [`begin`](RunePrinter::begin) once, [`emit`](RunePrinter::emit)
/// once per record and [`end`](RunePrinter::end) once, including after a failed
/// `emit`, so that buffered output is released.
pub trait RunePrinter<W: Write> {
    /// Identifies the format in logs
    fn name(&self) -> &'static str;

    /// Bind the destination and reset any buffered state.
    fn begin(&mut self, sink: W) -> Result<()>;

    /// Consume one record.
    fn emit(&mut self, info: RuneInfo) -> Result<()>;

    /// Write whatever is pending, flush and release the sink.
    fn end(&mut self) -> Result<()>;
}
