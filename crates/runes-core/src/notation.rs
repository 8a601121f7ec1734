//! `U+XXXX 'c'` notation for code points
//!
//! The hex part is always at least four digits wide. The quoted glyph is only
//! appended for printable scalar values: letters, marks, numbers,
//! punctuation, symbols and the ASCII space.

use std::fmt;

use icu_properties::{props::GeneralCategory, CodePointMapData};

/// Display wrapper rendering a code point as `U+0041 'A'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointLiteral(pub u32);

impl CodePointLiteral {
    /// The glyph quoted after the hex part, if the code point is printable.
    pub fn glyph(&self) -> Option<char> {
        char::from_u32(self.0).filter(|&ch| is_printable(ch))
    }
}

impl fmt::Display for CodePointLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)?;
        if let Some(ch) = self.glyph() {
            write!(f, " '{ch}'")?;
        }
        Ok(())
    }
}

/// Whether `ch` has a visible rendering worth quoting.
pub fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    !matches!(
        CodePointMapData::<GeneralCategory>::new().get(ch),
        GeneralCategory::Unassigned
            | GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}
