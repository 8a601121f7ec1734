//! One code point in, one [`RuneInfo`] out.

use std::sync::Arc;

use runes_core::{
    is_valid_rune,
    traits::{CategoryRegistry, NameRegistry},
    RuneInfo,
};

use crate::{
    encoding::{utf16_units, utf8_bytes},
    ucd::{GeneralCategories, UnicodeNames},
};

/// Computes the metadata record of a code point from injected lookups.
///
/// The resolver holds no per-rune state; the records it returns share nothing
/// with it.
pub struct RuneResolver {
    names: Arc<dyn NameRegistry>,
    categories: Arc<dyn CategoryRegistry>,
}

impl RuneResolver {
    /// Resolve with the given name and category registries.
    pub fn new(names: Arc<dyn NameRegistry>, categories: Arc<dyn CategoryRegistry>) -> Self {
        log::debug!(
            "RuneResolver created with {} category predicates",
            categories.codes().len()
        );
        Self { names, categories }
    }

    /// Resolve with the Unicode data shipped in the binary.
    pub fn with_unicode_data() -> Self {
        Self::new(Arc::new(UnicodeNames), Arc::new(GeneralCategories::new()))
    }

    /// Metadata for `rune`.
    ///
    /// Surrogates and values beyond U+10FFFF come back with `valid == false`
    /// and nothing else filled in.
    pub fn resolve(&self, rune: u32) -> RuneInfo {
        let ch = match char::from_u32(rune) {
            Some(ch) if is_valid_rune(rune) => ch,
            _ => return RuneInfo::invalid(rune),
        };

        let mut categories: Vec<String> = self
            .categories
            .codes()
            .iter()
            .filter(|code| self.categories.contains(code, ch))
            .map(|code| code.to_string())
            .collect();
        categories.sort_unstable();

        RuneInfo {
            rune,
            name: self.names.name(ch),
            valid: true,
            categories,
            utf8: utf8_bytes(ch),
            utf16: utf16_units(ch),
        }
    }
}

impl Default for RuneResolver {
    fn default() -> Self {
        Self::with_unicode_data()
    }
}
