//! Shared data types

/// Largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Number of values in the code point domain `[0, MAX_CODE_POINT]`.
pub const DOMAIN_SIZE: u32 = MAX_CODE_POINT + 1;

/// First UTF-16 surrogate.
pub const SURROGATE_MIN: u32 = 0xD800;

/// Last UTF-16 surrogate.
pub const SURROGATE_MAX: u32 = 0xDFFF;

/// Whether `rune` is a Unicode scalar value, i.e. in the domain and not a surrogate.
#[inline]
pub const fn is_valid_rune(rune: u32) -> bool {
    rune <= MAX_CODE_POINT && !(rune >= SURROGATE_MIN && rune <= SURROGATE_MAX)
}

/// Everything the inspector knows about one code point.
///
/// Only `rune` and `valid` are meaningful for invalid code points; the other
/// fields are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuneInfo {
    /// The code point itself
    pub rune: u32,
    /// Character name, empty when unassigned
    pub name: String,
    /// False for surrogates and values beyond `MAX_CODE_POINT`
    pub valid: bool,
    /// Short general category codes, sorted
    pub categories: Vec<String>,
    /// UTF-8 encoding, 1 to 4 bytes
    pub utf8: Vec<u8>,
    /// UTF-16 encoding, 1 or 2 code units
    pub utf16: Vec<u16>,
}

impl RuneInfo {
    /// Record for a value that is not a Unicode scalar value.
    pub fn invalid(rune: u32) -> Self {
        Self {
            rune,
            valid: false,
            ..Default::default()
        }
    }
}
