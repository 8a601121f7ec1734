// this_file: crates/runes-unicode/src/codepoint_set.rs

//! Fixed-size bitset over the whole code point domain.
//!
//! 17,408 words of 64 bits hold one bit for each of the 1,114,112 values in
//! `[0, 0x10FFFF]`. The domain never grows, so membership is a shift and a
//! mask, and range mutation touches whole words except at the two ends.

use std::fmt;

use runes_core::{CodePointLiteral, DomainError, DOMAIN_SIZE, MAX_CODE_POINT};

const WORD_BITS: u32 = u64::BITS;
const WORDS: usize = (DOMAIN_SIZE / WORD_BITS) as usize;

/// A set of code points in `[0, 0x10FFFF]`.
///
/// ```ignore
/// let mut set = CodepointSet::new();
/// set.set_range('A' as u32, 'Z' as u32)?;
/// set.unset_range('M' as u32, 'Q' as u32)?;
/// assert_eq!(set.serialize(), "[U+0041 'A'-U+004C 'L',U+0052 'R'-U+005A 'Z']");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CodepointSet {
    words: Box<[u64]>,
}

impl CodepointSet {
    /// An empty set.
    pub fn new() -> Self {
        Self {
            words: vec![0u64; WORDS].into_boxed_slice(),
        }
    }

    /// Add every value in `values`.
    ///
    /// The batch is checked before anything is written: if one value lies
    /// outside the domain, the set is left untouched.
    pub fn set(&mut self, values: &[u32]) -> Result<(), DomainError> {
        if let Some(&value) = values.iter().find(|&&v| v > MAX_CODE_POINT) {
            return Err(DomainError::OutOfRange { value });
        }
        for &value in values {
            let (idx, bit) = locate(value);
            self.words[idx] |= bit;
        }
        Ok(())
    }

    /// Remove every value in `values`. Values outside the domain are ignored.
    pub fn unset(&mut self, values: &[u32]) {
        for &value in values.iter().filter(|&&v| v <= MAX_CODE_POINT) {
            let (idx, bit) = locate(value);
            self.words[idx] &= !bit;
        }
    }

    /// Add every value in `[from, to]`.
    pub fn set_range(&mut self, from: u32, to: u32) -> Result<(), DomainError> {
        self.apply_range(from, to, true)
    }

    /// Remove every value in `[from, to]`.
    pub fn unset_range(&mut self, from: u32, to: u32) -> Result<(), DomainError> {
        self.apply_range(from, to, false)
    }

    fn apply_range(&mut self, from: u32, to: u32, on: bool) -> Result<(), DomainError> {
        if from > to {
            return Err(DomainError::InvertedRange { from, to });
        }
        if to > MAX_CODE_POINT {
            return Err(DomainError::OutOfRange { value: to });
        }
        log::trace!(
            "{} {}-{}",
            if on { "set" } else { "unset" },
            CodePointLiteral(from),
            CodePointLiteral(to)
        );

        let first = (from / WORD_BITS) as usize;
        let last = (to / WORD_BITS) as usize;
        for idx in first..=last {
            let lo = if idx == first { from % WORD_BITS } else { 0 };
            let hi = if idx == last { to % WORD_BITS } else { WORD_BITS - 1 };
            let mask = span_mask(lo, hi);
            if on {
                self.words[idx] |= mask;
            } else {
                self.words[idx] &= !mask;
            }
        }
        Ok(())
    }

    /// Whether `value` is a member. Out-of-domain values never are.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        if value > MAX_CODE_POINT {
            return false;
        }
        let (idx, bit) = locate(value);
        self.words[idx] & bit != 0
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Maximal runs of consecutive members as inclusive `(start, end)` pairs,
    /// ascending.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            set: self,
            cursor: 0,
        }
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.runs().flat_map(|(start, end)| start..=end)
    }

    /// The canonical text form, e.g. `[U+0041 'A'-U+004C 'L',U+10FFFF]`.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// First value at or after `from` whose bit equals `member`.
    fn next_with(&self, from: u32, member: bool) -> Option<u32> {
        let mut idx = (from / WORD_BITS) as usize;
        if idx >= WORDS {
            return None;
        }
        let load = |i: usize| if member { self.words[i] } else { !self.words[i] };
        let mut word = load(idx) & (u64::MAX << (from % WORD_BITS));
        loop {
            if word != 0 {
                return Some(idx as u32 * WORD_BITS + word.trailing_zeros());
            }
            idx += 1;
            if idx == WORDS {
                return None;
            }
            word = load(idx);
        }
    }
}

impl Default for CodepointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CodepointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (start, end)) in self.runs().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if start == end {
                write!(f, "{}", CodePointLiteral(start))?;
            } else {
                write!(f, "{}-{}", CodePointLiteral(start), CodePointLiteral(end))?;
            }
        }
        f.write_str("]")
    }
}

impl fmt::Debug for CodepointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CodepointSet").field(&self.to_string()).finish()
    }
}

/// Iterator returned by [`CodepointSet::runs`].
pub struct Runs<'a> {
    set: &'a CodepointSet,
    cursor: u32,
}

impl Iterator for Runs<'_> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor > MAX_CODE_POINT {
            return None;
        }
        let start = match self.set.next_with(self.cursor, true) {
            Some(start) => start,
            None => {
                self.cursor = DOMAIN_SIZE;
                return None;
            },
        };
        // A run still open at the end of the domain closes at MAX_CODE_POINT.
        let end = self
            .set
            .next_with(start, false)
            .map_or(MAX_CODE_POINT, |gap| gap - 1);
        self.cursor = end + 1;
        Some((start, end))
    }
}

#[inline]
fn locate(value: u32) -> (usize, u64) {
    ((value / WORD_BITS) as usize, 1u64 << (value % WORD_BITS))
}

/// Bits `lo..=hi` of a word set, with `lo <= hi < 64`.
#[inline]
fn span_mask(lo: u32, hi: u32) -> u64 {
    (u64::MAX >> (WORD_BITS - 1 - hi)) & (u64::MAX << lo)
}
