// this_file: crates/runes-unicode/src/lib.rs

//! Code point sets and rune metadata resolution.
//!
//! - [`CodepointSet`] - a bitset over `[0, 0x10FFFF]` with range mutation and
//!   a compressed text form
//! - [`RuneResolver`] - name, categories and encodings of one code point
//! - [`ucd`] - the lookup services backed by real Unicode data

pub mod codepoint_set;
pub mod encoding;
pub mod resolver;
pub mod ucd;

pub use codepoint_set::{CodepointSet, Runs};
pub use resolver::RuneResolver;
pub use ucd::{GeneralCategories, TerminalWidth, UnicodeNames};


#[cfg(test)]
mod proptests;
