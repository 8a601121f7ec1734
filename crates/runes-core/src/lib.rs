//! Runes Core: the shared vocabulary of the code point inspector
//!
//! Code points travel one way through the inspector:
//!
//! 1. **Request** - a code point, a range, or the whole domain
//! 2. **Resolution** - name, categories and encodings are looked up
//! 3. **Printing** - records become columns of text or one JSON document
//!
//! This crate holds the types that cross those boundaries:
//!
//! - [`RuneInfo`] - the resolved record for one code point
//! - [`traits::NameRegistry`], [`traits::CategoryRegistry`],
//!   [`traits::WidthEstimator`] - injected Unicode lookups
//! - [`traits::RunePrinter`] - the output protocol
//! - [`error`] - errors shared by every crate in the workspace

pub mod error;
pub mod notation;
pub mod traits;
pub mod types;

pub use error::{DomainError, ExportError, Result, RunesError};
pub use notation::CodePointLiteral;
pub use types::{is_valid_rune, RuneInfo, DOMAIN_SIZE, MAX_CODE_POINT};
