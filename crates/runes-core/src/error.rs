//! Error types for runes

use thiserror::Error;

use crate::notation::CodePointLiteral;

pub type Result<T> = std::result::Result<T, RunesError>;

/// Main error type for runes
#[derive(Debug, Error)]
pub enum RunesError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Code point set mutation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{} is outside the Unicode range", CodePointLiteral(*.value))]
    OutOfRange { value: u32 },

    #[error(
        "from rune {} is greater than to rune {}",
        CodePointLiteral(*.from),
        CodePointLiteral(*.to)
    )]
    InvertedRange { from: u32, to: u32 },
}

/// Output errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("printer used before begin()")]
    NotStarted,
}
