//! Error taxonomy shared by every stage of the codec.
//!
//! The BWT idempotence guards are deliberately absent: running the forward transform on
//! sentinel-bearing input (or the inverse on input without one) returns the input unchanged.

use thiserror::Error;

/// Errors raised by the frequency, tree, packing and transform stages.
#[derive(Error, Debug)]
pub enum ShrinkError {
    #[error("Cannot encode an empty sequence")]
    EmptyInput,

    #[error("Symbol {0:?} is not in the code table")]
    UnknownSymbol(char),

    #[error("No code matches the bit stream at offset {offset}")]
    MalformedCode { offset: usize },

    #[error("Bit string holds a non-binary digit at offset {offset}")]
    NotBinary { offset: usize },

    #[error("A code tree needs at least 2 distinct symbols, found {0}")]
    DegenerateAlphabet(usize),

    #[error("Inverse transform found no row ending in the sentinel")]
    MalformedTransform,

    #[error("Invalid decode table: {0}")]
    InvalidTable(String),

    #[error("Packed character {0:?} is outside the 0-255 code unit range")]
    InvalidPackedChar(char),

    #[error("Mode {0} does not apply to this file")]
    ModeMismatch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for every fallible codec operation.
pub type Result<T> = std::result::Result<T, ShrinkError>;
