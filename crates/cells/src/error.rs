//! Cell codec error types

use thiserror::Error;

use crate::cell::CellType;

/// Errors produced by the cell and row codecs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Cell value does not match the schema column type
    #[error("cell type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: CellType, found: CellType },

    /// Buffer too short, expected more data
    #[error("buffer too short, expected more data")]
    ExpectMoreData,

    /// A byte that is not a valid null tag where one was required
    #[error("illegal byte sequence: {found:#04x} is not a null tag")]
    IllegalByte { found: u8 },

    /// Unexpected bytes remain after decoding a complete row
    #[error("{remaining} unexpected bytes remain after decoding")]
    TrailingGarbage { remaining: usize },

    /// Row key prefix does not match the table id
    #[error("key prefix does not match table id")]
    BadKey,
}

/// Result type for cell codec operations
pub type CellResult<T> = Result<T, CellError>;
