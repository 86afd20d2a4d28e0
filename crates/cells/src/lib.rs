//! # Cells — typed cell and row codec
//!
//! Schema-directed serialization for structured values stored inside the
//! kvdb byte store. A column value is a [`Cell`] (`Null`, `I64`, or `Str`);
//! a row is a sequence of cells encoded back-to-back against a schema of
//! [`CellType`]s.
//!
//! ## Wire encodings (all integers little-endian)
//!
//! ```text
//! null   [0x02]
//! i64    [value: 8 bytes, two's complement]
//! str    [len: u32][payload: len bytes]
//! row    cell encodings concatenated, no framing
//! rowkey [table_id: u32][user key bytes]
//! ```
//!
//! There are no per-cell tags except for null: the schema supplies the
//! types, and every decode takes the expected type explicitly. This keeps
//! rows compact and makes a schema/data disagreement loud
//! ([`CellError::TypeMismatch`]) instead of silently reinterpreting bytes.

mod cell;
mod codec;
mod error;
mod row;

pub use cell::{Cell, CellType};
pub use codec::{decode_cell, encode_cell, NULL_TAG};
pub use error::{CellError, CellResult};
pub use row::{decode_row, decode_row_key, encode_row, encode_row_key, ROW_KEY_PREFIX};
