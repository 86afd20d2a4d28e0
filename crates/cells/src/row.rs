//! Typed-row codec and row-key helpers.
//!
//! A row is a flat sequence of cells encoded back-to-back against a schema
//! (one [`CellType`] per column). There is no per-row framing: the schema
//! alone determines where each cell ends, so decoding must consume the
//! buffer exactly.
//!
//! Row keys namespace user keys by table: `table_id (u32 LE) | key bytes`.

use byteorder::{ByteOrder, LittleEndian};

use crate::cell::{Cell, CellType};
use crate::codec::{decode_cell, encode_cell};
use crate::error::{CellError, CellResult};

/// Byte length of the table-id prefix on a row key.
pub const ROW_KEY_PREFIX: usize = 4;

/// Append the encoding of `cells` to `out`, one column per schema entry.
///
/// The row must match the schema exactly: too few cells is
/// `ExpectMoreData`, extra cells are `TrailingGarbage`, and a column of the
/// wrong type is `TypeMismatch`. Nothing is written unless the whole row
/// encodes.
pub fn encode_row(cells: &[Cell], schema: &[CellType], out: &mut Vec<u8>) -> CellResult<()> {
    if cells.len() < schema.len() {
        return Err(CellError::ExpectMoreData);
    }
    if cells.len() > schema.len() {
        return Err(CellError::TrailingGarbage {
            remaining: cells.len() - schema.len(),
        });
    }

    let mut row = Vec::new();
    for (cell, &ty) in cells.iter().zip(schema) {
        encode_cell(cell, ty, &mut row)?;
    }
    out.extend_from_slice(&row);
    Ok(())
}

/// Decode one cell per schema entry, consuming `buf` completely.
///
/// Bytes left over after the last column are `TrailingGarbage`.
pub fn decode_row(mut buf: &[u8], schema: &[CellType]) -> CellResult<Vec<Cell>> {
    let mut cells = Vec::with_capacity(schema.len());
    for &ty in schema {
        cells.push(decode_cell(&mut buf, ty)?);
    }
    if !buf.is_empty() {
        return Err(CellError::TrailingGarbage {
            remaining: buf.len(),
        });
    }
    Ok(cells)
}

/// Prefix `key` with its table id.
pub fn encode_row_key(table_id: u32, key: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ROW_KEY_PREFIX + key.len());
    out.extend_from_slice(&table_id.to_le_bytes());
    out.extend_from_slice(key);
    out
}

/// Strip and validate the table-id prefix, returning the user key bytes.
///
/// A short key or a prefix for a different table is `BadKey`.
pub fn decode_row_key(table_id: u32, row_key: &[u8]) -> CellResult<&[u8]> {
    if row_key.len() < ROW_KEY_PREFIX {
        return Err(CellError::BadKey);
    }
    if LittleEndian::read_u32(&row_key[..ROW_KEY_PREFIX]) != table_id {
        return Err(CellError::BadKey);
    }
    Ok(&row_key[ROW_KEY_PREFIX..])
}
