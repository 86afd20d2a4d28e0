//! Scalar cell encode/decode.
//!
//! Wire encodings (all integers little-endian):
//!
//! - `null` — the single tag byte `0x02`
//! - `i64`  — 8 bytes, two's complement
//! - `str`  — `u32` length prefix followed by that many payload bytes
//!
//! Both directions take the *expected* schema type. Encoding a cell whose
//! value disagrees with the schema is `TypeMismatch`; decoding trusts the
//! schema and reads exactly the bytes that type occupies. On success the
//! caller's cursor advances by exactly the bytes consumed; on failure it is
//! left where it was.

use byteorder::{ByteOrder, LittleEndian};

use crate::cell::{Cell, CellType};
use crate::error::{CellError, CellResult};

/// Tag byte marking an encoded null cell.
pub const NULL_TAG: u8 = 0x02;

/// Append the encoding of `cell` to `out`, checking it against `expected`.
pub fn encode_cell(cell: &Cell, expected: CellType, out: &mut Vec<u8>) -> CellResult<()> {
    if cell.cell_type() != expected {
        return Err(CellError::TypeMismatch {
            expected,
            found: cell.cell_type(),
        });
    }

    match cell {
        Cell::Null => out.push(NULL_TAG),
        Cell::I64(v) => out.extend_from_slice(&v.to_le_bytes()),
        Cell::Str(s) => {
            out.extend_from_slice(&(s.len() as u32).to_le_bytes());
            out.extend_from_slice(s);
        }
    }
    Ok(())
}

/// Decode one cell of type `expected` from the front of `buf`, advancing it.
pub fn decode_cell(buf: &mut &[u8], expected: CellType) -> CellResult<Cell> {
    match expected {
        CellType::Null => {
            let (&tag, rest) = buf.split_first().ok_or(CellError::ExpectMoreData)?;
            if tag != NULL_TAG {
                return Err(CellError::IllegalByte { found: tag });
            }
            *buf = rest;
            Ok(Cell::Null)
        }
        CellType::I64 => {
            if buf.len() < 8 {
                return Err(CellError::ExpectMoreData);
            }
            let v = LittleEndian::read_i64(&buf[..8]);
            *buf = &buf[8..];
            Ok(Cell::I64(v))
        }
        CellType::Str => {
            if buf.len() < 4 {
                return Err(CellError::ExpectMoreData);
            }
            let len = LittleEndian::read_u32(&buf[..4]) as usize;
            if buf.len() < 4 + len {
                return Err(CellError::ExpectMoreData);
            }
            let data = buf[4..4 + len].to_vec();
            *buf = &buf[4 + len..];
            Ok(Cell::Str(data))
        }
    }
}
