//! Log file header constants and read/write helpers.
//!
//! Every log file begins with a fixed 6-byte header:
//!
//! ```text
//! [magic: u32 LE = 0x4B564442 "KVDB"][version: u16 LE]
//! ```
//!
//! A file that does not begin with the magic is not a valid log. The version
//! is bumped whenever the entry wire format changes incompatibly; a reader
//! accepts any version up to its own.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::entry::read_full;
use crate::error::{LogError, LogResult};

/// "KVDB" as a 4-byte magic number. Rules out accidental reads of
/// arbitrary binary files.
pub const MAGIC: u32 = 0x4B56_4442;

/// Current log format version.
pub const FORMAT_VERSION: u16 = 2;

/// Size of the file header in bytes: 4 (magic) + 2 (version).
pub const FILE_HEADER_SIZE: u64 = 6;

/// Writes the file header (`magic` + `FORMAT_VERSION`) to `w`.
pub fn write_file_header<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_u32::<LittleEndian>(MAGIC)?;
    w.write_u16::<LittleEndian>(FORMAT_VERSION)?;
    Ok(())
}

/// Reads and validates the file header, returning the on-disk version.
///
/// Fails with `TruncatedHeader` when fewer than 6 bytes exist, `BadMagic` on
/// a magic mismatch, and `UnsupportedVersion` when the file was written by a
/// newer format revision.
pub fn read_file_header<R: Read>(r: &mut R) -> LogResult<u16> {
    let mut buf = [0u8; FILE_HEADER_SIZE as usize];
    if read_full(r, &mut buf)? < buf.len() {
        return Err(LogError::TruncatedHeader);
    }

    let mut cursor = &buf[..];
    let magic = cursor.read_u32::<LittleEndian>()?;
    if magic != MAGIC {
        return Err(LogError::BadMagic { found: magic });
    }

    let version = cursor.read_u16::<LittleEndian>()?;
    if version > FORMAT_VERSION {
        return Err(LogError::UnsupportedVersion { found: version });
    }
    Ok(version)
}
