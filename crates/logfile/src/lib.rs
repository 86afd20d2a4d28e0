//! # Logfile — append-only entry log
//!
//! The durable half of the kvdb store: a single file holding a header
//! followed by framed, checksummed records, written strictly by appending.
//!
//! ## File layout (v2)
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │ FILE HEADER (6 bytes)                             │
//! │   magic (u32 LE = "KVDB") | version (u16 LE)      │
//! ├───────────────────────────────────────────────────┤
//! │ ENTRY RECORDS (back-to-back)                      │
//! │   checksum (u32) | klen (u32) | vlen (u32)        │
//! │   flag (u8) | key | value                         │
//! │   ... repeated ...                                │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! All integers are little-endian; the checksum is CRC-32/IEEE over the rest
//! of the record. Every append is fsynced before it returns (under the
//! default [`SyncMode::Always`]), so a record either survives a crash whole
//! or shows up as a torn tail that decoding rejects.

mod entry;
mod error;
mod format;
mod log;

pub use entry::{Entry, HEADER_SIZE, MAX_KEY_SIZE, MAX_VAL_SIZE};
pub use error::{LogError, LogResult};
pub use format::{FILE_HEADER_SIZE, FORMAT_VERSION, MAGIC};
pub use log::{Log, SyncMode};
