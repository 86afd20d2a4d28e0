//! Log error types

use thiserror::Error;

/// Errors produced by the entry codec and the log.
///
/// Everything the platform reports comes through [`LogError::Io`] unchanged;
/// the remaining variants are the closed set of format-level failures.
#[derive(Error, Debug)]
pub enum LogError {
    /// Platform I/O error, passed through verbatim
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Fewer than `HEADER_SIZE` bytes (but more than zero) at a record boundary
    #[error("entry header is incomplete or file is truncated")]
    TruncatedHeader,

    /// Key or value payload is missing expected bytes
    #[error("entry payload is missing expected bytes")]
    TruncatedPayload,

    /// Key length exceeds `MAX_KEY_SIZE`
    #[error("key size {len} exceeds limit")]
    KeyTooLarge { len: usize },

    /// Value length exceeds `MAX_VAL_SIZE`
    #[error("value size {len} exceeds limit")]
    ValueTooLarge { len: usize },

    /// Stored and recomputed CRC-32 disagree
    #[error("checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    BadChecksum { stored: u32, computed: u32 },

    /// File does not begin with the KVDB magic number
    #[error("not a kvdb log file (magic {found:#010x})")]
    BadMagic { found: u32 },

    /// On-disk format version is newer than this build supports
    #[error("log format version {found} is newer than this build supports")]
    UnsupportedVersion { found: u16 },
}

impl LogError {
    /// True for the failures that, mid-replay, indicate a torn trailing
    /// write rather than a structurally invalid file.
    ///
    /// Replay treats these as end-of-log: everything read so far is kept and
    /// the open succeeds. Header-level failures (`BadMagic`,
    /// `UnsupportedVersion`) and live I/O errors are never tail corruption.
    pub fn is_tail_corruption(&self) -> bool {
        matches!(
            self,
            LogError::TruncatedHeader
                | LogError::TruncatedPayload
                | LogError::BadChecksum { .. }
                | LogError::KeyTooLarge { .. }
                | LogError::ValueTooLarge { .. }
        )
    }
}

/// Result type for log operations
pub type LogResult<T> = Result<T, LogError>;
