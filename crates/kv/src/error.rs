//! Engine error types

use thiserror::Error;

/// Errors produced by the key-value engine.
#[derive(Error, Debug)]
pub enum KvError {
    /// Failure in the underlying log or its platform I/O
    #[error(transparent)]
    Log(#[from] logfile::LogError),

    /// Write operation conflicts with existing key state.
    ///
    /// Part of the store's error vocabulary; the bool-returning mutation
    /// surface reports a rejected mode gate as `changed = false` rather than
    /// producing this.
    #[error("write operation conflicts with existing key state")]
    ModeConflict,
}

/// Result type for engine operations
pub type KvResult<T> = Result<T, KvError>;
