//! The key-value engine: an append-only log plus a derived in-memory index.

use std::path::PathBuf;

use tracing::{debug, warn};

use logfile::{Entry, Log};

use crate::error::KvResult;
use crate::index::Index;

/// How [`Kv::set_with`] treats the existing state of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetMode {
    /// Write whenever the key is absent or holds a different value.
    #[default]
    Upsert,
    /// Write only when the key is absent.
    Insert,
    /// Write only when the key is present with a different value.
    Update,
}

/// A durable key-value store over a single append-only log file.
///
/// Reads are served from the in-memory index alone; the log is read only
/// during [`open`](Kv::open), which rebuilds the index by replaying every
/// committed entry. Every mutation appends (and fsyncs) a log record
/// *before* touching the index, so in-memory state never runs ahead of what
/// a crash would preserve.
///
/// The engine owns its log handle and index exclusively. It is not `Clone`;
/// moving it transfers ownership. Opening two engines on the same path is
/// not supported.
#[derive(Debug)]
pub struct Kv {
    log: Log,
    index: Index,
}

impl Kv {
    /// Create a closed engine for the log file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            log: Log::new(path),
            index: Index::new(),
        }
    }

    /// Open the store and rebuild the index from the log; a no-op when
    /// already open.
    ///
    /// Replay folds entries in append order: a live entry inserts or
    /// overwrites, a tombstone erases. A torn trailing write (truncated
    /// record, checksum mismatch, or a length field outside its bound) ends
    /// the replay there: everything before it is kept and the open succeeds,
    /// with the tail left in place on disk. A file whose *header* is invalid
    /// (wrong magic, newer version, fewer than 6 bytes) is not a log at all,
    /// and open fails instead.
    pub fn open(&mut self) -> KvResult<()> {
        if self.log.is_open() {
            return Ok(());
        }

        self.log.open()?;
        self.index.clear();
        self.log.seek_to_first_entry()?;

        let mut replayed = 0usize;
        loop {
            match self.log.read_entry() {
                Ok(Some(entry)) => {
                    if entry.deleted {
                        self.index.remove(&entry.key);
                    } else {
                        self.index.insert(entry.key, entry.value);
                    }
                    replayed += 1;
                }
                Ok(None) => break,
                Err(e) if e.is_tail_corruption() => {
                    warn!(error = %e, entries = replayed, "discarding torn log tail");
                    break;
                }
                Err(e) => {
                    self.log.close();
                    return Err(e.into());
                }
            }
        }

        debug!(entries = replayed, keys = self.index.len(), "replay complete");
        Ok(())
    }

    /// Close the underlying log; idempotent.
    pub fn close(&mut self) {
        self.log.close();
    }

    /// Look up the current value for `key`.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.index.get(key)
    }

    /// Insert or update `key`, writing only when the value actually changes.
    ///
    /// Shorthand for [`set_with`](Kv::set_with) in [`SetMode::Upsert`].
    pub fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> KvResult<bool> {
        self.set_with(key, value, SetMode::Upsert)
    }

    /// Write `key = value` subject to `mode`, returning whether anything
    /// changed.
    ///
    /// When the mode gate rejects the write (`Insert` on a present key,
    /// `Update` on an absent one, or any mode when the stored value already
    /// equals `value`) nothing is appended to the log and the result is
    /// `Ok(false)`. Otherwise the entry is appended and fsynced first, and
    /// the index is updated only after that append succeeds.
    pub fn set_with(&mut self, key: Vec<u8>, value: Vec<u8>, mode: SetMode) -> KvResult<bool> {
        let changed = match (self.index.get(&key), mode) {
            (None, SetMode::Update) => false,
            (None, _) => true,
            (Some(_), SetMode::Insert) => false,
            (Some(current), _) => current != value.as_slice(),
        };
        if !changed {
            return Ok(false);
        }

        let entry = Entry::put(key, value);
        self.log.append(&entry)?;
        self.index.insert(entry.key, entry.value);
        Ok(true)
    }

    /// Delete `key`, returning whether it existed.
    ///
    /// A missing key writes nothing. Otherwise a tombstone is appended and
    /// fsynced before the key leaves the index.
    pub fn del(&mut self, key: &[u8]) -> KvResult<bool> {
        if !self.index.contains_key(key) {
            return Ok(false);
        }

        self.log.append(&Entry::tombstone(key.to_vec()))?;
        self.index.remove(key);
        Ok(true)
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// `true` when the store holds no live keys.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Approximate bytes of key and value data held in memory.
    pub fn approx_size(&self) -> usize {
        self.index.approx_size()
    }
}
