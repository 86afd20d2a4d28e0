//! Append-only entry log backed by a single file.

use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::entry::Entry;
use crate::error::{LogError, LogResult};
use crate::format::{self, FILE_HEADER_SIZE};

/// Whether an append is fsynced before it returns.
///
/// `Always` is the durability contract the store is built on: when `append`
/// returns, the record is on stable storage. `Never` leaves flushing to the
/// OS and exists for benchmarks and bulk loads of reconstructible data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    #[default]
    Always,
    Never,
}

/// File-backed append/read log for encoded [`Entry`] records.
///
/// The file begins with the 6-byte header of [`crate::format`]; records
/// follow back-to-back. Writes only ever append. The `Log` owns its file
/// handle exclusively: it is not `Clone`, moves transfer ownership, and
/// dropping it closes the file.
///
/// Reads and writes share one cursor; callers interleave them only through
/// the replay-then-append discipline of the engine.
#[derive(Debug)]
pub struct Log {
    path: PathBuf,
    file: Option<File>,
    sync: SyncMode,
}

impl Log {
    /// Create a closed log for `path`. Nothing touches the filesystem until
    /// [`open`](Log::open).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_sync_mode(path, SyncMode::Always)
    }

    /// Like [`new`](Log::new) with an explicit [`SyncMode`].
    pub fn with_sync_mode(path: impl Into<PathBuf>, sync: SyncMode) -> Self {
        Self {
            path: path.into(),
            file: None,
            sync,
        }
    }

    /// Open the log file for appending and reading; a no-op when already
    /// open.
    ///
    /// A brand-new (or empty) file gets the file header written and synced,
    /// along with the containing directory so the file entry itself survives
    /// a crash. An existing file has its header validated: wrong magic,
    /// a newer format version, or a short header are fatal.
    pub fn open(&mut self) -> LogResult<()> {
        if self.file.is_some() {
            return Ok(());
        }

        if self.path.is_dir() {
            return Err(LogError::Io(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", self.path.display()),
            )));
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.path)?;

        if file.metadata()?.len() == 0 {
            format::write_file_header(&mut file)?;
            file.sync_all()?;
            sync_parent_dir(&self.path)?;
            debug!(path = %self.path.display(), "created log file");
        } else {
            file.seek(SeekFrom::Start(0))?;
            format::read_file_header(&mut file)?;
        }

        self.file = Some(file);
        Ok(())
    }

    /// Whether the log currently holds an open file handle.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Append one encoded entry at the end of the file.
    ///
    /// This is the durability point: under [`SyncMode::Always`] the record
    /// has reached stable storage when `append` returns, and a crash
    /// afterwards must still observe it on replay.
    pub fn append(&mut self, entry: &Entry) -> LogResult<()> {
        let buf = entry.encode()?;
        let sync = self.sync;
        let file = self.handle()?;

        file.seek(SeekFrom::End(0))?;
        file.write_all(&buf)?;
        if sync == SyncMode::Always {
            file.sync_all()?;
        }
        Ok(())
    }

    /// Decode the next entry at the read cursor.
    ///
    /// `Ok(None)` is a clean end of log.
    pub fn read_entry(&mut self) -> LogResult<Option<Entry>> {
        Entry::decode(self.handle()?)
    }

    /// Position the cursor on the first entry, just past the file header.
    pub fn seek_to_first_entry(&mut self) -> LogResult<()> {
        self.handle()?.seek(SeekFrom::Start(FILE_HEADER_SIZE))?;
        Ok(())
    }

    /// Close the underlying file; idempotent. Dropping the log closes it
    /// too.
    pub fn close(&mut self) {
        self.file = None;
    }

    fn handle(&mut self) -> LogResult<&mut File> {
        self.file.as_mut().ok_or_else(|| {
            LogError::Io(io::Error::new(io::ErrorKind::NotConnected, "log is not open"))
        })
    }
}

/// Force the directory entry for a newly created file out to disk.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    File::open(parent)?.sync_all()
}

/// Platforms without a directory-fsync primitive flush metadata with the
/// file itself.
#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}
