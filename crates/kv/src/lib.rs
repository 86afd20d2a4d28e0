//! # KV — durable key-value engine
//!
//! An embeddable store whose entire persistent state is one append-only log
//! file. Keys and values are opaque byte strings; the full working set lives
//! in memory and is rebuilt by replaying the log on open.
//!
//! ```text
//!    set / del                get
//!        │                     │
//!        ▼                     ▼
//! ┌─────────────┐  rebuild  ┌─────────────┐
//! │   Logfile   │ ────────▶ │    Index    │
//! │ (append +   │  on open  │ (HashMap in │
//! │   fsync)    │           │   memory)   │
//! └─────────────┘           └─────────────┘
//! ```
//!
//! Mutations append to the log first and touch the index only after the
//! record is durable, so a crash at any point leaves the store in a state
//! replay can reproduce. The engine is single-writer and single-process:
//! one `Kv` per path, externally synchronized if shared across threads.
//!
//! ## Example
//! ```no_run
//! use kv::{Kv, SetMode};
//!
//! # fn main() -> Result<(), kv::KvError> {
//! let mut kv = Kv::new("app.db");
//! kv.open()?;
//!
//! kv.set(b"greeting".to_vec(), b"hello".to_vec())?;
//! assert_eq!(kv.get(b"greeting"), Some(&b"hello"[..]));
//!
//! // Insert refuses to clobber an existing key.
//! let changed = kv.set_with(b"greeting".to_vec(), b"hi".to_vec(), SetMode::Insert)?;
//! assert!(!changed);
//! # Ok(())
//! # }
//! ```

mod engine;
mod error;
mod index;

pub use engine::{Kv, SetMode};
pub use error::{KvError, KvResult};
pub use index::Index;
