//! # Persistence Layer
//!
//! The [`Persistence`] trait is the only thing the [`crate::store::Store`] knows
//! about saving its list. Backends hand back the last snapshot on `load` and take a
//! full snapshot on `save`; there is no incremental write.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - One JSON array in `<data_dir>/todos.json` (file name configurable)
//!   - Directory created on first save
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - Keeps the last snapshot, counts saves
//!   - Can be switched into a failing mode to exercise the store's error policy
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "id": 0, "text": "Buy milk", "complete": false },
//!   { "id": 1, "text": "Walk dog", "complete": true }
//! ]
//! ```
//!
//! The format carries no version and no checksum.

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

/// Snapshot storage for the todo list.
pub trait Persistence {
    /// Returns the last saved list, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Vec<Todo>>>;

    /// Replaces the stored snapshot with `todos`.
    fn save(&mut self, todos: &[Todo]) -> Result<()>;
}
