//! humanize-core: undoable text state for the humanizer input panels.
//!
//! Design rules:
//! - History is linear. Committing after an undo drops the redo branch.
//! - History is bounded. The oldest snapshot is evicted once capacity is hit.
//! - Every store operation is total. Undo/redo at the bounds are silent no-ops.
//! - Capacity is fixed when the store is built.

pub mod config;
pub mod history;
pub mod shared;
pub mod text;

pub use config::{ConfigError, HistoryConfig, DEFAULT_CAPACITY};
pub use history::HistoryStore;
pub use shared::SharedHistoryStore;
pub use text::word_count;
