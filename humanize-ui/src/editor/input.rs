// Input field backed by an undoable history.

use std::time::{Duration, Instant};

use humanize_core::{word_count, HistoryStore};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
struct PendingEdit {
    text: String,
    last_edit: Instant,
}

/// Editable text whose accepted edits land in a [`HistoryStore`].
///
/// With a zero coalescing window every edit is committed immediately, one
/// history entry per change. With a non-zero window a burst of edits is held
/// back and committed as a single entry once typing pauses for that long.
#[derive(Debug, Clone)]
pub struct InputField {
    history: HistoryStore<String>,
    pending: Option<PendingEdit>,
    coalesce: Duration,
}

impl InputField {
    pub fn new(history: HistoryStore<String>) -> Self {
        Self {
            history,
            pending: None,
            coalesce: Duration::ZERO,
        }
    }

    pub fn with_coalesce(mut self, window: Duration) -> Self {
        self.coalesce = window;
        self
    }

    /// What the user currently sees, including an uncommitted edit.
    pub fn text(&self) -> &str {
        match &self.pending {
            Some(pending) => &pending.text,
            None => self.history.current(),
        }
    }

    pub fn edit(&mut self, text: String, now: Instant) {
        if self.coalesce.is_zero() {
            self.history.commit(text);
            return;
        }

        trace!("Holding edit until typing pauses");
        self.pending = Some(PendingEdit {
            text,
            last_edit: now,
        });
    }

    /// Commit the held edit if typing has paused for the coalescing window.
    pub fn flush_if_idle(&mut self, now: Instant) -> bool {
        let idle = match &self.pending {
            Some(pending) => now.saturating_duration_since(pending.last_edit) >= self.coalesce,
            None => false,
        };
        idle && self.flush()
    }

    /// Commit the held edit, if any.
    pub fn flush(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                debug!("Committing coalesced edit");
                self.history.commit(pending.text);
                true
            }
            None => false,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn coalesce_window(&self) -> Duration {
        self.coalesce
    }

    pub fn undo(&mut self) -> bool {
        self.flush();
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.flush();
        self.history.redo()
    }

    /// Empty the field and drop its whole undo trail.
    pub fn clear(&mut self) {
        self.pending = None;
        self.history.reset(String::new());
    }

    /// A held edit counts as undoable only if committing it leaves an older
    /// snapshot behind, which a capacity-1 history never does.
    pub fn can_undo(&self) -> bool {
        (self.pending.is_some() && self.history.capacity().get() > 1) || self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.pending.is_none() && self.history.can_redo()
    }

    pub fn word_count(&self) -> usize {
        word_count(self.text())
    }

    pub fn history(&self) -> &HistoryStore<String> {
        &self.history
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new(HistoryStore::default())
    }
}
