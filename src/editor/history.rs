// SPDX-License-Identifier: MPL-2.0
//! Linear edit history with a cursor.
//!
//! Every applied edit produces a new image version. Undo and redo only move
//! the cursor; pushing while the cursor is not at the tail discards the redo
//! tail first, so the history never branches.

use crate::domain::media::ImagePayload;

/// One image version in the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    position: usize,
    payload: ImagePayload,
}

impl HistoryEntry {
    /// Index of this entry in the history. Entry 0 is the original upload.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Image of this version.
    #[must_use]
    pub fn payload(&self) -> &ImagePayload {
        &self.payload
    }
}

/// Ordered image versions plus the index of the one being shown.
///
/// The cursor is `None` exactly when the history is empty.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl EditHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the history with a single original entry.
    pub fn reset(&mut self, initial: ImagePayload) {
        self.entries.clear();
        self.entries.push(HistoryEntry {
            position: 0,
            payload: initial,
        });
        self.cursor = Some(0);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Appends a new version after the cursor and moves onto it.
    ///
    /// Entries after the cursor are discarded first. On an empty history this
    /// is a no-op; use [`Self::reset`] to seed the original.
    pub fn push(&mut self, payload: ImagePayload) {
        let Some(cursor) = self.cursor else {
            return;
        };
        self.entries.truncate(cursor + 1);
        let position = self.entries.len();
        self.entries.push(HistoryEntry { position, payload });
        self.cursor = Some(position);
    }

    /// Moves the cursor one step back. No-op at the original.
    pub fn undo(&mut self) {
        if let Some(cursor) = self.cursor.filter(|&c| c > 0) {
            self.cursor = Some(cursor - 1);
        }
    }

    /// Moves the cursor one step forward. No-op at the tail.
    pub fn redo(&mut self) {
        if self.can_redo() {
            self.cursor = self.cursor.map(|c| c + 1);
        }
    }

    /// Pushes a copy of the original as a new version.
    ///
    /// The intermediate versions stay reachable through undo. No-op when the
    /// history holds fewer than two entries.
    pub fn reset_to_original(&mut self) {
        if self.entries.len() <= 1 {
            return;
        }
        let original = self.entries[0].payload.clone();
        self.push(original);
    }

    /// Entry under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// Entry at `position`, if it exists.
    #[must_use]
    pub fn entry_at(&self, position: usize) -> Option<&HistoryEntry> {
        self.entries.get(position)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
