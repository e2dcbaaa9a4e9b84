//! Document model - the shared text buffer and file state
//!
//! A document is owned by the [`DocumentManager`](super::DocumentManager) and
//! viewed by any number of panes. It records which panes view it; the view
//! count is the length of that list, and only [`Pane::attach`](super::Pane::attach)
//! and [`Pane::detach`](super::Pane::detach) change it.

use ropey::Rope;
use std::ops::Range;
use std::path::{Path, PathBuf};

use super::editor_area::{DocumentId, PaneId};
use crate::language::{language_for, LanguageId};

/// Notification delivered synchronously to every pane viewing a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    /// The modified flag flipped
    ModifiedChanged(bool),
    /// The document was rebound to another path (Save As)
    PathChanged(Option<PathBuf>),
    /// The whole buffer was replaced (load from disk)
    ContentReplaced,
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,

    /// The text buffer
    pub buffer: Rope,
    /// Canonical path to the file on disk (None for untitled buffers)
    pub file_path: Option<PathBuf>,
    /// Display name for untitled documents (e.g., "Untitled", "Untitled-2")
    pub untitled_name: Option<String>,
    /// Detected language, derived from the path's extension
    pub language: Option<LanguageId>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// The file could not be decoded as text; editing and saving are disabled
    pub is_invalid: bool,
    /// Incremented on each edit
    pub revision: u64,

    /// Panes currently viewing this document, in attach order
    views: Vec<PaneId>,
    /// Events not yet delivered to the views
    pending_events: Vec<DocumentEvent>,
}

impl Document {
    /// Create a new empty document
    pub fn new(id: DocumentId) -> Self {
        Self {
            id,
            buffer: Rope::new(),
            file_path: None,
            untitled_name: None,
            language: None,
            is_modified: false,
            is_invalid: false,
            revision: 0,
            views: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Create a document bound to a (canonical) path, with an empty buffer
    pub fn with_path(id: DocumentId, path: PathBuf) -> Self {
        let mut doc = Self::new(id);
        doc.language = language_for(&path);
        doc.file_path = Some(path);
        doc
    }

    /// Get the display name for this document.
    /// Returns the filename if saved, the untitled name if set, or "Untitled" as fallback.
    pub fn display_name(&self) -> String {
        if let Some(path) = &self.file_path {
            if let Some(name) = path.file_name() {
                return name.to_string_lossy().to_string();
            }
        }
        if let Some(name) = &self.untitled_name {
            return name.clone();
        }
        "Untitled".to_string()
    }

    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Full buffer contents
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Number of panes currently viewing this document
    pub fn view_count(&self) -> u32 {
        self.views.len() as u32
    }

    /// Panes currently viewing this document
    pub fn views(&self) -> &[PaneId] {
        &self.views
    }

    pub(crate) fn add_view(&mut self, pane: PaneId) -> u32 {
        if !self.views.contains(&pane) {
            self.views.push(pane);
        }
        self.view_count()
    }

    pub(crate) fn remove_view(&mut self, pane: PaneId) -> u32 {
        self.views.retain(|&p| p != pane);
        self.view_count()
    }

    /// Replace the buffer with freshly loaded content
    pub fn load_text(&mut self, content: &str) {
        self.buffer = Rope::from_str(content);
        self.is_invalid = false;
        self.revision = self.revision.wrapping_add(1);
        self.pending_events.push(DocumentEvent::ContentReplaced);
        self.set_modified(false);
    }

    /// Put the document in the invalid state: empty, read-only, unsaveable
    pub fn mark_invalid(&mut self) {
        self.buffer = Rope::new();
        self.is_invalid = true;
        self.revision = self.revision.wrapping_add(1);
        self.pending_events.push(DocumentEvent::ContentReplaced);
        self.set_modified(false);
    }

    /// Insert text at a character offset (clamped to the buffer end).
    /// Returns false if editing is disabled.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> bool {
        if self.is_invalid {
            return false;
        }
        if text.is_empty() {
            return true;
        }
        let at = char_idx.min(self.buffer.len_chars());
        self.buffer.insert(at, text);
        self.record_edit();
        true
    }

    /// Delete a character range (clamped to the buffer).
    /// Returns false if editing is disabled.
    pub fn delete(&mut self, range: Range<usize>) -> bool {
        if self.is_invalid {
            return false;
        }
        let len = self.buffer.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return true;
        }
        self.buffer.remove(start..end);
        self.record_edit();
        true
    }

    fn record_edit(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.set_modified(true);
    }

    /// Set the modified flag, queueing a notification if it flipped
    pub fn set_modified(&mut self, modified: bool) {
        if self.is_modified != modified {
            self.is_modified = modified;
            self.pending_events
                .push(DocumentEvent::ModifiedChanged(modified));
        }
    }

    /// Rebind the path and re-derive the language.
    /// Only the document manager calls this, so the path index stays in sync.
    pub(crate) fn rebind_path(&mut self, path: Option<PathBuf>) {
        self.language = path.as_deref().and_then(language_for);
        if path.is_some() {
            self.untitled_name = None;
        }
        self.file_path = path.clone();
        self.pending_events.push(DocumentEvent::PathChanged(path));
    }

    /// Drain events queued since the last delivery
    pub(crate) fn take_pending_events(&mut self) -> Vec<DocumentEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
