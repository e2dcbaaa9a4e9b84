//! Editor area - owns documents, tab groups and the split layout
//!
//! This is the single entry point for structural operations. Every public
//! method either completes and leaves the area consistent or changes nothing.
//! View counts only move inside [`TabGroup`], and documents are evicted here
//! as soon as the last pane on them closes.

use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;

use super::document::Document;
use super::document_manager::DocumentManager;
use super::layout::{SplitDirection, SplitLayout, MAX_GROUPS};
use super::pane::Pane;
use super::tab_group::TabGroup;
use crate::confirm::{ConfirmChoice, ConfirmClose};
use crate::error::EditorError;
use crate::fs::{FileSystem, RealFs};
use crate::util::{
    canonical_path, decode_text, looks_binary, validate_file_for_opening, validate_save_target,
    FileOpenError, MAX_FILE_SIZE,
};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// Unique identifier for a pane (one tab showing one document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub u64);

/// Unique identifier for a tab group (a leaf of the layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

// ============================================================================
// Editor Area (top-level container)
// ============================================================================

#[derive(Debug)]
pub struct EditorArea {
    documents: DocumentManager,

    /// All tab groups currently in the layout
    groups: HashMap<GroupId, TabGroup>,

    layout: SplitLayout,

    /// Pane -> owning group, so focus events never walk the tree
    pane_index: HashMap<PaneId, GroupId>,

    fs: Box<dyn FileSystem>,
    max_file_size: u64,

    /// ID generators
    next_group_id: u64,
    next_pane_id: u64,
}

impl Default for EditorArea {
    fn default() -> Self {
        Self::new(MAX_GROUPS)
    }
}

impl EditorArea {
    /// Create an editor area on the local disk with one empty group
    pub fn new(max_groups: usize) -> Self {
        Self::with_fs(Box::new(RealFs), max_groups)
    }

    /// Create an editor area backed by a custom file system
    pub fn with_fs(fs: Box<dyn FileSystem>, max_groups: usize) -> Self {
        let initial = GroupId(1);
        let mut groups = HashMap::new();
        groups.insert(initial, TabGroup::new(initial));

        Self {
            documents: DocumentManager::new(),
            groups,
            layout: SplitLayout::new(initial, max_groups),
            pane_index: HashMap::new(),
            fs,
            max_file_size: MAX_FILE_SIZE,
            next_group_id: 2,
            next_pane_id: 1,
        }
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    fn next_group_id(&mut self) -> GroupId {
        let id = GroupId(self.next_group_id);
        self.next_group_id += 1;
        id
    }

    fn next_pane_id(&mut self) -> PaneId {
        let id = PaneId(self.next_pane_id);
        self.next_pane_id += 1;
        id
    }

    // ------------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------------

    pub fn documents(&self) -> &DocumentManager {
        &self.documents
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn layout(&self) -> &SplitLayout {
        &self.layout
    }

    pub fn group(&self, id: GroupId) -> Option<&TabGroup> {
        self.groups.get(&id)
    }

    /// Groups in tree order
    pub fn groups_in_order(&self) -> Vec<&TabGroup> {
        self.layout
            .group_ids()
            .into_iter()
            .filter_map(|id| self.groups.get(&id))
            .collect()
    }

    pub fn group_count(&self) -> usize {
        self.layout.leaf_count()
    }

    /// Group that owns `pane`
    pub fn group_of_pane(&self, pane: PaneId) -> Option<GroupId> {
        self.pane_index.get(&pane).copied()
    }

    pub fn pane(&self, pane: PaneId) -> Option<&Pane> {
        let group = self.pane_index.get(&pane)?;
        self.groups.get(group)?.pane(pane)
    }

    pub fn pane_mut(&mut self, pane: PaneId) -> Option<&mut Pane> {
        let group = self.pane_index.get(&pane)?;
        self.groups.get_mut(group)?.pane_mut(pane)
    }

    pub fn active_group_id(&self) -> GroupId {
        self.layout.active()
    }

    pub fn active_group(&self) -> Option<&TabGroup> {
        self.groups.get(&self.layout.active())
    }

    fn active_group_mut(&mut self) -> Option<&mut TabGroup> {
        self.groups.get_mut(&self.layout.active())
    }

    pub fn active_pane(&self) -> Option<&Pane> {
        self.active_group().and_then(|g| g.current_pane())
    }

    pub fn active_pane_id(&self) -> Option<PaneId> {
        self.active_pane().map(|p| p.id)
    }

    pub fn active_document_id(&self) -> Option<DocumentId> {
        self.active_group().and_then(|g| g.current_document())
    }

    /// Document shown by the current tab of the active group
    pub fn active_document(&self) -> Option<&Document> {
        self.active_document_id()
            .and_then(|id| self.documents.get(id))
    }

    pub fn has_unsaved(&self) -> bool {
        self.documents.has_unsaved()
    }

    // ------------------------------------------------------------------------
    // Opening documents
    // ------------------------------------------------------------------------

    /// Open a file, reusing the document and its pane if it is already open.
    ///
    /// Missing, unreadable, directory and oversized files are `Io` errors and
    /// binary files are `Decode` errors; none of them touch the layout. A file
    /// that is readable but not UTF-8 opens as an invalid document.
    pub fn open_path(&mut self, path: &Path) -> Result<PaneId, EditorError> {
        if let Some(doc_id) = self.documents.find_by_path(path) {
            tracing::debug!(?doc_id, path = %path.display(), "file already open, focusing");
            return self
                .focus_or_open(doc_id, true)
                .ok_or(EditorError::StaleReference);
        }

        validate_file_for_opening(self.fs.as_ref(), path, self.max_file_size)?;
        let bytes = self
            .fs
            .read(path)
            .map_err(|e| EditorError::Io(FileOpenError::from_io(&e)))?;

        if looks_binary(&bytes) {
            tracing::info!(path = %path.display(), "refusing to open binary file");
            return Err(EditorError::Decode {
                path: canonical_path(path),
                reason: FileOpenError::BinaryFile,
            });
        }

        let doc_id = self.documents.get_or_create(Some(path));
        if let Some(doc) = self.documents.get_mut(doc_id) {
            match decode_text(bytes) {
                Ok(text) => doc.load_text(&text),
                Err(reason) => {
                    tracing::warn!(path = %path.display(), %reason, "opening as invalid document");
                    doc.mark_invalid();
                }
            }
        }

        let group = self.target_group_for_open();
        let pane = self
            .attach_view(group, doc_id)
            .ok_or(EditorError::StaleReference)?;
        tracing::info!(?doc_id, ?pane, ?group, path = %path.display(), "opened file");
        Ok(pane)
    }

    /// Open a fresh untitled document in the active group
    pub fn new_blank(&mut self) -> PaneId {
        let group = self.target_group_for_open();
        self.attach_blank(group)
    }

    /// Focus an existing pane on `doc`, or open a new one if allowed.
    ///
    /// New views go into the active group when it is empty or when at least
    /// two groups exist; with a single occupied group a new split is made so
    /// the second view has somewhere to go.
    pub fn focus_or_open(&mut self, doc: DocumentId, allow_new_view: bool) -> Option<PaneId> {
        if !self.documents.contains(doc) {
            tracing::warn!(?doc, "focus_or_open on unknown document");
            return None;
        }

        for group_id in self.layout.group_ids() {
            let Some(group) = self.groups.get_mut(&group_id) else {
                continue;
            };
            if let Some(pane) = group.find_pane_for(doc) {
                group.focus(doc);
                self.layout.set_active(group_id);
                return Some(pane);
            }
        }

        if !allow_new_view {
            return None;
        }

        let active = self.layout.active();
        let active_is_empty = self.groups.get(&active).map_or(true, |g| g.is_empty());
        let target = if self.layout.leaf_count() < 2 && !active_is_empty && !self.layout.is_full()
        {
            let new_group = self.next_group_id();
            if let Err(e) = self.layout.split(active, new_group, SplitDirection::Horizontal) {
                tracing::debug!(%e, "could not split for new view");
                active
            } else {
                self.groups.insert(new_group, TabGroup::new(new_group));
                new_group
            }
        } else {
            active
        };

        self.attach_view(target, doc)
    }

    /// The active group, recreated if the map lost it
    fn target_group_for_open(&mut self) -> GroupId {
        let group = self.layout.active();
        self.groups
            .entry(group)
            .or_insert_with(|| TabGroup::new(group));
        group
    }

    /// Open a pane on an existing document in `group` and activate it
    fn attach_view(&mut self, group: GroupId, doc_id: DocumentId) -> Option<PaneId> {
        if !self.groups.contains_key(&group) || !self.documents.contains(doc_id) {
            tracing::warn!(?group, ?doc_id, "attach_view on stale reference");
            return None;
        }

        let pane_id = self.next_pane_id();
        let doc = self.documents.get_mut(doc_id)?;
        let tab_group = self.groups.get_mut(&group)?;
        tab_group.add_view_for(pane_id, doc);

        self.pane_index.insert(pane_id, group);
        self.layout.set_active(group);
        self.notify_views(doc_id);
        Some(pane_id)
    }

    /// Open a pane on a new untitled document in `group` and activate it
    fn attach_blank(&mut self, group: GroupId) -> PaneId {
        let pane_id = self.next_pane_id();
        let doc = self.documents.create_untitled();
        self.groups
            .entry(group)
            .or_insert_with(|| TabGroup::new(group))
            .add_view_for(pane_id, doc);

        self.pane_index.insert(pane_id, group);
        self.layout.set_active(group);
        tracing::debug!(?pane_id, ?group, "opened blank document");
        pane_id
    }

    // ------------------------------------------------------------------------
    // Splitting
    // ------------------------------------------------------------------------

    /// Split the active group; the new group gets a blank document.
    /// `None` when the layout is full.
    pub fn split(&mut self, direction: SplitDirection) -> Option<PaneId> {
        let group = self.split_active(direction)?;
        Some(self.attach_blank(group))
    }

    /// Split the active group; the new group gets a second view of the active
    /// document (or a blank document if the active group is empty).
    pub fn split_with_current(&mut self, direction: SplitDirection) -> Option<PaneId> {
        let Some(doc) = self.active_document_id() else {
            return self.split(direction);
        };
        let group = self.split_active(direction)?;
        match self.attach_view(group, doc) {
            Some(pane) => Some(pane),
            None => {
                self.discard_empty_group(group);
                None
            }
        }
    }

    /// Add a group at the top level regardless of the active group; it gets a
    /// blank document. `None` when the layout is full.
    pub fn add_pane(&mut self, direction: SplitDirection) -> Option<PaneId> {
        if self.layout.is_full() {
            tracing::debug!(groups = self.layout.leaf_count(), "add_pane refused: limit reached");
            return None;
        }
        let group = self.next_group_id();
        if let Err(e) = self.layout.add_top_level(group, direction) {
            tracing::debug!(%e, "add_pane refused");
            return None;
        }
        self.groups.insert(group, TabGroup::new(group));
        Some(self.attach_blank(group))
    }

    fn split_active(&mut self, direction: SplitDirection) -> Option<GroupId> {
        if self.layout.is_full() {
            tracing::debug!(groups = self.layout.leaf_count(), "split refused: limit reached");
            return None;
        }
        let target = self.layout.active();
        let group = self.next_group_id();
        if let Err(e) = self.layout.split(target, group, direction) {
            tracing::debug!(%e, ?target, "split refused");
            return None;
        }
        self.groups.insert(group, TabGroup::new(group));
        Some(group)
    }

    /// Drop a group that never received a pane
    fn discard_empty_group(&mut self, group: GroupId) {
        if self.groups.get(&group).is_some_and(|g| g.is_empty()) && self.layout.remove(group) {
            self.groups.remove(&group);
        }
    }

    // ------------------------------------------------------------------------
    // Closing
    // ------------------------------------------------------------------------

    pub fn close_active_split(&mut self, confirm: &mut dyn ConfirmClose) -> bool {
        self.close_split(self.layout.active(), confirm)
    }

    /// Close a whole group with all of its tabs.
    ///
    /// No-op when it is the only group. Modified documents whose every view
    /// lives in this group are confirmed first; Cancel, or a failed save,
    /// aborts before anything is closed.
    pub fn close_split(&mut self, group: GroupId, confirm: &mut dyn ConfirmClose) -> bool {
        let Some(tab_group) = self.groups.get(&group) else {
            tracing::warn!(?group, "close_split on stale group");
            return false;
        };
        if self.layout.leaf_count() <= 1 {
            tracing::debug!(?group, "close_split refused: last group");
            return false;
        }

        let mut doc_ids: Vec<DocumentId> = Vec::new();
        for pane in tab_group.panes() {
            if !doc_ids.contains(&pane.document_id()) {
                doc_ids.push(pane.document_id());
            }
        }
        let needs_confirm: Vec<DocumentId> = doc_ids
            .into_iter()
            .filter(|&id| {
                self.documents.get(id).is_some_and(|doc| {
                    doc.is_modified && tab_group.views_of(id) == doc.view_count()
                })
            })
            .collect();

        for doc_id in needs_confirm {
            if !self.resolve_unsaved(doc_id, confirm) {
                tracing::info!(?group, "close_split aborted");
                return false;
            }
        }

        self.remove_group(group);
        true
    }

    pub fn close_active_tab(&mut self, confirm: &mut dyn ConfirmClose) -> bool {
        let group = self.layout.active();
        let Some(index) = self.groups.get(&group).and_then(|g| g.current_index()) else {
            return false;
        };
        self.close_tab_in(group, index, confirm)
    }

    /// Close one tab. Closing the last view of a modified document asks
    /// first. A group left empty is removed unless it is the only one.
    pub fn close_tab_in(
        &mut self,
        group: GroupId,
        index: usize,
        confirm: &mut dyn ConfirmClose,
    ) -> bool {
        let Some(pane) = self.groups.get(&group).and_then(|g| g.panes().get(index)) else {
            tracing::debug!(?group, index, "close_tab_in on stale tab");
            return false;
        };
        let pane_id = pane.id;
        let doc_id = pane.document_id();

        let is_last_modified_view = self
            .documents
            .get(doc_id)
            .is_some_and(|doc| doc.is_modified && doc.view_count() == 1);
        if is_last_modified_view && !self.resolve_unsaved(doc_id, confirm) {
            return false;
        }

        let Some(tab_group) = self.groups.get_mut(&group) else {
            return false;
        };
        let remaining = tab_group.close_tab(index, &mut self.documents);
        let became_empty = tab_group.take_became_empty();
        self.pane_index.remove(&pane_id);
        if remaining == 0 {
            self.documents.close(doc_id);
        }
        tracing::debug!(?group, ?pane_id, ?doc_id, remaining, "tab closed");

        if became_empty && self.layout.leaf_count() > 1 {
            self.remove_group(group);
        }
        true
    }

    /// Ask about one modified document. True means "go ahead and close".
    fn resolve_unsaved(&mut self, doc_id: DocumentId, confirm: &mut dyn ConfirmClose) -> bool {
        let Some(doc) = self.documents.get(doc_id) else {
            return true;
        };
        match confirm.confirm(doc) {
            ConfirmChoice::Save => {
                let saved = if doc.path().is_some() {
                    self.save_document(doc_id)
                } else {
                    let Some(path) = confirm.save_path(doc) else {
                        tracing::info!(?doc_id, "save during close abandoned: no path chosen");
                        return false;
                    };
                    self.save_document_as(doc_id, &path)
                };
                match saved {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::warn!(?doc_id, %e, "save during close failed");
                        false
                    }
                }
            }
            ConfirmChoice::Discard => true,
            ConfirmChoice::Cancel => false,
        }
    }

    /// Tear down every tab of `group`, evict orphaned documents and detach
    /// the group from the layout
    fn remove_group(&mut self, group: GroupId) {
        let Some(mut tab_group) = self.groups.remove(&group) else {
            return;
        };

        while let Some(pane) = tab_group.panes().first() {
            let pane_id = pane.id;
            let doc_id = pane.document_id();
            let remaining = tab_group.close_tab(0, &mut self.documents);
            self.pane_index.remove(&pane_id);
            if remaining == 0 {
                self.documents.close(doc_id);
            }
        }

        if !self.layout.remove(group) {
            tracing::warn!(?group, "group was not in the layout");
        }
        tracing::info!(?group, active = ?self.layout.active(), layout = %self.layout, "group closed");
    }

    /// Walk every modified document asking Save/Discard/Cancel.
    /// False on Cancel or on a failed save.
    pub fn confirm_exit(&mut self, confirm: &mut dyn ConfirmClose) -> bool {
        for doc_id in self.documents.unsaved() {
            if !self.resolve_unsaved(doc_id, confirm) {
                tracing::info!(?doc_id, "exit cancelled");
                return false;
            }
        }
        true
    }

    // ------------------------------------------------------------------------
    // Saving
    // ------------------------------------------------------------------------

    /// Save the active document to its own path
    pub fn save_current(&mut self) -> Result<(), EditorError> {
        let doc_id = self.active_document_id().ok_or(EditorError::StaleReference)?;
        self.save_document(doc_id)
    }

    /// Save the active document to `path` and rebind it there
    pub fn save_as(&mut self, path: &Path) -> Result<(), EditorError> {
        let doc_id = self.active_document_id().ok_or(EditorError::StaleReference)?;
        self.save_document_as(doc_id, path)
    }

    fn save_document_as(&mut self, doc_id: DocumentId, path: &Path) -> Result<(), EditorError> {
        let doc = self
            .documents
            .get(doc_id)
            .ok_or(EditorError::StaleReference)?;
        if doc.is_invalid {
            return Err(EditorError::SaveDisabled);
        }

        let target = canonical_path(path);
        if doc.path() == Some(target.as_path()) {
            return self.save_document(doc_id);
        }
        if let Some(other) = self.documents.find_by_path(&target) {
            if other != doc_id {
                tracing::info!(?doc_id, ?other, path = %target.display(), "save_as refused: path open elsewhere");
                return Err(EditorError::AlreadyOpen(target));
            }
        }

        validate_save_target(self.fs.as_ref(), &target)?;
        self.fs
            .write(&target, doc.text().as_bytes())
            .map_err(|e| EditorError::Io(FileOpenError::from_io(&e)))?;

        self.documents.update_path(doc_id, Some(&target));
        if let Some(doc) = self.documents.get_mut(doc_id) {
            doc.set_modified(false);
        }
        self.notify_views(doc_id);
        tracing::info!(?doc_id, path = %target.display(), "saved as");
        Ok(())
    }

    fn save_document(&mut self, doc_id: DocumentId) -> Result<(), EditorError> {
        let doc = self
            .documents
            .get(doc_id)
            .ok_or(EditorError::StaleReference)?;
        if doc.is_invalid {
            return Err(EditorError::SaveDisabled);
        }
        let path = doc.path().ok_or(EditorError::Untitled)?;

        validate_save_target(self.fs.as_ref(), path)?;
        self.fs
            .write(path, doc.text().as_bytes())
            .map_err(|e| EditorError::Io(FileOpenError::from_io(&e)))?;
        tracing::info!(?doc_id, path = %path.display(), "saved");

        if let Some(doc) = self.documents.get_mut(doc_id) {
            doc.set_modified(false);
        }
        self.notify_views(doc_id);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------------

    /// A pane received focus: make it current in its group and its group active
    pub fn on_pane_focused(&mut self, pane: PaneId) -> bool {
        let Some(&group) = self.pane_index.get(&pane) else {
            tracing::debug!(?pane, "focus event for stale pane");
            return false;
        };
        let focused = self
            .groups
            .get_mut(&group)
            .is_some_and(|g| g.focus_pane(pane));
        focused && self.layout.set_active(group)
    }

    pub fn focus_group(&mut self, group: GroupId) -> bool {
        self.groups.contains_key(&group) && self.layout.set_active(group)
    }

    pub fn focus_next_group(&mut self) {
        self.focus_adjacent_group(true);
    }

    pub fn focus_prev_group(&mut self) {
        self.focus_adjacent_group(false);
    }

    /// Focus the `index`-th group in tree order (1-based)
    pub fn focus_group_by_index(&mut self, index: usize) -> bool {
        let group_ids = self.layout.group_ids();
        if index > 0 && index <= group_ids.len() {
            self.layout.set_active(group_ids[index - 1])
        } else {
            false
        }
    }

    fn focus_adjacent_group(&mut self, next: bool) {
        let group_ids = self.layout.group_ids();
        if group_ids.len() <= 1 {
            return;
        }

        let current = self.layout.active();
        let current_idx = group_ids.iter().position(|&id| id == current).unwrap_or(0);
        let new_idx = if next {
            (current_idx + 1) % group_ids.len()
        } else if current_idx == 0 {
            group_ids.len() - 1
        } else {
            current_idx - 1
        };
        self.layout.set_active(group_ids[new_idx]);
    }

    pub fn next_tab(&mut self) {
        if let Some(group) = self.active_group_mut() {
            group.next_tab();
        }
    }

    pub fn prev_tab(&mut self) {
        if let Some(group) = self.active_group_mut() {
            group.prev_tab();
        }
    }

    pub fn switch_to_tab(&mut self, index: usize) -> bool {
        self.active_group_mut()
            .is_some_and(|g| g.switch_to_tab(index))
    }

    // ------------------------------------------------------------------------
    // Editing hooks
    // ------------------------------------------------------------------------

    /// Insert at the active pane's cursor. False if there is no pane or the
    /// document is read-only.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let Some(pane) = self.active_pane() else {
            return false;
        };
        let (pane_id, doc_id, cursor) = (pane.id, pane.document_id(), pane.cursor);

        let inserted = self
            .documents
            .get_mut(doc_id)
            .is_some_and(|doc| doc.insert(cursor, text));
        if !inserted {
            return false;
        }

        let len = self.documents.get(doc_id).map_or(0, |d| d.buffer.len_chars());
        if let Some(pane) = self.pane_mut(pane_id) {
            pane.cursor = (cursor + text.chars().count()).min(len);
        }
        self.notify_views(doc_id);
        true
    }

    /// Delete a character range in the active document
    pub fn delete_text(&mut self, range: Range<usize>) -> bool {
        let Some(pane) = self.active_pane() else {
            return false;
        };
        let (pane_id, doc_id) = (pane.id, pane.document_id());
        let (start, end) = (range.start, range.end);

        let deleted = self
            .documents
            .get_mut(doc_id)
            .is_some_and(|doc| doc.delete(range));
        if !deleted {
            return false;
        }

        let len = self.documents.get(doc_id).map_or(0, |d| d.buffer.len_chars());
        if let Some(pane) = self.pane_mut(pane_id) {
            if pane.cursor > start {
                pane.cursor -= pane.cursor.min(end).saturating_sub(start);
            }
            pane.cursor = pane.cursor.min(len);
        }
        self.notify_views(doc_id);
        true
    }

    /// Deliver queued document events to every pane viewing the document
    pub fn notify_views(&mut self, doc_id: DocumentId) {
        let Some(doc) = self.documents.get_mut(doc_id) else {
            return;
        };
        let events = doc.take_pending_events();
        if events.is_empty() {
            return;
        }

        for &pane_id in doc.views() {
            let Some(group) = self.pane_index.get(&pane_id) else {
                continue;
            };
            if let Some(pane) = self.groups.get_mut(group).and_then(|g| g.pane_mut(pane_id)) {
                for event in &events {
                    pane.deliver(event.clone());
                }
            }
        }
    }
}

// ============================================================================
// Invariant Validation
// ============================================================================

impl EditorArea {
    /// Describe every broken cross-structure invariant. Empty means healthy.
    ///
    /// Covers the layout tree itself, group/pane/document cross references,
    /// view counts, and the rule that only the sole group may be empty.
    pub fn check_invariants(&self) -> Vec<String> {
        let mut problems = self.layout.check_invariants();

        let ids = self.layout.group_ids();
        if ids.len() != self.groups.len() || ids.iter().any(|id| !self.groups.contains_key(id)) {
            problems.push(format!(
                "layout groups {:?} do not match group map ({} entries)",
                ids,
                self.groups.len()
            ));
        }

        let mut views_per_doc: HashMap<DocumentId, u32> = HashMap::new();
        let mut pane_count = 0;
        for (group_id, group) in &self.groups {
            if group.is_empty() && ids.len() > 1 {
                problems.push(format!("group {:?} is empty but not the only group", group_id));
            }
            match group.current_index() {
                Some(i) if i >= group.len() => problems.push(format!(
                    "group {:?} current index {} out of {} tabs",
                    group_id,
                    i,
                    group.len()
                )),
                None if !group.is_empty() => {
                    problems.push(format!("group {:?} has tabs but none current", group_id))
                }
                _ => {}
            }

            for pane in group.panes() {
                pane_count += 1;
                if self.pane_index.get(&pane.id) != Some(group_id) {
                    problems.push(format!("pane {:?} missing from pane index", pane.id));
                }
                match self.documents.get(pane.document_id()) {
                    Some(doc) if doc.views().contains(&pane.id) => {}
                    Some(_) => problems.push(format!(
                        "pane {:?} not registered as a view of {:?}",
                        pane.id,
                        pane.document_id()
                    )),
                    None => problems.push(format!(
                        "pane {:?} references evicted document {:?}",
                        pane.id,
                        pane.document_id()
                    )),
                }
                *views_per_doc.entry(pane.document_id()).or_default() += 1;
            }
        }

        if pane_count != self.pane_index.len() {
            problems.push(format!(
                "pane index has {} entries for {} panes",
                self.pane_index.len(),
                pane_count
            ));
        }

        for doc in self.documents.iter() {
            let live = views_per_doc.get(&doc.id).copied().unwrap_or(0);
            if doc.view_count() != live {
                problems.push(format!(
                    "document {:?} counts {} views but {} panes show it",
                    doc.id,
                    doc.view_count(),
                    live
                ));
            }
            if live == 0 {
                problems.push(format!("document {:?} has no views but is registered", doc.id));
            }
        }

        problems
    }

    /// Validate internal invariants in debug builds.
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let problems = self.check_invariants();
        assert!(
            problems.is_empty(),
            "editor area invariants violated: {:#?}",
            problems
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
