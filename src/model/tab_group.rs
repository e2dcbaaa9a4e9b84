//! Tab group - an ordered set of panes shown as tabs, one of them current
//!
//! A tab group is a leaf of the split layout. It creates and destroys its own
//! panes, which makes it the only place where document view counts change.

use super::document::Document;
use super::document_manager::DocumentManager;
use super::editor_area::{DocumentId, GroupId, PaneId};
use super::pane::Pane;

#[derive(Debug, Clone)]
pub struct TabGroup {
    pub id: GroupId,
    panes: Vec<Pane>,
    current: Option<usize>,
    /// Set when the last tab closes; consumed by the owner of the layout
    became_empty: bool,
}

impl TabGroup {
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            panes: Vec::new(),
            current: None,
            became_empty: false,
        }
    }

    /// Open a new pane on `doc`, append it and make it current
    pub fn add_view_for(&mut self, pane_id: PaneId, doc: &mut Document) -> PaneId {
        self.panes.push(Pane::attach(pane_id, doc));
        self.current = Some(self.panes.len() - 1);
        self.became_empty = false;
        pane_id
    }

    /// Close the tab at `index`, returning the document's remaining view count.
    /// Out-of-range indices are a no-op returning 0.
    pub fn close_tab(&mut self, index: usize, docs: &mut DocumentManager) -> u32 {
        if index >= self.panes.len() {
            return 0;
        }

        let pane = self.panes.remove(index);
        let remaining = match docs.get_mut(pane.document_id()) {
            Some(doc) => pane.detach(doc),
            None => {
                tracing::warn!(pane = ?pane.id, "closing pane whose document is gone");
                0
            }
        };

        self.current = match self.current {
            _ if self.panes.is_empty() => None,
            Some(c) if c > index => Some(c - 1),
            Some(c) if c == index => Some(index.min(self.panes.len() - 1)),
            other => other,
        };

        if self.panes.is_empty() {
            self.became_empty = true;
        }

        remaining
    }

    /// Consume the "became empty" signal. True at most once per emptying.
    pub fn take_became_empty(&mut self) -> bool {
        std::mem::take(&mut self.became_empty)
    }

    pub fn find_pane_for(&self, doc: DocumentId) -> Option<PaneId> {
        self.panes
            .iter()
            .find(|p| p.document_id() == doc)
            .map(|p| p.id)
    }

    /// Make the pane showing `doc` current, if there is one
    pub fn focus(&mut self, doc: DocumentId) -> bool {
        match self.panes.iter().position(|p| p.document_id() == doc) {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    /// Make a specific pane current
    pub fn focus_pane(&mut self, pane: PaneId) -> bool {
        match self.position_of(pane) {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn position_of(&self, pane: PaneId) -> Option<usize> {
        self.panes.iter().position(|p| p.id == pane)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_pane(&self) -> Option<&Pane> {
        self.current.and_then(|i| self.panes.get(i))
    }

    /// Document shown by the current tab
    pub fn current_document(&self) -> Option<DocumentId> {
        self.current_pane().map(|p| p.document_id())
    }

    pub fn pane(&self, pane: PaneId) -> Option<&Pane> {
        self.panes.iter().find(|p| p.id == pane)
    }

    pub fn pane_mut(&mut self, pane: PaneId) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|p| p.id == pane)
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Number of tabs in this group showing `doc`
    pub fn views_of(&self, doc: DocumentId) -> u32 {
        self.panes.iter().filter(|p| p.document_id() == doc).count() as u32
    }

    pub fn next_tab(&mut self) {
        if let Some(c) = self.current {
            self.current = Some((c + 1) % self.panes.len());
        }
    }

    pub fn prev_tab(&mut self) {
        if let Some(c) = self.current {
            self.current = Some(if c == 0 { self.panes.len() - 1 } else { c - 1 });
        }
    }

    pub fn switch_to_tab(&mut self, index: usize) -> bool {
        if index < self.panes.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }
}
