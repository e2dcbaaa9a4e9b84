//! A pane is one viewport bound to exactly one document

use super::document::{Document, DocumentEvent};
use super::editor_area::{DocumentId, PaneId};

#[derive(Debug, Clone)]
pub struct Pane {
    pub id: PaneId,
    document_id: DocumentId,
    /// Caret as a character offset into the document (view-local)
    pub cursor: usize,
    /// Notifications from the document, oldest first
    inbox: Vec<DocumentEvent>,
}

impl Pane {
    /// Create a pane on `doc`, registering it as a view
    pub fn attach(id: PaneId, doc: &mut Document) -> Self {
        doc.add_view(id);
        Self {
            id,
            document_id: doc.id,
            cursor: 0,
            inbox: Vec::new(),
        }
    }

    /// Tear the pane down, unregistering it from `doc`.
    /// Returns the document's remaining view count.
    pub fn detach(self, doc: &mut Document) -> u32 {
        debug_assert_eq!(doc.id, self.document_id);
        doc.remove_view(self.id)
    }

    pub fn document_id(&self) -> DocumentId {
        self.document_id
    }

    pub(crate) fn deliver(&mut self, event: DocumentEvent) {
        self.inbox.push(event);
    }

    /// Drain pending document notifications for the renderer
    pub fn take_events(&mut self) -> Vec<DocumentEvent> {
        std::mem::take(&mut self.inbox)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.inbox.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_detach_pairs_view_count() {
        let mut doc = Document::new(DocumentId(7));
        let a = Pane::attach(PaneId(1), &mut doc);
        let b = Pane::attach(PaneId(2), &mut doc);
        assert_eq!(doc.view_count(), 2);
        assert_eq!(a.document_id(), DocumentId(7));

        assert_eq!(a.detach(&mut doc), 1);
        assert_eq!(b.detach(&mut doc), 0);
    }

    #[test]
    fn test_inbox_drains_in_order() {
        let mut doc = Document::new(DocumentId(1));
        let mut pane = Pane::attach(PaneId(1), &mut doc);
        pane.deliver(DocumentEvent::ModifiedChanged(true));
        pane.deliver(DocumentEvent::PathChanged(None));

        assert!(pane.has_pending_events());
        assert_eq!(
            pane.take_events(),
            vec![
                DocumentEvent::ModifiedChanged(true),
                DocumentEvent::PathChanged(None)
            ]
        );
        assert!(!pane.has_pending_events());
    }
}
