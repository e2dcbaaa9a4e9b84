//! Document registry
//!
//! Owns every live document and indexes them by canonical path so the same
//! file is never open twice. The registry does not count views; callers
//! evict a document once its last pane is gone.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::document::Document;
use super::editor_area::DocumentId;
use crate::util::canonical_path;

#[derive(Debug, Clone, Default)]
pub struct DocumentManager {
    documents: HashMap<DocumentId, Document>,
    /// Live documents in creation order
    order: Vec<DocumentId>,
    /// Canonical path -> document, only for documents with a path
    path_index: HashMap<PathBuf, DocumentId>,

    next_document_id: u64,
    /// Counter for generating unique untitled document names
    next_untitled_number: u32,
}

impl DocumentManager {
    pub fn new() -> Self {
        Self {
            next_document_id: 1,
            next_untitled_number: 1,
            ..Default::default()
        }
    }

    /// Return the document already open on `path`, or register a new one.
    /// `None` always creates a fresh untitled document.
    pub fn get_or_create(&mut self, path: Option<&Path>) -> DocumentId {
        let Some(path) = path else {
            return self.create_untitled().id;
        };

        let canonical = canonical_path(path);
        if let Some(&id) = self.path_index.get(&canonical) {
            return id;
        }

        let id = self.next_document_id();
        tracing::debug!(?id, path = %canonical.display(), "registering document");
        self.path_index.insert(canonical.clone(), id);
        self.documents.insert(id, Document::with_path(id, canonical));
        self.order.push(id);
        id
    }

    /// Register a fresh untitled document and hand it back for attaching views
    pub fn create_untitled(&mut self) -> &mut Document {
        let id = self.next_document_id();
        let mut doc = Document::new(id);
        doc.untitled_name = Some(self.next_untitled_name());
        tracing::debug!(?id, name = ?doc.untitled_name, "registering untitled document");
        self.order.push(id);
        self.documents.entry(id).or_insert(doc)
    }

    /// Rebind a document to a new path, keeping the index consistent.
    /// Returns false if the document is unknown.
    pub fn update_path(&mut self, id: DocumentId, new_path: Option<&Path>) -> bool {
        let Some(doc) = self.documents.get_mut(&id) else {
            tracing::warn!(?id, "update_path on unknown document");
            return false;
        };

        let new_path = new_path.map(canonical_path);
        if let Some(old) = doc.file_path.take() {
            if self.path_index.get(&old) == Some(&id) {
                self.path_index.remove(&old);
            }
        }
        if let Some(new) = &new_path {
            self.path_index.insert(new.clone(), id);
        }

        tracing::info!(?id, path = ?new_path, "document path rebound");
        doc.rebind_path(new_path);
        true
    }

    /// Remove a document from the registry. The caller must already know
    /// that no pane views it.
    pub fn close(&mut self, id: DocumentId) -> Option<Document> {
        let doc = self.documents.remove(&id)?;
        self.order.retain(|&d| d != id);
        if let Some(path) = &doc.file_path {
            if self.path_index.get(path) == Some(&id) {
                self.path_index.remove(path);
            }
        }
        tracing::debug!(?id, name = %doc.display_name(), "document evicted");
        Some(doc)
    }

    /// True if any live document has unsaved changes
    pub fn has_unsaved(&self) -> bool {
        self.documents.values().any(|d| d.is_modified)
    }

    /// Modified documents in registry order
    pub fn unsaved(&self) -> Vec<DocumentId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.documents.get(id).is_some_and(|d| d.is_modified))
            .collect()
    }

    /// Document currently bound to `path`, if any
    pub fn find_by_path(&self, path: &Path) -> Option<DocumentId> {
        self.path_index.get(&canonical_path(path)).copied()
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.get_mut(&id)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Live documents in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.order.iter().filter_map(|id| self.documents.get(id))
    }

    /// Generate a new document ID
    fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_document_id);
        self.next_document_id += 1;
        id
    }

    /// Generate the next untitled document name (e.g., "Untitled", "Untitled-2", etc.)
    fn next_untitled_name(&mut self) -> String {
        let n = self.next_untitled_number;
        self.next_untitled_number += 1;
        if n == 1 {
            "Untitled".to_string()
        } else {
            format!("Untitled-{}", n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_same_path_returns_same_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "x").unwrap();

        let mut docs = DocumentManager::new();
        let first = docs.get_or_create(Some(&path));
        let again = docs.get_or_create(Some(&dir.path().join(".").join("a.txt")));
        assert_eq!(first, again);
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_untitled_documents_are_never_shared() {
        let mut docs = DocumentManager::new();
        let a = docs.get_or_create(None);
        let b = docs.get_or_create(None);
        assert_ne!(a, b);
        assert_eq!(docs.get(a).unwrap().display_name(), "Untitled");
        assert_eq!(docs.get(b).unwrap().display_name(), "Untitled-2");
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn test_update_path_moves_index_entry() {
        let dir = TempDir::new().unwrap();
        let old = dir.path().join("old.txt");
        let new = dir.path().join("new.txt");

        let mut docs = DocumentManager::new();
        let id = docs.get_or_create(Some(&old));
        assert!(docs.update_path(id, Some(&new)));

        assert_eq!(docs.find_by_path(&old), None);
        assert_eq!(docs.find_by_path(&new), Some(id));
        assert_eq!(docs.get_or_create(Some(&new)), id);
        assert_ne!(docs.get_or_create(Some(&old)), id);
    }

    #[test]
    fn test_update_path_on_untitled_document() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("notes.md");

        let mut docs = DocumentManager::new();
        let id = docs.get_or_create(None);
        docs.update_path(id, Some(&target));

        let doc = docs.get(id).unwrap();
        assert_eq!(doc.display_name(), "notes.md");
        assert_eq!(doc.language, Some(crate::language::LanguageId::Markdown));
        assert_eq!(docs.find_by_path(&target), Some(id));
    }

    #[test]
    fn test_update_path_unknown_document() {
        let mut docs = DocumentManager::new();
        assert!(!docs.update_path(DocumentId(42), None));
    }

    #[test]
    fn test_close_removes_from_index_and_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");

        let mut docs = DocumentManager::new();
        let id = docs.get_or_create(Some(&path));
        let other = docs.get_or_create(None);

        assert!(docs.close(id).is_some());
        assert!(docs.close(id).is_none());
        assert_eq!(docs.find_by_path(&path), None);
        assert_eq!(docs.iter().map(|d| d.id).collect::<Vec<_>>(), vec![other]);
    }

    #[test]
    fn test_has_unsaved() {
        let mut docs = DocumentManager::new();
        let a = docs.get_or_create(None);
        let b = docs.get_or_create(None);
        assert!(!docs.has_unsaved());

        docs.get_mut(b).unwrap().insert(0, "x");
        assert!(docs.has_unsaved());
        assert_eq!(docs.unsaved(), vec![b]);

        docs.get_mut(a).unwrap().insert(0, "y");
        assert_eq!(docs.unsaved(), vec![a, b]);
    }
}
