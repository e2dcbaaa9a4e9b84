//! Save/Discard/Cancel confirmation
//!
//! Closing the last view of a modified document (or exiting) asks a
//! [`ConfirmClose`] collaborator. The shell plugs in a dialog; tests plug in
//! a fixed answer. Saving an untitled document also asks it for a path.

use std::path::PathBuf;

use crate::model::Document;

/// Answer to "this document has unsaved changes"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Save,
    Discard,
    Cancel,
}

pub trait ConfirmClose {
    fn confirm(&mut self, document: &Document) -> ConfirmChoice;

    /// Where to write an untitled document after a Save answer.
    /// `None` abandons the close.
    fn save_path(&mut self, _document: &Document) -> Option<PathBuf> {
        None
    }
}

impl<F> ConfirmClose for F
where
    F: FnMut(&Document) -> ConfirmChoice,
{
    fn confirm(&mut self, document: &Document) -> ConfirmChoice {
        self(document)
    }
}

/// Always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub ConfirmChoice);

impl ConfirmClose for FixedAnswer {
    fn confirm(&mut self, _document: &Document) -> ConfirmChoice {
        self.0
    }
}
