//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects the shell performs after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Repaint title, status line and layout
    Redraw,
    /// The focused document has no path; ask the user for one and send `SaveFileAs`
    PromptSaveAs,
    /// Every unsaved document was resolved; the shell may exit
    Quit,
}

impl Cmd {
    pub fn is_quit(&self) -> bool {
        matches!(self, Cmd::Quit)
    }
}
