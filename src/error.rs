//! Error type for editor area operations
//!
//! Nothing here is fatal: every variant means "refused, state unchanged" or
//! "tell the user, state unchanged".

use std::path::PathBuf;

use crate::util::file_validation::FileOpenError;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    /// File could not be read or written (not found, permission, directory, size)
    Io(FileOpenError),
    /// File exists but is not text
    Decode { path: PathBuf, reason: FileOpenError },
    /// The layout already holds the maximum number of groups
    LayoutLimitReached,
    /// The group, pane or document no longer exists
    StaleReference,
    /// The document has no path yet; the shell must ask for one
    Untitled,
    /// The document was opened in the invalid state and cannot be saved
    SaveDisabled,
    /// Another document is already bound to this path
    AlreadyOpen(PathBuf),
}

impl EditorError {
    /// Nothing the editor area reports is fatal
    pub fn is_fatal(&self) -> bool {
        false
    }

    /// Refusals that should not produce a dialog
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::LayoutLimitReached | Self::StaleReference)
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("Could not access file: {}", e),
            Self::Decode { path, reason } => reason.user_message(&path.display().to_string()),
            Self::LayoutLimitReached => "Maximum number of panes reached".to_string(),
            Self::StaleReference => "That view no longer exists".to_string(),
            Self::Untitled => "Choose a file name to save this document".to_string(),
            Self::SaveDisabled => "Incompatible files cannot be saved".to_string(),
            Self::AlreadyOpen(path) => {
                format!("{} is already open in another tab", path.display())
            }
        }
    }
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {}", e),
            Self::Decode { path, reason } => {
                write!(f, "cannot decode {}: {}", path.display(), reason)
            }
            Self::LayoutLimitReached => write!(f, "layout limit reached"),
            Self::StaleReference => write!(f, "stale reference"),
            Self::Untitled => write!(f, "document has no path"),
            Self::SaveDisabled => write!(f, "saving is disabled for this document"),
            Self::AlreadyOpen(path) => write!(f, "{} is already open", path.display()),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Decode { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<FileOpenError> for EditorError {
    fn from(e: FileOpenError) -> Self {
        Self::Io(e)
    }
}
