//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod document_manager;
pub mod editor_area;
pub mod layout;
pub mod pane;
pub mod tab_group;
pub mod ui;

pub use document::{Document, DocumentEvent};
pub use document_manager::DocumentManager;
pub use editor_area::{DocumentId, EditorArea, GroupId, PaneId};
pub use layout::{
    LayoutNode, Rect, SplitContainer, SplitDirection, SplitLayout, MAX_GROUPS, SPLITTER_WIDTH,
};
pub use pane::Pane;
pub use tab_group::TabGroup;
pub use ui::{Notice, NoticeKind, TransientMessage, UiState};

use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::language::language_display_name;

/// Title shown when no file is bound to the active document
const APP_TITLE: &str = "Text Editor";

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Editor area containing all documents, groups, and layout
    pub editor_area: EditorArea,
    /// UI state (status line, notices)
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create the model and open `file_paths` as tabs in the first group.
    /// With no paths (or none that open) a blank document is shown.
    pub fn new(config: EditorConfig, file_paths: Vec<PathBuf>) -> Self {
        let editor_area = EditorArea::new(config.effective_max_groups())
            .with_max_file_size(config.max_file_size());
        Self::with_area(editor_area, config, file_paths)
    }

    /// Create the model around a prepared editor area
    pub fn with_area(
        mut editor_area: EditorArea,
        config: EditorConfig,
        file_paths: Vec<PathBuf>,
    ) -> Self {
        let mut ui = UiState::with_status("Ready");

        let mut opened = 0;
        for path in &file_paths {
            match editor_area.open_path(path) {
                Ok(_) => opened += 1,
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "could not open file at startup");
                    ui.report(&e);
                }
            }
        }

        if opened == 0 {
            editor_area.new_blank();
        } else if opened > 1 {
            ui.set_status(format!("Opened {} files", opened));
        }

        Self {
            editor_area,
            ui,
            config,
        }
    }

    /// Active document, if the active group shows one
    pub fn document(&self) -> Option<&Document> {
        self.editor_area.active_document()
    }

    /// `Text Editor - name`, with `*` when modified
    pub fn window_title(&self) -> String {
        match self.document() {
            Some(doc) if doc.path().is_none() => format!("{} - New File", APP_TITLE),
            Some(doc) => {
                let marker = if doc.is_modified { "*" } else { "" };
                format!("{} - {}{}", APP_TITLE, doc.display_name(), marker)
            }
            None => APP_TITLE.to_string(),
        }
    }

    /// `name | language | n groups`, followed by the visible status message
    pub fn status_line(&self) -> String {
        let groups = self.editor_area.group_count();
        let groups = if groups == 1 {
            "1 group".to_string()
        } else {
            format!("{} groups", groups)
        };

        let mut line = match self.document() {
            Some(doc) => format!(
                "{} | {} | {}",
                doc.display_name(),
                language_display_name(doc.language),
                groups
            ),
            None => format!("No document | {}", groups),
        };

        let status = self.ui.visible_status();
        if !status.is_empty() {
            line.push_str(" | ");
            line.push_str(status);
        }
        line
    }
}
