//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::{GroupId, PaneId, SplitDirection};

/// Layout messages (split views, tabs, groups)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Split the focused group; the new group gets a blank document
    SplitFocused(SplitDirection),
    /// Split the focused group; the new group shows the focused document too
    SplitFocusedWithCurrent(SplitDirection),
    /// Append a group at the top level, independent of focus
    AddPane(SplitDirection),
    /// Close a specific group and all of its tabs
    CloseGroup(GroupId),
    /// Close the focused group
    CloseFocusedGroup,
    /// Close a tab by position
    CloseTab { group: GroupId, index: usize },
    /// Close the current tab of the focused group
    CloseFocusedTab,

    /// Focus a specific group
    FocusGroup(GroupId),
    /// A pane received focus (mouse click, tab click)
    FocusPane(PaneId),
    /// Focus next group in tree order
    FocusNextGroup,
    /// Focus previous group in tree order
    FocusPrevGroup,
    /// Focus group by index (1-based, for keyboard shortcuts)
    FocusGroupByIndex(usize),

    /// Switch to next tab in focused group
    NextTab,
    /// Switch to previous tab in focused group
    PrevTab,
    /// Switch to specific tab by index (0-based)
    SwitchToTab(usize),
}

/// Document messages (text modification in the focused pane)
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentMsg {
    /// Insert text at the cursor
    InsertText(String),
    /// Delete the character before the cursor
    DeleteBackward,
}

/// Application messages (files, lifecycle)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Open a file (or focus it if already open)
    OpenFile(PathBuf),
    /// Open a blank document in the focused group
    NewFile,
    /// Save the focused document
    SaveFile,
    /// Save the focused document under a new path
    SaveFileAs(PathBuf),
    /// Request to quit (asks about unsaved documents)
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Layout(LayoutMsg),
    Document(DocumentMsg),
    App(AppMsg),
}
