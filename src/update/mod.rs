//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
pub mod layout;

use crate::commands::Cmd;
use crate::confirm::ConfirmClose;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use layout::update_layout;

/// Main update function - dispatches to sub-handlers
///
/// `confirm` answers Save/Discard/Cancel for closes and quit.
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg, confirm: &mut dyn ConfirmClose) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg, confirm)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg, confirm)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg, confirm: &mut dyn ConfirmClose) -> Option<Cmd> {
    match msg {
        Msg::Layout(m) => layout::update_layout(model, m, confirm),
        Msg::Document(m) => document::update_document(model, m),
        Msg::App(m) => app::update_app(model, m, confirm),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state, logs diffs, and checks invariants.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg, confirm: &mut dyn ConfirmClose) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = LayoutSnapshot::from_area(&model.editor_area);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg, confirm);

    let after = LayoutSnapshot::from_area(&model.editor_area);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    model.editor_area.assert_invariants();
    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Layout::SplitFocused(Horizontal)`
/// - `App::OpenFile("notes.md")`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
