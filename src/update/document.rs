//! Document message handlers (text edits in the focused pane)

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    let Some(cursor) = model.editor_area.active_pane().map(|p| p.cursor) else {
        model.ui.set_status("No document to edit");
        return None;
    };
    if model.document().is_some_and(|d| d.is_invalid) {
        model.ui.set_status("Editing is disabled for this file");
        return None;
    }

    let changed = match msg {
        DocumentMsg::InsertText(text) => model.editor_area.insert_text(&text),
        DocumentMsg::DeleteBackward if cursor > 0 => {
            model.editor_area.delete_text(cursor - 1..cursor)
        }
        DocumentMsg::DeleteBackward => false,
    };

    changed.then_some(Cmd::Redraw)
}
