//! App message handlers (file operations, lifecycle)

use std::time::Duration;

use crate::commands::Cmd;
use crate::confirm::ConfirmClose;
use crate::error::EditorError;
use crate::messages::AppMsg;
use crate::model::AppModel;
use crate::util::filename_for_display;

/// How long "Saved" style confirmations stay in the status line
const FLASH_DURATION: Duration = Duration::from_secs(3);

/// Handle app messages (file operations, lifecycle)
pub fn update_app(model: &mut AppModel, msg: AppMsg, confirm: &mut dyn ConfirmClose) -> Option<Cmd> {
    match msg {
        AppMsg::OpenFile(path) => {
            match model.editor_area.open_path(&path) {
                Ok(_) => {
                    let invalid = model.document().is_some_and(|d| d.is_invalid);
                    if invalid {
                        model.ui.show_incompatible(format!(
                            "{} is not a text file this editor can display",
                            filename_for_display(&path)
                        ));
                    }
                    model.ui.set_status(format!("Opened: {}", path.display()));
                }
                Err(e) => model.ui.report(&e),
            }
            Some(Cmd::Redraw)
        }

        AppMsg::NewFile => {
            model.editor_area.new_blank();
            model.ui.set_status("New file");
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => match model.editor_area.save_current() {
            Ok(()) => {
                model.ui.flash("File saved", FLASH_DURATION);
                Some(Cmd::Redraw)
            }
            Err(EditorError::Untitled) => Some(Cmd::PromptSaveAs),
            Err(e) => {
                model.ui.report(&e);
                Some(Cmd::Redraw)
            }
        },

        AppMsg::SaveFileAs(path) => {
            match model.editor_area.save_as(&path) {
                Ok(()) => model.ui.flash("File saved", FLASH_DURATION),
                Err(e) => model.ui.report(&e),
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => {
            if model.editor_area.confirm_exit(confirm) {
                Some(Cmd::Quit)
            } else {
                model.ui.set_status("Quit cancelled");
                Some(Cmd::Redraw)
            }
        }
    }
}
