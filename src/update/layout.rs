//! Layout message handlers (split views, tabs, groups)

use crate::commands::Cmd;
use crate::confirm::ConfirmClose;
use crate::error::EditorError;
use crate::messages::LayoutMsg;
use crate::model::{AppModel, SplitDirection};

/// Handle layout messages (split views, tabs, groups)
pub fn update_layout(
    model: &mut AppModel,
    msg: LayoutMsg,
    confirm: &mut dyn ConfirmClose,
) -> Option<Cmd> {
    match msg {
        LayoutMsg::SplitFocused(direction) => {
            let pane = model.editor_area.split(direction);
            report_split(model, pane.is_some(), direction);
            Some(Cmd::Redraw)
        }

        LayoutMsg::SplitFocusedWithCurrent(direction) => {
            let pane = model.editor_area.split_with_current(direction);
            report_split(model, pane.is_some(), direction);
            Some(Cmd::Redraw)
        }

        LayoutMsg::AddPane(direction) => {
            let pane = model.editor_area.add_pane(direction);
            report_split(model, pane.is_some(), direction);
            Some(Cmd::Redraw)
        }

        LayoutMsg::CloseGroup(group_id) => {
            if model.editor_area.group(group_id).is_none() {
                model.ui.report(&EditorError::StaleReference);
            } else if !model.editor_area.close_split(group_id, confirm) {
                model.ui.set_status("Close cancelled");
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::CloseFocusedGroup => {
            if model.editor_area.group_count() <= 1 {
                model.ui.set_status("Cannot close the last pane");
            } else if !model.editor_area.close_active_split(confirm) {
                model.ui.set_status("Close cancelled");
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::CloseTab { group, index } => {
            if !model.editor_area.close_tab_in(group, index, confirm) {
                model.ui.set_status("Close cancelled");
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::CloseFocusedTab => {
            if model.editor_area.active_pane_id().is_some()
                && !model.editor_area.close_active_tab(confirm)
            {
                model.ui.set_status("Close cancelled");
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::FocusGroup(group_id) => {
            if !model.editor_area.focus_group(group_id) {
                model.ui.report(&EditorError::StaleReference);
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::FocusPane(pane_id) => {
            if !model.editor_area.on_pane_focused(pane_id) {
                model.ui.report(&EditorError::StaleReference);
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::FocusNextGroup => {
            model.editor_area.focus_next_group();
            Some(Cmd::Redraw)
        }

        LayoutMsg::FocusPrevGroup => {
            model.editor_area.focus_prev_group();
            Some(Cmd::Redraw)
        }

        LayoutMsg::FocusGroupByIndex(index) => {
            // 1-indexed for keyboard shortcuts (Cmd+1, Cmd+2, etc.)
            model.editor_area.focus_group_by_index(index);
            Some(Cmd::Redraw)
        }

        LayoutMsg::NextTab => {
            model.editor_area.next_tab();
            Some(Cmd::Redraw)
        }

        LayoutMsg::PrevTab => {
            model.editor_area.prev_tab();
            Some(Cmd::Redraw)
        }

        LayoutMsg::SwitchToTab(index) => {
            model.editor_area.switch_to_tab(index);
            Some(Cmd::Redraw)
        }
    }
}

fn report_split(model: &mut AppModel, created: bool, direction: SplitDirection) {
    if created {
        let name = match direction {
            SplitDirection::Horizontal => "Split right",
            SplitDirection::Vertical => "Split down",
        };
        model.ui.set_status(name);
    } else {
        model.ui.report(&EditorError::LayoutLimitReached);
    }
}
