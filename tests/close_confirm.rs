//! Save/Discard/Cancel behaviour when closing tabs, groups and the editor

mod common;

use common::{assert_healthy, mem_area, mem_path, test_model, Scripted};
use splitpad::commands::Cmd;
use splitpad::confirm::{ConfirmChoice, FixedAnswer};
use splitpad::messages::{AppMsg, LayoutMsg, Msg};
use splitpad::model::{Document, SplitDirection, MAX_GROUPS};
use splitpad::update::update;

use ConfirmChoice::{Cancel, Discard, Save};

const H: SplitDirection = SplitDirection::Horizontal;

// ============================================================================
// close_split
// ============================================================================

#[test]
fn test_cancel_aborts_whole_close_split() {
    let (mut area, fs) = mem_area(MAX_GROUPS);
    let a = fs.add_file("a.txt", b"a");
    let b = fs.add_file("b.txt", b"b");
    area.new_blank();
    area.split(H).unwrap();
    area.open_path(&a).unwrap();
    area.insert_text("1");
    area.open_path(&b).unwrap();
    area.insert_text("2");
    let group = area.active_group_id();

    let mut confirm = Scripted::new(&[Discard, Cancel]);
    assert!(!area.close_split(group, &mut confirm));

    assert_eq!(confirm.asked.len(), 2);
    assert_eq!(area.group_count(), 2);
    assert_eq!(area.group(group).unwrap().len(), 3);
    assert!(area.documents().find_by_path(&a).is_some());
    assert!(area.documents().find_by_path(&b).is_some());
    assert!(area.has_unsaved());
    assert_healthy(&area);
}

#[test]
fn test_failed_save_aborts_close_split() {
    let (mut area, fs) = mem_area(MAX_GROUPS);
    let a = fs.add_file("a.txt", b"a");
    area.new_blank();
    area.split(H).unwrap();
    area.open_path(&a).unwrap();
    area.insert_text("edited ");
    let group = area.active_group_id();
    fs.fail_writes(true);

    assert!(!area.close_split(group, &mut FixedAnswer(Save)));

    assert_eq!(area.group_count(), 2);
    assert!(area.active_document().unwrap().is_modified);
    assert_eq!(fs.text(&a).unwrap(), "a");
}

#[test]
fn test_save_then_close_split_writes_file() {
    let (mut area, fs) = mem_area(MAX_GROUPS);
    let a = fs.add_file("a.txt", b"a");
    area.new_blank();
    area.split(H).unwrap();
    area.open_path(&a).unwrap();
    area.insert_text("saved ");
    let group = area.active_group_id();

    assert!(area.close_split(group, &mut FixedAnswer(Save)));

    assert_eq!(fs.text(&a).unwrap(), "saved a");
    assert_eq!(area.group_count(), 1);
    assert!(area.documents().find_by_path(&a).is_none());
    assert_healthy(&area);
}

#[test]
fn test_discard_evicts_modified_document() {
    let (mut area, fs) = mem_area(MAX_GROUPS);
    let a = fs.add_file("a.txt", b"a");
    area.new_blank();
    area.split(H).unwrap();
    area.open_path(&a).unwrap();
    area.insert_text("lost ");
    let group = area.active_group_id();

    assert!(area.close_split(group, &mut FixedAnswer(Discard)));

    assert!(area.documents().find_by_path(&a).is_none());
    assert_eq!(fs.text(&a).unwrap(), "a");
    assert!(!area.has_unsaved());
}

#[test]
fn test_document_shown_elsewhere_is_not_confirmed() {
    let (mut area, _fs) = mem_area(MAX_GROUPS);
    area.new_blank();
    area.insert_text("shared edits");
    let doc = area.active_document_id().unwrap();
    area.split_with_current(H).unwrap();
    let group = area.active_group_id();

    let mut never = |_: &Document| -> ConfirmChoice {
        panic!("a document still visible elsewhere must not be confirmed")
    };
    assert!(area.close_split(group, &mut never));

    let doc = area.document(doc).unwrap();
    assert!(doc.is_modified);
    assert_eq!(doc.view_count(), 1);
}

#[test]
fn test_untitled_save_during_close_writes_to_supplied_path() {
    let (mut model, fs) = test_model();
    run_split(&mut model);
    model.editor_area.insert_text("draft");
    let target = mem_path("draft.txt");

    let mut confirm = Scripted::new(&[Save]).with_save_path(target.clone());
    update(
        &mut model,
        Msg::Layout(LayoutMsg::CloseFocusedGroup),
        &mut confirm,
    );

    assert_eq!(confirm.asked_for_path.len(), 1);
    assert_eq!(fs.text(&target).unwrap(), "draft");
    assert_eq!(model.editor_area.group_count(), 1);
    assert!(model.editor_area.documents().find_by_path(&target).is_none());
    assert_healthy(&model.editor_area);
}

#[test]
fn test_untitled_save_without_path_aborts_close() {
    let (mut model, _fs) = test_model();
    run_split(&mut model);
    model.editor_area.insert_text("draft");

    let mut confirm = Scripted::new(&[Save]);
    update(
        &mut model,
        Msg::Layout(LayoutMsg::CloseFocusedGroup),
        &mut confirm,
    );

    assert_eq!(confirm.asked_for_path.len(), 1);
    assert_eq!(model.editor_area.group_count(), 2);
    assert!(model.editor_area.active_document().unwrap().is_modified);
    assert_eq!(model.ui.status_message, "Close cancelled");
}

#[test]
fn test_untitled_save_onto_open_path_aborts_close() {
    let (mut area, fs) = mem_area(MAX_GROUPS);
    let a = fs.add_file("a.txt", b"a");
    area.open_path(&a).unwrap();
    area.split(H).unwrap();
    area.insert_text("draft");
    let group = area.active_group_id();

    let mut confirm = Scripted::new(&[Save]).with_save_path(a.clone());
    assert!(!area.close_split(group, &mut confirm));

    assert_eq!(fs.text(&a).unwrap(), "a");
    assert_eq!(area.group_count(), 2);
    assert!(area.has_unsaved());
    assert_healthy(&area);
}

fn run_split(model: &mut splitpad::AppModel) {
    update(
        model,
        Msg::Layout(LayoutMsg::SplitFocused(H)),
        &mut FixedAnswer(Discard),
    );
}

// ============================================================================
// Closing tabs
// ============================================================================

#[test]
fn test_closing_last_view_of_modified_document_asks() {
    let (mut area, fs) = mem_area(MAX_GROUPS);
    let a = fs.add_file("a.txt", b"a");
    area.open_path(&a).unwrap();
    area.insert_text("x");

    let mut confirm = Scripted::new(&[Cancel]);
    assert!(!area.close_active_tab(&mut confirm));
    assert_eq!(confirm.asked, vec!["a.txt".to_string()]);
    assert_eq!(area.documents().len(), 1);

    let mut confirm = Scripted::new(&[Discard]);
    assert!(area.close_active_tab(&mut confirm));
    assert!(area.documents().is_empty());
    assert_healthy(&area);
}

#[test]
fn test_closing_one_of_two_views_does_not_ask() {
    let (mut area, _fs) = mem_area(MAX_GROUPS);
    area.new_blank();
    area.insert_text("x");
    area.split_with_current(H).unwrap();

    let mut confirm = Scripted::new(&[]);
    assert!(area.close_active_tab(&mut confirm));

    assert!(confirm.asked.is_empty());
    assert_eq!(area.group_count(), 1);
    assert!(area.has_unsaved());
}

#[test]
fn test_close_tab_message_by_index() {
    let (mut model, _fs) = test_model();
    update(
        &mut model,
        Msg::App(AppMsg::NewFile),
        &mut FixedAnswer(Discard),
    );
    let group = model.editor_area.active_group_id();
    assert_eq!(model.editor_area.group(group).unwrap().len(), 2);

    update(
        &mut model,
        Msg::Layout(LayoutMsg::CloseTab { group, index: 0 }),
        &mut FixedAnswer(Discard),
    );

    assert_eq!(model.editor_area.group(group).unwrap().len(), 1);
    assert_eq!(model.editor_area.documents().len(), 1);
    assert_healthy(&model.editor_area);
}

// ============================================================================
// Exit
// ============================================================================

#[test]
fn test_quit_without_changes_quits() {
    let (mut model, _fs) = test_model();
    let cmd = update(&mut model, Msg::App(AppMsg::Quit), &mut Scripted::new(&[]));
    assert!(cmd.is_some_and(|c| c.is_quit()));
}

#[test]
fn test_quit_cancelled_by_any_document() {
    let (mut model, fs) = test_model();
    let a = fs.add_file("a.txt", b"a");
    let b = fs.add_file("b.txt", b"b");
    let mut discard = FixedAnswer(Discard);
    update(&mut model, Msg::App(AppMsg::OpenFile(a)), &mut discard);
    model.editor_area.insert_text("1");
    update(&mut model, Msg::App(AppMsg::OpenFile(b)), &mut discard);
    model.editor_area.insert_text("2");

    let mut confirm = Scripted::new(&[Discard, Cancel]);
    let cmd = update(&mut model, Msg::App(AppMsg::Quit), &mut confirm);

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(confirm.asked.len(), 2);
    assert_eq!(model.ui.status_message, "Quit cancelled");
}

#[test]
fn test_quit_saves_when_asked() {
    let (mut model, fs) = test_model();
    let a = fs.add_file("a.txt", b"a");
    update(
        &mut model,
        Msg::App(AppMsg::OpenFile(a.clone())),
        &mut FixedAnswer(Discard),
    );
    model.editor_area.insert_text("b");

    let cmd = update(&mut model, Msg::App(AppMsg::Quit), &mut FixedAnswer(Save));

    assert_eq!(cmd, Some(Cmd::Quit));
    assert_eq!(fs.text(&a).unwrap(), "ba");
}

#[test]
fn test_quit_saves_untitled_document_to_supplied_path() {
    let (mut model, fs) = test_model();
    model.editor_area.insert_text("notes");
    let target = mem_path("notes.txt");

    let mut confirm = Scripted::new(&[Save]).with_save_path(target.clone());
    let cmd = update(&mut model, Msg::App(AppMsg::Quit), &mut confirm);

    assert_eq!(cmd, Some(Cmd::Quit));
    assert_eq!(fs.text(&target).unwrap(), "notes");
    assert!(!model.editor_area.has_unsaved());
}

#[test]
fn test_save_untitled_prompts_for_path() {
    let (mut model, fs) = test_model();
    model.editor_area.insert_text("draft");

    let cmd = update(&mut model, Msg::App(AppMsg::SaveFile), &mut FixedAnswer(Discard));
    assert_eq!(cmd, Some(Cmd::PromptSaveAs));

    let target = mem_path("draft.txt");
    update(
        &mut model,
        Msg::App(AppMsg::SaveFileAs(target.clone())),
        &mut FixedAnswer(Discard),
    );
    assert_eq!(fs.text(&target).unwrap(), "draft");
    assert_eq!(model.window_title(), "Text Editor - draft.txt");
}
