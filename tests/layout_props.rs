//! Property tests: random sequences of layout operations keep every
//! cross-structure invariant, never nest more than one level below the
//! root and never exceed the leaf ceiling.

mod common;

use common::{mem_area, MemFs};
use proptest::prelude::*;
use splitpad::confirm::{ConfirmChoice, FixedAnswer};
use splitpad::model::{EditorArea, SplitDirection};

#[derive(Debug, Clone)]
enum Op {
    Split(SplitDirection),
    SplitWithCurrent(SplitDirection),
    AddPane(SplitDirection),
    CloseActiveSplit,
    CloseSplitAt(usize),
    CloseActiveTab,
    FocusIndex(usize),
    FocusNext,
    NewBlank,
    OpenShared(usize),
    Type(String),
    SaveAs(usize),
}

fn direction() -> impl Strategy<Value = SplitDirection> {
    prop_oneof![
        Just(SplitDirection::Horizontal),
        Just(SplitDirection::Vertical)
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => direction().prop_map(Op::Split),
        2 => direction().prop_map(Op::SplitWithCurrent),
        2 => direction().prop_map(Op::AddPane),
        2 => Just(Op::CloseActiveSplit),
        1 => (0usize..6).prop_map(Op::CloseSplitAt),
        2 => Just(Op::CloseActiveTab),
        2 => (1usize..7).prop_map(Op::FocusIndex),
        1 => Just(Op::FocusNext),
        1 => Just(Op::NewBlank),
        2 => (0usize..3).prop_map(Op::OpenShared),
        2 => "[a-z]{1,4}".prop_map(Op::Type),
        1 => (0usize..3).prop_map(Op::SaveAs),
    ]
}

fn apply(area: &mut EditorArea, fs: &MemFs, op: Op, answer: ConfirmChoice) {
    let mut confirm = FixedAnswer(answer);
    match op {
        Op::Split(d) => {
            area.split(d);
        }
        Op::SplitWithCurrent(d) => {
            area.split_with_current(d);
        }
        Op::AddPane(d) => {
            area.add_pane(d);
        }
        Op::CloseActiveSplit => {
            area.close_active_split(&mut confirm);
        }
        Op::CloseSplitAt(i) => {
            if let Some(&group) = area.layout().group_ids().get(i) {
                area.close_split(group, &mut confirm);
            }
        }
        Op::CloseActiveTab => {
            area.close_active_tab(&mut confirm);
        }
        Op::FocusIndex(i) => {
            area.focus_group_by_index(i);
        }
        Op::FocusNext => area.focus_next_group(),
        Op::NewBlank => {
            area.new_blank();
        }
        Op::OpenShared(i) => {
            let path = shared_path(fs, i);
            let _ = area.open_path(&path);
        }
        Op::Type(text) => {
            area.insert_text(&text);
        }
        Op::SaveAs(i) => {
            let _ = area.save_as(&common::mem_path(&format!("saved-{}.txt", i)));
        }
    }
}

fn shared_path(fs: &MemFs, i: usize) -> std::path::PathBuf {
    let name = format!("shared-{}.txt", i);
    let path = common::mem_path(&name);
    if fs.contents(&path).is_none() {
        fs.add_file(&name, format!("file {}\n", i).as_bytes());
    }
    path
}

proptest! {
    #[test]
    fn random_operations_preserve_invariants(
        max_groups in 1usize..6,
        ops in prop::collection::vec(op(), 1..60),
        answer in prop_oneof![
            Just(ConfirmChoice::Save),
            Just(ConfirmChoice::Discard),
            Just(ConfirmChoice::Cancel),
        ],
    ) {
        let (mut area, fs) = mem_area(max_groups);
        area.new_blank();

        for op in ops {
            let before = area.layout().leaf_count();
            let full = area.layout().is_full();
            let splits = matches!(op, Op::Split(_) | Op::SplitWithCurrent(_) | Op::AddPane(_));

            apply(&mut area, &fs, op.clone(), answer);

            let problems = area.check_invariants();
            prop_assert!(problems.is_empty(), "after {:?}: {:?}", op, problems);
            prop_assert!(area.layout().leaf_count() >= 1);
            prop_assert!(area.layout().leaf_count() <= max_groups);
            prop_assert!(area.layout().depth() <= 2, "after {:?}: {}", op, area.layout());
            if splits && full {
                prop_assert_eq!(area.layout().leaf_count(), before);
            }
        }
    }

    #[test]
    fn every_live_document_is_visible(
        ops in prop::collection::vec(op(), 1..40),
    ) {
        let (mut area, fs) = mem_area(5);
        area.new_blank();

        for op in ops {
            apply(&mut area, &fs, op, ConfirmChoice::Discard);
        }

        for doc in area.documents().iter() {
            prop_assert!(doc.view_count() >= 1, "{} has no view", doc.display_name());
            for &pane in doc.views() {
                prop_assert_eq!(
                    area.pane(pane).map(|p| p.document_id()),
                    Some(doc.id)
                );
            }
        }
    }
}
