//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use splitpad::commands::Cmd;
use splitpad::config::EditorConfig;
use splitpad::confirm::{ConfirmChoice, ConfirmClose, FixedAnswer};
use splitpad::fs::{FileStat, FileSystem};
use splitpad::messages::Msg;
use splitpad::model::{AppModel, Document, EditorArea, MAX_GROUPS};
use splitpad::update::update;

/// Directory every in-memory file lives under
pub const MEM_ROOT: &str = "/splitpad-mem";

/// Absolute path of an in-memory file
pub fn mem_path(name: &str) -> PathBuf {
    Path::new(MEM_ROOT).join(name)
}

#[derive(Debug, Default)]
struct MemFsState {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    fail_writes: bool,
}

/// In-memory file system. Clones share state, so a test can keep one handle
/// while the editor area owns another.
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    state: Rc<RefCell<MemFsState>>,
}

impl MemFs {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.add_dir(Path::new(MEM_ROOT));
        fs
    }

    pub fn add_dir(&self, path: &Path) {
        self.state.borrow_mut().dirs.insert(path.to_path_buf());
    }

    /// Add a file under [`MEM_ROOT`] and return its path
    pub fn add_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = mem_path(name);
        self.state
            .borrow_mut()
            .files
            .insert(path.clone(), bytes.to_vec());
        path
    }

    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.state.borrow().files.get(path).cloned()
    }

    pub fn text(&self, path: &Path) -> Option<String> {
        self.contents(path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Make every subsequent write fail with `PermissionDenied`
    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl FileSystem for MemFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.state
            .borrow()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        state.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let state = self.state.borrow();
        if let Some(bytes) = state.files.get(path) {
            return Ok(FileStat {
                is_dir: false,
                len: bytes.len() as u64,
            });
        }
        if state.dirs.contains(path) {
            return Ok(FileStat { is_dir: true, len: 0 });
        }
        Err(io::Error::from(io::ErrorKind::NotFound))
    }
}

/// Editor area over a fresh in-memory file system
pub fn mem_area(max_groups: usize) -> (EditorArea, MemFs) {
    let fs = MemFs::new();
    let area = EditorArea::with_fs(Box::new(fs.clone()), max_groups);
    (area, fs)
}

/// Model over an in-memory file system, showing one blank document
pub fn test_model() -> (AppModel, MemFs) {
    test_model_with_limit(MAX_GROUPS)
}

pub fn test_model_with_limit(max_groups: usize) -> (AppModel, MemFs) {
    let (area, fs) = mem_area(max_groups);
    let config = EditorConfig {
        max_groups,
        ..EditorConfig::default()
    };
    (AppModel::with_area(area, config, Vec::new()), fs)
}

/// Run one message, discarding anything a close asks about
pub fn run(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    update(model, msg, &mut FixedAnswer(ConfirmChoice::Discard))
}

/// The layout in `H[1, V[2, 3]]` notation
pub fn shape(area: &EditorArea) -> String {
    area.layout().to_string()
}

/// Panic with every broken invariant
pub fn assert_healthy(area: &EditorArea) {
    let problems = area.check_invariants();
    assert!(problems.is_empty(), "invariants broken: {:?}", problems);
}

/// Answers confirmations from a queue and records which documents were asked
/// about. Runs out into Cancel. Untitled saves get `save_to`, if any.
#[derive(Debug, Default)]
pub struct Scripted {
    answers: VecDeque<ConfirmChoice>,
    save_to: Option<PathBuf>,
    pub asked: Vec<String>,
    pub asked_for_path: Vec<String>,
}

impl Scripted {
    pub fn new(answers: &[ConfirmChoice]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn with_save_path(mut self, path: PathBuf) -> Self {
        self.save_to = Some(path);
        self
    }
}

impl ConfirmClose for Scripted {
    fn confirm(&mut self, document: &Document) -> ConfirmChoice {
        self.asked.push(document.display_name());
        self.answers.pop_front().unwrap_or(ConfirmChoice::Cancel)
    }

    fn save_path(&mut self, document: &Document) -> Option<PathBuf> {
        self.asked_for_path.push(document.display_name());
        self.save_to.clone()
    }
}
