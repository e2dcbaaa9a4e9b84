//! Canonical path derivation for the document registry
//!
//! `std::fs::canonicalize` only works for paths that exist. Save targets
//! usually don't exist yet, so the parent directory is canonicalized instead
//! and the file name re-attached. Anything still unresolvable is made absolute
//! against the current directory and lexically normalized.

use std::path::{Component, Path, PathBuf};

/// Normalized absolute path used as the registry key
pub fn canonical_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let absolute = absolutize(path);

    if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
        if let Ok(parent) = parent.canonicalize() {
            return parent.join(name);
        }
    }

    normalize_lexically(&absolute)
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Resolve `.` and `..` without touching the file system
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
