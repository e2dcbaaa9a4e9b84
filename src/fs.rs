//! File-system collaborator
//!
//! The editor core never touches `std::fs` directly for document content;
//! it goes through [`FileSystem`] so the shell can substitute its own storage.

use std::fmt::Debug;
use std::io;
use std::path::Path;

/// Minimal metadata needed before opening or saving a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub is_dir: bool,
    pub len: u64,
}

/// File access used by the editor area
pub trait FileSystem: Debug {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
    fn stat(&self, path: &Path) -> io::Result<FileStat>;
}

/// The local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        std::fs::write(path, bytes)
    }

    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let metadata = std::fs::metadata(path)?;
        Ok(FileStat {
            is_dir: metadata.is_dir(),
            len: metadata.len(),
        })
    }
}
