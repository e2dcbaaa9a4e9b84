//! File validation utilities for opening and saving files
//!
//! Validates files before they reach a document, checking for:
//! - File existence and permissions
//! - File size limits
//! - Binary file detection (magic signatures and null bytes)
//! - UTF-8 decoding

use std::io;
use std::path::Path;

use crate::fs::FileSystem;

/// Default maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Number of leading bytes inspected by [`looks_binary`]
pub const BINARY_SNIFF_LEN: usize = 512;

/// Known binary file signatures, matched against the start of the content
const BINARY_SIGNATURES: &[&[u8]] = &[
    b"\x7fELF",             // ELF executable
    b"MZ\x90\x00",          // Windows executable
    b"\x89PNG\r\n",         // PNG image
    b"\xff\xd8\xff",        // JPEG image
    b"GIF8",                // GIF image
    b"%PDF",                // PDF
    b"PK\x03\x04",          // ZIP archive
    b"\x1f\x8b\x08",        // GZIP
    b"BM",                  // BMP image
    b"II\x2a\x00",          // TIFF (little-endian)
    b"MM\x00\x2a",          // TIFF (big-endian)
    b"Rar!",                // RAR archive
    b"7z\xbc\xaf",          // 7-zip archive
    b"\xca\xfe\xba\xbe",    // Java class file
    b"\xfe\xed\xfa",        // Mach-O binary
    b"Kadu\x00",            // Krita document
    b"\x00\x00\x01\x00",    // Windows icon
];

/// Errors that can occur when validating a file for opening or saving
#[derive(Debug, Clone, PartialEq)]
pub enum FileOpenError {
    /// File does not exist
    NotFound,
    /// Permission denied to read or write the file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File matches a binary signature or contains null bytes
    BinaryFile,
    /// File is readable but not valid UTF-8
    InvalidUtf8,
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// Other I/O error
    IoError(String),
}

impl FileOpenError {
    /// Map an I/O error onto the user-facing categories
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::IoError(err.to_string()),
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::BinaryFile => format!("Cannot open binary file: {}", filename),
            Self::InvalidUtf8 => format!("Incompatible file (not UTF-8 text): {}", filename),
            Self::TooLarge { size_mb } => {
                format!("{} is too large ({:.1} MB)", filename, size_mb)
            }
            Self::IoError(msg) => format!("Error opening {}: {}", filename, msg),
        }
    }
}

impl std::fmt::Display for FileOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary file"),
            Self::InvalidUtf8 => write!(f, "not valid UTF-8"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileOpenError {}

/// Validate a file before attempting to open it
///
/// Checks:
/// - File exists
/// - Is not a directory
/// - Has read permissions
/// - Does not exceed `max_size` bytes
///
/// Does NOT check content (use `looks_binary` and `decode_text` on the bytes)
pub fn validate_file_for_opening(
    fs: &dyn FileSystem,
    path: &Path,
    max_size: u64,
) -> Result<(), FileOpenError> {
    let stat = fs.stat(path).map_err(|e| FileOpenError::from_io(&e))?;

    if stat.is_dir {
        return Err(FileOpenError::IsDirectory);
    }

    if stat.len > max_size {
        return Err(FileOpenError::TooLarge {
            size_mb: stat.len as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Validate a save target: the path must not be a directory and its
/// parent directory must exist.
pub fn validate_save_target(fs: &dyn FileSystem, path: &Path) -> Result<(), FileOpenError> {
    if let Ok(stat) = fs.stat(path) {
        if stat.is_dir {
            return Err(FileOpenError::IsDirectory);
        }
    }

    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => match fs.stat(parent) {
            Ok(stat) if stat.is_dir => Ok(()),
            Ok(_) => Err(FileOpenError::NotFound),
            Err(e) => Err(FileOpenError::from_io(&e)),
        },
        None => Ok(()),
    }
}

/// Check if content is likely binary
///
/// Looks at the first [`BINARY_SNIFF_LEN`] bytes for a known magic signature,
/// then for null bytes, which are common in binary files but rare in text.
pub fn looks_binary(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];

    if BINARY_SIGNATURES.iter().any(|sig| head.starts_with(sig)) {
        return true;
    }

    head.contains(&0)
}

/// Decode file content as UTF-8 text
pub fn decode_text(bytes: Vec<u8>) -> Result<String, FileOpenError> {
    String::from_utf8(bytes).map_err(|_| FileOpenError::InvalidUtf8)
}

/// Get the filename from a path for display in error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::RealFs;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_validate_nonexistent_file() {
        let result =
            validate_file_for_opening(&RealFs, Path::new("/nonexistent/path/file.txt"), MAX_FILE_SIZE);
        assert_eq!(result, Err(FileOpenError::NotFound));
    }

    #[test]
    fn test_validate_directory() {
        let dir = TempDir::new().unwrap();
        let result = validate_file_for_opening(&RealFs, dir.path(), MAX_FILE_SIZE);
        assert_eq!(result, Err(FileOpenError::IsDirectory));
    }

    #[test]
    fn test_validate_valid_file() {
        let temp = NamedTempFile::new().unwrap();
        let result = validate_file_for_opening(&RealFs, temp.path(), MAX_FILE_SIZE);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_too_large() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"0123456789").unwrap();
        temp.flush().unwrap();

        let result = validate_file_for_opening(&RealFs, temp.path(), 4);
        assert!(matches!(result, Err(FileOpenError::TooLarge { .. })));
    }

    #[test]
    fn test_validate_save_target() {
        let dir = TempDir::new().unwrap();
        assert!(validate_save_target(&RealFs, &dir.path().join("new.txt")).is_ok());
        assert_eq!(
            validate_save_target(&RealFs, &dir.path().join("missing/new.txt")),
            Err(FileOpenError::NotFound)
        );
        assert_eq!(
            validate_save_target(&RealFs, dir.path()),
            Err(FileOpenError::IsDirectory)
        );
    }

    #[test]
    fn test_looks_binary_text() {
        assert!(!looks_binary(b"Hello, world!\nThis is a text file.\n"));
        assert!(!looks_binary(b""));
    }

    #[test]
    fn test_looks_binary_signatures() {
        assert!(looks_binary(b"\x89PNG\r\n\x1a\n"));
        assert!(looks_binary(b"%PDF-1.7\n"));
        assert!(looks_binary(b"\x7fELF\x02\x01"));
        assert!(looks_binary(b"GIF89a"));
        assert!(looks_binary(b"PK\x03\x04rest"));
    }

    #[test]
    fn test_looks_binary_with_null_bytes() {
        assert!(looks_binary(b"Hello\x00World"));
    }

    #[test]
    fn test_looks_binary_ignores_null_past_sniff_window() {
        let mut bytes = vec![b'a'; BINARY_SNIFF_LEN];
        bytes.push(0);
        assert!(!looks_binary(&bytes));
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text(b"caf\xc3\xa9".to_vec()).unwrap(), "café");
        assert_eq!(
            decode_text(b"caf\xe9".to_vec()),
            Err(FileOpenError::InvalidUtf8)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FileOpenError::NotFound.user_message("test.txt"),
            "File not found: test.txt"
        );
        assert_eq!(
            FileOpenError::IsDirectory.user_message("mydir"),
            "Cannot open directory: mydir"
        );
        assert_eq!(
            FileOpenError::BinaryFile.user_message("image.png"),
            "Cannot open binary file: image.png"
        );
    }

    #[test]
    fn test_from_io_kinds() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(FileOpenError::from_io(&err), FileOpenError::PermissionDenied);
        let err = io::Error::new(io::ErrorKind::Other, "disk on fire");
        assert_eq!(
            FileOpenError::from_io(&err),
            FileOpenError::IoError("disk on fire".to_string())
        );
    }
}
