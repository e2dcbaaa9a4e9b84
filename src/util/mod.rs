//! Utility modules

pub mod file_validation;
pub mod paths;

// Re-export file validation utilities
pub use file_validation::{
    decode_text, filename_for_display, looks_binary, validate_file_for_opening,
    validate_save_target, FileOpenError, MAX_FILE_SIZE,
};
pub use paths::canonical_path;
