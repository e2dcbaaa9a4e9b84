//! splitpad - multi-document, multi-pane editor core
//!
//! This crate provides the document/view ownership model and the split-pane
//! layout engine, driven through the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod confirm;
pub mod error;
pub mod fs;
pub mod language;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use confirm::{ConfirmChoice, ConfirmClose};
pub use error::EditorError;
pub use messages::Msg;
pub use model::{AppModel, EditorArea};
