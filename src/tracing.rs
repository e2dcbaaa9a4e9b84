//! Tracing setup and layout snapshots
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=splitpad::model=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/splitpad/logs/splitpad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_NAME;
use crate::model::{EditorArea, GroupId};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. File logging
/// writes to `~/.config/splitpad/logs/splitpad.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG, stderr so the shell's stdout stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the layout for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub group_count: usize,
    pub document_count: usize,
    pub active_group: GroupId,
    /// Compact tree shape, e.g. `H[1, V[2, 3]]`
    pub shape: String,
}

impl LayoutSnapshot {
    pub fn from_area(area: &EditorArea) -> Self {
        Self {
            group_count: area.group_count(),
            document_count: area.documents().len(),
            active_group: area.active_group_id(),
            shape: area.layout().to_string(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.shape != other.shape {
            changes.push(format!("layout: {} → {}", self.shape, other.shape));
        }
        if self.active_group != other.active_group {
            changes.push(format!(
                "active: {} → {}",
                self.active_group.0, other.active_group.0
            ));
        }
        if self.document_count != other.document_count {
            changes.push(format!(
                "documents: {} → {}",
                self.document_count, other.document_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
