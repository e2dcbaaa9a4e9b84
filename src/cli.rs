//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening one or more files as tabs
//! - New empty buffer mode
//! - Overriding the pane limit for a session

use clap::Parser;
use std::path::PathBuf;

use crate::config::EditorConfig;

/// A multi-pane text editor shell
#[derive(Parser, Debug)]
#[command(name = "splitpad", version, about = "A multi-pane text editor shell")]
pub struct CliArgs {
    /// Files to open
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Start with an empty buffer, ignoring PATHS
    #[arg(short = 'n', long)]
    pub new: bool,

    /// Maximum number of panes (overrides the config file)
    #[arg(long, value_name = "N")]
    pub max_groups: Option<usize>,
}

/// The startup mode determines what to open
#[derive(Debug, Clone, PartialEq)]
pub enum StartupMode {
    /// Start with an empty buffer
    Empty,
    /// Open a single file
    SingleFile(PathBuf),
    /// Open multiple files as tabs
    MultipleFiles(Vec<PathBuf>),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// What files to open
    pub mode: StartupMode,
    /// Pane limit override
    pub max_groups: Option<usize>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.max_groups == Some(0) {
            return Err("--max-groups must be at least 1".to_string());
        }

        let mode = if self.new || self.paths.is_empty() {
            StartupMode::Empty
        } else if self.paths.len() == 1 {
            StartupMode::SingleFile(self.paths[0].clone())
        } else {
            StartupMode::MultipleFiles(self.paths)
        };

        Ok(StartupConfig {
            mode,
            max_groups: self.max_groups,
        })
    }
}

impl StartupConfig {
    /// Get file paths to open
    pub fn file_paths(&self) -> Vec<PathBuf> {
        match &self.mode {
            StartupMode::Empty => vec![],
            StartupMode::SingleFile(path) => vec![path.clone()],
            StartupMode::MultipleFiles(paths) => paths.clone(),
        }
    }

    /// Apply command-line overrides on top of the loaded config
    pub fn apply_to(&self, config: &mut EditorConfig) {
        if let Some(max_groups) = self.max_groups {
            config.max_groups = max_groups;
        }
    }
}
