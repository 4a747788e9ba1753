//! Error taxonomy for the scaffolding pipeline

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Every way a scaffolding run can abort
///
/// The pipeline never retries or rolls back: each variant is reported once
/// by the TUI layer and the process exits with code 1.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The target directory was already present when the run started
    #[error("That directory seems to already exist: {}", .0.display())]
    DirectoryExists(PathBuf),

    /// The package manager could not be spawned or exited unsuccessfully
    #[error("`{command}` failed: {reason}")]
    ExternalProcess { command: String, reason: String },

    /// A directory, read or write operation failed
    #[error("Failed to {action} {}", path.display())]
    FileSystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// package.json was unreadable as a JSON object
    #[error("Failed to parse {}: {reason}", path.display())]
    ManifestParse { path: PathBuf, reason: String },

    /// The dispatcher was handed a combination the prompts never produce
    #[error("No template matches {0}")]
    UnmappedTemplate(String),

    /// Prompts need a terminal on stdin
    #[error("nodegen is interactive and needs a terminal; stdin is not a TTY")]
    NotInteractive,
}

impl ScaffoldError {
    pub(crate) fn fs(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::FileSystem {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
