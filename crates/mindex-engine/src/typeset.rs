use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesetError {
    #[error("could not run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The tool ran but reported failure; its combined output is captured so
    /// the user can inspect it.
    #[error("{command} exited with {status}")]
    Failed {
        command: String,
        status: ExitStatus,
        output: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("no known way to open documents on this platform")]
    UnsupportedPlatform,

    #[error("could not launch {command}: {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

/// Turns TeX source into a viewable document.
///
/// Implementations own their working space; the returned path stays valid
/// until the implementation is dropped.
pub trait Typesetter {
    fn render_document(&self, source: &str) -> Result<PathBuf, TypesetError>;
}

/// Best-effort "show this file to the user" action.
pub trait DocumentViewer {
    fn open_document(&self, path: &Path) -> Result<(), ViewError>;
}
