//! Error types for configuration validation and traversal

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run before or during traversal.
///
/// Per-entry problems inside the walk (an unreadable subdirectory, a
/// failed metadata probe) are warnings, not errors; they skip the entry
/// or subtree and the walk continues.
#[derive(Error, Debug)]
pub enum FerretError {
    // Configuration
    #[error("{0}: No such comparator")]
    UnknownComparator(String),

    #[error("{0}: Invalid permission mask")]
    InvalidMask(String),

    #[error("{0}: Invalid depth level!")]
    InvalidDepth(String),

    #[error("{0}: No such user!")]
    UnknownUser(String),

    // Search root
    #[error("No such file or directory!")]
    RootNotDirectory(PathBuf),

    #[error("{}: Can't open directory!", .path.display())]
    RootNotOpenable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FerretError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::RootNotDirectory(p) | Self::RootNotOpenable { path: p, .. } => Some(p),
            _ => None,
        }
    }
}
