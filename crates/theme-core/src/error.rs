//! Error types for theme-core

use std::path::PathBuf;

/// Result type for theme-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in theme-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The theme directory path has no final component to derive a slug from
    #[error("Theme directory has no name: {path}")]
    InvalidThemeDir { path: PathBuf },

    /// A skip-list entry would escape the theme directory
    #[error("Invalid skip entry {entry:?}: {reason}")]
    InvalidSkipEntry { entry: String, reason: String },

    /// A pre-update handler rejected the update; the host aborted it
    #[error("Update of {theme} rejected before install")]
    UpdateRejected { theme: String },

    /// The incoming package already carried an error
    #[error("Upgrade source reported an error: {message}")]
    SourceError { message: String },

    /// The backup to restore from does not exist
    #[error("No backup found at {path}")]
    BackupNotFound { path: PathBuf },

    /// The backup was already merged once and its stylesheet relabeled
    #[error("Backup at {path} was already restored and is labeled {label:?}")]
    BackupAlreadyRestored { path: PathBuf, label: String },

    /// Filesystem error from theme-fs
    #[error(transparent)]
    Fs(#[from] theme_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
