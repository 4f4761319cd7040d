//! Error types for theme-fs

use std::path::PathBuf;

/// Result type for theme-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in theme-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Source directory does not exist: {path}")]
    MissingSource { path: PathBuf },

    #[error("Refusing to copy {src} into its own subtree {dst}")]
    NestedCopy { src: PathBuf, dst: PathBuf },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
