//! Filesystem abstraction for Theme Guard
//!
//! Provides normalized paths, atomic writes, recursive copies with skip
//! lists, and the [`FileSystem`] collaborator trait the updater is built on.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod filesystem;
pub mod io;
pub mod path;
pub mod tree;

pub use config::ConfigStore;
pub use constants::ThemePath;
pub use error::{Error, Result};
pub use filesystem::{DirEntry, FileSystem, LocalFs};
pub use path::NormalizedPath;
pub use tree::CopyReport;
