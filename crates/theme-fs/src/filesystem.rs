//! Filesystem collaborator interface
//!
//! The updater never touches `std::fs` directly; it is handed a
//! [`FileSystem`] so hosts can substitute their own storage layer.

use crate::tree::{self, CopyReport};
use crate::{Error, NormalizedPath, Result, io};
use std::fs;
use std::time::SystemTime;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    /// True for real directories; symlinks are never reported as directories
    pub is_dir: bool,
    pub modified: Option<SystemTime>,
}

/// Operations the updater needs from the host's storage layer.
pub trait FileSystem {
    /// Recursively copy `src` into `dst`, leaving out `exclude` entries.
    fn copy_tree(
        &self,
        src: &NormalizedPath,
        dst: &NormalizedPath,
        exclude: &[String],
    ) -> Result<CopyReport>;

    /// Recursively delete `path`.
    fn delete_tree(&self, path: &NormalizedPath) -> Result<()>;

    /// Read a whole file as text.
    fn read_file(&self, path: &NormalizedPath) -> Result<String>;

    /// Replace a file's content.
    fn write_file(&self, path: &NormalizedPath, content: &str) -> Result<()>;

    /// Create a directory and any missing parents.
    fn ensure_dir(&self, path: &NormalizedPath) -> Result<()>;

    /// Whether `path` exists.
    fn exists(&self, path: &NormalizedPath) -> bool;

    /// Entries directly under `path`, sorted by name.
    fn list_dir(&self, path: &NormalizedPath) -> Result<Vec<DirEntry>>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn copy_tree(
        &self,
        src: &NormalizedPath,
        dst: &NormalizedPath,
        exclude: &[String],
    ) -> Result<CopyReport> {
        tree::copy_tree(src, dst, exclude)
    }

    fn delete_tree(&self, path: &NormalizedPath) -> Result<()> {
        tree::delete_tree(path)
    }

    fn read_file(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text(path)
    }

    fn write_file(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        io::write_text(path, content)
    }

    fn ensure_dir(&self, path: &NormalizedPath) -> Result<()> {
        let native = path.to_native();
        fs::create_dir_all(&native).map_err(|e| Error::io(&native, e))
    }

    fn exists(&self, path: &NormalizedPath) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &NormalizedPath) -> Result<Vec<DirEntry>> {
        let native = path.to_native();
        let mut entries = Vec::new();
        for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
            let entry = entry.map_err(|e| Error::io(&native, e))?;
            let metadata =
                fs::symlink_metadata(entry.path()).map_err(|e| Error::io(entry.path(), e))?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: metadata.is_dir(),
                modified: metadata.modified().ok(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
