//! Recursive directory operations with skip lists
//!
//! A skip list holds paths relative to the copy root. A plain entry such as
//! `vendor` excludes that name at the top level only; a nested entry such as
//! `assets/vendor` is handed down to the `assets` subdirectory as `vendor`.

use crate::{Error, NormalizedPath, Result};
use std::fs;

/// Outcome of a recursive copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Number of regular files written to the destination
    pub files_copied: usize,
    /// Number of directories created in the destination
    pub dirs_created: usize,
    /// Relative paths that were left out because of the skip list
    pub skipped: Vec<String>,
}

impl CopyReport {
    fn absorb(&mut self, other: CopyReport) {
        self.files_copied += other.files_copied;
        self.dirs_created += other.dirs_created;
        self.skipped.extend(other.skipped);
    }
}

/// Copy the contents of `src` into `dst`, overwriting files that already
/// exist and leaving destination-only files in place.
pub fn copy_tree(
    src: &NormalizedPath,
    dst: &NormalizedPath,
    skip: &[String],
) -> Result<CopyReport> {
    if !src.is_dir() {
        return Err(Error::MissingSource {
            path: src.to_native(),
        });
    }
    if dst.is_within(src) {
        return Err(Error::NestedCopy {
            src: src.to_native(),
            dst: dst.to_native(),
        });
    }

    tracing::debug!(src = %src, dst = %dst, skip = ?skip, "Copying directory tree");
    let mut report = CopyReport::default();
    if !dst.exists() {
        fs::create_dir_all(dst.to_native()).map_err(|e| Error::io(dst.to_native(), e))?;
        report.dirs_created += 1;
    }
    report.absorb(copy_level(src, dst, skip, "")?);
    Ok(report)
}

fn copy_level(
    src: &NormalizedPath,
    dst: &NormalizedPath,
    skip: &[String],
    prefix: &str,
) -> Result<CopyReport> {
    let mut report = CopyReport::default();
    let native_src = src.to_native();

    let mut entries = fs::read_dir(&native_src)
        .map_err(|e| Error::io(&native_src, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(&native_src, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let relative = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };

        if skip.iter().any(|s| s.trim_matches('/') == name) {
            tracing::debug!(path = %relative, "Skipping excluded entry");
            report.skipped.push(relative);
            continue;
        }

        let from = src.join(&name);
        let to = dst.join(&name);
        let file_type = entry.file_type().map_err(|e| Error::io(from.to_native(), e))?;

        if file_type.is_dir() {
            if !to.is_dir() {
                fs::create_dir_all(to.to_native()).map_err(|e| Error::io(to.to_native(), e))?;
                report.dirs_created += 1;
            }
            let nested = nested_skip_list(skip, &name);
            report.absorb(copy_level(&from, &to, &nested, &relative)?);
        } else if file_type.is_symlink() {
            copy_symlink(&from, &to)?;
            report.files_copied += 1;
        } else {
            fs::copy(from.to_native(), to.to_native()).map_err(|e| Error::io(to.to_native(), e))?;
            report.files_copied += 1;
        }
    }

    Ok(report)
}

/// Skip entries that apply beneath `dir`, with the `dir/` prefix removed.
fn nested_skip_list(skip: &[String], dir: &str) -> Vec<String> {
    let prefix = format!("{}/", dir);
    skip.iter()
        .filter_map(|s| s.trim_start_matches('/').strip_prefix(&prefix))
        .filter(|rest| !rest.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(unix)]
fn copy_symlink(from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
    let target = fs::read_link(from.to_native()).map_err(|e| Error::io(from.to_native(), e))?;
    if fs::symlink_metadata(to.to_native()).is_ok() {
        remove_path(to)?;
    }
    std::os::unix::fs::symlink(&target, to.to_native()).map_err(|e| Error::io(to.to_native(), e))
}

#[cfg(not(unix))]
fn copy_symlink(from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
    fs::copy(from.to_native(), to.to_native())
        .map(|_| ())
        .map_err(|e| Error::io(to.to_native(), e))
}

#[cfg(unix)]
fn remove_path(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    let meta = fs::symlink_metadata(&native).map_err(|e| Error::io(&native, e))?;
    if meta.is_dir() {
        fs::remove_dir_all(&native).map_err(|e| Error::io(&native, e))
    } else {
        fs::remove_file(&native).map_err(|e| Error::io(&native, e))
    }
}

/// Recursively delete `path`. A missing path is not an error.
pub fn delete_tree(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    match fs::symlink_metadata(&native) {
        Ok(meta) if meta.is_dir() => {
            tracing::debug!(path = %path, "Deleting directory tree");
            fs::remove_dir_all(&native).map_err(|e| Error::io(&native, e))
        }
        Ok(_) => fs::remove_file(&native).map_err(|e| Error::io(&native, e)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(&native, e)),
    }
}

/// List every file under `root` as a sorted relative path, honoring the
/// same skip-list rules as [`copy_tree`].
///
/// Symlinks are listed as entries of their own and never followed.
pub fn walk_files(root: &NormalizedPath, skip: &[String]) -> Result<Vec<String>> {
    let mut files = Vec::new();
    if root.is_dir() {
        walk_level(root, skip, "", &mut files)?;
    }
    files.sort();
    Ok(files)
}

fn walk_level(
    dir: &NormalizedPath,
    skip: &[String],
    prefix: &str,
    out: &mut Vec<String>,
) -> Result<()> {
    let native = dir.to_native();
    for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if skip.iter().any(|s| s.trim_matches('/') == name) {
            continue;
        }
        let relative = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if file_type.is_dir() {
            walk_level(&dir.join(&name), &nested_skip_list(skip, &name), &relative, out)?;
        } else {
            out.push(relative);
        }
    }
    Ok(())
}
