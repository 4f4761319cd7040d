//! Backup path resolution

use theme_fs::NormalizedPath;

use crate::{Error, Result};

/// Separator between the theme directory name and the version tag.
pub const BACKUP_INFIX: &str = "-backup-";

/// Sibling directory holding the backup of `theme_dir` taken at `version`.
///
/// Pure: the same inputs always give the same path, so the version must be
/// the one captured when the backup was taken, not the live one.
pub fn backup_path(theme_dir: &NormalizedPath, version: &str) -> NormalizedPath {
    theme_dir.with_suffix(&format!("{}{}", BACKUP_INFIX, version))
}

/// Version tag of `backup` when it is named after the theme `slug`.
pub fn backup_tag<'a>(slug: &str, backup: &'a NormalizedPath) -> Option<&'a str> {
    backup
        .file_name()?
        .strip_prefix(slug)?
        .strip_prefix(BACKUP_INFIX)
        .filter(|tag| !tag.is_empty())
}

/// Directory name of the theme, used as its slug.
pub fn theme_slug(theme_dir: &NormalizedPath) -> Result<String> {
    theme_dir
        .file_name()
        .filter(|name| *name != "/" && *name != "." && *name != "..")
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidThemeDir {
            path: theme_dir.to_native(),
        })
}
