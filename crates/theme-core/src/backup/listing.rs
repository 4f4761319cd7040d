//! Discovery of existing backups next to a theme

use chrono::{DateTime, Utc};
use theme_fs::{FileSystem, NormalizedPath};

use super::path::{backup_tag, theme_slug};
use crate::metadata::ThemeHeaders;
use crate::{Error, Result};

/// A backup directory found next to a theme
#[derive(Debug, Clone)]
pub struct ThemeBackup {
    /// Path to the backup directory
    pub path: NormalizedPath,
    /// Version tag taken from the directory name
    pub tag: String,
    /// Headers currently declared by the backup's stylesheet
    pub headers: ThemeHeaders,
    /// Last modification time of the backup directory
    pub modified: Option<DateTime<Utc>>,
}

/// List every `{slug}-backup-*` sibling of `theme_dir`, sorted by directory name.
pub fn list_backups(
    fs: &dyn FileSystem,
    theme_dir: &NormalizedPath,
) -> Result<Vec<ThemeBackup>> {
    let slug = theme_slug(theme_dir)?;
    let Some(parent) = theme_dir.parent() else {
        return Ok(Vec::new());
    };
    if !fs.exists(&parent) {
        return Ok(Vec::new());
    }

    let mut backups = Vec::new();
    for entry in fs.list_dir(&parent)? {
        if !entry.is_dir {
            continue;
        }
        let path = parent.join(&entry.name);
        let Some(tag) = backup_tag(&slug, &path).map(str::to_string) else {
            continue;
        };

        let headers = match ThemeHeaders::read(fs, &path) {
            Ok(headers) => headers,
            Err(Error::Fs(e)) => {
                tracing::debug!(path = %path, error = %e, "Backup has no readable stylesheet");
                ThemeHeaders::default()
            }
            Err(e) => return Err(e),
        };

        backups.push(ThemeBackup {
            path,
            tag,
            headers,
            modified: entry.modified.map(DateTime::<Utc>::from),
        });
    }

    backups.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(backups)
}
