//! Content drift between a backup and the live theme

use serde::Serialize;
use std::collections::BTreeSet;
use theme_fs::{NormalizedPath, checksum, tree};

use crate::Result;

/// How a file differs between backup and live theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriftKind {
    /// Present in both with different content
    Modified,
    /// Present only in the backup
    BackupOnly,
    /// Present only in the live theme
    LiveOnly,
}

impl std::fmt::Display for DriftKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Modified => write!(f, "modified"),
            Self::BackupOnly => write!(f, "backup-only"),
            Self::LiveOnly => write!(f, "live-only"),
        }
    }
}

/// A single differing file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftEntry {
    /// Path relative to the theme root
    pub path: String,
    pub kind: DriftKind,
}

/// All differences found, sorted by path
#[derive(Debug, Clone, Default, Serialize)]
pub struct DriftReport {
    pub entries: Vec<DriftEntry>,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn of_kind(&self, kind: DriftKind) -> impl Iterator<Item = &DriftEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}

/// Compare `backup` against `live`, ignoring skip-listed paths on both sides.
pub fn drift_between(
    backup: &NormalizedPath,
    live: &NormalizedPath,
    skip: &[String],
) -> Result<DriftReport> {
    let backup_files: BTreeSet<String> = tree::walk_files(backup, skip)?.into_iter().collect();
    let live_files: BTreeSet<String> = tree::walk_files(live, skip)?.into_iter().collect();

    let mut entries = Vec::new();
    for path in backup_files.union(&live_files) {
        let kind = match (backup_files.contains(path), live_files.contains(path)) {
            (true, false) => Some(DriftKind::BackupOnly),
            (false, true) => Some(DriftKind::LiveOnly),
            _ => {
                let ours = checksum::compute_entry_checksum(&backup.join(path))?;
                let theirs = checksum::compute_entry_checksum(&live.join(path))?;
                (ours != theirs).then_some(DriftKind::Modified)
            }
        };
        if let Some(kind) = kind {
            entries.push(DriftEntry {
                path: path.clone(),
                kind,
            });
        }
    }

    tracing::debug!(backup = %backup, live = %live, drifted = entries.len(), "Computed drift");
    Ok(DriftReport { entries })
}
