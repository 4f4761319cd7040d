//! Theme backup location, listing and drift detection
//!
//! A backup is a full copy of the theme directory stored next to it as
//! `{theme}-backup-{version}`, where `version` is the declared version at the
//! moment the backup was taken.

mod drift;
mod listing;
mod path;

pub use drift::{DriftEntry, DriftKind, DriftReport, drift_between};
pub use listing::{ThemeBackup, list_backups};
pub use path::{BACKUP_INFIX, backup_path, backup_tag, theme_slug};
