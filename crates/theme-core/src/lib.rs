//! Core backup and restore logic for Theme Guard
//!
//! Keeps a customized theme's edits alive across package updates:
//!
//! - **Backup step**: before the host replaces a theme, copy the whole
//!   directory to `{theme}-backup-{version}` and veto the update if the copy
//!   is incomplete.
//! - **Restore step**: after the new files are installed, copy the backup back
//!   over them, except for skip-listed paths such as `vendor`, then relabel the
//!   backup as an archive of the previous release.
//!
//! # Architecture
//!
//! ```text
//!                  theme-cli
//!                      |
//!                 theme-core
//!     lifecycle -- updater -- upgrader
//!                      |
//!                  theme-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::rc::Rc;
//! use theme_core::{Lifecycle, ThemeUpgrader, Updater, UpdaterConfig};
//! use theme_fs::{LocalFs, NormalizedPath};
//!
//! fn example() -> theme_core::Result<()> {
//!     let theme = NormalizedPath::new("/srv/wp-content/themes/astra-child");
//!     let updater = Rc::new(Updater::new(
//!         theme.clone(),
//!         Box::new(LocalFs),
//!         UpdaterConfig::default(),
//!     )?);
//!
//!     let mut lifecycle = Lifecycle::new();
//!     updater.register(&mut lifecycle);
//!
//!     let package = NormalizedPath::new("/tmp/upgrade/astra-child");
//!     ThemeUpgrader::new(&mut lifecycle, &LocalFs).upgrade(&theme, &package)?;
//!     Ok(())
//! }
//! ```

pub mod backup;
pub mod checker;
pub mod config;
pub mod edit;
pub mod error;
pub mod lifecycle;
pub mod metadata;
pub mod updater;
pub mod upgrader;

pub use backup::{
    DriftKind, DriftReport, ThemeBackup, backup_path, backup_tag, drift_between, list_backups,
};
pub use checker::{UpdateChecker, UpdateCheckerConfig, UpdateCheckerFactory, bootstrap_update_checker};
pub use config::{UpdateCheckerOverrides, UpdaterConfig};
pub use edit::{bump_version_field, is_backup_label, rename_backup_label};
pub use error::{Error, Result};
pub use lifecycle::{HookExtra, InstallResult, Lifecycle, Source, SourceSelection, UpgradeKind};
pub use metadata::ThemeHeaders;
pub use updater::{PendingBackup, RestoreReport, Updater};
pub use upgrader::{ThemeUpgrader, UpgradeReport};
