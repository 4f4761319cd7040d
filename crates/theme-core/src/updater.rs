//! Backup and restore-and-merge steps of a theme update
//!
//! [`Updater::before_update`] copies the whole theme aside before the host
//! replaces it. [`Updater::after_update`] writes the customized files back
//! over the fresh install, leaving skip-listed paths (by default `vendor`)
//! at their updated content, and relabels the backup as an archive of the
//! previous release.
//!
//! The backup location is computed once, from the version declared at backup
//! time, and kept as the pending backup until the restore step consumes it.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use theme_fs::{CopyReport, FileSystem, NormalizedPath, ThemePath};

use crate::backup::{backup_path, backup_tag, theme_slug};
use crate::config::UpdaterConfig;
use crate::edit::{bump_version_field, is_backup_label, rename_backup_label};
use crate::lifecycle::{HookExtra, InstallResult, Lifecycle, Source, SourceSelection, UpgradeKind};
use crate::metadata::{ThemeHeaders, stylesheet_path};
use crate::{Error, Result};

/// A backup taken by the current update cycle and not yet restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBackup {
    pub path: NormalizedPath,
    /// Version declared by the theme when the backup was taken
    pub version: String,
    pub created: DateTime<Utc>,
}

/// Outcome of a restore-and-merge step
#[derive(Debug, Clone)]
pub struct RestoreReport {
    pub backup: NormalizedPath,
    pub previous_version: String,
    pub new_version: String,
    /// Label now carried by the backup's stylesheet
    pub backup_label: String,
    pub copy: CopyReport,
    pub backup_deleted: bool,
}

/// Protects one theme's customizations across updates.
pub struct Updater {
    theme_dir: NormalizedPath,
    fs: Box<dyn FileSystem>,
    config: UpdaterConfig,
    pending: RefCell<Option<PendingBackup>>,
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("theme_dir", &self.theme_dir)
            .field("config", &self.config)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Updater {
    /// Create an updater for the theme installed at `theme_dir`.
    pub fn new(
        theme_dir: NormalizedPath,
        fs: Box<dyn FileSystem>,
        config: UpdaterConfig,
    ) -> Result<Self> {
        config.validate()?;
        theme_slug(&theme_dir)?;
        Ok(Self {
            theme_dir,
            fs,
            config,
            pending: RefCell::new(None),
        })
    }

    pub fn theme_dir(&self) -> &NormalizedPath {
        &self.theme_dir
    }

    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// The backup recorded by the last successful backup step, if any.
    pub fn pending_backup(&self) -> Option<PendingBackup> {
        self.pending.borrow().clone()
    }

    /// Where a backup taken right now would be placed.
    pub fn current_backup_path(&self) -> Result<NormalizedPath> {
        let headers = ThemeHeaders::read(self.fs.as_ref(), &self.theme_dir)?;
        Ok(backup_path(&self.theme_dir, &headers.version))
    }

    /// Register both steps on the host's lifecycle.
    pub fn register(self: Rc<Self>, lifecycle: &mut Lifecycle) {
        let updater = Rc::clone(&self);
        lifecycle.register_pre_update(Box::new(move |selection: &SourceSelection| {
            updater.before_update(selection)
        }));
        let updater = self;
        lifecycle.register_post_install(Box::new(
            move |response: bool, extra: &HookExtra, result: &InstallResult| {
                updater.after_update(response, extra, result)
            },
        ));
    }

    /// Back up the theme before its files are replaced.
    ///
    /// Returns the incoming source untouched when it already failed or the
    /// update is not a theme update. Returns [`Source::Rejected`] when the
    /// backup lacks the theme's entry file.
    pub fn before_update(&self, selection: &SourceSelection) -> Result<Source> {
        if selection.source.is_failed() || selection.kind != UpgradeKind::Theme {
            tracing::debug!(kind = %selection.kind, "Not a pending theme update, passing through");
            return Ok(selection.source.clone());
        }

        let headers = ThemeHeaders::read(self.fs.as_ref(), &self.theme_dir)?;
        let backup = backup_path(&self.theme_dir, &headers.version);

        self.fs.ensure_dir(&backup)?;
        let report = self.fs.copy_tree(&self.theme_dir, &backup, &[])?;
        tracing::debug!(
            backup = %backup,
            files = report.files_copied,
            "Copied theme to backup"
        );

        if !self.fs.exists(&backup.join(ThemePath::Functions.as_str())) {
            tracing::warn!(backup = %backup, "Backup is missing the entry file, rejecting update");
            return Ok(Source::Rejected);
        }

        tracing::info!(
            theme = %self.theme_dir,
            backup = %backup,
            version = %headers.version,
            "Theme backed up"
        );
        *self.pending.borrow_mut() = Some(PendingBackup {
            path: backup,
            version: headers.version,
            created: Utc::now(),
        });

        Ok(selection.source.clone())
    }

    /// Merge customizations back into the freshly installed theme.
    ///
    /// Always returns `response` unchanged.
    pub fn after_update(
        &self,
        response: bool,
        _extra: &HookExtra,
        result: &InstallResult,
    ) -> Result<bool> {
        let Some(destination) = result.destination.as_ref().filter(|_| response) else {
            tracing::debug!(response, "Install failed or has no destination, nothing to restore");
            return Ok(response);
        };

        let Some(pending) = self.pending_backup() else {
            tracing::warn!(destination = %destination, "No backup recorded for this update");
            return Ok(response);
        };

        // Cleared only after a successful restore.
        self.restore_from(&pending.path)?;
        *self.pending.borrow_mut() = None;
        Ok(response)
    }

    /// Run the restore-and-merge step against an explicit backup directory.
    ///
    /// Refuses a backup whose stylesheet was already relabeled by an earlier
    /// restore.
    pub fn restore_from(&self, backup: &NormalizedPath) -> Result<RestoreReport> {
        let fs = self.fs.as_ref();
        if !fs.exists(backup) {
            return Err(Error::BackupNotFound {
                path: backup.to_native(),
            });
        }
        let new_headers = ThemeHeaders::read(fs, &self.theme_dir)?;

        let backup_stylesheet = stylesheet_path(backup);
        let old_contents = fs.read_file(&backup_stylesheet)?;
        let old_headers = ThemeHeaders::parse(&old_contents);

        let slug = theme_slug(&self.theme_dir)?;
        if let Some(tag) = backup_tag(&slug, backup)
            && is_backup_label(&old_headers.name, tag)
        {
            tracing::warn!(backup = %backup, name = %old_headers.name, "Backup was already restored");
            return Err(Error::BackupAlreadyRestored {
                path: backup.to_native(),
                label: old_headers.name,
            });
        }

        let bumped = bump_version_field(&old_contents, &old_headers.version, &new_headers.version);
        fs.write_file(&backup_stylesheet, &bumped)?;

        let copy = fs.copy_tree(backup, &self.theme_dir, &self.config.skip)?;
        tracing::debug!(
            files = copy.files_copied,
            skipped = ?copy.skipped,
            "Restored customizations"
        );

        let current = fs.read_file(&backup_stylesheet)?;
        let relabeled = rename_backup_label(&current, &old_headers.name, &old_headers.version);
        fs.write_file(&backup_stylesheet, &relabeled)?;

        let backup_deleted = self.config.delete_backup;
        if backup_deleted {
            fs.delete_tree(backup)?;
            tracing::debug!(backup = %backup, "Deleted backup");
        }

        tracing::info!(
            theme = %self.theme_dir,
            from = %old_headers.version,
            to = %new_headers.version,
            "Customizations restored"
        );

        Ok(RestoreReport {
            backup: backup.clone(),
            backup_label: ThemeHeaders::parse(&relabeled).name,
            previous_version: old_headers.version,
            new_version: new_headers.version,
            copy,
            backup_deleted,
        })
    }
}
