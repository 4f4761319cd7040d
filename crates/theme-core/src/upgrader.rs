//! Reference host for a single theme update
//!
//! Drives the same sequence a platform upgrader runs: offer the unpacked
//! package to source-selection handlers, replace the installed theme with the
//! package, then hand the result to post-install handlers.

use theme_fs::{FileSystem, NormalizedPath};

use crate::backup::theme_slug;
use crate::lifecycle::{HookExtra, InstallResult, Lifecycle, Source, SourceSelection, UpgradeKind};
use crate::{Error, Result};

/// Summary of one completed update
#[derive(Debug, Clone)]
pub struct UpgradeReport {
    pub theme: String,
    pub destination: NormalizedPath,
    /// Files copied from the package into the destination
    pub files_installed: usize,
    /// Final response returned by the post-install handlers
    pub response: bool,
}

/// Installs theme packages, firing lifecycle handlers around the install.
pub struct ThemeUpgrader<'a> {
    lifecycle: &'a mut Lifecycle,
    fs: &'a dyn FileSystem,
}

impl<'a> ThemeUpgrader<'a> {
    pub fn new(lifecycle: &'a mut Lifecycle, fs: &'a dyn FileSystem) -> Self {
        Self { lifecycle, fs }
    }

    /// Replace the theme at `theme_dir` with the package unpacked at `package_dir`.
    pub fn upgrade(
        &mut self,
        theme_dir: &NormalizedPath,
        package_dir: &NormalizedPath,
    ) -> Result<UpgradeReport> {
        let theme = theme_slug(theme_dir)?;
        let extra = HookExtra::for_theme(&theme);

        let selection = SourceSelection {
            source: Source::Path(package_dir.clone()),
            remote_source: package_dir.clone(),
            kind: UpgradeKind::Theme,
            extra: extra.clone(),
        };

        let source = match self.lifecycle.select_source(selection)? {
            Source::Path(path) => path,
            Source::Rejected => {
                tracing::warn!(theme = %theme, "Update rejected, leaving installed theme in place");
                return Err(Error::UpdateRejected { theme });
            }
            Source::Error(message) => return Err(Error::SourceError { message }),
        };

        tracing::info!(theme = %theme, source = %source, "Installing package");
        self.fs.delete_tree(theme_dir)?;
        let copied = self.fs.copy_tree(&source, theme_dir, &[])?;

        let result = InstallResult {
            source: Some(source),
            destination: Some(theme_dir.clone()),
            destination_name: Some(theme.clone()),
            clear_destination: true,
        };
        let response = self.lifecycle.post_install(true, &extra, &result)?;

        Ok(UpgradeReport {
            theme,
            destination: theme_dir.clone(),
            files_installed: copied.files_copied,
            response,
        })
    }
}
