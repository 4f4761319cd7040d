//! Restore command implementation

use std::path::Path;

use colored::Colorize;

use theme_core::Updater;
use theme_fs::LocalFs;

use crate::context::{ThemeContext, resolve_dir};
use crate::error::Result;

/// Run the restore command
///
/// Applies the restore-and-merge step to the installed theme using `backup`
/// as the source of customizations.
pub fn run_restore(theme: &Path, backup: &Path, config: Option<&Path>) -> Result<()> {
    let ctx = ThemeContext::resolve(theme, config)?;
    let backup = resolve_dir(backup)?;
    let updater = Updater::new(ctx.dir.clone(), Box::new(LocalFs), ctx.config)?;

    let report = updater.restore_from(&backup)?;

    println!(
        "{} Restored {} file(s) from {}",
        "OK".green().bold(),
        report.copy.files_copied,
        report.backup.as_str().yellow()
    );
    if !report.copy.skipped.is_empty() {
        println!(
            "   Kept updated: {}",
            report.copy.skipped.join(", ").cyan()
        );
    }
    if report.backup_deleted {
        println!("   Backup deleted");
    } else {
        println!("   Backup relabeled as '{}'", report.backup_label);
    }

    Ok(())
}
