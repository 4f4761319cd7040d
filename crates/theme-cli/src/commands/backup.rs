//! Backup command implementation
//!
//! Runs only the pre-update step, leaving the installed theme untouched.

use std::path::Path;

use colored::Colorize;

use theme_core::{HookExtra, Source, SourceSelection, Updater, UpgradeKind};
use theme_fs::LocalFs;

use crate::context::ThemeContext;
use crate::error::{CliError, Result};

/// Run the backup command
pub fn run_backup(theme: &Path, config: Option<&Path>) -> Result<()> {
    let ctx = ThemeContext::resolve(theme, config)?;
    let slug = ctx.dir.file_name().unwrap_or_default().to_string();
    let updater = Updater::new(ctx.dir.clone(), Box::new(LocalFs), ctx.config)?;

    let selection = SourceSelection {
        source: Source::Path(ctx.dir.clone()),
        remote_source: ctx.dir.clone(),
        kind: UpgradeKind::Theme,
        extra: HookExtra::for_theme(&slug),
    };

    match updater.before_update(&selection)? {
        Source::Rejected => Err(CliError::user(format!(
            "Backup of {} is incomplete; an update would be rejected",
            slug
        ))),
        Source::Error(message) => Err(CliError::user(message)),
        Source::Path(_) => {
            let Some(pending) = updater.pending_backup() else {
                return Err(CliError::user("No backup was recorded"));
            };
            println!(
                "{} Backed up {} {} to {}",
                "OK".green().bold(),
                slug.cyan(),
                pending.version,
                pending.path.as_str().yellow()
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_test_utils::TestTheme;

    #[test]
    fn backup_creates_versioned_copy() {
        let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
        run_backup(&theme.dir(), None).unwrap();

        let backup = theme.backup_dir("1.0.0");
        assert!(backup.join("functions.php").is_file());
        assert!(backup.join("vendor/autoload.php").is_file());
    }

    #[test]
    fn backup_without_entry_file_is_reported() {
        let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
        theme.remove("functions.php");

        let err = run_backup(&theme.dir(), None).unwrap_err();
        assert!(err.to_string().contains("incomplete"));
    }
}
