//! Update command implementation
//!
//! Installs an unpacked theme package with both lifecycle steps registered,
//! the way a host platform's upgrader would.

use std::path::Path;
use std::rc::Rc;

use colored::Colorize;

use theme_core::{Lifecycle, ThemeHeaders, ThemeUpgrader, Updater};
use theme_fs::LocalFs;

use crate::context::{ThemeContext, resolve_dir};
use crate::error::Result;

/// Run the update command
pub fn run_update(theme: &Path, package: &Path, config: Option<&Path>) -> Result<()> {
    let ctx = ThemeContext::resolve(theme, config)?;
    let package = resolve_dir(package)?;
    let delete_backup = ctx.config.delete_backup;

    let updater = Rc::new(Updater::new(
        ctx.dir.clone(),
        Box::new(LocalFs),
        ctx.config,
    )?);
    let backup = updater.current_backup_path()?;

    let mut lifecycle = Lifecycle::new();
    Rc::clone(&updater).register(&mut lifecycle);

    let report = ThemeUpgrader::new(&mut lifecycle, &LocalFs).upgrade(&ctx.dir, &package)?;
    let headers = ThemeHeaders::read(&LocalFs, &ctx.dir)?;

    println!(
        "{} Updated {} to {} ({} file(s) installed)",
        "OK".green().bold(),
        report.theme.cyan(),
        headers.version,
        report.files_installed
    );
    if delete_backup {
        println!("   Customizations restored, backup deleted");
    } else {
        println!(
            "   Customizations restored, backup kept at {}",
            backup.as_str().yellow()
        );
    }

    Ok(())
}
