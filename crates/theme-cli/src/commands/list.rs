//! List command implementation

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use theme_core::list_backups;
use theme_fs::LocalFs;

use crate::context::ThemeContext;
use crate::error::Result;

/// Run the list command
pub fn run_list(theme: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let ctx = ThemeContext::resolve(theme, config)?;
    let backups = list_backups(&LocalFs, &ctx.dir)?;

    if json {
        let output: Vec<_> = backups
            .iter()
            .map(|b| {
                json!({
                    "path": b.path.as_str(),
                    "tag": b.tag,
                    "name": b.headers.name,
                    "version": b.headers.version,
                    "modified": b.modified.map(|m| m.to_rfc3339()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if backups.is_empty() {
        println!("{} No backups found for {}", "=>".blue().bold(), ctx.dir);
        return Ok(());
    }

    println!("{}", "Backups".bold());
    println!();
    for backup in &backups {
        let modified = backup
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "  {:<12} {:<32} {}",
            backup.tag.green(),
            backup.headers.name,
            modified.dimmed()
        );
        println!("  {:<12} {}", "", backup.path.as_str().dimmed());
    }

    Ok(())
}
