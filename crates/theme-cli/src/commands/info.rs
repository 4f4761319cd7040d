//! Info command implementation
//!
//! Shows what the theme declares and where its next backup would go.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use theme_core::{ThemeHeaders, UpdateCheckerConfig, backup_path};
use theme_fs::LocalFs;

use crate::context::ThemeContext;
use crate::error::Result;

/// Run the info command
pub fn run_info(theme: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let ctx = ThemeContext::resolve(theme, config)?;
    let headers = ThemeHeaders::read(&LocalFs, &ctx.dir)?;
    let backup = backup_path(&ctx.dir, &headers.version);
    let checker =
        UpdateCheckerConfig::from_theme(&LocalFs, &ctx.dir)?.apply(&ctx.config.update_checker);

    if json {
        let output = json!({
            "theme": ctx.dir.as_str(),
            "name": headers.name,
            "version": headers.version,
            "repository_uri": headers.repository_uri,
            "backup_path": backup.as_str(),
            "skip": ctx.config.skip,
            "delete_backup": ctx.config.delete_backup,
            "update_checker": {
                "repository_url": checker.repository_url,
                "theme_slug": checker.theme_slug,
                "branch": checker.branch,
                "authenticated": !checker.auth_token.is_empty(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Theme".blue().bold(), ctx.dir.as_str().yellow());
    println!();
    println!("  {:<14} {}", "Name:", display_or_unset(&headers.name));
    println!("  {:<14} {}", "Version:", display_or_unset(&headers.version));
    println!(
        "  {:<14} {}",
        "Repository:",
        display_or_unset(&headers.repository_uri)
    );
    println!("  {:<14} {}", "Next backup:", backup.as_str());
    println!(
        "  {:<14} {}",
        "Skip:",
        if ctx.config.skip.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            ctx.config.skip.join(", ")
        }
    );
    println!(
        "  {:<14} {}",
        "Keep backups:",
        if ctx.config.delete_backup { "no" } else { "yes" }
    );
    println!();
    println!("{}", "Update checker".bold());
    println!("  {:<14} {}", "Slug:", checker.theme_slug);
    println!("  {:<14} {}", "Branch:", checker.branch.cyan());
    println!(
        "  {:<14} {}",
        "Auth token:",
        if checker.auth_token.is_empty() {
            "not set"
        } else {
            "set"
        }
    );

    Ok(())
}

fn display_or_unset(value: &str) -> String {
    if value.is_empty() {
        "(not declared)".dimmed().to_string()
    } else {
        value.to_string()
    }
}
