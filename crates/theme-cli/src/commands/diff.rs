//! Diff command implementation
//!
//! Compares a backup against the installed theme, ignoring skip-listed paths.

use std::path::Path;

use colored::Colorize;
use similar::TextDiff;

use theme_core::{DriftKind, DriftReport, drift_between};
use theme_fs::NormalizedPath;

use crate::context::{ThemeContext, resolve_dir};
use crate::error::Result;

/// Run the diff command
///
/// With `verbose`, modified text files are shown as unified diffs.
pub fn run_diff(
    theme: &Path,
    backup: &Path,
    config: Option<&Path>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let ctx = ThemeContext::resolve(theme, config)?;
    let backup = resolve_dir(backup)?;
    let report = drift_between(&backup, &ctx.dir, &ctx.config.skip)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, &backup, &ctx.dir);
    if verbose {
        for entry in report.of_kind(DriftKind::Modified) {
            print_file_diff(&backup, &ctx.dir, &entry.path);
        }
    }

    Ok(())
}

fn print_report(report: &DriftReport, backup: &NormalizedPath, live: &NormalizedPath) {
    if report.is_clean() {
        println!(
            "{} Theme matches backup {}",
            "OK".green().bold(),
            backup.as_str().yellow()
        );
        return;
    }

    println!(
        "{} {} vs {}",
        "Diff".blue().bold(),
        backup.as_str().yellow(),
        live.as_str().yellow()
    );
    println!();
    for entry in &report.entries {
        let marker = match entry.kind {
            DriftKind::Modified => "~".yellow(),
            DriftKind::BackupOnly => "-".red(),
            DriftKind::LiveOnly => "+".green(),
        };
        println!("  {} {:<40} {}", marker, entry.path, entry.kind.to_string().dimmed());
    }
    println!();
    println!("{} file(s) differ", report.entries.len());
}

fn print_file_diff(backup: &NormalizedPath, live: &NormalizedPath, rel: &str) {
    let (Ok(old), Ok(new)) = (
        std::fs::read_to_string(backup.join(rel).to_native()),
        std::fs::read_to_string(live.join(rel).to_native()),
    ) else {
        tracing::debug!(path = rel, "Skipping non-text file in diff");
        return;
    };

    let diff = TextDiff::from_lines(&old, &new);
    let unified = diff
        .unified_diff()
        .context_radius(3)
        .header(&format!("backup/{rel}"), &format!("live/{rel}"))
        .to_string();

    println!();
    for line in unified.lines() {
        if line.starts_with("---") || line.starts_with("+++") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }
}
