//! Theme context resolution
//!
//! Every command works on one installed theme. This resolves the directory
//! given on the command line and loads the configuration that applies to it.

use std::path::Path;

use theme_core::UpdaterConfig;
use theme_fs::{NormalizedPath, ThemePath};

use crate::error::{CliError, Result};

/// A resolved theme directory and its configuration
#[derive(Debug, Clone)]
pub struct ThemeContext {
    pub dir: NormalizedPath,
    pub config: UpdaterConfig,
}

impl ThemeContext {
    /// Resolve `theme` and load `config`, or discover `theme-guard.toml` inside it.
    pub fn resolve(theme: &Path, config: Option<&Path>) -> Result<Self> {
        let dir = resolve_dir(theme)?;
        if !dir.join(ThemePath::Stylesheet.as_str()).is_file() {
            return Err(CliError::user(format!(
                "'{}' is not a theme: no {} found",
                dir,
                ThemePath::Stylesheet.as_str()
            )));
        }

        let config = match config {
            Some(path) => UpdaterConfig::load(&NormalizedPath::new(path))?,
            None => UpdaterConfig::discover(&dir)?,
        };
        tracing::debug!(theme = %dir, skip = ?config.skip, "Resolved theme");

        Ok(Self { dir, config })
    }
}

/// Canonicalize an existing directory without Windows verbatim prefixes.
pub fn resolve_dir(path: &Path) -> Result<NormalizedPath> {
    if !path.is_dir() {
        return Err(CliError::user(format!(
            "Directory not found: {}",
            path.display()
        )));
    }
    Ok(NormalizedPath::new(dunce::canonicalize(path)?))
}
