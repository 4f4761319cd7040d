//! Updater configuration
//!
//! Everything the surrounding application may override is gathered here and
//! handed to the [`Updater`](crate::Updater) at construction time:
//!
//! ```toml
//! skip = ["vendor", "assets/lib"]
//! delete_backup = false
//!
//! [update_checker]
//! branch = "main"
//! auth_token = "ghp_..."
//! ```

use serde::{Deserialize, Serialize};
use theme_fs::{ConfigStore, NormalizedPath, ThemePath};

use crate::{Error, Result};

/// File name looked up inside a theme directory when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = "theme-guard.toml";

fn default_skip() -> Vec<String> {
    vec![ThemePath::VendorDir.as_str().to_string()]
}

/// Settings for one theme's update cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Paths, relative to the theme root, that keep their freshly installed
    /// content instead of being restored from the backup
    #[serde(default = "default_skip")]
    pub skip: Vec<String>,

    /// Remove the backup once it has been restored
    #[serde(default)]
    pub delete_backup: bool,

    /// Overrides for the optional update checker
    #[serde(default)]
    pub update_checker: UpdateCheckerOverrides,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            skip: default_skip(),
            delete_backup: false,
            update_checker: UpdateCheckerOverrides::default(),
        }
    }
}

/// Per-field overrides for the update checker. `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCheckerOverrides {
    pub repository_url: Option<String>,
    pub local_theme_path: Option<String>,
    pub theme_slug: Option<String>,
    pub auth_token: Option<String>,
    pub branch: Option<String>,
}

impl UpdaterConfig {
    /// Load from TOML, JSON or YAML and validate.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let config: Self = ConfigStore::new().load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `theme-guard.toml` from `theme_dir` if present, otherwise defaults.
    pub fn discover(theme_dir: &NormalizedPath) -> Result<Self> {
        let candidate = theme_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate, "Using theme config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject skip entries that are empty, absolute, or climb out of the theme.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.skip {
            let reason = if entry.trim().is_empty() {
                Some("entry is empty")
            } else if entry.starts_with('/') || entry.starts_with('\\') || entry.contains(':') {
                Some("entry must be relative to the theme root")
            } else if entry.split(['/', '\\']).any(|part| part == "..") {
                Some("entry must not contain '..'")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(Error::InvalidSkipEntry {
                    entry: entry.clone(),
                    reason: reason.to_string(),
                });
            }
        }
        Ok(())
    }
}
