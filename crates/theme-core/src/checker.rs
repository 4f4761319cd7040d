//! Optional update-checker bootstrap
//!
//! A remote update checker is an external collaborator that polls a code
//! repository for newer theme releases. When the host provides one through an
//! [`UpdateCheckerFactory`], this module assembles its configuration from the
//! theme's stylesheet and the configured overrides and constructs it.

use serde::Serialize;
use theme_fs::{FileSystem, NormalizedPath};

use crate::backup::theme_slug;
use crate::config::UpdateCheckerOverrides;
use crate::metadata;
use crate::Result;

/// Branch used when nothing else is configured.
pub const DEFAULT_BRANCH: &str = "master";

/// Values handed to the update checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCheckerConfig {
    pub repository_url: String,
    pub local_theme_path: NormalizedPath,
    pub theme_slug: String,
    pub auth_token: String,
    pub branch: String,
}

impl UpdateCheckerConfig {
    /// Defaults derived from the theme itself.
    pub fn from_theme(fs: &dyn FileSystem, theme_dir: &NormalizedPath) -> Result<Self> {
        Ok(Self {
            repository_url: metadata::repository_uri(fs, theme_dir)?,
            local_theme_path: theme_dir.clone(),
            theme_slug: theme_slug(theme_dir)?,
            auth_token: String::new(),
            branch: DEFAULT_BRANCH.to_string(),
        })
    }

    /// Replace every field that has an override.
    pub fn apply(mut self, overrides: &UpdateCheckerOverrides) -> Self {
        if let Some(url) = &overrides.repository_url {
            self.repository_url = url.clone();
        }
        if let Some(path) = &overrides.local_theme_path {
            self.local_theme_path = NormalizedPath::new(path);
        }
        if let Some(slug) = &overrides.theme_slug {
            self.theme_slug = slug.clone();
        }
        if let Some(token) = &overrides.auth_token {
            self.auth_token = token.clone();
        }
        if let Some(branch) = &overrides.branch {
            self.branch = branch.clone();
        }
        self
    }
}

/// A constructed update checker.
pub trait UpdateChecker {
    fn set_branch(&mut self, branch: &str);
    fn set_authentication(&mut self, token: &str);
}

/// Builds update checkers; present only when the host ships one.
pub trait UpdateCheckerFactory {
    fn build(
        &self,
        repository_url: &str,
        local_theme_path: &NormalizedPath,
        theme_slug: &str,
    ) -> Box<dyn UpdateChecker>;
}

/// Construct and configure the update checker if a factory is available.
///
/// Returns `None` without touching the filesystem when there is no factory.
pub fn bootstrap_update_checker(
    factory: Option<&dyn UpdateCheckerFactory>,
    fs: &dyn FileSystem,
    theme_dir: &NormalizedPath,
    overrides: &UpdateCheckerOverrides,
) -> Result<Option<Box<dyn UpdateChecker>>> {
    let Some(factory) = factory else {
        tracing::debug!("No update checker available");
        return Ok(None);
    };

    let config = UpdateCheckerConfig::from_theme(fs, theme_dir)?.apply(overrides);
    let mut checker = factory.build(
        &config.repository_url,
        &config.local_theme_path,
        &config.theme_slug,
    );
    checker.set_branch(&config.branch);
    if !config.auth_token.is_empty() {
        checker.set_authentication(&config.auth_token);
    }

    tracing::info!(
        slug = %config.theme_slug,
        repository = %config.repository_url,
        branch = %config.branch,
        "Update checker configured"
    );
    Ok(Some(checker))
}
