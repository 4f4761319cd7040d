//! Update lifecycle hooks
//!
//! The host platform exposes two extension points around a package update:
//! source selection, right before the installed files are replaced, and
//! post-install, right after the new files are in place. Handlers are
//! registered on a [`Lifecycle`] and run in registration order, each one
//! receiving what the previous handler returned.

use std::collections::BTreeMap;
use std::fmt;

use theme_fs::NormalizedPath;

use crate::Result;

/// The package source flowing through source-selection handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Directory holding the unpacked package
    Path(NormalizedPath),
    /// An earlier stage already failed
    Error(String),
    /// A handler vetoed the update; the host must abort
    Rejected,
}

impl Source {
    /// Whether the source no longer points at an installable package.
    pub fn is_failed(&self) -> bool {
        !matches!(self, Self::Path(_))
    }

    pub fn path(&self) -> Option<&NormalizedPath> {
        match self {
            Self::Path(path) => Some(path),
            _ => None,
        }
    }
}

/// What kind of package the host is updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeKind {
    Theme,
    Plugin,
    Core,
    Language,
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme => write!(f, "theme"),
            Self::Plugin => write!(f, "plugin"),
            Self::Core => write!(f, "core"),
            Self::Language => write!(f, "language"),
        }
    }
}

/// Extra arguments the host passes along to every handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookExtra {
    pub vars: BTreeMap<String, String>,
}

impl HookExtra {
    /// Context for updating the theme identified by `slug`.
    pub fn for_theme(slug: &str) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert("type".to_string(), UpgradeKind::Theme.to_string());
        vars.insert("action".to_string(), "update".to_string());
        vars.insert("theme".to_string(), slug.to_string());
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// Arguments of the source-selection hook.
#[derive(Debug, Clone)]
pub struct SourceSelection {
    /// Current source, possibly already replaced by an earlier handler
    pub source: Source,
    /// Where the package was originally unpacked
    pub remote_source: NormalizedPath,
    /// Which upgrader is running
    pub kind: UpgradeKind,
    pub extra: HookExtra,
}

/// What the host reports once the new files are installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallResult {
    pub source: Option<NormalizedPath>,
    /// Directory the package was installed into
    pub destination: Option<NormalizedPath>,
    pub destination_name: Option<String>,
    /// Whether the destination was wiped before installing
    pub clear_destination: bool,
}

/// Handler run before installed files are replaced.
pub type PreUpdateHandler = Box<dyn FnMut(&SourceSelection) -> Result<Source>>;

/// Handler run after the new files are installed.
pub type PostInstallHandler = Box<dyn FnMut(bool, &HookExtra, &InstallResult) -> Result<bool>>;

/// Registry of update lifecycle handlers.
#[derive(Default)]
pub struct Lifecycle {
    pre_update: Vec<PreUpdateHandler>,
    post_install: Vec<PostInstallHandler>,
}

impl fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("pre_update", &self.pre_update.len())
            .field("post_install", &self.post_install.len())
            .finish()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_pre_update(&mut self, handler: PreUpdateHandler) {
        self.pre_update.push(handler);
    }

    pub fn register_post_install(&mut self, handler: PostInstallHandler) {
        self.post_install.push(handler);
    }

    /// Run every source-selection handler and return the final source.
    ///
    /// Stops at the first handler error.
    pub fn select_source(&mut self, mut selection: SourceSelection) -> Result<Source> {
        for handler in &mut self.pre_update {
            selection.source = handler(&selection)?;
        }
        Ok(selection.source)
    }

    /// Run every post-install handler and return the final response.
    pub fn post_install(
        &mut self,
        mut response: bool,
        extra: &HookExtra,
        result: &InstallResult,
    ) -> Result<bool> {
        for handler in &mut self.post_install {
            response = handler(response, extra, result)?;
        }
        Ok(response)
    }
}
