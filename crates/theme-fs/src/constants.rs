//! Well-known file and directory names inside a theme package.

use std::path::Path;

/// Standard theme package markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePath {
    /// `style.css`, carrying the theme header block
    Stylesheet,
    /// `functions.php`, the entry file every theme ships
    Functions,
    /// `vendor`, third-party dependencies refreshed by updates
    VendorDir,
}

impl ThemePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stylesheet => "style.css",
            Self::Functions => "functions.php",
            Self::VendorDir => "vendor",
        }
    }
}

impl AsRef<Path> for ThemePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ThemePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ThemePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
