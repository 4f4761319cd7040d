//! Theme header parsing
//!
//! Themes declare their identity in a comment block at the top of
//! `style.css`:
//!
//! ```text
//! /*
//! Theme Name: Astra Child
//! Version: 1.2.0
//! Github URI: https://github.com/acme/astra-child
//! */
//! ```
//!
//! Only the first 8 KiB are searched. Labels match case-insensitively at the
//! start of a line after any comment decoration (`*`, `#`, `@`, `/`), and a
//! trailing `*/` or `?>` is cut from the value.

use regex::Regex;
use theme_fs::{FileSystem, NormalizedPath, ThemePath};

use crate::Result;

/// How much of a file is scanned for headers.
pub const HEADER_SCAN_BYTES: usize = 8 * 1024;

/// Header label for the theme's display name.
pub const NAME_LABEL: &str = "Theme Name";
/// Header label for the declared version.
pub const VERSION_LABEL: &str = "Version";
/// Header label for the remote repository used by the update checker.
pub const REPOSITORY_LABEL: &str = "Github URI";

/// Header fields read from a theme's stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeHeaders {
    pub name: String,
    pub version: String,
    pub repository_uri: String,
}

impl ThemeHeaders {
    /// Parse headers out of stylesheet content. Absent fields are empty.
    pub fn parse(content: &str) -> Self {
        let head = header_block(content);
        Self {
            name: header_field(&head, NAME_LABEL),
            version: header_field(&head, VERSION_LABEL),
            repository_uri: header_field(&head, REPOSITORY_LABEL),
        }
    }

    /// Read and parse `style.css` inside `theme_dir`.
    pub fn read(fs: &dyn FileSystem, theme_dir: &NormalizedPath) -> Result<Self> {
        let stylesheet = stylesheet_path(theme_dir);
        let content = fs.read_file(&stylesheet)?;
        Ok(Self::parse(&content))
    }
}

/// Location of the metadata file inside a theme or backup directory.
pub fn stylesheet_path(dir: &NormalizedPath) -> NormalizedPath {
    dir.join(ThemePath::Stylesheet.as_str())
}

/// Value of a single header `label` in `content`, or an empty string.
pub fn header_field(content: &str, label: &str) -> String {
    let head = header_block(content);
    let pattern = format!(
        r"(?mi)^(?:[ \t]*<\?php)?[ \t/*#@]*{}:(.*)$",
        regex::escape(label)
    );
    let Ok(re) = Regex::new(&pattern) else {
        return String::new();
    };

    re.captures(&head)
        .and_then(|caps| caps.get(1))
        .map(|m| cleanup_header_value(m.as_str()))
        .unwrap_or_default()
}

/// Read the repository URI declared in the theme's stylesheet.
pub fn repository_uri(fs: &dyn FileSystem, theme_dir: &NormalizedPath) -> Result<String> {
    let content = fs.read_file(&stylesheet_path(theme_dir))?;
    Ok(header_field(&content, REPOSITORY_LABEL))
}

fn header_block(content: &str) -> String {
    let mut end = content.len().min(HEADER_SCAN_BYTES);
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    content[..end].replace('\r', "\n")
}

fn cleanup_header_value(raw: &str) -> String {
    let cut = [raw.find("*/"), raw.find("?>")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(raw.len());
    raw[..cut].trim().to_string()
}
