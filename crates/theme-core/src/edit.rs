//! Textual edits applied to a backup's stylesheet.
//!
//! Both edits are whole-content find/replace: every occurrence of the search
//! string is rewritten, not only the header field. An empty search string
//! leaves the content untouched.

/// Replace every occurrence of `old_version` with `new_version`.
pub fn bump_version_field(content: &str, old_version: &str, new_version: &str) -> String {
    if old_version.is_empty() || old_version == new_version {
        return content.to_string();
    }
    content.replace(old_version, new_version)
}

/// Label for a backup of `name` taken at `version`.
pub fn backup_label(name: &str, version: &str) -> String {
    format!("{} Backup {}", name, version)
}

/// Whether `name` already carries the label for a backup taken at `version`.
pub fn is_backup_label(name: &str, version: &str) -> bool {
    !version.is_empty() && name.ends_with(&backup_label("", version))
}

/// Replace every occurrence of `name` with `"<name> Backup <version>"`.
pub fn rename_backup_label(content: &str, name: &str, version: &str) -> String {
    if name.is_empty() {
        return content.to_string();
    }
    content.replace(name, &backup_label(name, version))
}
