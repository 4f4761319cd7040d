//! [`TestTheme`] builder for update scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stylesheet content declaring `name` and `version`.
pub fn stylesheet(name: &str, version: &str) -> String {
    format!(
        "/*\nTheme Name: {name}\nTemplate: parent\nVersion: {version}\nGithub URI: https://github.com/acme/{slug}\n*/\n\nbody {{ color: #333; }}\n",
        slug = name.to_lowercase().replace(' ', "-"),
    )
}

/// A temporary `themes/` directory with one installed theme.
///
/// The installed theme carries customized files; [`TestTheme::package`]
/// builds an upstream release of the same theme next to it.
///
/// # Example
///
/// ```rust,no_run
/// use theme_test_utils::TestTheme;
///
/// let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
/// let package = theme.package("2.0.0");
/// theme.assert_file_contains("functions.php", "customized");
/// ```
pub struct TestTheme {
    temp_dir: TempDir,
    slug: String,
    name: String,
}

impl TestTheme {
    /// Install a customized theme at `themes/{slug}`.
    pub fn new(slug: &str, name: &str, version: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let this = Self {
            temp_dir,
            slug: slug.to_string(),
            name: name.to_string(),
        };

        let dir = this.dir();
        fs::create_dir_all(&dir).unwrap();
        this.write("style.css", &stylesheet(name, version));
        this.write("functions.php", "<?php\n// customized functions\n");
        this.write("templates/header.php", "<header>customized</header>\n");
        this.write("vendor/autoload.php", &format!("<?php // vendor {version}\n"));
        this
    }

    /// Root of the temporary `themes/` directory.
    pub fn themes_root(&self) -> PathBuf {
        self.temp_dir.path().join("themes")
    }

    /// Installed theme directory.
    pub fn dir(&self) -> PathBuf {
        self.themes_root().join(&self.slug)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expected backup directory for a backup taken at `version`.
    pub fn backup_dir(&self, version: &str) -> PathBuf {
        self.themes_root().join(format!("{}-backup-{}", self.slug, version))
    }

    /// Write `content` to `rel` inside the installed theme.
    pub fn write(&self, rel: &str, content: &str) {
        write_file(&self.dir().join(rel), content);
    }

    /// Remove `rel` from the installed theme.
    pub fn remove(&self, rel: &str) {
        let path = self.dir().join(rel);
        if path.is_dir() {
            fs::remove_dir_all(&path).unwrap();
        } else {
            fs::remove_file(&path).unwrap();
        }
    }

    /// Read `rel` inside the installed theme.
    pub fn read(&self, rel: &str) -> String {
        let path = self.dir().join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Could not read {}: {e}", path.display()))
    }

    /// Build an upstream release at `upgrade/{slug}` with stock files and a
    /// refreshed vendor directory.
    pub fn package(&self, version: &str) -> PathBuf {
        let dir = self
            .temp_dir
            .path()
            .join("upgrade")
            .join(version)
            .join(&self.slug);
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        write_file(&dir.join("style.css"), &stylesheet(&self.name, version));
        write_file(&dir.join("functions.php"), "<?php\n// upstream functions\n");
        write_file(&dir.join("templates/header.php"), "<header>upstream</header>\n");
        write_file(&dir.join("templates/footer.php"), "<footer>upstream</footer>\n");
        write_file(&dir.join("vendor/autoload.php"), &format!("<?php // vendor {version}\n"));
        dir
    }

    /// Assert that `rel` (inside the installed theme) exists.
    pub fn assert_file_exists(&self, rel: &str) {
        let path = self.dir().join(rel);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that the installed file `rel` contains `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let actual = self.read(rel);
        assert!(
            actual.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            rel,
            content,
            actual
        );
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
