//! End-to-end test of an update cycle across theme-fs and theme-core
//!
//! Exercises the complete flow: config discovery -> backup -> install ->
//! restore-and-merge -> backup relabel.

use pretty_assertions::assert_eq;
use std::fs;
use std::rc::Rc;

use theme_core::{Lifecycle, ThemeUpgrader, Updater, UpdaterConfig, list_backups};
use theme_fs::{LocalFs, NormalizedPath};
use theme_test_utils::TestTheme;

fn updater_for(theme: &TestTheme) -> Rc<Updater> {
    let dir = NormalizedPath::new(theme.dir());
    let config = UpdaterConfig::discover(&dir).unwrap();
    Rc::new(Updater::new(dir, Box::new(LocalFs), config).unwrap())
}

#[test]
fn test_nested_skip_entries_keep_upstream_content() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    theme.write(
        "theme-guard.toml",
        "skip = [\"vendor\", \"assets/vendor\"]\n",
    );
    theme.write("assets/vendor/slider.js", "// slider 1.0\n");
    theme.write("assets/css/site.css", "/* customized */\n");

    let package = theme.package("2.0.0");
    fs::create_dir_all(package.join("assets/vendor")).unwrap();
    fs::write(package.join("assets/vendor/slider.js"), "// slider 2.0\n").unwrap();

    let updater = updater_for(&theme);
    let mut lifecycle = Lifecycle::new();
    Rc::clone(&updater).register(&mut lifecycle);

    let dir = NormalizedPath::new(theme.dir());
    ThemeUpgrader::new(&mut lifecycle, &LocalFs)
        .upgrade(&dir, &NormalizedPath::new(&package))
        .unwrap();

    assert_eq!(theme.read("assets/vendor/slider.js"), "// slider 2.0\n");
    assert_eq!(theme.read("assets/css/site.css"), "/* customized */\n");
    assert_eq!(theme.read("vendor/autoload.php"), "<?php // vendor 2.0.0\n");
    theme.assert_file_contains("functions.php", "customized functions");
    theme.assert_file_contains("templates/footer.php", "upstream");
    assert!(updater.pending_backup().is_none());
}

#[test]
fn test_consecutive_updates_leave_labeled_backups() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let updater = updater_for(&theme);
    let mut lifecycle = Lifecycle::new();
    Rc::clone(&updater).register(&mut lifecycle);
    let dir = NormalizedPath::new(theme.dir());

    for version in ["1.1.0", "1.2.0"] {
        let package = NormalizedPath::new(theme.package(version));
        ThemeUpgrader::new(&mut lifecycle, &LocalFs)
            .upgrade(&dir, &package)
            .unwrap();
        theme.assert_file_contains("style.css", &format!("Version: {version}"));
    }

    let backups = list_backups(&LocalFs, &dir).unwrap();
    let tags: Vec<_> = backups.iter().map(|b| b.tag.as_str()).collect();
    assert_eq!(tags, vec!["1.0.0", "1.1.0"]);
    assert_eq!(backups[0].headers.name, "Astra Child Backup 1.0.0");
    assert_eq!(backups[1].headers.name, "Astra Child Backup 1.1.0");
    theme.assert_file_contains("style.css", "Theme Name: Astra Child\n");
}

#[test]
fn test_delete_backup_from_config() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    theme.write("theme-guard.toml", "delete_backup = true\n");

    let updater = updater_for(&theme);
    let mut lifecycle = Lifecycle::new();
    updater.register(&mut lifecycle);

    let dir = NormalizedPath::new(theme.dir());
    let package = NormalizedPath::new(theme.package("2.0.0"));
    ThemeUpgrader::new(&mut lifecycle, &LocalFs)
        .upgrade(&dir, &package)
        .unwrap();

    assert!(!theme.backup_dir("1.0.0").exists());
    theme.assert_file_contains("functions.php", "customized functions");
}
