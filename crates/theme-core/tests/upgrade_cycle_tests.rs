//! Full update cycles through the lifecycle registry and reference host.

use std::fs;
use std::rc::Rc;
use theme_core::{
    Error, Lifecycle, Source, SourceSelection, ThemeUpgrader, Updater, UpdaterConfig,
    drift_between, list_backups,
};
use theme_fs::{LocalFs, NormalizedPath};
use theme_test_utils::TestTheme;

fn registered(theme: &TestTheme, config: UpdaterConfig) -> (Rc<Updater>, Lifecycle) {
    let updater = Rc::new(
        Updater::new(NormalizedPath::new(theme.dir()), Box::new(LocalFs), config).unwrap(),
    );
    let mut lifecycle = Lifecycle::new();
    Rc::clone(&updater).register(&mut lifecycle);
    (updater, lifecycle)
}

#[test]
fn update_cycle_preserves_customizations() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let package = theme.package("2.0.0");
    let (_updater, mut lifecycle) = registered(&theme, UpdaterConfig::default());

    let report = ThemeUpgrader::new(&mut lifecycle, &LocalFs)
        .upgrade(&NormalizedPath::new(theme.dir()), &NormalizedPath::new(&package))
        .unwrap();

    assert!(report.response);
    assert_eq!(report.theme, "astra-child");
    assert_eq!(report.files_installed, 5);
    theme.assert_file_contains("functions.php", "customized");
    theme.assert_file_contains("vendor/autoload.php", "vendor 2.0.0");
    theme.assert_file_contains("style.css", "Version: 2.0.0");
    theme.assert_file_exists("templates/footer.php");
}

#[test]
fn consecutive_updates_leave_one_backup_per_release() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let (_updater, mut lifecycle) = registered(&theme, UpdaterConfig::default());
    let dir = NormalizedPath::new(theme.dir());

    for version in ["1.1.0", "2.0.0"] {
        let package = theme.package(version);
        ThemeUpgrader::new(&mut lifecycle, &LocalFs)
            .upgrade(&dir, &NormalizedPath::new(&package))
            .unwrap();
    }

    let backups = list_backups(&LocalFs, &dir).unwrap();
    let tags: Vec<_> = backups.iter().map(|b| b.tag.as_str()).collect();
    assert_eq!(tags, vec!["1.0.0", "1.1.0"]);
    assert_eq!(backups[0].headers.name, "Astra Child Backup 1.0.0");
    assert_eq!(backups[0].headers.version, "1.1.0");
    assert_eq!(backups[1].headers.name, "Astra Child Backup 1.1.0");
    assert_eq!(backups[1].headers.version, "2.0.0");
    theme.assert_file_contains("functions.php", "customized");
}

#[test]
fn rejection_aborts_before_install() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let package = theme.package("2.0.0");
    let mut lifecycle = Lifecycle::new();
    lifecycle.register_pre_update(Box::new(|_: &SourceSelection| Ok(Source::Rejected)));

    let result = ThemeUpgrader::new(&mut lifecycle, &LocalFs)
        .upgrade(&NormalizedPath::new(theme.dir()), &NormalizedPath::new(&package));

    assert!(matches!(result, Err(Error::UpdateRejected { theme }) if theme == "astra-child"));
    theme.assert_file_contains("style.css", "Version: 1.0.0");
}

#[test]
fn missing_entry_file_rejects_whole_update() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    theme.remove("functions.php");
    let package = theme.package("2.0.0");
    let (_updater, mut lifecycle) = registered(&theme, UpdaterConfig::default());

    let result = ThemeUpgrader::new(&mut lifecycle, &LocalFs)
        .upgrade(&NormalizedPath::new(theme.dir()), &NormalizedPath::new(&package));

    assert!(matches!(result, Err(Error::UpdateRejected { .. })));
    theme.assert_file_contains("style.css", "Version: 1.0.0");
    theme.assert_file_contains("templates/header.php", "customized");
}

#[test]
fn upstream_error_source_is_reported() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let package = theme.package("2.0.0");
    let updater = Rc::new(
        Updater::new(
            NormalizedPath::new(theme.dir()),
            Box::new(LocalFs),
            UpdaterConfig::default(),
        )
        .unwrap(),
    );
    let mut lifecycle = Lifecycle::new();
    lifecycle.register_pre_update(Box::new(|_: &SourceSelection| {
        Ok(Source::Error("checksum mismatch".into()))
    }));
    Rc::clone(&updater).register(&mut lifecycle);

    let result = ThemeUpgrader::new(&mut lifecycle, &LocalFs)
        .upgrade(&NormalizedPath::new(theme.dir()), &NormalizedPath::new(&package));

    assert!(matches!(result, Err(Error::SourceError { message }) if message == "checksum mismatch"));
    assert!(!theme.backup_dir("1.0.0").exists());
    assert!(updater.pending_backup().is_none());
}

#[test]
fn drift_after_update_only_shows_upstream_additions() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let package = theme.package("2.0.0");
    let (_updater, mut lifecycle) = registered(&theme, UpdaterConfig::default());
    let dir = NormalizedPath::new(theme.dir());

    ThemeUpgrader::new(&mut lifecycle, &LocalFs)
        .upgrade(&dir, &NormalizedPath::new(&package))
        .unwrap();

    let report = drift_between(
        &NormalizedPath::new(theme.backup_dir("1.0.0")),
        &dir,
        &["vendor".to_string()],
    )
    .unwrap();
    let paths: Vec<_> = report.entries.iter().map(|e| e.path.as_str()).collect();
    // style.css differs only by the backup label.
    assert_eq!(paths, vec!["style.css", "templates/footer.php"]);
    assert!(fs::read_to_string(theme.backup_dir("1.0.0").join("style.css"))
        .unwrap()
        .contains("Backup 1.0.0"));
}

#[cfg(unix)]
#[test]
fn drift_after_update_handles_symlinks() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    std::os::unix::fs::symlink("templates", theme.dir().join("tpl-link")).unwrap();
    std::os::unix::fs::symlink("gone.php", theme.dir().join("dangling.php")).unwrap();
    let package = theme.package("2.0.0");
    let (_updater, mut lifecycle) = registered(&theme, UpdaterConfig::default());
    let dir = NormalizedPath::new(theme.dir());

    ThemeUpgrader::new(&mut lifecycle, &LocalFs)
        .upgrade(&dir, &NormalizedPath::new(&package))
        .unwrap();

    let report = drift_between(
        &NormalizedPath::new(theme.backup_dir("1.0.0")),
        &dir,
        &["vendor".to_string()],
    )
    .unwrap();
    let paths: Vec<_> = report.entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["style.css", "templates/footer.php"]);
    assert_eq!(
        fs::read_link(theme.dir().join("tpl-link")).unwrap(),
        std::path::PathBuf::from("templates")
    );
}
