//! Scenario tests for hosts running several handlers around an update
//!
//! The updater shares the lifecycle with other extensions, so these check
//! that it cooperates with them and with an optional update checker.

use std::cell::RefCell;
use std::rc::Rc;

use theme_core::{
    Error, HookExtra, InstallResult, Lifecycle, Source, SourceSelection, ThemeUpgrader,
    UpdateChecker, UpdateCheckerFactory, UpdateCheckerOverrides, Updater, UpdaterConfig,
    UpgradeKind, bootstrap_update_checker, drift_between,
};
use theme_fs::{LocalFs, NormalizedPath};
use theme_test_utils::TestTheme;

fn register_updater(theme: &TestTheme, lifecycle: &mut Lifecycle) -> Rc<Updater> {
    let updater = Rc::new(
        Updater::new(
            NormalizedPath::new(theme.dir()),
            Box::new(LocalFs),
            UpdaterConfig::default(),
        )
        .unwrap(),
    );
    Rc::clone(&updater).register(lifecycle);
    updater
}

#[test]
fn later_handlers_see_updater_output() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let mut lifecycle = Lifecycle::new();
    register_updater(&theme, &mut lifecycle);

    let seen_sources = Rc::new(RefCell::new(Vec::new()));
    let seen_responses = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen_sources);
        lifecycle.register_pre_update(Box::new(move |sel: &SourceSelection| {
            seen.borrow_mut().push(sel.source.clone());
            Ok(sel.source.clone())
        }));
        let seen = Rc::clone(&seen_responses);
        lifecycle.register_post_install(Box::new(
            move |response: bool, _: &HookExtra, _: &InstallResult| {
                seen.borrow_mut().push(response);
                Ok(response)
            },
        ));
    }

    let dir = NormalizedPath::new(theme.dir());
    let package = NormalizedPath::new(theme.package("2.0.0"));
    let report = ThemeUpgrader::new(&mut lifecycle, &LocalFs)
        .upgrade(&dir, &package)
        .unwrap();

    assert!(report.response);
    assert_eq!(*seen_sources.borrow(), vec![Source::Path(package)]);
    assert_eq!(*seen_responses.borrow(), vec![true]);
}

#[test]
fn plugin_updates_do_not_create_backups() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let mut lifecycle = Lifecycle::new();
    let updater = register_updater(&theme, &mut lifecycle);

    let plugin = NormalizedPath::new(theme.themes_root().join("plugin-pkg"));
    let selection = SourceSelection {
        source: Source::Path(plugin.clone()),
        remote_source: plugin.clone(),
        kind: UpgradeKind::Plugin,
        extra: HookExtra::default(),
    };

    assert_eq!(lifecycle.select_source(selection).unwrap(), Source::Path(plugin));
    assert!(updater.pending_backup().is_none());
    assert!(!theme.backup_dir("1.0.0").exists());
}

#[test]
fn earlier_rejection_skips_backup() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let mut lifecycle = Lifecycle::new();
    lifecycle.register_pre_update(Box::new(|_: &SourceSelection| Ok(Source::Rejected)));
    register_updater(&theme, &mut lifecycle);

    let dir = NormalizedPath::new(theme.dir());
    let package = NormalizedPath::new(theme.package("2.0.0"));
    let err = ThemeUpgrader::new(&mut lifecycle, &LocalFs)
        .upgrade(&dir, &package)
        .unwrap_err();

    assert!(matches!(err, Error::UpdateRejected { .. }));
    assert!(!theme.backup_dir("1.0.0").exists());
    theme.assert_file_contains("functions.php", "customized functions");
}

#[test]
fn backup_matches_theme_before_install() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let mut lifecycle = Lifecycle::new();
    let updater = register_updater(&theme, &mut lifecycle);
    let dir = NormalizedPath::new(theme.dir());

    let selection = SourceSelection {
        source: Source::Path(dir.clone()),
        remote_source: dir.clone(),
        kind: UpgradeKind::Theme,
        extra: HookExtra::for_theme("astra-child"),
    };
    lifecycle.select_source(selection).unwrap();

    let backup = updater.pending_backup().unwrap().path;
    assert!(drift_between(&backup, &dir, &[]).unwrap().is_clean());
}

#[derive(Default)]
struct Calls {
    built: Vec<(String, String)>,
    branch: Option<String>,
    token: Option<String>,
}

struct SharedChecker(Rc<RefCell<Calls>>);

impl UpdateChecker for SharedChecker {
    fn set_branch(&mut self, branch: &str) {
        self.0.borrow_mut().branch = Some(branch.to_string());
    }

    fn set_authentication(&mut self, token: &str) {
        self.0.borrow_mut().token = Some(token.to_string());
    }
}

struct SharedFactory(Rc<RefCell<Calls>>);

impl UpdateCheckerFactory for SharedFactory {
    fn build(
        &self,
        repository_url: &str,
        _local_theme_path: &NormalizedPath,
        theme_slug: &str,
    ) -> Box<dyn UpdateChecker> {
        self.0
            .borrow_mut()
            .built
            .push((repository_url.to_string(), theme_slug.to_string()));
        Box::new(SharedChecker(Rc::clone(&self.0)))
    }
}

#[test]
fn checker_uses_overrides_from_theme_config() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    theme.write(
        "theme-guard.toml",
        "[update_checker]\nbranch = \"develop\"\nauth_token = \"secret\"\n",
    );
    let dir = NormalizedPath::new(theme.dir());
    let config = UpdaterConfig::discover(&dir).unwrap();

    let calls = Rc::new(RefCell::new(Calls::default()));
    let factory = SharedFactory(Rc::clone(&calls));
    let checker =
        bootstrap_update_checker(Some(&factory), &LocalFs, &dir, &config.update_checker).unwrap();

    assert!(checker.is_some());
    let calls = calls.borrow();
    assert_eq!(
        calls.built,
        vec![(
            "https://github.com/acme/astra-child".to_string(),
            "astra-child".to_string()
        )]
    );
    assert_eq!(calls.branch.as_deref(), Some("develop"));
    assert_eq!(calls.token.as_deref(), Some("secret"));
}

#[test]
fn checker_without_token_skips_authentication() {
    let theme = TestTheme::new("astra-child", "Astra Child", "1.0.0");
    let dir = NormalizedPath::new(theme.dir());

    let calls = Rc::new(RefCell::new(Calls::default()));
    let factory = SharedFactory(Rc::clone(&calls));
    bootstrap_update_checker(
        Some(&factory),
        &LocalFs,
        &dir,
        &UpdateCheckerOverrides::default(),
    )
    .unwrap();

    assert_eq!(calls.borrow().branch.as_deref(), Some("master"));
    assert!(calls.borrow().token.is_none());
}
