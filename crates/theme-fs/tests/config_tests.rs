use rstest::rstest;
use serde::Deserialize;
use tempfile::TempDir;
use theme_fs::{ConfigStore, Error, NormalizedPath};

#[derive(Debug, PartialEq, Deserialize)]
struct Sample {
    skip: Vec<String>,
    delete_backup: bool,
}

fn sample() -> Sample {
    Sample {
        skip: vec!["vendor".into(), "assets/lib".into()],
        delete_backup: true,
    }
}

#[rstest]
#[case("theme-guard.toml", "skip = [\"vendor\", \"assets/lib\"]\ndelete_backup = true\n")]
#[case("theme-guard.json", r#"{"skip": ["vendor", "assets/lib"], "delete_backup": true}"#)]
#[case("theme-guard.yaml", "skip:\n  - vendor\n  - assets/lib\ndelete_backup: true\n")]
#[case("theme-guard.yml", "skip: [vendor, assets/lib]\ndelete_backup: true\n")]
fn load_by_extension(#[case] file: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join(file));
    std::fs::write(path.to_native(), content).unwrap();

    let loaded: Sample = ConfigStore::new().load(&path).unwrap();

    assert_eq!(loaded, sample());
}

#[test]
fn unknown_extension_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("theme-guard.ini"));
    std::fs::write(path.to_native(), "skip = vendor").unwrap();

    let result: theme_fs::Result<Sample> = ConfigStore::new().load(&path);
    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "ini"));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("theme-guard.toml"));
    std::fs::write(path.to_native(), "skip = [unterminated").unwrap();

    let result: theme_fs::Result<Sample> = ConfigStore::new().load(&path);
    match result {
        Err(Error::ConfigParse { format, .. }) => assert_eq!(format, "TOML"),
        other => panic!("expected parse error, got {:?}", other),
    }
}
