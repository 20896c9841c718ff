//! Tests for loading settings from disk.

use std::io::Write;
use std::path::PathBuf;
use strictly_xo::{Locale, Mode, Settings};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "locale = \"th\"\nmode = \"5x5\"\nlog_file = \"/tmp/xo.log\""
    )
    .expect("write settings");

    let settings = Settings::load(Some(file.path())).expect("valid settings");
    assert_eq!(*settings.locale(), Locale::Th);
    assert_eq!(*settings.mode(), Mode::FiveByFive);
    assert_eq!(settings.log_file(), &PathBuf::from("/tmp/xo.log"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read settings file"));
}

#[test]
fn test_unknown_locale_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "locale = \"fr\"").expect("write settings");
    assert!(Settings::from_file(file.path()).is_err());
}

#[test]
fn test_cli_overrides_file_values() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "locale = \"th\"\nmode = \"4x4\"").expect("write settings");

    let settings = Settings::from_file(file.path())
        .expect("valid settings")
        .with_overrides(Some(Mode::ThreeByThree), Some(Locale::En));
    assert_eq!(*settings.mode(), Mode::ThreeByThree);
    assert_eq!(*settings.locale(), Locale::En);
}
