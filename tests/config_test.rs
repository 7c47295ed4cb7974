//! Tests for loading configuration from disk.

use lesson_tictactoe::GameConfig;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "turn_seconds = 15").unwrap();
    writeln!(file, "allowed_sizes = [3, 6]").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.turn_seconds(), 15);
    assert!(config.allows(6));
    assert!(!config.allows(4));
    assert_eq!(*config.urgent_seconds(), 3);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_invalid_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "allowed_sizes = [1]").unwrap();
    assert!(GameConfig::from_file(file.path()).is_err());
}
