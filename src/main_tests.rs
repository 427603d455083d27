use std::fs;

use tempfile::TempDir;

use super::*;

fn default_args(debug: bool) -> Args {
    Args {
        file: PathBuf::from("people.csv"),
        interval: None,
        theme: None,
        debug,
    }
}

#[test]
fn test_initialize_logger() {
    let args = default_args(false);
    initialize_logger(&args).unwrap();
}

#[test]
fn test_get_project_config_path() {
    let p = get_project_config_path().unwrap();
    assert_ne!(p, "");
}

#[test]
fn cli_flags_override_the_config_file() {
    let mut args = default_args(false);
    args.interval = Some("3s".to_string());
    args.theme = Some("Red".to_string());

    let config = load_config(&args).unwrap();

    assert_eq!(config.refresh_interval, "3s");
    assert_eq!(config.theme, "Red");
}

#[test]
fn initial_state_starts_at_the_origin() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, "name,age\nAlice,25\n").unwrap();

    let source = source_for_path(&path).unwrap();
    let snapshot = TableSnapshot::from_source(source.as_ref()).unwrap();

    let state = initial_state(&Config::default(), source.as_ref(), snapshot);

    assert_eq!(state.cursor, Cursor { row: 0, col: 0 });
    assert_eq!(state.source_name, "people.csv");
    assert_eq!(state.refresh_interval, "1s");
    assert!(state.message.is_none());
    assert_eq!(state.snapshot.row_count(), 1);
}

#[test]
fn startup_fails_when_the_initial_data_is_unreadable() {
    let source = source_for_path(PathBuf::from("missing.csv").as_path())
        .unwrap();

    assert!(TableSnapshot::from_source(source.as_ref()).is_err());
}
