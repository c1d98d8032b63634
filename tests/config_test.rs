//! Integration tests for Settings layered loading.
//!
//! These tests pass an explicit global config path (temp directories only),
//! so the user's real XDG config never leaks in. Environment overrides are
//! passed as explicit maps; the process environment is never modified.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use standup::application::ApplicationError;
use standup::config::Settings;
use standup::domain::{DomainError, ShuffleMode};

#[test]
fn given_no_global_config_when_load_then_defaults() {
    let temp = TempDir::new().unwrap();

    let settings = Settings::load_with_env(Some(&temp.path().join("absent.toml")), HashMap::new())
        .expect("load");

    assert_eq!(settings.team_file, None);
}

#[test]
fn given_global_config_when_load_then_values_applied() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("standup.toml");
    fs::write(
        &path,
        r#"
shuffle = "grouped"
team_file = "/srv/teams/ds9.json"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_with_env(Some(&path), HashMap::new()).expect("load settings");

    // Assert
    assert_eq!(settings.shuffle, ShuffleMode::Grouped);
    assert_eq!(settings.team_file, Some(PathBuf::from("/srv/teams/ds9.json")));
}

#[test]
fn given_tilde_in_team_file_when_load_then_expanded() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("standup.toml");
    fs::write(&path, "team_file = \"~/team.json\"\n").unwrap();

    let settings = Settings::load_with_env(Some(&path), HashMap::new()).expect("load settings");

    let team_file = settings.team_file.expect("team file");
    assert!(!team_file.starts_with("~"), "not expanded: {}", team_file.display());
    assert!(team_file.ends_with("team.json"));
}

#[test]
fn given_invalid_mode_in_config_when_load_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("standup.toml");
    fs::write(&path, "shuffle = \"sideways\"\n").unwrap();

    let result = Settings::load_with_env(Some(&path), HashMap::new());

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn given_numbered_env_var_when_load_then_overrides_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("standup.toml");
    fs::write(&path, "numbered = false\n").unwrap();

    // Act
    let settings = Settings::load_with_env(Some(&path), vars(&[("STANDUP_NUMBERED", "true")]))
        .expect("load settings");

    // Assert
    assert!(settings.numbered);
}

#[test]
fn given_shuffle_env_var_when_load_then_overrides_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("standup.toml");
    fs::write(&path, "shuffle = \"ungrouped\"\n").unwrap();

    let settings = Settings::load_with_env(Some(&path), vars(&[("STANDUP_SHUFFLE", "grouped")]))
        .expect("load settings");

    assert_eq!(settings.shuffle, ShuffleMode::Grouped);
}

#[test]
fn given_team_file_env_var_when_load_then_sets_team_file() {
    let settings = Settings::load_with_env(
        None,
        vars(&[("STANDUP_TEAM_FILE", "/srv/teams/bajor.json")]),
    )
    .expect("load settings");

    assert_eq!(settings.team_file, Some(PathBuf::from("/srv/teams/bajor.json")));
}

#[test]
fn given_double_underscore_prefix_when_load_then_not_applied() {
    let settings = Settings::load_with_env(None, vars(&[("STANDUP__SHUFFLE", "grouped")]))
        .expect("load settings");

    assert_eq!(settings.shuffle, ShuffleMode::None);
}

#[test]
fn given_invalid_shuffle_env_var_when_load_then_invalid_mode() {
    let result = Settings::load_with_env(None, vars(&[("STANDUP_SHUFFLE", "sideways")]));

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::InvalidMode(_)))
    ));
}
