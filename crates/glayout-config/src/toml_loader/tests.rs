//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_glayout_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, glayout_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[tiling]
master_width_fraction = 0.6

[keybinds]
focus_down = "Alt+J"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.tiling.master_width_fraction - 0.6).abs() < f64::EPSILON);
    assert_eq!(config.keybinds.focus_down, "Alt+J");
    // Defaults preserved
    assert_eq!(config.tiling.vertical_offset, 80);
    assert_eq!(config.keybinds.focus_up, "Super+K");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, glayout_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[tiling]\nvertical_offset = 5000\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.tiling.vertical_offset, 5000);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glayout").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.tiling.vertical_offset, 80);
    assert_eq!(config.keybinds.switch_master, "Super+Return");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::GlayoutConfig;

    let config: GlayoutConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn config_path_is_under_app_dir() {
    let base = std::path::PathBuf::from("/home/u/.config");
    let path = super::paths::config_path_under(Some(base)).unwrap();
    assert_eq!(path, Path::new("/home/u/.config/glayout/config.toml"));
}

#[test]
fn missing_platform_dir_is_an_error() {
    assert!(super::paths::config_path_under(None).is_err());
}

#[test]
fn parse_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[tiling]\nvertical_offset = \"high\"\n").unwrap();

    let err = load_from_path(&path).unwrap_err().to_string();
    assert!(err.contains("broken.toml"));
}

#[test]
fn read_config_leaves_validation_to_the_caller() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[tiling]\nmaster_width_fraction = 0.95\n").unwrap();

    let config = read_config(&path).unwrap();
    assert!((config.tiling.master_width_fraction - 0.95).abs() < f64::EPSILON);
    assert!(crate::validation::validate(&config).is_err());
}
