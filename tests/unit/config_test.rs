//! Unit tests for config module

use std::fs;
use tempfile::TempDir;

use mlt::Config;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.cmake.program, "cmake");
    assert_eq!(config.cmake.build_dir, "build");
    assert_eq!(config.cmake.tests_option, "BUILD_TESTS");
    assert_eq!(config.tests.output_dir, "lib");
    assert_eq!(config.tests.executable, "mathlib_tests");
    assert_eq!(config.tests.reporter, "console");
    assert_eq!(config.output.separator_width, 70);
    assert!(config.validate().is_ok());
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let toml_str = r#"
[cmake]
program = "/opt/cmake/bin/cmake"

[tests]
reporter = "compact"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.cmake.program, "/opt/cmake/bin/cmake");
    assert_eq!(config.cmake.build_dir, "build");
    assert_eq!(config.tests.reporter, "compact");
    assert_eq!(config.tests.executable, "mathlib_tests");
    assert_eq!(config.output.separator_width, 70);
}

#[test]
fn load_without_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_reads_mlt_toml_from_root() {
    let temp = TempDir::new().unwrap();
    fs::write(
        Config::config_path(temp.path()),
        "[output]\nseparator_width = 40\n",
    )
    .unwrap();

    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config.output.separator_width, 40);
    assert_eq!(Config::config_path(temp.path()), temp.path().join("mlt.toml"));
}

#[test]
fn load_rejects_invalid_values() {
    let temp = TempDir::new().unwrap();
    fs::write(Config::config_path(temp.path()), "[cmake]\nprogram = \"\"\n").unwrap();

    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn load_reports_parse_errors() {
    let temp = TempDir::new().unwrap();
    fs::write(Config::config_path(temp.path()), "[cmake\nprogram =").unwrap();

    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn zero_separator_width_is_invalid() {
    let mut config = Config::default();
    config.output.separator_width = 0;
    assert!(config.validate().is_err());
}
