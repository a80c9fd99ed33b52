use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "this is not valid toml {{{{").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_invalid_log_level_env_when_load_then_keeps_previous_level() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[logging]\nlevel = \"error\"").unwrap();
    let _level = EnvGuard::set("ZENCLI_LOG_LEVEL", "shouty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Error));
}

#[test]
#[serial]
fn given_unknown_log_level_in_toml_when_load_then_default_level() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[logging]\nlevel = \"loud\"").unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_defaults() {
    // Given
    let _temp = setup_config_dir();
    let _dir = EnvGuard::set("ZENCLI_CONFIG_DIR", "/nonexistent/zen/config/dir");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.github.owner.as_str(), eq(""));
}
