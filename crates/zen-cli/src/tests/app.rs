use crate::{ZenError, cli::Cli, run};

use std::fs;

use clap::Parser;
use tempfile::TempDir;

/// Config directory whose config.toml is not valid TOML.
fn broken_config_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "github = [\n").unwrap();
    temp
}

fn cli(config_dir: &TempDir, words: &[&str]) -> Cli {
    let mut args = vec!["zen", "--config-dir", config_dir.path().to_str().unwrap()];
    args.extend_from_slice(words);
    Cli::try_parse_from(args).unwrap()
}

#[tokio::test]
async fn given_broken_config_when_help_then_succeeds() {
    let dir = broken_config_dir();

    assert!(run(&cli(&dir, &["help"])).await.is_ok());
    assert!(run(&cli(&dir, &["move", "help"])).await.is_ok());
}

#[tokio::test]
async fn given_unopenable_log_file_when_help_then_succeeds() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[logging]\nfile = \"/nonexistent/zen/dir/zen.log\"\n",
    )
    .unwrap();

    assert!(run(&cli(&dir, &["help"])).await.is_ok());
}

#[tokio::test]
async fn given_broken_config_when_sentence_malformed_then_parse_error_wins() {
    let dir = broken_config_dir();

    let result = run(&cli(&dir, &["close", "forty-two"])).await;

    assert!(matches!(result, Err(ZenError::Parse(_))), "{result:?}");
}

#[tokio::test]
async fn given_broken_config_when_remote_command_then_config_error() {
    let dir = broken_config_dir();

    let result = run(&cli(&dir, &["close", "42"])).await;

    assert!(matches!(result, Err(ZenError::Config(_))), "{result:?}");
}
