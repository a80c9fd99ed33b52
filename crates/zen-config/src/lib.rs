mod config;
mod error;
mod github_config;
mod log_level;
mod logging_config;
mod zenhub_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use github_config::GithubConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use zenhub_config::ZenHubConfig;

const CONFIG_DIR_ENV: &str = "ZENCLI_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".zen";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_ZENHUB_API_URL: &str = "https://api.zenhub.com";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
