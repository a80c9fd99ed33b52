use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    GithubConfig, LoggingConfig, ZenHubConfig,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub github: GithubConfig,
    pub zenhub: ZenHubConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for ZENCLI_CONFIG_DIR env var, else use ~/.zen/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply ZENCLI_* environment variable overrides
    ///
    /// Does NOT validate - call validate() before talking to GitHub or ZenHub.
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Load config from an explicit directory, then apply env overrides.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ZENCLI_CONFIG_DIR env var > ~/.zen/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(CONFIG_DIR_NAME))
    }

    /// Validate everything needed to reach GitHub and ZenHub.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.github.validate()?;
        self.zenhub.validate()?;
        Ok(())
    }

    /// Log configuration summary (NEVER logs tokens).
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!(
            "  github: {}/{} via {} (token {})",
            self.github.owner,
            self.github.repo,
            self.github.api_url,
            if self.github.token.is_empty() {
                "missing"
            } else {
                "set"
            }
        );
        debug!(
            "  zenhub: {} (token {})",
            self.zenhub.api_url,
            if self.zenhub.token.is_empty() {
                "missing"
            } else {
                "set"
            }
        );
        debug!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // GitHub
        Self::apply_env_string("ZENCLI_GITHUBAUTHTOKEN", &mut self.github.token);
        Self::apply_env_string("ZENCLI_REPOOWNER", &mut self.github.owner);
        Self::apply_env_string("ZENCLI_REPONAME", &mut self.github.repo);
        Self::apply_env_string("ZENCLI_GITHUB_API_URL", &mut self.github.api_url);

        // ZenHub
        Self::apply_env_string("ZENCLI_ZENHUBAUTHTOKEN", &mut self.zenhub.token);
        Self::apply_env_string("ZENCLI_ZENHUB_API_URL", &mut self.zenhub.api_url);

        // Logging
        Self::apply_env_parse("ZENCLI_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ZENCLI_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ZENCLI_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

pub(crate) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
