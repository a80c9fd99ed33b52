use crate::{ConfigError, ConfigErrorResult, DEFAULT_ZENHUB_API_URL};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ZenHubConfig {
    pub token: String,
    pub api_url: String,
}

impl Default for ZenHubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: String::from(DEFAULT_ZENHUB_API_URL),
        }
    }
}

impl std::fmt::Debug for ZenHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZenHubConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl ZenHubConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::zenhub(
                "zenhub.token is not set (ZENCLI_ZENHUBAUTHTOKEN)",
            ));
        }

        if !crate::config::is_http_url(&self.api_url) {
            return Err(ConfigError::zenhub(format!(
                "zenhub.api_url must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        Ok(())
    }
}
