use crate::{ConfigError, ConfigErrorResult, DEFAULT_GITHUB_API_URL};

use serde::Deserialize;

/// Credentials and target repository for the GitHub REST API
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub api_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            owner: String::new(),
            repo: String::new(),
            api_url: String::from(DEFAULT_GITHUB_API_URL),
        }
    }
}

// Hand-written so the token never reaches a log line.
impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl GithubConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::github(
                "github.token is not set (ZENCLI_GITHUBAUTHTOKEN)",
            ));
        }

        if self.owner.trim().is_empty() {
            return Err(ConfigError::github(
                "github.owner is not set (ZENCLI_REPOOWNER)",
            ));
        }

        if self.repo.trim().is_empty() {
            return Err(ConfigError::github("github.repo is not set (ZENCLI_REPONAME)"));
        }

        if !crate::config::is_http_url(&self.api_url) {
            return Err(ConfigError::github(format!(
                "github.api_url must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        Ok(())
    }
}
