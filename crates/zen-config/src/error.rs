use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Home directory not found")]
    NoHomeDir,
}

impl ConfigError {
    /// Create a GitHub settings error
    #[track_caller]
    pub fn github<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "GitHub",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a ZenHub settings error
    #[track_caller]
    pub fn zenhub<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "ZenHub",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
