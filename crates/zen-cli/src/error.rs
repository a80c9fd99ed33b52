use crate::{client::ClientError, command::ParseError};

use thiserror::Error;

/// Anything that ends a `zen` run with a non-zero exit code.
#[derive(Error, Debug)]
pub enum ZenError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Config error: {0}")]
    Config(#[from] zen_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("no pipeline named '{name}' exists for this board")]
    PipelineNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, ZenError>;
