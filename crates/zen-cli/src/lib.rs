//! zen-cli library
//!
//! The sentence grammar, the GitHub/ZenHub clients and the actions that tie
//! them together. The `zen` binary is a thin wrapper over this crate.

pub mod actions;
pub mod app;
pub mod board;
pub mod cli;
pub mod client;
pub mod command;
pub mod error;
pub mod logger;
pub mod usage;

#[cfg(test)]
mod tests;

pub use actions::ZenActions;
pub use app::run;
pub use client::{CliClientResult, ClientError, GithubClient, ZenHubClient};
pub use command::{Actions, Command, ParseError, Parser};
pub use error::{Result as ZenResult, ZenError};
