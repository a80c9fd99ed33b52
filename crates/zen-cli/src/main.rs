//! zen - sentence-style commands for ZenHub boards
//!
//! # Examples
//!
//! ```bash
//! # Move an issue between pipelines
//! zen move 999 to in progress
//!
//! # Show the board, including the backlog, for the current user only
//! zen list backlog only me
//!
//! # Take an issue
//! zen pick up 42
//! ```

use zen_cli::cli::Cli;

use std::process::ExitCode;

use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match zen_cli::run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
