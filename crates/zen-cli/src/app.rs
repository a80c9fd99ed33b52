use crate::{Parser, ZenActions, cli::Cli, error::Result as ZenResult, logger};

use std::path::PathBuf;

use log::{debug, info};
use zen_config::{Config, LogLevel};

/// Run one `zen` invocation.
///
/// The sentence is parsed before anything touches the environment, so
/// `help` and parse errors never depend on the config file or the logger.
pub async fn run(cli: &Cli) -> ZenResult<()> {
    let args = cli.argument_vector();
    let command = Parser::new(&args).parse()?;

    if !command.requires_remote() {
        let actions = ZenActions::from_config(&Config::default());
        return command.dispatch(&actions).await;
    }

    let config = match cli.config_dir {
        Some(ref dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };

    let log_level = cli
        .log_level
        .as_deref()
        .map(LogLevel::lenient)
        .unwrap_or(config.logging.level);
    logger::initialize(
        log_level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;

    info!("Starting zen v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();
    debug!("Parsed command: {:?}", command);

    config.validate()?;

    let actions = ZenActions::from_config(&config);
    command.dispatch(&actions).await
}
