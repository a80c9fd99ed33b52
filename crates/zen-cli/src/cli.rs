use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "zen")]
#[command(about = "A small CLI for interacting with ZenHub boards")]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (default: $ZENCLI_CONFIG_DIR or ~/.zen)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Log level for diagnostics on stderr (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Command sentence, e.g. `move 999 to in progress`; run `zen help` for the grammar
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl Cli {
    /// The words as an argument vector, program name first.
    pub fn argument_vector(&self) -> Vec<String> {
        std::iter::once(String::from("zen"))
            .chain(self.words.iter().cloned())
            .collect()
    }
}
