pub mod config_cmd;
pub mod eval;
pub mod list;

use clap::ValueEnum;

/// Output format for the non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
