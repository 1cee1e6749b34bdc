mod commands;
mod completer;
mod config;
mod json_types;
mod menu;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::config_cmd::ConfigAction;
use crate::commands::eval::EvalArgs;
use crate::commands::list::ListArgs;
use crate::config::{MaclaurinConfig, CONFIG_FILE};
use crate::menu::MenuCore;

/// Truncated Maclaurin series for sin, cos, ln(1±x) and (1±x)^m.
///
/// Without a subcommand the interactive menu starts.
#[derive(Parser, Debug)]
#[command(name = "maclaurin_cli", version, about)]
struct Cli {
    /// Number of series terms (overrides the config file)
    #[arg(long, global = true, allow_negative_numbers = true)]
    iterations: Option<i64>,

    /// Config file to read
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default)
    Menu,
    /// Evaluate one series and print the result
    Eval(EvalArgs),
    /// List the available series
    List(ListArgs),
    /// Show or initialize the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = MaclaurinConfig::load(&cli.config);
    if let Some(iterations) = cli.iterations {
        config.iterations = iterations;
    }
    tracing::debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let core = MenuCore::new(config.iterations, config.show_terms);
            menu::run(&core, config.history)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Eval(args) => commands::eval::run(args, config.iterations),
        Command::List(args) => {
            commands::list::run(args)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config { action } => {
            commands::config_cmd::run(action, &config, &cli.config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
