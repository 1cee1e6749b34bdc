//! `config`: inspect or (re)create the config file.

use std::path::Path;

use anyhow::bail;
use clap::Subcommand;

use crate::config::MaclaurinConfig;

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

pub fn run(action: ConfigAction, config: &MaclaurinConfig, path: &Path) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            MaclaurinConfig::restore(path)?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        }
    }
}
