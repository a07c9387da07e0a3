//! Config command handlers.

use anyhow::{Context, Result};
use trialsearch_core::config::{Config, paths};

use crate::cli::ConfigCommands;

pub fn run(command: &ConfigCommands, config: &Config) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            println!("{}", paths::config_path().display());
        }
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config).context("serialize configuration")?;
            print!("{rendered}");
        }
    }
    Ok(())
}
