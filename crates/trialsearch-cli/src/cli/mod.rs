//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use trialsearch_core::config::Config;

use crate::logging;

mod commands;

#[derive(Parser)]
#[command(name = "trialsearch")]
#[command(version = "0.1")]
#[command(about = "Clinical trial search client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// One-shot search; prints projected results to stdout
    Search {
        /// Free-text query
        #[arg(short, long)]
        query: String,

        /// Print the raw response JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Print the resolved configuration
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("load configuration")?;

    match cli.command {
        Some(Commands::Config { command }) => commands::config::run(&command, &config),
        Some(Commands::Search { query, json }) => {
            let _guard = logging::init(logging::Sink::Stderr)?;
            block_on(commands::search::run(&config, &query, json))
        }
        None => {
            // The TUI owns the screen; diagnostics go to a log file.
            let _guard = logging::init(logging::Sink::File)?;
            block_on(trialsearch_tui::run_interactive_search(&config))
        }
    }
}

fn block_on<F>(future: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?
        .block_on(future)
}
