//! Full-screen TUI implementation for trialsearch.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{input, results};
pub use runtime::TuiRuntime;
use trialsearch_core::config::Config;

/// Runs the interactive search loop.
pub async fn run_interactive_search(config: &Config) -> Result<()> {
    // Interactive mode requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `trialsearch search -q '...'` for non-interactive search."
        );
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "TrialSearch")?;
    writeln!(err, "Backend: {}", config.base_url)?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config.clone())?;
    runtime.run()
}
