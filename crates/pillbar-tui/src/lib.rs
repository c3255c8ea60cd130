//! Full-screen TUI demo for the pill-row fit estimator.

pub mod effects;
pub mod events;
pub mod pills;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use pillbar_core::RowWidth;
use pillbar_core::config::Config;
pub use runtime::DemoRuntime;

/// Runs the interactive demo.
pub fn run_demo(config: &Config, width_override: Option<RowWidth>) -> Result<()> {
    // The demo requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The demo requires a terminal.\n\
             Use `pillbar fit --label '...'` for non-interactive estimation."
        );
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "pillbar demo")?;
    writeln!(err, "Catalog: {} entries", config.catalog.len())?;
    let config_path = pillbar_core::config::paths::config_path();
    if config_path.exists() {
        writeln!(err, "Config file: {}", config_path.display())?;
    }
    err.flush()?;

    let mut runtime = DemoRuntime::new(config, width_override)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
