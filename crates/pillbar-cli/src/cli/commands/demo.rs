//! Demo command handler.

use anyhow::{Context, Result};
use pillbar_core::RowWidth;
use pillbar_core::config::Config;

pub fn run(config: &Config, width_override: Option<RowWidth>) -> Result<()> {
    pillbar_tui::run_demo(config, width_override).context("interactive demo failed")
}
