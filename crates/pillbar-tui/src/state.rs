//! TUI state types.

use pillbar_core::config::Config;
use pillbar_core::{PillOption, PillRow, RowWidth};

/// Top-level application state for the demo.
pub struct AppState {
    /// The pill row under demonstration.
    pub row: PillRow,
    /// Catalog entries available for toggling in and out of the row.
    pub catalog: Vec<PillOption>,
    /// Highlighted catalog index.
    pub cursor: usize,
    /// Exit flag checked by the runtime loop.
    pub should_quit: bool,
}

impl AppState {
    /// Builds the demo state from config.
    ///
    /// The whole catalog starts selected so the overflow counter is visible
    /// on typical terminal widths right away.
    pub fn new(config: &Config, width_override: Option<RowWidth>) -> Self {
        let mut row = PillRow::new(config.catalog.clone());
        row.set_width(width_override.unwrap_or(config.row.width));
        row.set_overhead(config.row.overhead);

        Self {
            row,
            catalog: config.catalog.clone(),
            cursor: 0,
            should_quit: false,
        }
    }
}
