//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O directly.

use pillbar_core::RowWidth;

/// Effects returned by the reducer for the runtime to execute.
///
/// The reducer returns `Vec<UiEffect>` from each update call.
/// The runtime executes these effects after rendering.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Persist the row width policy to the config file.
    SaveWidth(RowWidth),
}
