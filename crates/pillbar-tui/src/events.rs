//! UI event types.
//!
//! Events are the only input to the reducer. The runtime collects terminal
//! input, prepends a `Frame` event carrying the current terminal size, and
//! feeds everything through `update`.

/// Events consumed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick driving redraws.
    Tick,

    /// Start of a loop iteration, with the current terminal size.
    ///
    /// Fit recomputation happens on this event: render records width
    /// observations, the next frame folds them into the shown count.
    Frame { width: u16, height: u16 },

    /// Raw terminal input (keys, resize).
    Terminal(crossterm::event::Event),
}
