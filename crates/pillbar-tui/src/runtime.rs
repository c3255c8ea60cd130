//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Each loop iteration starts with a `Frame` event so the reducer can fold
//! the previous render's width observations into the fit before anything
//! else happens.

use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use pillbar_core::RowWidth;
use pillbar_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate during interaction (60fps = ~16ms per frame).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle.
/// Longer timeout reduces CPU usage when nothing is happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Full-screen demo runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is guaranteed to be restored on drop, panic, or Ctrl+C.
pub struct DemoRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    pub state: AppState,
    /// Last time a Tick event was emitted.
    last_tick: std::time::Instant,
    /// Last time a terminal event was received (for fast tick during interaction).
    last_terminal_event: std::time::Instant,
}

impl DemoRuntime {
    /// Creates a new demo runtime.
    pub fn new(config: &Config, width_override: Option<RowWidth>) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        // Enter alternate screen and raw mode
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config, width_override);

        let now = std::time::Instant::now();
        Ok(Self {
            terminal,
            state,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        self.event_loop()
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            // Collect terminal input and ticks
            let mut events = self.collect_events()?;

            // Prepend Frame event with current terminal size.
            // This folds render-time width observations into the fit before
            // other events are processed.
            let size = self.terminal.size()?;
            events.insert(0, UiEvent::Frame {
                width: size.width,
                height: size.height,
            });

            // Process each event through the reducer
            for event in events {
                // Track terminal activity for fast tick mode
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = std::time::Instant::now();
                }

                // Only Tick triggers render - this caps frame rate at tick cadence
                // Terminal events update state but batch renders to next Tick
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            // Only render if something changed
            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects terminal events, emitting a Tick once the interval elapses.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Poll fast while the user is interacting, slow otherwise.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Block until the next tick is due; terminal input wakes us early.
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());

        if event::poll(time_until_tick)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    /// Executes effects returned by the reducer.
    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::SaveWidth(width) => {
                if let Err(e) = Config::save_width(width) {
                    warn!("failed to persist width policy: {e:#}");
                }
            }
        }
    }
}

impl Drop for DemoRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
