//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use pillbar_core::RowWidth;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Frame { .. } => {
            handle_frame(app);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

// ============================================================================
// Frame Handler (fit recomputation)
// ============================================================================

/// Handles per-frame state updates.
///
/// Render records the row's container and suffix widths as it draws; this
/// folds those observations into the shown count before the next draw. The
/// fit therefore runs after layout settles, never mid-render.
fn handle_frame(app: &mut AppState) {
    app.row.recompute();
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => {
            // Nothing to invalidate: the next render records the new widths
            // and the frame after that refits.
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![UiEffect::Quit]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor = app.cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.cursor + 1 < app.catalog.len() {
                app.cursor += 1;
            }
            vec![]
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(entry) = app.catalog.get(app.cursor) {
                app.row.toggle(entry.clone());
            }
            vec![]
        }
        KeyCode::Char('w') => toggle_width(app),
        _ => vec![],
    }
}

/// Flips the width policy between auto and fixed-at-the-observed-width,
/// persisting the choice.
fn toggle_width(app: &mut AppState) -> Vec<UiEffect> {
    let next = match app.row.width() {
        RowWidth::Auto => RowWidth::Fixed(app.row.container_cell().get()),
        RowWidth::Fixed(_) => RowWidth::Auto,
    };
    app.row.set_width(next);
    vec![UiEffect::SaveWidth(next)]
}
