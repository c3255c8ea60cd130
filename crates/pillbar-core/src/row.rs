//! View-local pill-row state.
//!
//! [`PillRow`] sits between a view layer and the fit estimator. The view
//! records live geometry into the row's observation cells during render; the
//! update cycle calls [`PillRow::recompute`] afterwards, which re-runs the
//! fit only when an input actually changed. Rendering never recomputes.

use std::cell::Cell;

use tracing::{debug, trace};

use crate::fit::{RowWidth, fit_count};
use crate::measure::{CellWidth, TextWidth};
use crate::options::PillOption;

/// A row of selected-option pills plus its fitted count.
///
/// Holds the option sequence, the width policy, the measurer, and two
/// observation cells (container and suffix width). A freshly constructed row
/// reports the full count until the first recomputation.
#[derive(Debug)]
pub struct PillRow<M: TextWidth = CellWidth> {
    options: Vec<PillOption>,
    width: RowWidth,
    overhead: Option<u16>,
    measure: M,
    container_width: Cell<u16>,
    suffix_width: Cell<u16>,
    /// Resolved (width, suffix) of the last fit; `None` before the first run.
    last_inputs: Option<(u16, u16)>,
    /// Set by mutators whose change is invisible to `last_inputs`.
    dirty: bool,
    shown: usize,
}

impl PillRow<CellWidth> {
    /// Creates a row measured in terminal cells.
    pub fn new(options: Vec<PillOption>) -> Self {
        Self::with_measure(options, CellWidth)
    }
}

impl<M: TextWidth> PillRow<M> {
    pub fn with_measure(options: Vec<PillOption>, measure: M) -> Self {
        let shown = options.len();
        Self {
            options,
            width: RowWidth::Auto,
            overhead: None,
            measure,
            container_width: Cell::new(0),
            suffix_width: Cell::new(0),
            last_inputs: None,
            dirty: false,
            shown,
        }
    }

    /// Observation cell for the container width.
    ///
    /// The view layer binds this to whatever geometry it has (a layout `Rect`
    /// in a terminal, an element box elsewhere) by writing the width it sees
    /// each render. Shared so render code holding `&PillRow` can write it.
    pub fn container_cell(&self) -> &Cell<u16> {
        &self.container_width
    }

    /// Observation cell for the rendered suffix width (overflow counter).
    pub fn suffix_cell(&self) -> &Cell<u16> {
        &self.suffix_width
    }

    /// Count of leading pills that fit, per the last recomputation.
    ///
    /// Clamped to the current option count so removals never leave the value
    /// out of range between a mutation and the next recompute.
    pub fn shown(&self) -> usize {
        self.shown.min(self.options.len())
    }

    /// Count of pills collapsed behind the overflow counter.
    pub fn hidden(&self) -> usize {
        self.options.len() - self.shown()
    }

    pub fn options(&self) -> &[PillOption] {
        &self.options
    }

    pub fn width(&self) -> RowWidth {
        self.width
    }

    /// Per-pill overhead: the explicit override, or the measurer's default.
    pub fn overhead(&self) -> u16 {
        self.overhead.unwrap_or_else(|| self.measure.pill_overhead())
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Replaces the option sequence.
    pub fn set_options(&mut self, options: Vec<PillOption>) {
        self.options = options;
        self.dirty = true;
    }

    /// Appends an option to the end of the row.
    pub fn push(&mut self, option: PillOption) {
        self.options.push(option);
        self.dirty = true;
    }

    /// Adds `option` if its value is absent, removes it otherwise.
    pub fn toggle(&mut self, option: PillOption) {
        if let Some(pos) = self.options.iter().position(|o| o.value == option.value) {
            self.options.remove(pos);
        } else {
            self.options.push(option);
        }
        self.dirty = true;
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Sets the width policy.
    ///
    /// No dirty mark: the policy resolves against the observed width inside
    /// `recompute`, so a change that alters the effective width is caught by
    /// the input comparison, and one that does not needs no refit.
    pub fn set_width(&mut self, width: RowWidth) {
        self.width = width;
    }

    /// Overrides the per-pill overhead; `None` restores the measurer default.
    pub fn set_overhead(&mut self, overhead: Option<u16>) {
        if overhead != self.overhead {
            self.overhead = overhead;
            self.dirty = true;
        }
    }

    /// Re-runs the fit if the resolved width, suffix width, or option
    /// sequence changed since the last run. Returns whether the shown count
    /// changed.
    pub fn recompute(&mut self) -> bool {
        let width = self.width.resolve(self.container_width.get());
        let suffix = self.suffix_width.get();
        if !self.dirty && self.last_inputs == Some((width, suffix)) {
            trace!(width, suffix, "fit inputs unchanged");
            return false;
        }

        let before = self.shown();
        self.shown = fit_count(
            self.options.iter().map(|o| o.label.as_str()),
            width,
            suffix,
            self.overhead(),
            &self.measure,
        );
        self.last_inputs = Some((width, suffix));
        self.dirty = false;

        let changed = self.shown != before;
        if changed {
            debug!(
                width,
                suffix,
                shown = self.shown,
                total = self.options.len(),
                "pill fit changed"
            );
        }
        changed
    }
}
