//! Selected-option model.

use serde::{Deserialize, Serialize};

/// One selectable entry: the label rendered inside a pill plus the value the
/// selection stands for.
///
/// Immutable once constructed. Rows and catalogs own their options by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillOption {
    /// Text rendered inside the pill.
    pub label: String,
    /// Value the selection stands for; identity for toggling.
    pub value: String,
}

impl PillOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
