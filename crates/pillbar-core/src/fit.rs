//! Greedy visible-pill estimation.
//!
//! The estimator answers one question: of an ordered selection, how many
//! leading pills fit in the row before the rest collapse behind an overflow
//! counter? Widths accumulate left to right against `total - suffix`; the
//! first pill that would not fit stops the scan. At least one pill is always
//! reported for a non-empty selection, even when it overflows on its own.

use serde::{Deserialize, Serialize};

use crate::measure::TextWidth;

/// Total-width policy for a pill row.
///
/// `Auto` tracks the observed container width; `Fixed` uses a caller-supplied
/// width and ignores the observation. Serializes as `"auto"` or a bare
/// integer so config files read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "WidthRepr", into = "WidthRepr")]
pub enum RowWidth {
    #[default]
    Auto,
    Fixed(u16),
}

impl RowWidth {
    /// Resolves the policy against an observed container width.
    pub fn resolve(self, observed: u16) -> u16 {
        match self {
            RowWidth::Auto => observed,
            RowWidth::Fixed(cols) => cols,
        }
    }
}

impl std::str::FromStr for RowWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(RowWidth::Auto);
        }
        s.parse::<u16>()
            .map(RowWidth::Fixed)
            .map_err(|_| format!("expected \"auto\" or a column count, got \"{s}\""))
    }
}

impl std::fmt::Display for RowWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowWidth::Auto => f.write_str("auto"),
            RowWidth::Fixed(cols) => write!(f, "{cols}"),
        }
    }
}

/// Serde proxy: a width is either a column count or the keyword "auto".
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRepr {
    Cols(u16),
    Keyword(String),
}

impl From<WidthRepr> for RowWidth {
    fn from(repr: WidthRepr) -> Self {
        match repr {
            WidthRepr::Cols(cols) => RowWidth::Fixed(cols),
            // Any keyword is treated as auto; "auto" is the only one written.
            WidthRepr::Keyword(_) => RowWidth::Auto,
        }
    }
}

impl From<RowWidth> for WidthRepr {
    fn from(width: RowWidth) -> Self {
        match width {
            RowWidth::Auto => WidthRepr::Keyword("auto".to_string()),
            RowWidth::Fixed(cols) => WidthRepr::Cols(cols),
        }
    }
}

/// Counts the leading labels that fit within `total_width - suffix_width`.
///
/// Each label costs `measure.width(label) + overhead`. A cumulative width
/// exactly equal to the budget still fits; the first label past it stops the
/// scan with a floor of one. Returns the label count when everything fits,
/// and zero only for an empty sequence.
pub fn fit_count<'a, M, I>(
    labels: I,
    total_width: u16,
    suffix_width: u16,
    overhead: u16,
    measure: &M,
) -> usize
where
    M: TextWidth + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let budget = u32::from(total_width.saturating_sub(suffix_width));
    let mut used: u32 = 0;
    let mut accepted = 0;

    for label in labels {
        used += u32::from(measure.width(label)) + u32::from(overhead);
        if used > budget {
            return accepted.max(1);
        }
        accepted += 1;
    }

    accepted
}
