//! Core pill-row library (options, measurement, fit estimation, config).

pub mod config;
pub mod fit;
pub mod measure;
pub mod options;
pub mod row;

pub use fit::{RowWidth, fit_count};
pub use measure::{CellWidth, FontWidth, TextWidth};
pub use options::PillOption;
pub use row::PillRow;
