//! Fit command handler.

use anyhow::Result;
use pillbar_core::{CellWidth, FontWidth, TextWidth, fit_count};
use tracing::debug;

pub struct FitOptions<'a> {
    pub labels: &'a [String],
    pub width: u16,
    pub suffix: u16,
    pub overhead: Option<u16>,
    pub px: bool,
    pub font_size: f32,
    pub json: bool,
}

pub fn run(options: FitOptions<'_>) -> Result<()> {
    let measure: Box<dyn TextWidth> = if options.px {
        Box::new(FontWidth::new(options.font_size))
    } else {
        Box::new(CellWidth)
    };
    let overhead = options.overhead.unwrap_or_else(|| measure.pill_overhead());

    let shown = fit_count(
        options.labels.iter().map(String::as_str),
        options.width,
        options.suffix,
        overhead,
        measure.as_ref(),
    );
    debug!(
        total = options.labels.len(),
        width = options.width,
        suffix = options.suffix,
        overhead,
        shown,
        "estimated fit"
    );

    if options.json {
        let out = serde_json::json!({
            "shown": shown,
            "hidden": options.labels.len() - shown,
            "total": options.labels.len(),
            "overhead": overhead,
        });
        println!("{out}");
    } else {
        println!("{shown}");
    }

    Ok(())
}
