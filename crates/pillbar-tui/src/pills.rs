//! Pill chip construction and label truncation.

use std::borrow::Cow;

use pillbar_core::PillRow;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Overflow counter text for `hidden` collapsed pills, or `None` when the
/// whole selection is visible.
pub fn suffix_text(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{hidden}"))
}

/// Builds the rendered line for the row's current fit.
///
/// Shown pills render as `[label ×] `; the rest collapse into the overflow
/// counter. When a single pill is wider than the row (the floor case) its
/// label is truncated to whatever width remains.
pub fn row_line(row: &PillRow, width: u16) -> Line<'static> {
    let options = row.options();
    if options.is_empty() {
        return Line::from(Span::styled(
            "nothing selected",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let shown = row.shown();
    let suffix = suffix_text(row.hidden());
    let mut spans: Vec<Span<'static>> = Vec::new();

    for option in &options[..shown] {
        let label: Cow<'_, str> = if shown == 1 {
            // Sole pill: cap the label so the chip stays inside the row.
            let reserved = row.overhead()
                + suffix
                    .as_deref()
                    .map_or(0, |s| UnicodeWidthStr::width(s) as u16);
            truncate_label(&option.label, width.saturating_sub(reserved))
        } else {
            Cow::Borrowed(option.label.as_str())
        };

        spans.push(Span::styled("[", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            label.into_owned(),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(" ×] ", Style::default().fg(Color::DarkGray)));
    }

    if let Some(counter) = suffix {
        spans.push(Span::styled(counter, Style::default().fg(Color::Yellow)));
    }

    Line::from(spans)
}

/// Truncates `label` to at most `max_width` display columns, ending with an
/// ellipsis when anything was cut.
///
/// Iterates graphemes so combining sequences and wide characters never get
/// split mid-cluster.
pub fn truncate_label(label: &str, max_width: u16) -> Cow<'_, str> {
    let max_width = usize::from(max_width);
    if UnicodeWidthStr::width(label) <= max_width {
        return Cow::Borrowed(label);
    }
    if max_width <= 1 {
        return Cow::Borrowed("…");
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut cut = 0;
    for (offset, grapheme) in label.grapheme_indices(true) {
        let grapheme_width = UnicodeWidthStr::width(grapheme);
        if used + grapheme_width > budget {
            break;
        }
        used += grapheme_width;
        cut = offset + grapheme.len();
    }

    Cow::Owned(format!("{}…", &label[..cut]))
}

#[cfg(test)]
mod tests {
    use pillbar_core::PillOption;

    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_truncate_label_fits() {
        assert_eq!(truncate_label("hello", 5), "hello");
        assert_eq!(truncate_label("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_label_cuts_with_ellipsis() {
        assert_eq!(truncate_label("hello world", 8), "hello w…");
        assert_eq!(truncate_label("hello", 1), "…");
        assert_eq!(truncate_label("hello", 0), "…");
    }

    /// Wide characters are never split; the ellipsis absorbs the slack.
    #[test]
    fn test_truncate_label_wide_chars() {
        assert_eq!(truncate_label("你好世界", 5), "你好…");
        assert_eq!(truncate_label("你好世界", 4), "你…");
    }

    #[test]
    fn test_suffix_text() {
        assert_eq!(suffix_text(0), None);
        assert_eq!(suffix_text(3), Some("+3".to_string()));
    }

    #[test]
    fn test_row_line_chips_and_counter() {
        let mut row = PillRow::new(vec![
            PillOption::new("alpha", "a"),
            PillOption::new("beta", "b"),
            PillOption::new("gamma", "c"),
        ]);
        row.container_cell().set(22);
        row.recompute();
        // alpha costs 10, beta 9, gamma would push past 22.
        assert_eq!(row.shown(), 2);

        let line = row_line(&row, 22);
        assert_eq!(line_text(&line), "[alpha ×] [beta ×] +1");
    }

    /// A lone oversized pill gets its label cut to the row.
    #[test]
    fn test_row_line_floor_case_truncates() {
        let mut row = PillRow::new(vec![PillOption::new("supercalifragilistic", "s")]);
        row.container_cell().set(12);
        row.recompute();
        assert_eq!(row.shown(), 1);

        let line = row_line(&row, 12);
        assert_eq!(line_text(&line), "[superc… ×] ");
    }

    #[test]
    fn test_row_line_empty_selection() {
        let row = PillRow::new(vec![]);
        let line = row_line(&row, 40);
        assert_eq!(line_text(&line), "nothing selected");
    }
}
