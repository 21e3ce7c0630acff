//! Keyword highlighting for terminal text.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::matching::highlight;

/// Build a line where every occurrence of `keyword` in `text` uses `style`.
#[must_use]
pub fn highlight_line<'a>(text: &'a str, keyword: &str, base: Style, style: Style) -> Line<'a> {
	let spans: Vec<Span<'a>> = highlight(text, keyword)
		.into_iter()
		.filter(|span| !span.text.is_empty())
		.map(|span| {
			if span.matched {
				Span::styled(span.text, style)
			} else {
				Span::styled(span.text, base)
			}
		})
		.collect();
	Line::from(spans)
}
