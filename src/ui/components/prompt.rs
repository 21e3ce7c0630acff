use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use unicode_width::UnicodeWidthStr;

use crate::search::SearchField;
use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub search_input: &'a QueryInput<'a>,
	pub input_title: Option<&'a str>,
	pub field: SearchField,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the prompt, the query editor and the field tabs on the right.
pub fn render_input_with_tabs(frame: &mut Frame, input: InputContext<'_>) {
	let InputContext {
		search_input,
		input_title,
		field,
		area,
		theme,
	} = input;

	let prompt = input_title.unwrap_or(field.label());
	let tabs_width = tabs_width();
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt_width(prompt)),
			Constraint::Min(1),
			Constraint::Length(tabs_width),
		])
		.split(area);

	let prompt_widget = Paragraph::new(format!("{prompt} > ")).style(theme.prompt_style());
	frame.render_widget(prompt_widget, horizontal[0]);
	search_input.render(frame, horizontal[1]);

	let tabs_area = horizontal[2];
	let tabs_inner = Rect {
		x: tabs_area.x.saturating_add(1),
		width: tabs_area.width.saturating_sub(1),
		..tabs_area
	};
	let tabs = Tabs::new(tab_titles(theme, field))
		.select(field.position())
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(tabs, tabs_inner);
}

fn prompt_width(prompt: &str) -> u16 {
	u16::try_from(prompt.width() + 3).unwrap_or(u16::MAX)
}

/// Width of every tab label plus its padding, plus the leading gap.
fn tabs_width() -> u16 {
	let labels: usize = SearchField::ALL
		.iter()
		.map(|field| field.label().width() + 3)
		.sum();
	u16::try_from(labels + 1).unwrap_or(u16::MAX)
}

fn tab_titles(theme: &Theme, selected: SearchField) -> Vec<Line<'static>> {
	SearchField::ALL
		.iter()
		.map(|field| {
			let style = if *field == selected {
				theme.tab_highlight_style()
			} else {
				theme.tab_inactive_style()
			};
			Line::from(Span::styled(format!(" {} ", field.label()), style))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn widths_account_for_double_width_labels() {
		assert_eq!(prompt_width("展品名"), 9);
		assert_eq!(tabs_width(), (6 + 4 + 4 + 4) + 4 * 3 + 1);
	}
}
