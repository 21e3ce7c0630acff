use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Black)
		.bg(Color::Rgb(254, 240, 138))
		.add_modifier(Modifier::BOLD),
	pin: Style::new().fg(Color::Rgb(239, 68, 68)).add_modifier(Modifier::BOLD),
	pin_selected: Style::new()
		.fg(Color::Rgb(239, 68, 68))
		.add_modifier(Modifier::BOLD)
		.add_modifier(Modifier::REVERSED),
	pin_idle: Style::new().fg(Color::DarkGray),
	categories: [
		Color::Rgb(217, 119, 6),
		Color::Rgb(5, 150, 105),
		Color::Rgb(147, 51, 234),
		Color::Rgb(37, 99, 235),
		Color::Rgb(219, 39, 119),
		Color::Rgb(100, 116, 139),
	],
};

pub const MONO: Theme = Theme {
	header: Style::new().add_modifier(Modifier::BOLD),
	row_highlight: Style::new().add_modifier(Modifier::REVERSED),
	prompt: Style::new().add_modifier(Modifier::BOLD),
	empty: Style::new().add_modifier(Modifier::DIM),
	highlight: Style::new().add_modifier(Modifier::UNDERLINED),
	pin: Style::new().add_modifier(Modifier::BOLD),
	pin_selected: Style::new().add_modifier(Modifier::REVERSED),
	pin_idle: Style::new().add_modifier(Modifier::DIM),
	categories: [Color::Reset; 6],
};
