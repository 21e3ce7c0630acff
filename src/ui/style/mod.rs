//! Colour themes for the terminal browser.

mod builtins;

use ratatui::style::{Color, Style};

use crate::types::Category;

pub use builtins::{MONO, SLATE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	/// Map pin for a location with matching exhibits.
	pub pin: Style,
	/// Map pin for the selected location.
	pub pin_selected: Style,
	/// Map marker for a location without matches.
	pub pin_idle: Style,
	/// Category colours in [`Category::ALL`] order.
	pub categories: [Color; 6],
}

impl Theme {
	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new().fg(self.header_fg())
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		self.header
	}

	/// Foreground style for a category badge.
	#[must_use]
	pub fn category_style(&self, category: Category) -> Style {
		let index = Category::ALL.iter().position(|item| *item == category).unwrap_or(Category::ALL.len() - 1);
		Style::new().fg(self.categories[index])
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A built-in theme and the names it answers to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

static BUILTIN_THEMES: [ThemeDefinition; 2] = [
	ThemeDefinition::new("slate", SLATE).with_aliases(&["default", "dark"]),
	ThemeDefinition::new("mono", MONO).with_aliases(&["plain"]),
];

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Primary names of the built-in themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTIN_THEMES.iter().map(|definition| definition.name)
}

/// Look up a theme by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILTIN_THEMES
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}
