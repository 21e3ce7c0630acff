use anyhow::Result;
use tracing::warn;

use super::App;
use super::style::{self, Theme};
use crate::catalog::Catalog;
use crate::search::{SearchField, SessionState};
use crate::types::SearchOutcome;

/// A small builder for configuring the interactive exhibit browser before
/// running it.
pub struct SearchUi {
	catalog: Catalog,
	session: SessionState,
	input_title: Option<String>,
	theme: Option<Theme>,
}

impl SearchUi {
	/// Create a browser over the provided catalog.
	#[must_use]
	pub fn new(catalog: Catalog) -> Self {
		Self {
			catalog,
			session: SessionState::new(),
			input_title: None,
			theme: None,
		}
	}

	/// Start from an existing session, replacing any query, field or location
	/// set so far.
	#[must_use]
	pub fn with_session(mut self, session: SessionState) -> Self {
		self.session = session;
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.session = self.session.with_query(query);
		self
	}

	#[must_use]
	pub fn with_field(mut self, field: SearchField) -> Self {
		self.session = self.session.with_field(field);
		self
	}

	#[must_use]
	pub fn with_location(mut self, location: Option<impl Into<String>>) -> Self {
		self.session = self.session.with_location(location);
		self
	}

	#[must_use]
	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = Some(title.into());
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Use a built-in theme by name. Unknown names keep the current theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => warn!(theme = name, "unknown theme; keeping the default"),
		}
		self
	}

	/// Build the application state without entering the terminal.
	#[must_use]
	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = App::new(self.catalog, self.session);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_input_title(self.input_title);
		app
	}

	/// Run the interactive browser and return the outcome.
	pub fn run(self) -> Result<SearchOutcome> {
		self.into_app().run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::style::MONO;
	use crate::ui::test_support::sample_catalog;

	#[test]
	fn builder_configures_the_session() {
		let app = SearchUi::new(sample_catalog())
			.with_field(SearchField::Source)
			.with_initial_query("moon")
			.with_location(Some("Blue Moon"))
			.with_input_title("探索")
			.with_theme_name("plain")
			.into_app();

		assert_eq!(app.session.field(), SearchField::Source);
		assert_eq!(app.session.query(), "moon");
		assert_eq!(app.session.location(), Some("Blue Moon"));
		assert_eq!(app.input_title.as_deref(), Some("探索"));
		assert_eq!(app.theme, MONO);
		assert_eq!(app.filtered_len(), 1);
	}

	#[test]
	fn unknown_theme_keeps_default() {
		let app = SearchUi::new(sample_catalog()).with_theme_name("neon").into_app();
		assert_eq!(app.theme, Theme::default());
	}
}
