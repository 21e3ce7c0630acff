//! State container for the terminal browser.

use ratatui::widgets::TableState;
use tracing::debug;

use super::input::QueryInput;
use super::style::Theme;
use crate::catalog::Catalog;
use crate::search::{SearchField, SessionState};
use crate::types::{ExhibitRecord, SearchOutcome};

/// Aggregate state shared across the terminal UI.
///
/// The session value is the source of truth for what is shown; `results` and
/// `active_locations` cache its latest evaluation for rendering.
pub struct App<'a> {
	pub catalog: Catalog,
	pub session: SessionState,
	pub search_input: QueryInput<'a>,
	pub table_state: TableState,
	pub theme: Theme,
	pub(crate) input_title: Option<String>,
	pub(crate) results: Vec<ExhibitRecord>,
	pub(crate) active_locations: Vec<String>,
}

impl<'a> App<'a> {
	#[must_use]
	pub fn new(catalog: Catalog, session: SessionState) -> Self {
		let search_input = QueryInput::new(session.query());
		let mut app = Self {
			catalog,
			session,
			search_input,
			table_state: TableState::default(),
			theme: Theme::default(),
			input_title: None,
			results: Vec::new(),
			active_locations: Vec::new(),
		};
		app.refresh();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_input_title(&mut self, title: Option<String>) {
		self.input_title = title;
	}

	/// Re-evaluate the session and keep the row selection in range.
	pub(crate) fn refresh(&mut self) {
		let view = self.session.evaluate(&self.catalog.index, &self.catalog.gazetteer);
		let results: Vec<ExhibitRecord> = view.records.into_iter().cloned().collect();
		let active_locations: Vec<String> = view.active_locations.into_iter().map(str::to_owned).collect();
		self.results = results;
		self.active_locations = active_locations;
		self.ensure_selection();
	}

	/// Adopt the input's current text as the query.
	pub(crate) fn sync_query(&mut self) {
		let query = self.search_input.text().to_string();
		self.session = std::mem::take(&mut self.session).with_query(query);
		self.table_state.select(Some(0));
		self.refresh();
	}

	pub fn set_field(&mut self, field: SearchField) {
		if self.session.field() != field {
			debug!(%field, "search field changed");
			self.session = std::mem::take(&mut self.session).with_field(field);
			self.table_state.select(Some(0));
			self.refresh();
		}
	}

	pub(crate) fn cycle_field(&mut self, forward: bool) {
		let current = self.session.field();
		self.set_field(if forward { current.next() } else { current.previous() });
	}

	pub(crate) fn cycle_location(&mut self) {
		self.session = std::mem::take(&mut self.session).cycle_location(&self.catalog.gazetteer);
		debug!(location = ?self.session.location(), "location selector changed");
		self.table_state.select(Some(0));
		self.refresh();
	}

	pub(crate) fn ensure_selection(&mut self) {
		if self.results.is_empty() {
			self.table_state.select(None);
			return;
		}
		let selected = self.table_state.selected().unwrap_or(0);
		let clamped = selected.min(self.results.len() - 1);
		self.table_state.select(Some(clamped));
	}

	/// Number of exhibits currently listed.
	#[must_use]
	pub fn filtered_len(&self) -> usize {
		self.results.len()
	}

	#[must_use]
	pub fn results(&self) -> &[ExhibitRecord] {
		&self.results
	}

	#[must_use]
	pub fn selected_record(&self) -> Option<&ExhibitRecord> {
		self.table_state.selected().and_then(|index| self.results.get(index))
	}

	pub(crate) fn outcome(&self, accepted: bool) -> SearchOutcome {
		SearchOutcome {
			accepted,
			query: self.session.query().to_string(),
			field: self.session.field(),
			location: self.session.location().map(str::to_owned),
			selection: if accepted { self.selected_record().cloned() } else { None },
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::test_support::sample_catalog;

	#[test]
	fn initial_session_is_evaluated() {
		let app = App::new(
			sample_catalog(),
			SessionState::new().with_field(SearchField::Category).with_query("史前"),
		);
		assert_eq!(app.filtered_len(), 2);
		assert_eq!(app.search_input.text(), "史前");
		assert_eq!(app.active_locations, ["Lost Lake", "Cloudy Peak"]);
		assert_eq!(app.selected_record().map(|record| record.id.as_str()), Some("1"));
	}

	#[test]
	fn field_changes_re_filter() {
		let mut app = App::new(sample_catalog(), SessionState::new().with_query("fossil"));
		assert_eq!(app.filtered_len(), 1);
		app.set_field(SearchField::Source);
		assert_eq!(app.filtered_len(), 0);
		assert_eq!(app.selected_record(), None);
		app.cycle_field(false);
		assert_eq!(app.session.field(), SearchField::Traits);
	}

	#[test]
	fn location_cycle_filters_without_query() {
		let mut app = App::new(sample_catalog(), SessionState::new());
		assert_eq!(app.filtered_len(), 0);
		app.cycle_location();
		assert_eq!(app.session.location(), Some("Lost Lake"));
		assert_eq!(app.results()[0].id, "1");
	}

	#[test]
	fn outcome_carries_selection_only_when_accepted() {
		let app = App::new(sample_catalog(), SessionState::new().with_query("orbit"));
		assert_eq!(app.outcome(true).selection.map(|record| record.id), Some("3".to_string()));
		assert!(app.outcome(false).selection.is_none());
	}
}
