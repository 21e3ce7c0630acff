use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::types::SearchOutcome;

impl<'a> App<'a> {
	/// Apply one key press, returning an outcome when the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome(false))),
			KeyCode::Enter => return Ok(Some(self.outcome(true))),
			KeyCode::Tab => self.cycle_field(true),
			KeyCode::BackTab => self.cycle_field(false),
			KeyCode::Char('l') if ctrl => self.cycle_location(),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.search_input.input(key) {
					self.sync_query();
				}
			}
		}
		Ok(None)
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.filtered_len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::search::{SearchField, SessionState};
	use crate::ui::test_support::sample_catalog;

	fn press(app: &mut App<'_>, code: KeyCode) -> Option<SearchOutcome> {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).expect("key")
	}

	#[test]
	fn typing_filters_results() {
		let mut app = App::new(sample_catalog(), SessionState::new());
		for ch in "drag".chars() {
			assert!(press(&mut app, KeyCode::Char(ch)).is_none());
		}
		assert_eq!(app.session.query(), "drag");
		assert_eq!(app.results()[0].id, "2");
	}

	#[test]
	fn tab_cycles_field_selector() {
		let mut app = App::new(sample_catalog(), SessionState::new());
		press(&mut app, KeyCode::Tab);
		assert_eq!(app.session.field(), SearchField::Category);
		press(&mut app, KeyCode::BackTab);
		assert_eq!(app.session.field(), SearchField::Name);
	}

	#[test]
	fn arrows_stay_within_results() {
		let mut app = App::new(
			sample_catalog(),
			SessionState::new().with_field(SearchField::Category).with_query("史前"),
		);
		press(&mut app, KeyCode::Up);
		assert_eq!(app.table_state.selected(), Some(0));
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Down);
		assert_eq!(app.table_state.selected(), Some(1));
	}

	#[test]
	fn enter_accepts_and_escape_cancels() {
		let mut app = App::new(sample_catalog(), SessionState::new().with_query("totem"));
		let accepted = press(&mut app, KeyCode::Enter).expect("outcome");
		assert!(accepted.accepted);
		assert_eq!(accepted.selected().map(|record| record.id.as_str()), Some("3"));

		let cancelled = press(&mut app, KeyCode::Esc).expect("outcome");
		assert!(!cancelled.accepted);
		assert_eq!(cancelled.query, "totem");
	}

	#[test]
	fn ctrl_l_selects_next_location() {
		let mut app = App::new(sample_catalog(), SessionState::new());
		app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL))
			.expect("key");
		assert_eq!(app.session.location(), Some("Lost Lake"));
		assert_eq!(app.search_input.text(), "");
	}
}
