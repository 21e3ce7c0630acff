use serde::Serialize;

use super::ExhibitRecord;
use crate::search::SearchField;

/// Captures the outcome of an interactive browsing session.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
	pub accepted: bool,
	pub query: String,
	pub field: SearchField,
	pub location: Option<String>,
	pub selection: Option<ExhibitRecord>,
}

impl SearchOutcome {
	/// Return the selected exhibit, if the user confirmed one.
	#[must_use]
	pub fn selected(&self) -> Option<&ExhibitRecord> {
		if self.accepted { self.selection.as_ref() } else { None }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cancelled_outcome_hides_selection() {
		let outcome = SearchOutcome {
			accepted: false,
			query: "bone".into(),
			field: SearchField::Name,
			location: None,
			selection: Some(ExhibitRecord::new("1", "Bone")),
		};
		assert!(outcome.selected().is_none());

		let accepted = SearchOutcome {
			accepted: true,
			..outcome
		};
		assert_eq!(accepted.selected().map(|record| record.id.as_str()), Some("1"));
	}
}
