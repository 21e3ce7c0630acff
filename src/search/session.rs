use indexmap::IndexSet;
use tracing::debug;

use super::{ExhibitIndex, SearchField};
use crate::locations::Gazetteer;
use crate::types::ExhibitRecord;

/// Everything the user has chosen so far, as a plain value.
///
/// Each `with_*` call returns a new state; evaluation never touches the
/// catalog, so re-running it on every keystroke is always consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
	query: String,
	field: SearchField,
	location: Option<String>,
}

/// Records and map pins selected by a [`SessionState`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionView<'a> {
	pub records: Vec<&'a ExhibitRecord>,
	/// Gazetteer locations named by at least one record, in gazetteer order.
	pub active_locations: IndexSet<&'a str>,
	/// Size of the whole catalog.
	pub total: usize,
}

impl SessionState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.query = query.into();
		self
	}

	#[must_use]
	pub fn with_field(mut self, field: SearchField) -> Self {
		self.field = field;
		self
	}

	/// Select a map location; `None` or a blank name clears it.
	#[must_use]
	pub fn with_location(mut self, location: Option<impl Into<String>>) -> Self {
		self.location = location
			.map(Into::into)
			.filter(|location: &String| !location.trim().is_empty());
		self
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn field(&self) -> SearchField {
		self.field
	}

	#[must_use]
	pub fn location(&self) -> Option<&str> {
		self.location.as_deref()
	}

	/// Whether the query holds anything besides whitespace.
	#[must_use]
	pub fn has_query(&self) -> bool {
		!self.query.trim().is_empty()
	}

	/// Step the location selector through the gazetteer and back to none.
	#[must_use]
	pub fn cycle_location(self, gazetteer: &Gazetteer) -> Self {
		let next = match self.location.as_deref() {
			None => gazetteer.names().next(),
			Some(current) => match gazetteer.position(current) {
				Some(index) => gazetteer.names().nth(index + 1),
				None => gazetteer.names().next(),
			},
		};
		let next = next.map(str::to_owned);
		self.with_location(next)
	}

	/// Compute the records and pins this state selects.
	///
	/// With a keyword the field filter applies, narrowed to the selected
	/// location when there is one. Without a keyword the location alone picks
	/// the records, and with neither nothing is selected. A location missing
	/// from the gazetteer selects nothing.
	#[must_use]
	pub fn evaluate<'a>(&self, index: &'a ExhibitIndex, gazetteer: &'a Gazetteer) -> SessionView<'a> {
		let records = match self.location.as_deref() {
			Some(location) if !gazetteer.contains(location) => Vec::new(),
			Some(location) if self.has_query() => index
				.filter(self.field, &self.query)
				.into_iter()
				.filter(|record| record.source.contains(location))
				.collect(),
			Some(location) => index.at_location(location),
			None => index.filter(self.field, &self.query),
		};
		let active_locations = gazetteer.locations_present(records.iter().copied());
		debug!(
			query = %self.query,
			field = %self.field,
			location = ?self.location,
			matched = records.len(),
			pins = active_locations.len(),
			"evaluated session"
		);

		SessionView {
			records,
			active_locations,
			total: index.len(),
		}
	}
}

impl SessionView<'_> {
	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locations::MapPoint;

	fn catalog() -> (ExhibitIndex, Gazetteer) {
		let index = ExhibitIndex::new(vec![
			ExhibitRecord::new("1", "灯笼鱼化石")
				.with_category("史前", "化石")
				.with_source("双点海, 白骨带 - 永逝之湖"),
			ExhibitRecord::new("2", "恶龙骨架")
				.with_category("史前", "恐龙骨骼")
				.with_source("白骨带 - 阴云山"),
			ExhibitRecord::new("3", "冰封冰箱")
				.with_category("史前", "冰封珍品")
				.with_source("双点海, 白骨带 - 寒冷矿洞, 极暗深渊"),
		]);
		let gazetteer: Gazetteer = [
			("永逝之湖", MapPoint::new(20.0, 30.0)),
			("阴云山", MapPoint::new(40.0, 60.0)),
			("寒冷矿洞", MapPoint::new(70.0, 15.0)),
			("极暗深渊", MapPoint::new(85.0, 80.0)),
		]
		.into_iter()
		.collect();
		(index, gazetteer)
	}

	fn ids(view: &SessionView<'_>) -> Vec<String> {
		view.records.iter().map(|record| record.id.clone()).collect()
	}

	#[test]
	fn empty_state_selects_nothing() {
		let (index, gazetteer) = catalog();
		let view = SessionState::new().evaluate(&index, &gazetteer);
		assert!(view.is_empty());
		assert!(view.active_locations.is_empty());
		assert_eq!(view.total, 3);
	}

	#[test]
	fn query_lights_every_named_location() {
		let (index, gazetteer) = catalog();
		let view = SessionState::new()
			.with_field(SearchField::Category)
			.with_query("史前")
			.evaluate(&index, &gazetteer);
		assert_eq!(ids(&view), ["1", "2", "3"]);
		assert_eq!(
			view.active_locations.iter().copied().collect::<Vec<_>>(),
			["永逝之湖", "阴云山", "寒冷矿洞", "极暗深渊"]
		);
	}

	#[test]
	fn location_narrows_query_results() {
		let (index, gazetteer) = catalog();
		let view = SessionState::new()
			.with_field(SearchField::Source)
			.with_query("双点海")
			.with_location(Some("极暗深渊"))
			.evaluate(&index, &gazetteer);
		assert_eq!(ids(&view), ["3"]);
	}

	#[test]
	fn location_alone_selects_its_exhibits() {
		let (index, gazetteer) = catalog();
		let view = SessionState::new()
			.with_location(Some("阴云山"))
			.evaluate(&index, &gazetteer);
		assert_eq!(ids(&view), ["2"]);
		assert_eq!(view.active_locations.iter().copied().collect::<Vec<_>>(), ["阴云山"]);
	}

	#[test]
	fn unknown_location_selects_nothing() {
		let (index, gazetteer) = catalog();
		let view = SessionState::new()
			.with_query("史前")
			.with_field(SearchField::Category)
			.with_location(Some("月球"))
			.evaluate(&index, &gazetteer);
		assert!(view.is_empty());
	}

	#[test]
	fn blank_location_is_cleared() {
		let state = SessionState::new().with_location(Some("  "));
		assert_eq!(state.location(), None);
		let state = state.with_location(None::<String>);
		assert_eq!(state.location(), None);
	}

	#[test]
	fn location_cycle_visits_gazetteer_then_none() {
		let (_, gazetteer) = catalog();
		let mut state = SessionState::new();
		let mut seen = Vec::new();
		for _ in 0..5 {
			state = state.cycle_location(&gazetteer);
			seen.push(state.location().map(str::to_owned));
		}
		assert_eq!(
			seen,
			[
				Some("永逝之湖".to_string()),
				Some("阴云山".to_string()),
				Some("寒冷矿洞".to_string()),
				Some("极暗深渊".to_string()),
				None,
			]
		);
	}

	#[test]
	fn evaluation_is_repeatable() {
		let (index, gazetteer) = catalog();
		let state = SessionState::new().with_query("冰").with_field(SearchField::Name);
		assert_eq!(state.evaluate(&index, &gazetteer), state.evaluate(&index, &gazetteer));
	}
}
