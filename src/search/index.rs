use tracing::trace;

use super::SearchField;
use crate::matching::Needle;
use crate::types::ExhibitRecord;

/// Read-only collection of exhibits built once at startup.
#[derive(Debug, Clone, Default)]
pub struct ExhibitIndex {
	records: Vec<ExhibitRecord>,
}

impl ExhibitIndex {
	#[must_use]
	pub fn new(records: Vec<ExhibitRecord>) -> Self {
		Self { records }
	}

	#[must_use]
	pub fn records(&self) -> &[ExhibitRecord] {
		&self.records
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// First record carrying `id`.
	#[must_use]
	pub fn get(&self, id: &str) -> Option<&ExhibitRecord> {
		self.records.iter().find(|record| record.id == id)
	}

	/// See [`filter`].
	#[must_use]
	pub fn filter(&self, field: SearchField, keyword: &str) -> Vec<&ExhibitRecord> {
		filter(&self.records, field, keyword)
	}

	/// Records whose source mentions `location` verbatim.
	#[must_use]
	pub fn at_location(&self, location: &str) -> Vec<&ExhibitRecord> {
		if location.is_empty() {
			return Vec::new();
		}
		self.records
			.iter()
			.filter(|record| record.source.contains(location))
			.collect()
	}
}

impl FromIterator<ExhibitRecord> for ExhibitIndex {
	fn from_iter<I: IntoIterator<Item = ExhibitRecord>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

/// Select the records whose `field` contains `keyword`, ignoring case.
///
/// The keyword is trimmed first; a blank keyword selects nothing. Results
/// keep the input order and borrow from `records`.
#[must_use]
pub fn filter<'a>(records: &'a [ExhibitRecord], field: SearchField, keyword: &str) -> Vec<&'a ExhibitRecord> {
	let Some(needle) = Needle::new(keyword) else {
		return Vec::new();
	};

	let matches: Vec<&ExhibitRecord> = records
		.iter()
		.filter(|record| field.matches(record, &needle))
		.collect();
	trace!(%field, keyword = %needle.as_string(), matched = matches.len(), "filtered exhibits");
	matches
}

/// Like [`filter`], taking the selector as text.
///
/// An unrecognized selector selects nothing rather than failing.
#[must_use]
pub fn filter_by_key<'a>(records: &'a [ExhibitRecord], field: &str, keyword: &str) -> Vec<&'a ExhibitRecord> {
	match field.parse::<SearchField>() {
		Ok(field) => filter(records, field, keyword),
		Err(_) => Vec::new(),
	}
}
