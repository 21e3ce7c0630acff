use indexmap::IndexSet;

use super::Gazetteer;
use crate::types::ExhibitRecord;

impl Gazetteer {
	/// First location, in gazetteer order, that `source` mentions verbatim.
	///
	/// Matching is plain case-sensitive containment, so a short name that is
	/// part of a longer unrelated one also matches. Ties go to whichever entry
	/// was authored first.
	#[must_use]
	pub fn resolve(&self, source: &str) -> Option<&str> {
		self.names().find(|name| source.contains(name))
	}

	/// Every location `source` mentions, in gazetteer order.
	#[must_use]
	pub fn resolve_all(&self, source: &str) -> Vec<&str> {
		self.names().filter(|name| source.contains(name)).collect()
	}

	/// Locations mentioned by at least one record's source, in gazetteer order.
	#[must_use]
	pub fn locations_present<'r, I>(&self, records: I) -> IndexSet<&str>
	where
		I: IntoIterator<Item = &'r ExhibitRecord>,
	{
		let sources: Vec<&str> = records.into_iter().map(|record| record.source.as_str()).collect();
		self.names()
			.filter(|name| sources.iter().any(|source| source.contains(name)))
			.collect()
	}
}
