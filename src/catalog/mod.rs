//! Loading the exhibit dataset and gazetteer.
//!
//! Both documents ship embedded in the binary. Either can be replaced by a
//! JSON file on disk with the same shape: an array of exhibit records, and an
//! array of `{ "name", "top", "left" }` rows for the gazetteer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::locations::{Gazetteer, GazetteerEntry};
use crate::search::ExhibitIndex;
use crate::types::ExhibitRecord;

const BUILTIN_EXHIBITS: &str = include_str!("data/exhibits.json");
const BUILTIN_GAZETTEER: &str = include_str!("data/gazetteer.json");
const BUILTIN_ORIGIN: &str = "built-in catalog";

/// Errors raised while reading catalog documents.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to parse {document} from {origin}")]
	Parse {
		document: &'static str,
		origin: String,
		#[source]
		source: serde_json::Error,
	},
}

/// The exhibit index and gazetteer, loaded together.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	pub index: ExhibitIndex,
	pub gazetteer: Gazetteer,
}

impl Catalog {
	#[must_use]
	pub fn new(index: ExhibitIndex, gazetteer: Gazetteer) -> Self {
		Self { index, gazetteer }
	}

	/// Load the embedded dataset and gazetteer.
	///
	/// # Errors
	///
	/// Returns an error if the embedded documents are malformed.
	pub fn builtin() -> Result<Self, CatalogError> {
		Self::from_paths(None, None)
	}

	/// Load the catalog, replacing either embedded document with a file.
	///
	/// # Errors
	///
	/// Returns an error if a file cannot be read or does not parse.
	pub fn from_paths(dataset: Option<&Path>, gazetteer: Option<&Path>) -> Result<Self, CatalogError> {
		let records = match dataset {
			Some(path) => parse_exhibits(&read(path)?, &path.display().to_string())?,
			None => parse_exhibits(BUILTIN_EXHIBITS, BUILTIN_ORIGIN)?,
		};
		let gazetteer = match gazetteer {
			Some(path) => parse_gazetteer(&read(path)?, &path.display().to_string())?,
			None => parse_gazetteer(BUILTIN_GAZETTEER, BUILTIN_ORIGIN)?,
		};

		info!(
			exhibits = records.len(),
			locations = gazetteer.len(),
			"catalog loaded"
		);
		Ok(Self::new(ExhibitIndex::new(records), gazetteer))
	}
}

fn read(path: &Path) -> Result<String, CatalogError> {
	debug!(path = %path.display(), "reading catalog document");
	fs::read_to_string(path).map_err(|source| CatalogError::Read {
		path: path.to_path_buf(),
		source,
	})
}

/// Parse an exhibit array.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] when `text` is not a JSON array of records.
pub fn parse_exhibits(text: &str, origin: &str) -> Result<Vec<ExhibitRecord>, CatalogError> {
	serde_json::from_str(text).map_err(|source| CatalogError::Parse {
		document: "exhibits",
		origin: origin.to_string(),
		source,
	})
}

/// Parse a gazetteer array, preserving row order.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] when `text` is not a JSON array of rows.
pub fn parse_gazetteer(text: &str, origin: &str) -> Result<Gazetteer, CatalogError> {
	let entries: Vec<GazetteerEntry> =
		serde_json::from_str(text).map_err(|source| CatalogError::Parse {
			document: "gazetteer",
			origin: origin.to_string(),
			source,
		})?;
	Ok(entries.into_iter().collect())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;
	use crate::search::{SearchField, filter};

	#[test]
	fn builtin_catalog_loads() {
		let catalog = Catalog::builtin().expect("builtin catalog");
		assert_eq!(catalog.index.len(), 11);
		assert_eq!(catalog.gazetteer.len(), 20);
		let first = &catalog.index.records()[0];
		assert_eq!(first.name, "灯笼鱼化石");
		assert!(first.traits.is_declared_none());
	}

	#[test]
	fn every_builtin_location_is_on_the_map() {
		let catalog = Catalog::builtin().expect("builtin catalog");
		for record in catalog.index.records() {
			let source = record.source();
			for location in source.locations() {
				assert!(
					catalog.gazetteer.contains(location),
					"{location} from exhibit {} has no map pin",
					record.id
				);
			}
		}
	}

	#[test]
	fn lantern_fish_scenario() {
		let catalog = Catalog::builtin().expect("builtin catalog");
		let found = filter(catalog.index.records(), SearchField::Source, "永逝之湖");
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].name, "灯笼鱼化石");
		assert_eq!(catalog.gazetteer.resolve(&found[0].source), Some("永逝之湖"));

		let none_traits = filter(catalog.index.records(), SearchField::Traits, "无");
		assert_eq!(
			none_traits.iter().map(|record| record.id.as_str()).collect::<Vec<_>>(),
			["1"]
		);
	}

	#[test]
	fn files_replace_embedded_documents() {
		let dir = tempdir().expect("tempdir");
		let dataset = dir.path().join("exhibits.json");
		let gazetteer = dir.path().join("gazetteer.json");
		fs::write(&dataset, r#"[{"id": "a", "name": "Moon Cheese", "source": "Space - Blue Moon"}]"#)
			.expect("write dataset");
		fs::write(&gazetteer, r#"[{"name": "Blue Moon", "top": 5, "left": 95}]"#)
			.expect("write gazetteer");

		let catalog = Catalog::from_paths(Some(&dataset), Some(&gazetteer)).expect("catalog");
		assert_eq!(catalog.index.len(), 1);
		assert_eq!(catalog.gazetteer.resolve("Space - Blue Moon"), Some("Blue Moon"));

		let mixed = Catalog::from_paths(Some(&dataset), None).expect("catalog");
		assert_eq!(mixed.gazetteer.len(), 20);
	}

	#[test]
	fn fractional_and_negative_stats_load() {
		let records = parse_exhibits(
			r#"[
				{"id": "a", "name": "Moon Cheese", "base_buzz": 12.5, "max_buzz": 40, "max_knowledge": 0},
				{"id": "b", "name": "Cold Comet", "max_buzz": -1}
			]"#,
			"inline",
		)
		.expect("stats are display-only numbers");
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].base_buzz, 12.5);
		assert_eq!(records[1].max_buzz, -1.0);
	}

	#[test]
	fn missing_file_reports_path() {
		let dir = tempdir().expect("tempdir");
		let missing = dir.path().join("nope.json");
		let err = Catalog::from_paths(Some(&missing), None).expect_err("missing file");
		assert!(matches!(err, CatalogError::Read { ref path, .. } if path == &missing));
	}

	#[test]
	fn malformed_document_reports_origin() {
		let err = parse_gazetteer("{\"name\": 1}", "inline").expect_err("not an array");
		assert!(err.to_string().contains("gazetteer"));
		assert!(err.to_string().contains("inline"));
	}
}
