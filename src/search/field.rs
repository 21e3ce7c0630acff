use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::Needle;
use crate::types::ExhibitRecord;

/// Which exhibit attributes a keyword is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
	#[default]
	Name,
	/// Category or subcategory.
	Category,
	Source,
	/// Any single trait label.
	Traits,
}

/// Returned when a selector string names no known field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown search field '{0}' (expected name, category, source or traits)")]
pub struct ParseFieldError(pub String);

impl SearchField {
	/// Selector order used by the tab bar.
	pub const ALL: [SearchField; 4] = [
		SearchField::Name,
		SearchField::Category,
		SearchField::Traits,
		SearchField::Source,
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			SearchField::Name => "name",
			SearchField::Category => "category",
			SearchField::Source => "source",
			SearchField::Traits => "traits",
		}
	}

	/// Label shown in the selector tabs.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			SearchField::Name => "展品名",
			SearchField::Category => "类别",
			SearchField::Source => "来源",
			SearchField::Traits => "特性",
		}
	}

	/// The selector after this one, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		let index = self.position();
		Self::ALL[(index + 1) % Self::ALL.len()]
	}

	/// The selector before this one, wrapping around.
	#[must_use]
	pub fn previous(self) -> Self {
		let index = self.position();
		Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn position(self) -> usize {
		Self::ALL.iter().position(|field| *field == self).unwrap_or(0)
	}

	/// Apply this field's match policy to one record.
	#[must_use]
	pub fn matches(self, record: &ExhibitRecord, needle: &Needle) -> bool {
		match self {
			SearchField::Name => needle.is_in(&record.name),
			SearchField::Category => needle.is_in(&record.category) || needle.is_in(&record.subcategory),
			SearchField::Source => needle.is_in(&record.source),
			SearchField::Traits => record.traits.matches(needle),
		}
	}
}

impl fmt::Display for SearchField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SearchField {
	type Err = ParseFieldError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let trimmed = value.trim();
		match trimmed.to_ascii_lowercase().as_str() {
			"name" | "展品名" => Ok(SearchField::Name),
			"category" | "类别" => Ok(SearchField::Category),
			"source" | "来源" => Ok(SearchField::Source),
			"traits" | "trait" | "特性" => Ok(SearchField::Traits),
			_ => Err(ParseFieldError(trimmed.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_english_and_chinese_names() {
		assert_eq!("Name".parse::<SearchField>(), Ok(SearchField::Name));
		assert_eq!(" traits ".parse::<SearchField>(), Ok(SearchField::Traits));
		assert_eq!("来源".parse::<SearchField>(), Ok(SearchField::Source));
		assert_eq!(
			"colour".parse::<SearchField>(),
			Err(ParseFieldError("colour".into()))
		);
	}

	#[test]
	fn cycling_wraps_in_tab_order() {
		assert_eq!(SearchField::Name.next(), SearchField::Category);
		assert_eq!(SearchField::Source.next(), SearchField::Name);
		assert_eq!(SearchField::Name.previous(), SearchField::Source);
		for field in SearchField::ALL {
			assert_eq!(field.next().previous(), field);
		}
	}

	#[test]
	fn category_matches_subcategory_too() {
		let record = ExhibitRecord::new("2", "恶龙骨架").with_category("史前", "恐龙骨骼");
		let needle = Needle::new("恐龙").expect("needle");
		assert!(SearchField::Category.matches(&record, &needle));
		assert!(!SearchField::Name.matches(&record, &needle));
	}
}
