use serde::de::DeserializeOwned;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matching::Needle;

/// Trait label the catalog data uses to mean "this exhibit has no traits".
pub const NO_TRAITS_SENTINEL: &str = "无";
/// Display text for an exhibit whose source is blank.
pub const UNKNOWN_SOURCE: &str = "未知来源";

/// One catalog entry describing a single collectible exhibit.
///
/// Every field is optional in the serialized form. Missing or `null` values
/// fall back to their empty defaults so that loose hand-authored data never
/// fails to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhibitRecord {
	#[serde(deserialize_with = "null_as_default")]
	pub id: String,
	#[serde(deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(deserialize_with = "null_as_default")]
	pub category: String,
	#[serde(deserialize_with = "null_as_default")]
	pub subcategory: String,
	#[serde(deserialize_with = "null_as_default")]
	pub description: String,
	pub traits: Traits,
	#[serde(deserialize_with = "null_as_default")]
	pub source: String,
	#[serde(deserialize_with = "null_as_default")]
	pub base_buzz: f64,
	#[serde(deserialize_with = "null_as_default")]
	pub max_buzz: f64,
	#[serde(deserialize_with = "null_as_default")]
	pub max_knowledge: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
}

impl ExhibitRecord {
	/// Create a record with the identifying fields set and everything else empty.
	#[must_use]
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_category(mut self, category: impl Into<String>, subcategory: impl Into<String>) -> Self {
		self.category = category.into();
		self.subcategory = subcategory.into();
		self
	}

	#[must_use]
	pub fn with_source(mut self, source: impl Into<String>) -> Self {
		self.source = source.into();
		self
	}

	#[must_use]
	pub fn with_traits<I, S>(mut self, traits: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.traits = Traits::new(traits);
		self
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	#[must_use]
	pub fn with_stats(mut self, base_buzz: f64, max_buzz: f64, max_knowledge: f64) -> Self {
		self.base_buzz = base_buzz;
		self.max_buzz = max_buzz;
		self.max_knowledge = max_knowledge;
		self
	}

	/// Coarse classification used for presentation.
	#[must_use]
	pub fn category_kind(&self) -> Category {
		Category::classify(&self.category)
	}

	/// View the provenance string.
	#[must_use]
	pub fn source(&self) -> Source<'_> {
		Source::new(&self.source)
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + DeserializeOwned,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered trait labels of an exhibit.
///
/// The catalog data spells "no traits" as a single [`NO_TRAITS_SENTINEL`]
/// label. That label is removed on construction and remembered as a flag, so
/// [`Traits::labels`] only ever holds real traits while a search for the
/// sentinel still finds the exhibits that declared it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traits {
	labels: Vec<String>,
	declared_none: bool,
}

impl Traits {
	#[must_use]
	pub fn new<I, S>(labels: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut declared_none = false;
		let labels = labels
			.into_iter()
			.map(Into::into)
			.filter(|label| {
				if label.trim() == NO_TRAITS_SENTINEL {
					declared_none = true;
					false
				} else {
					true
				}
			})
			.collect();
		Self {
			labels,
			declared_none,
		}
	}

	#[must_use]
	pub fn labels(&self) -> &[String] {
		&self.labels
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.labels.iter().map(String::as_str)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.labels.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.labels.is_empty()
	}

	/// Whether the source data carried the "no traits" sentinel.
	#[must_use]
	pub fn is_declared_none(&self) -> bool {
		self.declared_none
	}

	/// Return true when any trait contains the keyword.
	#[must_use]
	pub fn matches(&self, needle: &Needle) -> bool {
		self.iter().any(|label| needle.is_in(label))
			|| (self.declared_none && needle.is_in(NO_TRAITS_SENTINEL))
	}

	/// Labels joined for display, or the sentinel when there are none.
	#[must_use]
	pub fn display(&self) -> String {
		if self.labels.is_empty() {
			NO_TRAITS_SENTINEL.to_string()
		} else {
			self.labels.join("、")
		}
	}
}

impl Serialize for Traits {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut seq = serializer.serialize_seq(Some(self.labels.len() + usize::from(self.declared_none)))?;
		for label in &self.labels {
			seq.serialize_element(label)?;
		}
		if self.declared_none {
			seq.serialize_element(NO_TRAITS_SENTINEL)?;
		}
		seq.end()
	}
}

impl<'de> Deserialize<'de> for Traits {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let labels = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
		Ok(Self::new(labels))
	}
}

/// Coarse exhibit grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
	Prehistory,
	Nature,
	Supernatural,
	Space,
	Fantasy,
	Other,
}

impl Category {
	pub const ALL: [Category; 6] = [
		Category::Prehistory,
		Category::Nature,
		Category::Supernatural,
		Category::Space,
		Category::Fantasy,
		Category::Other,
	];

	/// Map a raw category string onto a known group.
	#[must_use]
	pub fn classify(raw: &str) -> Self {
		match raw.trim() {
			"史前" => Category::Prehistory,
			"自然" | "野生动物" => Category::Nature,
			"超自然" => Category::Supernatural,
			"太空" => Category::Space,
			"奇幻" => Category::Fantasy,
			_ => Category::Other,
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Category::Prehistory => "史前",
			Category::Nature => "自然",
			Category::Supernatural => "超自然",
			Category::Space => "太空",
			Category::Fantasy => "奇幻",
			Category::Other => "其他",
		}
	}
}

/// Provenance text, conventionally `"<regions> - <locations>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
	raw: &'a str,
}

impl<'a> Source<'a> {
	const SEPARATOR: &'static str = " - ";

	#[must_use]
	pub fn new(raw: &'a str) -> Self {
		Self { raw }
	}

	#[must_use]
	pub fn raw(&self) -> &'a str {
		self.raw
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.raw.trim().is_empty()
	}

	/// Text shown to users; blank sources read as [`UNKNOWN_SOURCE`].
	#[must_use]
	pub fn display(&self) -> &'a str {
		if self.is_empty() { UNKNOWN_SOURCE } else { self.raw }
	}

	/// Comma-separated regions before the separator, if the text has one.
	pub fn regions(&self) -> impl Iterator<Item = &'a str> {
		let part = self.raw.split_once(Self::SEPARATOR).map(|(regions, _)| regions);
		split_list(part)
	}

	/// Comma-separated locations after the separator, if the text has one.
	pub fn locations(&self) -> impl Iterator<Item = &'a str> {
		let part = self.raw.split_once(Self::SEPARATOR).map(|(_, locations)| locations);
		split_list(part)
	}
}

fn split_list(part: Option<&str>) -> impl Iterator<Item = &str> {
	part.into_iter()
		.flat_map(|list| list.split([',', '，']))
		.map(str::trim)
		.filter(|item| !item.is_empty())
}
