use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Position of a map pin as percentage offsets from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
	pub top: f32,
	pub left: f32,
}

impl MapPoint {
	/// Offsets are clamped into `0.0..=100.0`; NaN reads as zero.
	#[must_use]
	pub fn new(top: f32, left: f32) -> Self {
		Self {
			top: clamp_percent(top),
			left: clamp_percent(left),
		}
	}
}

fn clamp_percent(value: f32) -> f32 {
	if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

/// Serialized form of one gazetteer row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerEntry {
	pub name: String,
	pub top: f32,
	pub left: f32,
}

/// Named map locations in authoring order.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
	points: IndexMap<String, MapPoint>,
}

impl Gazetteer {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a location. Blank names are ignored; a repeated name keeps its
	/// original position and takes the new point.
	pub fn insert(&mut self, name: impl Into<String>, point: MapPoint) {
		let name = name.into();
		if name.trim().is_empty() {
			warn!("ignoring gazetteer entry with a blank name");
			return;
		}
		if self.points.insert(name.clone(), point).is_some() {
			warn!(%name, "duplicate gazetteer entry replaced");
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.points.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.points.contains_key(name)
	}

	#[must_use]
	pub fn point(&self, name: &str) -> Option<MapPoint> {
		self.points.get(name).copied()
	}

	/// Insertion index of `name`.
	#[must_use]
	pub fn position(&self, name: &str) -> Option<usize> {
		self.points.get_index_of(name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.points.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, MapPoint)> {
		self.points.iter().map(|(name, point)| (name.as_str(), *point))
	}

	/// Rows in serialized form, in gazetteer order.
	#[must_use]
	pub fn entries(&self) -> Vec<GazetteerEntry> {
		self.iter()
			.map(|(name, point)| GazetteerEntry {
				name: name.to_string(),
				top: point.top,
				left: point.left,
			})
			.collect()
	}
}

impl<S: Into<String>> FromIterator<(S, MapPoint)> for Gazetteer {
	fn from_iter<I: IntoIterator<Item = (S, MapPoint)>>(iter: I) -> Self {
		let mut gazetteer = Self::new();
		for (name, point) in iter {
			gazetteer.insert(name, point);
		}
		gazetteer
	}
}

impl FromIterator<GazetteerEntry> for Gazetteer {
	fn from_iter<I: IntoIterator<Item = GazetteerEntry>>(iter: I) -> Self {
		iter.into_iter()
			.map(|entry| (entry.name, MapPoint::new(entry.top, entry.left)))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_insertion_order_and_skips_blank_names() {
		let gazetteer: Gazetteer = [
			("阴云山", MapPoint::new(10.0, 10.0)),
			("", MapPoint::new(0.0, 0.0)),
			("永逝之湖", MapPoint::new(20.0, 20.0)),
			("阴云山", MapPoint::new(50.0, 50.0)),
		]
		.into_iter()
		.collect();

		assert_eq!(gazetteer.names().collect::<Vec<_>>(), ["阴云山", "永逝之湖"]);
		assert_eq!(gazetteer.point("阴云山"), Some(MapPoint::new(50.0, 50.0)));
		assert_eq!(gazetteer.position("永逝之湖"), Some(1));
		assert!(!gazetteer.contains(""));
	}

	#[test]
	fn points_are_clamped() {
		let point = MapPoint::new(-5.0, 140.0);
		assert_eq!(point, MapPoint { top: 0.0, left: 100.0 });
		assert_eq!(MapPoint::new(f32::NAN, 3.0).top, 0.0);
	}

	#[test]
	fn entries_round_trip_through_json() {
		let json = r#"[{"name": "蓝酪月球", "top": 12.5, "left": 88.0}]"#;
		let entries: Vec<GazetteerEntry> = serde_json::from_str(json).expect("parse");
		let gazetteer: Gazetteer = entries.clone().into_iter().collect();
		assert_eq!(gazetteer.entries(), entries);
	}
}
