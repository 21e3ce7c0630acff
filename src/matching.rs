//! Case-folded literal substring matching shared by filtering and highlighting.
//!
//! Keywords are never interpreted as patterns: `.` or `(` match themselves.
//! The keyword is lower-cased as a whole string, so context rules such as the
//! Greek final sigma apply to it. Text is folded one character at a time to
//! keep byte offsets for highlighting, and `ς` folds to `σ` on both sides, so
//! `ΟΔΟΣ`, `οδος` and `οδοσ` all match each other.

use serde::Serialize;

/// A trimmed, lower-cased keyword ready for repeated containment checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
	folded: Vec<char>,
}

impl Needle {
	/// Normalize `keyword`, returning `None` when nothing is left after trimming.
	#[must_use]
	pub fn new(keyword: &str) -> Option<Self> {
		let folded: Vec<char> = keyword.trim().to_lowercase().chars().map(fold_sigma).collect();
		(!folded.is_empty()).then_some(Self { folded })
	}

	/// The folded keyword as a string.
	#[must_use]
	pub fn as_string(&self) -> String {
		self.folded.iter().collect()
	}

	/// Return true when `haystack` contains the keyword, ignoring case.
	#[must_use]
	pub fn is_in(&self, haystack: &str) -> bool {
		self.find_in(haystack).is_some()
	}

	/// Byte range of the leftmost case-insensitive occurrence in `haystack`.
	#[must_use]
	pub fn find_in(&self, haystack: &str) -> Option<(usize, usize)> {
		haystack
			.char_indices()
			.find_map(|(start, _)| self.match_len_at(&haystack[start..]).map(|len| (start, start + len)))
	}

	/// Length in bytes of a match anchored at the start of `haystack`.
	///
	/// A match must end on a character boundary of the original text, so a
	/// character whose lower-case form expands to several characters only
	/// matches when the keyword consumes all of them.
	fn match_len_at(&self, haystack: &str) -> Option<usize> {
		let mut matched = 0;
		for (offset, ch) in haystack.char_indices() {
			for lower in fold_char(ch) {
				if self.folded.get(matched) != Some(&lower) {
					return None;
				}
				matched += 1;
			}
			if matched == self.folded.len() {
				return Some(offset + ch.len_utf8());
			}
		}
		None
	}
}

fn fold_sigma(ch: char) -> char {
	if ch == 'ς' { 'σ' } else { ch }
}

fn fold_char(ch: char) -> impl Iterator<Item = char> {
	ch.to_lowercase().map(fold_sigma)
}

/// A slice of highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan<'a> {
	pub matched: bool,
	pub text: &'a str,
}

impl<'a> HighlightSpan<'a> {
	#[must_use]
	pub const fn plain(text: &'a str) -> Self {
		Self { matched: false, text }
	}

	#[must_use]
	pub const fn matched(text: &'a str) -> Self {
		Self { matched: true, text }
	}
}

/// Split `text` around every case-insensitive occurrence of `keyword`.
///
/// Matches are leftmost-first and never overlap. Concatenating the span texts
/// always yields `text` again, with its original casing. A blank keyword
/// produces a single unmatched span.
#[must_use]
pub fn highlight<'a>(text: &'a str, keyword: &str) -> Vec<HighlightSpan<'a>> {
	let Some(needle) = Needle::new(keyword) else {
		return vec![HighlightSpan::plain(text)];
	};

	let mut spans = Vec::new();
	let mut plain_start = 0;
	let mut cursor = 0;
	while cursor < text.len() {
		match needle.match_len_at(&text[cursor..]) {
			Some(len) => {
				if plain_start < cursor {
					spans.push(HighlightSpan::plain(&text[plain_start..cursor]));
				}
				spans.push(HighlightSpan::matched(&text[cursor..cursor + len]));
				cursor += len;
				plain_start = cursor;
			}
			None => {
				cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
			}
		}
	}

	if plain_start < text.len() || spans.is_empty() {
		spans.push(HighlightSpan::plain(&text[plain_start..]));
	}
	spans
}
