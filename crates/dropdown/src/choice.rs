//! Option model: the two shapes a selectable entry can take.
//!
//! A [`Choice`] is either plain text or a structured label/value record.
//! Identity, matching and display all branch on each item's own shape; no
//! code path assumes a collection is homogeneous.
//!
//! A plain `"AL"` and a structured entry with value `"AL"` never compare
//! equal. Collections that mix shapes with colliding strings are not
//! validated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A structured option: display label, identity value and optional custom display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructuredChoice {
	/// Text shown in the result list and used for matching.
	pub label: String,
	/// Identity of the option; also used for matching.
	pub value: String,
	/// Custom content rendered instead of the label (may span several lines).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub display: Option<String>,
}

impl StructuredChoice {
	/// Creates a structured option without custom display.
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
			display: None,
		}
	}

	/// Sets custom display content.
	pub fn with_display(mut self, display: impl Into<String>) -> Self {
		self.display = Some(display.into());
		self
	}
}

/// One selectable entry.
///
/// Deserializes from either a bare string or a `{ label, value, display }` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
	/// Plain text; the text is its identity.
	Plain(String),
	/// Structured record; `value` is its identity.
	Structured(StructuredChoice),
}

/// Shape-tagged identity of a [`Choice`].
///
/// Equality requires both the tag and the string to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceIdentity<'a> {
	Text(&'a str),
	Value(&'a str),
}

impl ChoiceIdentity<'_> {
	/// Returns the identity string regardless of shape.
	pub fn as_str(&self) -> &str {
		match self {
			ChoiceIdentity::Text(s) | ChoiceIdentity::Value(s) => s,
		}
	}
}

impl Choice {
	/// Creates a plain option.
	pub fn plain(text: impl Into<String>) -> Self {
		Choice::Plain(text.into())
	}

	/// Creates a structured option.
	pub fn structured(label: impl Into<String>, value: impl Into<String>) -> Self {
		Choice::Structured(StructuredChoice::new(label, value))
	}

	/// Returns the shape-tagged identity.
	pub fn identity(&self) -> ChoiceIdentity<'_> {
		match self {
			Choice::Plain(text) => ChoiceIdentity::Text(text),
			Choice::Structured(s) => ChoiceIdentity::Value(&s.value),
		}
	}

	/// Returns true if both options have the same identity.
	pub fn same_identity(&self, other: &Choice) -> bool {
		self.identity() == other.identity()
	}

	/// Returns the label: the text for plain options.
	pub fn label(&self) -> &str {
		match self {
			Choice::Plain(text) => text,
			Choice::Structured(s) => &s.label,
		}
	}

	/// Returns custom display content when present, otherwise the label.
	pub fn display_text(&self) -> &str {
		match self {
			Choice::Plain(text) => text,
			Choice::Structured(s) => s.display.as_deref().unwrap_or(&s.label),
		}
	}

	/// Case-insensitive substring match against the text, or label and value.
	///
	/// An empty query matches everything.
	pub fn matches(&self, query: &str) -> bool {
		if query.is_empty() {
			return true;
		}
		self.matches_lowercase(&query.to_lowercase())
	}

	/// Like [`Choice::matches`] with a query that is already lowercased.
	pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
		match self {
			Choice::Plain(text) => text.to_lowercase().contains(needle),
			Choice::Structured(s) => s.label.to_lowercase().contains(needle) || s.value.to_lowercase().contains(needle),
		}
	}
}

impl fmt::Display for Choice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl From<&str> for Choice {
	fn from(text: &str) -> Self {
		Choice::plain(text)
	}
}

impl From<String> for Choice {
	fn from(text: String) -> Self {
		Choice::Plain(text)
	}
}

impl From<StructuredChoice> for Choice {
	fn from(choice: StructuredChoice) -> Self {
		Choice::Structured(choice)
	}
}
