//! Render model handed to the host renderer.

use crate::choice::Choice;
use crate::selection;

/// One row of the open result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
	/// Identity string, stable across renders.
	pub key: String,
	/// Custom display content or label.
	pub text: String,
	/// Keyboard highlight.
	pub highlighted: bool,
	/// Already in the host's selection set.
	pub selected: bool,
}

/// Everything a renderer needs to draw the dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownView {
	pub label: Option<String>,
	pub description: Option<String>,
	pub query: String,
	/// Spinner instead of the search icon.
	pub loading: bool,
	pub open: bool,
	pub disabled: bool,
	/// Result rows; empty while closed.
	pub rows: Vec<RowView>,
}

impl DropdownView {
	/// Open with nothing to show: the "No results found" row.
	pub fn is_empty_state(&self) -> bool {
		self.open && self.rows.is_empty()
	}

	pub fn highlighted_row(&self) -> Option<&RowView> {
		self.rows.iter().find(|row| row.highlighted)
	}
}

pub(crate) fn rows(results: &[Choice], cursor: Option<usize>, selected: &[Choice]) -> Vec<RowView> {
	results
		.iter()
		.enumerate()
		.map(|(index, choice)| RowView {
			key: choice.identity().as_str().to_string(),
			text: choice.display_text().to_string(),
			highlighted: cursor == Some(index),
			selected: selection::contains(selected, choice),
		})
		.collect()
}
