//! Host interface: the owner of the selection set.

use crate::choice::Choice;
use crate::events::DropdownEvent;

/// Supplies the current selection and receives proposed changes.
///
/// The dropdown reads [`SelectionHost::selected_items`] at the start of every
/// toggle and never caches it. A host is free to ignore a proposed change.
pub trait SelectionHost {
	/// Current selection set.
	fn selected_items(&self) -> &[Choice];

	/// Proposed next selection set.
	fn on_selected_change(&mut self, next: Vec<Choice>);

	/// Loading flag transition.
	fn on_loading_change(&mut self, _loading: bool) {}
}

/// Host that keeps the selection in a `Vec` and accepts every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecHost {
	pub selected: Vec<Choice>,
	pub loading: bool,
}

impl VecHost {
	pub fn new() -> Self {
		Self::default()
	}
}

impl SelectionHost for VecHost {
	fn selected_items(&self) -> &[Choice] {
		&self.selected
	}

	fn on_selected_change(&mut self, next: Vec<Choice>) {
		self.selected = next;
	}

	fn on_loading_change(&mut self, loading: bool) {
		self.loading = loading;
	}
}

/// Host that records every notification and optionally applies selections.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
	pub selected: Vec<Choice>,
	pub events: Vec<DropdownEvent>,
	/// When false, proposed selections are recorded but not applied.
	pub apply: bool,
}

impl EventLog {
	/// Log that applies proposed selections.
	pub fn applying() -> Self {
		Self {
			apply: true,
			..Self::default()
		}
	}

	/// Log that never applies proposed selections.
	pub fn ignoring() -> Self {
		Self::default()
	}

	/// Takes the recorded events.
	pub fn drain(&mut self) -> Vec<DropdownEvent> {
		std::mem::take(&mut self.events)
	}
}

impl SelectionHost for EventLog {
	fn selected_items(&self) -> &[Choice] {
		&self.selected
	}

	fn on_selected_change(&mut self, next: Vec<Choice>) {
		if self.apply {
			self.selected = next.clone();
		}
		self.events.push(DropdownEvent::SelectionChanged(next));
	}

	fn on_loading_change(&mut self, loading: bool) {
		self.events.push(DropdownEvent::LoadingChanged(loading));
	}
}
