//! Messages flowing into the dropdown and events flowing out to its host.

use crate::choice::Choice;
use crate::source::LookupResult;

/// Message posted to a dropdown from spawned tasks and pointer listeners.
///
/// Drained on the host's thread by
/// [`SearchDropdown::pump`](crate::SearchDropdown::pump).
#[derive(Debug)]
pub enum DropdownMsg {
	/// The debounce delay elapsed for `query`.
	Settled {
		/// Debounce generation that scheduled the emission.
		generation: u64,
		query: String,
	},
	/// A dynamic lookup settled.
	Resolved {
		/// Sequence number of the issuing query.
		seq: u64,
		query: String,
		outcome: LookupResult,
	},
	/// A pointer-down landed outside the widget boundary.
	Dismiss {
		/// Open epoch current when the pointer-down was dispatched.
		epoch: u64,
	},
}

/// Notification reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
	/// Proposed next selection set.
	SelectionChanged(Vec<Choice>),
	/// Loading flag transition.
	LoadingChanged(bool),
}
