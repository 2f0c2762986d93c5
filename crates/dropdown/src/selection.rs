//! Selection set toggle semantics.
//!
//! The host owns the selection. These functions derive the next value from
//! whatever the host currently supplies and never keep a copy.

use crate::choice::Choice;

/// Returns true if `current` holds an entry with the same identity as `item`.
pub fn contains(current: &[Choice], item: &Choice) -> bool {
	current.iter().any(|selected| selected.same_identity(item))
}

/// Computes the selection after toggling `item`.
///
/// Absent items are appended, preserving prior order. Present items have
/// their first identity match removed.
pub fn toggle(current: &[Choice], item: &Choice) -> Vec<Choice> {
	match current.iter().position(|selected| selected.same_identity(item)) {
		Some(index) => {
			let mut next = Vec::with_capacity(current.len() - 1);
			next.extend_from_slice(&current[..index]);
			next.extend_from_slice(&current[index + 1..]);
			next
		}
		None => {
			let mut next = Vec::with_capacity(current.len() + 1);
			next.extend_from_slice(current);
			next.push(item.clone());
			next
		}
	}
}

#[cfg(test)]
mod tests;
