//! Navigation state machine: open/closed and the highlighted result.
//!
//! The cursor indexes the displayed result list. `None` means nothing is
//! highlighted. Arrow keys stop at the list boundaries.

use sift_primitives::{Key, KeyCode};

/// Keys the navigation machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
	Up,
	Down,
	Enter,
	Escape,
}

impl NavKey {
	/// Maps an unmodified key press; anything else is not navigation.
	pub fn from_key(key: Key) -> Option<Self> {
		if !key.is_plain() {
			return None;
		}
		match key.code {
			KeyCode::Up => Some(NavKey::Up),
			KeyCode::Down => Some(NavKey::Down),
			KeyCode::Enter => Some(NavKey::Enter),
			KeyCode::Esc => Some(NavKey::Escape),
			_ => None,
		}
	}
}

/// Side effect requested by a navigation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
	None,
	/// Toggle the displayed result at this index.
	Toggle(usize),
}

/// Open/closed state with the highlighted-result cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
	#[default]
	Closed,
	Open {
		cursor: Option<usize>,
	},
}

impl NavState {
	pub fn is_open(&self) -> bool {
		matches!(self, NavState::Open { .. })
	}

	/// Highlighted index, if open and something is highlighted.
	pub fn cursor(&self) -> Option<usize> {
		match self {
			NavState::Open { cursor } => *cursor,
			NavState::Closed => None,
		}
	}

	/// Opens on text input, click or focus. An open panel keeps its cursor.
	pub fn open(&mut self) {
		if let NavState::Closed = self {
			*self = NavState::Open { cursor: None };
		}
	}

	/// Closes the panel, dropping the cursor.
	pub fn close(&mut self) {
		*self = NavState::Closed;
	}

	/// Clears the highlight after the result list was replaced.
	pub fn reset_cursor(&mut self) {
		if let NavState::Open { cursor } = self {
			*cursor = None;
		}
	}

	/// Applies a navigation key against a result list of length `len`.
	pub fn handle(&mut self, key: NavKey, len: usize) -> NavAction {
		if key == NavKey::Escape {
			self.close();
			return NavAction::None;
		}
		let NavState::Open { cursor } = self else {
			return NavAction::None;
		};
		match key {
			NavKey::Down => {
				let next = cursor.map_or(0, |index| index + 1);
				if next < len {
					*cursor = Some(next);
				}
				NavAction::None
			}
			NavKey::Up => {
				if let Some(index) = *cursor
					&& index > 0
				{
					*cursor = Some(index - 1);
				}
				NavAction::None
			}
			NavKey::Enter => match *cursor {
				Some(index) if index < len => NavAction::Toggle(index),
				_ => NavAction::None,
			},
			NavKey::Escape => NavAction::None,
		}
	}
}

#[cfg(test)]
mod tests;
