//! Key and pointer event types consumed by widgets.
//!
//! Hosts translate their backend events (crossterm, winit, a test script)
//! into these types before handing them to a widget.

mod modifiers;

pub use modifiers::Modifiers;

use crate::geometry::Position;

/// A physical key, independent of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Enter,
	Esc,
	Backspace,
	Tab,
	Up,
	Down,
	Left,
	Right,
	Home,
	End,
	PageUp,
	PageDown,
}

/// A key with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// Creates a key with explicit modifiers.
	pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
		Self { code, modifiers }
	}

	/// Create a key from a character with no modifiers.
	pub const fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c), Modifiers::NONE)
	}

	/// Returns a copy with Ctrl added.
	pub fn with_ctrl(self) -> Self {
		Self {
			modifiers: self.modifiers.ctrl(),
			..self
		}
	}

	/// Returns true when no modifiers are held.
	pub fn is_plain(&self) -> bool {
		self.modifiers.is_empty()
	}
}

impl From<KeyCode> for Key {
	fn from(code: KeyCode) -> Self {
		Self::new(code, Modifiers::NONE)
	}
}

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
	Left,
	Right,
	Middle,
}

/// Mouse event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
	Press {
		button: MouseButton,
		row: u16,
		col: u16,
		modifiers: Modifiers,
	},
	Release {
		row: u16,
		col: u16,
	},
	Move {
		row: u16,
		col: u16,
	},
}

impl MouseEvent {
	pub fn row(&self) -> u16 {
		match self {
			MouseEvent::Press { row, .. } | MouseEvent::Release { row, .. } | MouseEvent::Move { row, .. } => *row,
		}
	}

	pub fn col(&self) -> u16 {
		match self {
			MouseEvent::Press { col, .. } | MouseEvent::Release { col, .. } | MouseEvent::Move { col, .. } => *col,
		}
	}

	/// Returns the event location as a [`Position`] (`x` = column, `y` = row).
	pub fn position(&self) -> Position {
		Position::new(self.col(), self.row())
	}

	/// Returns true for a button press, the "pointer down" of DOM hosts.
	pub fn is_press(&self) -> bool {
		matches!(self, MouseEvent::Press { .. })
	}
}

#[cfg(test)]
mod tests;
