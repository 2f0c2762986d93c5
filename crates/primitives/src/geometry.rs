//! Abstract geometry types for hit testing.
//!
//! These types describe widget regions and pointer positions without
//! depending on any terminal or UI library. Hosts convert their own layout
//! types at the boundary.

use serde::{Deserialize, Serialize};

/// A rectangle with position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
	pub x: u16,
	pub y: u16,
	pub width: u16,
	pub height: u16,
}

impl Rect {
	/// Creates a new rectangle.
	///
	/// Width and height are clamped so the far edges never overflow `u16`.
	pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
		let max_width = u16::MAX - x;
		let max_height = u16::MAX - y;
		Self {
			x,
			y,
			width: if width > max_width { max_width } else { width },
			height: if height > max_height { max_height } else { height },
		}
	}

	/// Returns true if the rectangle has zero area.
	pub const fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns the left edge x coordinate.
	pub const fn left(&self) -> u16 {
		self.x
	}

	/// Returns the right edge x coordinate (exclusive).
	pub const fn right(&self) -> u16 {
		self.x.saturating_add(self.width)
	}

	/// Returns the top edge y coordinate.
	pub const fn top(&self) -> u16 {
		self.y
	}

	/// Returns the bottom edge y coordinate (exclusive).
	pub const fn bottom(&self) -> u16 {
		self.y.saturating_add(self.height)
	}

	/// Returns true if `pos` lies inside the rectangle.
	///
	/// The origin is inclusive, the far edges are exclusive.
	pub const fn contains(&self, pos: Position) -> bool {
		pos.x >= self.left() && pos.x < self.right() && pos.y >= self.top() && pos.y < self.bottom()
	}

	/// Returns the smallest rectangle covering both `self` and `other`.
	pub fn union(&self, other: Self) -> Self {
		if self.is_empty() {
			return other;
		}
		if other.is_empty() {
			return *self;
		}
		let x1 = self.x.min(other.x);
		let y1 = self.y.min(other.y);
		let x2 = self.right().max(other.right());
		let y2 = self.bottom().max(other.bottom());
		Self::new(x1, y1, x2 - x1, y2 - y1)
	}
}

/// A position (x, y coordinate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
	pub x: u16,
	pub y: u16,
}

impl Position {
	/// Creates a new position.
	pub const fn new(x: u16, y: u16) -> Self {
		Self { x, y }
	}
}

#[cfg(test)]
mod tests;
