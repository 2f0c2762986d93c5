//! Core types shared by sift widgets: geometry, input events and future aliases.

/// Async future aliases.
pub mod future;
/// Rectangles and positions for hit testing.
pub mod geometry;
/// Key and mouse event types.
pub mod key;

pub use future::BoxFutureStatic;
pub use geometry::{Position, Rect};
pub use key::{Key, KeyCode, Modifiers, MouseButton, MouseEvent};
