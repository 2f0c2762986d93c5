use proptest::prelude::*;

use super::{Position, Rect};

#[test]
fn new_rect_saturates_dimensions() {
	let rect = Rect::new(u16::MAX - 1, u16::MAX - 1, 10, 10);
	assert_eq!(rect.width, 1);
	assert_eq!(rect.height, 1);
}

#[test]
fn rect_edges_are_exclusive() {
	let rect = Rect::new(10, 5, 3, 2);
	assert_eq!(rect.left(), 10);
	assert_eq!(rect.right(), 13);
	assert_eq!(rect.top(), 5);
	assert_eq!(rect.bottom(), 7);
}

#[test]
fn contains_uses_inclusive_origin_exclusive_max() {
	let rect = Rect::new(10, 5, 3, 2);
	assert!(rect.contains(Position::new(10, 5)));
	assert!(rect.contains(Position::new(12, 6)));
	assert!(!rect.contains(Position::new(13, 6)));
	assert!(!rect.contains(Position::new(12, 7)));
	assert!(!rect.contains(Position::new(9, 5)));
}

#[test]
fn empty_rect_contains_nothing() {
	let rect = Rect::new(4, 4, 0, 3);
	assert!(rect.is_empty());
	assert!(!rect.contains(Position::new(4, 4)));
}

#[test]
fn union_covers_trigger_and_panel() {
	let trigger = Rect::new(2, 2, 30, 1);
	let panel = Rect::new(2, 3, 30, 10);
	let region = trigger.union(panel);
	assert_eq!(region, Rect::new(2, 2, 30, 11));
	assert_eq!(Rect::default().union(panel), panel);
}

proptest! {
	#[test]
	fn union_contains_both_operands(
		ax in 0u16..100, ay in 0u16..100, aw in 1u16..50, ah in 1u16..50,
		bx in 0u16..100, by in 0u16..100, bw in 1u16..50, bh in 1u16..50,
	) {
		let a = Rect::new(ax, ay, aw, ah);
		let b = Rect::new(bx, by, bw, bh);
		let u = a.union(b);
		prop_assert!(u.contains(Position::new(a.x, a.y)));
		prop_assert!(u.contains(Position::new(b.right() - 1, b.bottom() - 1)));
	}
}
