use sift_primitives::Modifiers;

use super::*;

fn open_at(cursor: Option<usize>) -> NavState {
	NavState::Open { cursor }
}

#[test]
fn starts_closed_without_cursor() {
	let nav = NavState::default();
	assert!(!nav.is_open());
	assert_eq!(nav.cursor(), None);
}

#[test]
fn open_from_closed_clears_cursor_and_keeps_it_when_open() {
	let mut nav = NavState::Closed;
	nav.open();
	assert_eq!(nav, open_at(None));

	let mut nav = open_at(Some(2));
	nav.open();
	assert_eq!(nav.cursor(), Some(2));
}

#[test]
fn down_walks_to_last_and_stops() {
	let mut nav = open_at(None);
	assert_eq!(nav.handle(NavKey::Down, 2), NavAction::None);
	assert_eq!(nav.cursor(), Some(0));
	nav.handle(NavKey::Down, 2);
	assert_eq!(nav.cursor(), Some(1));
	nav.handle(NavKey::Down, 2);
	assert_eq!(nav.cursor(), Some(1), "no wraparound at the bottom");
}

#[test]
fn down_on_empty_list_is_noop() {
	let mut nav = open_at(None);
	nav.handle(NavKey::Down, 0);
	assert_eq!(nav.cursor(), None);
}

#[test]
fn up_stops_at_first_and_ignores_unset_cursor() {
	let mut nav = open_at(Some(1));
	nav.handle(NavKey::Up, 3);
	assert_eq!(nav.cursor(), Some(0));
	nav.handle(NavKey::Up, 3);
	assert_eq!(nav.cursor(), Some(0), "no wraparound at the top");

	let mut nav = open_at(None);
	nav.handle(NavKey::Up, 3);
	assert_eq!(nav.cursor(), None);
}

#[test]
fn enter_toggles_highlighted_and_stays_open() {
	let mut nav = open_at(Some(1));
	assert_eq!(nav.handle(NavKey::Enter, 3), NavAction::Toggle(1));
	assert_eq!(nav, open_at(Some(1)));

	let mut nav = open_at(None);
	assert_eq!(nav.handle(NavKey::Enter, 3), NavAction::None);
}

#[test]
fn escape_closes_from_any_state() {
	let mut nav = open_at(Some(2));
	nav.handle(NavKey::Escape, 3);
	assert_eq!(nav, NavState::Closed);

	nav.handle(NavKey::Escape, 3);
	assert_eq!(nav, NavState::Closed);

	nav.open();
	assert_eq!(nav.cursor(), None, "reopening starts unhighlighted");
}

#[test]
fn keys_are_ignored_while_closed() {
	let mut nav = NavState::Closed;
	assert_eq!(nav.handle(NavKey::Down, 3), NavAction::None);
	assert_eq!(nav.handle(NavKey::Enter, 3), NavAction::None);
	assert_eq!(nav, NavState::Closed);
}

#[test]
fn reset_cursor_only_touches_open_state() {
	let mut nav = open_at(Some(4));
	nav.reset_cursor();
	assert_eq!(nav, open_at(None));

	let mut nav = NavState::Closed;
	nav.reset_cursor();
	assert_eq!(nav, NavState::Closed);
}

#[test]
fn from_key_maps_plain_arrows_enter_escape() {
	assert_eq!(NavKey::from_key(KeyCode::Down.into()), Some(NavKey::Down));
	assert_eq!(NavKey::from_key(KeyCode::Up.into()), Some(NavKey::Up));
	assert_eq!(NavKey::from_key(KeyCode::Enter.into()), Some(NavKey::Enter));
	assert_eq!(NavKey::from_key(KeyCode::Esc.into()), Some(NavKey::Escape));
	assert_eq!(NavKey::from_key(Key::char('j')), None);
	assert_eq!(NavKey::from_key(Key::new(KeyCode::Down, Modifiers::CTRL)), None);
}
