use super::*;

#[test]
fn key_from_code_has_no_modifiers() {
	let key = Key::from(KeyCode::Down);
	assert!(key.is_plain());
	assert_eq!(key.code, KeyCode::Down);
}

#[test]
fn with_ctrl_keeps_code() {
	let key = Key::char('n').with_ctrl();
	assert_eq!(key.code, KeyCode::Char('n'));
	assert_eq!(key.modifiers, Modifiers::CTRL);
	assert!(!key.is_plain());
}

#[test]
fn modifier_builders_accumulate() {
	let mods = Modifiers::NONE.alt().shift();
	assert!(mods.alt && mods.shift && !mods.ctrl);
	assert!(Modifiers::default().is_empty());
}

#[test]
fn mouse_position_maps_col_to_x() {
	let press = MouseEvent::Press {
		button: MouseButton::Left,
		row: 7,
		col: 3,
		modifiers: Modifiers::NONE,
	};
	assert_eq!(press.position(), Position::new(3, 7));
	assert!(press.is_press());
	assert!(!MouseEvent::Move { row: 0, col: 0 }.is_press());
}
