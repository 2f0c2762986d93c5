use proptest::prelude::*;

use super::*;

#[test]
fn toggle_appends_absent_item() {
	let current = vec![Choice::plain("abc")];
	let next = toggle(&current, &Choice::plain("def"));
	assert_eq!(next, vec![Choice::plain("abc"), Choice::plain("def")]);
}

#[test]
fn toggle_removes_present_item_by_identity() {
	let current = vec![Choice::structured("Alabama", "AL"), Choice::structured("Alaska", "AK")];
	// A different label with the same value still counts as the same option.
	let next = toggle(&current, &Choice::structured("State of Alabama", "AL"));
	assert_eq!(next, vec![Choice::structured("Alaska", "AK")]);
}

#[test]
fn toggle_removes_only_first_match() {
	let current = vec![Choice::plain("a"), Choice::plain("b"), Choice::plain("a")];
	let next = toggle(&current, &Choice::plain("a"));
	assert_eq!(next, vec![Choice::plain("b"), Choice::plain("a")]);
}

#[test]
fn mixed_shapes_do_not_match() {
	let current = vec![Choice::plain("AL")];
	let next = toggle(&current, &Choice::structured("Alabama", "AL"));
	assert_eq!(next.len(), 2);
	assert!(contains(&next, &Choice::plain("AL")));
	assert!(!contains(&[Choice::plain("AK")], &Choice::structured("Alaska", "AK")));
}

#[test]
fn toggle_does_not_mutate_input() {
	let current = vec![Choice::plain("a")];
	let _ = toggle(&current, &Choice::plain("a"));
	assert_eq!(current, vec![Choice::plain("a")]);
}

fn arb_choice() -> impl Strategy<Value = Choice> {
	prop_oneof![
		"[a-d]{1,2}".prop_map(Choice::Plain),
		("[a-z]{1,6}", "[A-D]{1,2}").prop_map(|(label, value)| Choice::structured(label, value)),
	]
}

fn unique_by_identity(items: Vec<Choice>) -> Vec<Choice> {
	let mut out: Vec<Choice> = Vec::new();
	for item in items {
		if !contains(&out, &item) {
			out.push(item);
		}
	}
	out
}

proptest! {
	#[test]
	fn toggling_twice_restores_selection(
		current in prop::collection::vec(arb_choice(), 0..8).prop_map(unique_by_identity),
		item in arb_choice(),
	) {
		let once = toggle(&current, &item);
		prop_assert_ne!(contains(&once, &item), contains(&current, &item));
		let twice = toggle(&once, &item);
		if contains(&current, &item) {
			// Removal then re-append moves the item to the end.
			prop_assert_eq!(twice.len(), current.len());
			prop_assert!(twice.last().is_some_and(|last| last.same_identity(&item)));
		} else {
			prop_assert_eq!(twice, current);
		}
	}
}
