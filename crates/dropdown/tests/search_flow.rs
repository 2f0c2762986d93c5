//! End-to-end flows through the public dropdown API.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use sift_dropdown::{
	Choice, DataSource, DropdownConfig, DropdownEvent, EventLog, Lookup, LookupError, LookupResult, PointerHub,
	SearchDropdown, SharedBounds, StructuredChoice, VecHost,
};
use sift_primitives::{BoxFutureStatic, Key, KeyCode, Position, Rect};

/// Country provider with per-query latency, standing in for a remote API.
struct Countries {
	latency: HashMap<&'static str, u64>,
	issued: Arc<Mutex<Vec<String>>>,
}

impl Lookup for Countries {
	fn lookup(&self, query: &str) -> BoxFutureStatic<LookupResult> {
		self.issued.lock().push(query.to_string());
		let delay = Duration::from_millis(self.latency.get(query).copied().unwrap_or(100));
		let query = query.to_string();
		Box::pin(async move {
			tokio::time::sleep(delay).await;
			match query.as_str() {
				"peru" => Ok(vec![Choice::from(
					StructuredChoice::new("Peru", "Peru").with_display("Republic of Peru\nCapital City: Lima"),
				)]),
				"chile" => Ok(vec![Choice::from(
					StructuredChoice::new("Chile", "Chile").with_display("Republic of Chile\nCapital City: Santiago"),
				)]),
				"offline" => Err(LookupError::Unavailable),
				_ => Ok(Vec::new()),
			}
		})
	}
}

fn countries(latency: &[(&'static str, u64)]) -> (DataSource, Arc<Mutex<Vec<String>>>) {
	let issued = Arc::new(Mutex::new(Vec::new()));
	let source = DataSource::from_lookup(Countries {
		latency: latency.iter().copied().collect(),
		issued: issued.clone(),
	});
	(source, issued)
}

async fn run_for(dropdown: &mut SearchDropdown, host: &mut EventLog, millis: u64) {
	for _ in 0..millis {
		tokio::time::sleep(Duration::from_millis(1)).await;
		dropdown.pump(host);
	}
}

#[test]
fn alabama_alaska_scenario() {
	let source = DataSource::fixed([Choice::structured("Alabama", "AL"), Choice::structured("Alaska", "AK")]);
	let mut host = VecHost::new();
	let mut dropdown = SearchDropdown::new(source, DropdownConfig::default());

	dropdown.input("ala", &mut host);
	assert_eq!(
		dropdown.results(),
		&[Choice::structured("Alabama", "AL"), Choice::structured("Alaska", "AK")]
	);

	// "AL" is a substring of both labels (case-insensitive), so value matching adds nothing here.
	dropdown.input("AL", &mut host);
	assert_eq!(dropdown.results().len(), 2);

	// "AK" only matches Alaska's value.
	dropdown.input("AK", &mut host);
	assert_eq!(dropdown.results(), &[Choice::structured("Alaska", "AK")]);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn chile_wins_over_slower_peru() {
	let (source, issued) = countries(&[("peru", 900), ("chile", 100)]);
	let mut host = EventLog::applying();
	let config = DropdownConfig::default()
		.with_label("Asynchronous Countries Search")
		.with_debounce(Duration::from_millis(500));
	let mut dropdown = SearchDropdown::new(source, config);

	dropdown.input("peru", &mut host);
	run_for(&mut dropdown, &mut host, 550).await;
	assert!(dropdown.is_loading());

	dropdown.input("chile", &mut host);
	run_for(&mut dropdown, &mut host, 2000).await;

	assert_eq!(*issued.lock(), vec!["peru".to_string(), "chile".to_string()]);
	assert_eq!(dropdown.results().len(), 1);
	assert_eq!(dropdown.results()[0].label(), "Chile");
	assert!(!dropdown.is_loading());

	let view = dropdown.view(&host.selected);
	assert_eq!(view.rows[0].text, "Republic of Chile\nCapital City: Santiago");
	assert_eq!(view.label.as_deref(), Some("Asynchronous Countries Search"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn keyboard_selection_shared_between_two_dropdowns() {
	let (source, _issued) = countries(&[("peru", 10)]);
	let mut host = EventLog::applying();
	let mut remote = SearchDropdown::new(source, DropdownConfig::default());
	let mut states = SearchDropdown::new(
		DataSource::fixed([Choice::structured("Oregon", "OR"), Choice::structured("Peru Valley", "PV")]),
		DropdownConfig::default(),
	);

	remote.input("peru", &mut host);
	run_for(&mut remote, &mut host, 20).await;
	remote.key(Key::from(KeyCode::Down), &mut host);
	remote.key(Key::from(KeyCode::Enter), &mut host);

	states.input("or", &mut host);
	states.key(Key::from(KeyCode::Down), &mut host);
	states.key(Key::from(KeyCode::Enter), &mut host);

	let labels: Vec<_> = host.selected.iter().map(Choice::label).collect();
	assert_eq!(labels, vec!["Peru", "Oregon"]);

	// Both widgets see the same host-owned selection.
	let view = states.view(&host.selected);
	assert!(view.rows[0].selected);
	assert!(host.events.contains(&DropdownEvent::LoadingChanged(true)));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn unavailable_provider_looks_like_no_results() {
	let (source, _issued) = countries(&[("offline", 5)]);
	let mut host = EventLog::applying();
	let mut dropdown = SearchDropdown::new(source, DropdownConfig::default());

	dropdown.input("offline", &mut host);
	run_for(&mut dropdown, &mut host, 20).await;

	let view = dropdown.view(&host.selected);
	assert!(view.is_empty_state());
	assert!(!view.loading);
	assert!(
		host.drain()
			.iter()
			.all(|event| matches!(event, DropdownEvent::LoadingChanged(_)))
	);
}

#[test]
fn outside_click_lifecycle_with_shared_bounds() {
	let hub = PointerHub::new();
	let bounds = SharedBounds::new(Rect::new(0, 0, 30, 1));
	let mut host = VecHost::new();
	let mut dropdown = SearchDropdown::new(DataSource::fixed(["abc", "2abd", "def", "efg"]), DropdownConfig::default());
	dropdown.mount(&hub, bounds.clone());

	dropdown.focus();
	// Panel grows below the field once open.
	bounds.set(Rect::new(0, 0, 30, 6));
	hub.dispatch(Position::new(3, 4));
	dropdown.pump(&mut host);
	assert!(dropdown.is_open(), "click on a result row is inside");

	hub.dispatch(Position::new(3, 9));
	dropdown.pump(&mut host);
	assert!(!dropdown.is_open());

	drop(dropdown);
	assert_eq!(hub.listener_count(), 0);
}
