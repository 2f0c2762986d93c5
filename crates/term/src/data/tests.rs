use std::time::Duration;

use pretty_assertions::assert_eq;

use super::*;

fn lookup(latency_ms: u64) -> CountryLookup {
	CountryLookup::new(countries().unwrap(), Duration::from_millis(latency_ms), "offline")
}

#[test]
fn us_states_parse() {
	let states = us_states().unwrap();
	assert_eq!(states.len(), 51);
	assert_eq!(states[0], Choice::structured("Alabama", "AL"));
	assert!(states.iter().any(|state| state.identity().as_str() == "WY"));
}

#[test]
fn countries_parse() {
	let countries = countries().unwrap();
	assert!(countries.iter().any(|country| country.name == "Peru"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn lookup_matches_common_and_official_names() {
	let lookup = lookup(300);

	let peru = lookup.lookup("PERU").await.unwrap();
	assert_eq!(peru.len(), 1);
	assert_eq!(peru[0].label(), "Peru");
	assert_eq!(peru[0].display_text(), "🇵🇪 Republic of Peru\nCapital City: Lima");

	let hellenic = lookup.lookup("hellenic").await.unwrap();
	assert_eq!(hellenic.iter().map(Choice::label).collect::<Vec<_>>(), vec!["Greece"]);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn lookup_waits_for_latency() {
	let lookup = lookup(300);
	let start = tokio::time::Instant::now();
	lookup.lookup("chile").await.unwrap();
	assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn trigger_query_fails() {
	let lookup = lookup(10);
	assert!(matches!(lookup.lookup("Offline mode").await, Err(LookupError::Unavailable)));
	assert_eq!(lookup.lookup("atlantis").await.unwrap(), Vec::new());
}
