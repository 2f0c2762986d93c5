//! Embedded demo datasets and the simulated country lookup.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use sift_dropdown::{Choice, Lookup, LookupError, LookupResult, StructuredChoice};
use sift_primitives::BoxFutureStatic;
use tracing::trace;

const US_STATES: &str = include_str!("../data/us-states.json");
const COUNTRIES: &str = include_str!("../data/countries.json");

#[derive(Debug, Deserialize)]
struct State {
	name: String,
	abbreviation: String,
}

/// A country record as served by the simulated remote.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
	pub name: String,
	pub official: String,
	pub capital: String,
	pub flag: String,
}

impl Country {
	fn matches(&self, needle: &str) -> bool {
		self.name.to_lowercase().contains(needle) || self.official.to_lowercase().contains(needle)
	}

	fn to_choice(&self) -> Choice {
		let display = format!("{} {}\nCapital City: {}", self.flag, self.official, self.capital);
		StructuredChoice::new(&self.name, &self.name).with_display(display).into()
	}
}

/// US states, labelled by name with the postal abbreviation as value.
pub fn us_states() -> serde_json::Result<Vec<Choice>> {
	let states: Vec<State> = serde_json::from_str(US_STATES)?;
	Ok(states
		.into_iter()
		.map(|state| Choice::structured(state.name, state.abbreviation))
		.collect())
}

pub fn countries() -> serde_json::Result<Vec<Country>> {
	serde_json::from_str(COUNTRIES)
}

/// Country search that behaves like a slow remote API.
///
/// Each lookup sleeps for `latency`, then matches the query against common
/// and official names. Queries containing `fail_on` answer with
/// [`LookupError::Unavailable`].
#[derive(Debug, Clone)]
pub struct CountryLookup {
	countries: Arc<[Country]>,
	latency: Duration,
	fail_on: String,
}

impl CountryLookup {
	pub fn new(countries: Vec<Country>, latency: Duration, fail_on: impl Into<String>) -> Self {
		Self {
			countries: countries.into(),
			latency,
			fail_on: fail_on.into().to_lowercase(),
		}
	}
}

impl Lookup for CountryLookup {
	fn lookup(&self, query: &str) -> BoxFutureStatic<LookupResult> {
		let countries = Arc::clone(&self.countries);
		let latency = self.latency;
		let needle = query.to_lowercase();
		let fails = !self.fail_on.is_empty() && needle.contains(&self.fail_on);
		Box::pin(async move {
			tokio::time::sleep(latency).await;
			if fails {
				trace!(query = %needle, "countries.lookup.simulated_outage");
				return Err(LookupError::Unavailable);
			}
			Ok(countries
				.iter()
				.filter(|country| country.matches(&needle))
				.map(Country::to_choice)
				.collect())
		})
	}
}

#[cfg(test)]
mod tests;
