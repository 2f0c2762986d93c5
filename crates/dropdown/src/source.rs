//! Data source adapter.
//!
//! Wraps a static collection or an async lookup behind one operation:
//! "given a query, produce a result list". Static sources answer
//! synchronously. Dynamic sources spawn the lookup and post its settlement
//! back to the dropdown's message channel, tagged with a sequence number.
//!
//! # Ordering
//!
//! Every call to [`SourceAdapter::resolve`] bumps the latest sequence, so a
//! settlement is accepted only when it belongs to the most recently issued
//! query and that query is still the dropdown's current text. Slower lookups
//! that lose the race are computed but discarded. In-flight lookups are never
//! cancelled.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use sift_primitives::BoxFutureStatic;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace};

use crate::choice::Choice;
use crate::error::LookupError;
use crate::events::DropdownMsg;

/// Outcome of a dynamic lookup.
pub type LookupResult = Result<Vec<Choice>, LookupError>;

/// Asynchronous option provider.
///
/// Implemented for any `Fn(String) -> impl Future<Output = LookupResult>`
/// closure, so most hosts never implement it by hand.
pub trait Lookup: Send + Sync + 'static {
	/// Starts a lookup for a non-empty query.
	fn lookup(&self, query: &str) -> BoxFutureStatic<LookupResult>;
}

impl<F, Fut> Lookup for F
where
	F: Fn(String) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = LookupResult> + Send + 'static,
{
	fn lookup(&self, query: &str) -> BoxFutureStatic<LookupResult> {
		Box::pin(self(query.to_string()))
	}
}

/// Origin of candidate options.
#[derive(Clone)]
pub enum DataSource {
	/// Fixed collection, filtered locally.
	Static(Vec<Choice>),
	/// Async provider invoked per settled query.
	Dynamic(Arc<dyn Lookup>),
}

impl fmt::Debug for DataSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DataSource::Static(options) => f.debug_tuple("Static").field(&options.len()).finish(),
			DataSource::Dynamic(_) => f.write_str("Dynamic(..)"),
		}
	}
}

impl DataSource {
	/// Creates a static source from anything convertible into choices.
	pub fn fixed<I, C>(options: I) -> Self
	where
		I: IntoIterator<Item = C>,
		C: Into<Choice>,
	{
		DataSource::Static(options.into_iter().map(Into::into).collect())
	}

	/// Creates a dynamic source from an async closure.
	pub fn dynamic<F, Fut>(lookup: F) -> Self
	where
		F: Fn(String) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = LookupResult> + Send + 'static,
	{
		DataSource::Dynamic(Arc::new(lookup))
	}

	/// Creates a dynamic source from a [`Lookup`] implementation.
	pub fn from_lookup(lookup: impl Lookup) -> Self {
		DataSource::Dynamic(Arc::new(lookup))
	}

	pub fn is_dynamic(&self) -> bool {
		matches!(self, DataSource::Dynamic(_))
	}

	/// Result list shown before any query settles.
	pub fn initial_results(&self) -> Vec<Choice> {
		match self {
			DataSource::Static(options) => options.clone(),
			DataSource::Dynamic(_) => Vec::new(),
		}
	}
}

/// Filters a static collection, preserving source order.
///
/// An empty query returns the whole collection.
pub fn filter_static(options: &[Choice], query: &str) -> Vec<Choice> {
	if query.is_empty() {
		return options.to_vec();
	}
	let needle = query.to_lowercase();
	options.iter().filter(|choice| choice.matches_lowercase(&needle)).cloned().collect()
}

/// Identifies one issued lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
	/// Sequence number of the issuing query.
	pub seq: u64,
	/// The query the lookup was issued for.
	pub query: String,
}

/// Answer of [`SourceAdapter::resolve`].
#[derive(Debug)]
pub enum Resolution {
	/// The result list is known now.
	Ready(Vec<Choice>),
	/// A lookup was issued; its settlement arrives as [`DropdownMsg::Resolved`].
	Pending(Ticket),
}

/// Verdict on a lookup settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
	/// Latest issued lookup for the current query: apply it.
	Apply,
	/// Latest issued lookup, but the query changed since: clear loading only.
	Outdated,
	/// Superseded by a newer issued query.
	Stale,
}

/// Resolves queries against a [`DataSource`] and tracks issue order.
pub struct SourceAdapter {
	source: DataSource,
	latest: u64,
	pending: Option<u64>,
	tx: UnboundedSender<DropdownMsg>,
}

impl fmt::Debug for SourceAdapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SourceAdapter")
			.field("source", &self.source)
			.field("latest", &self.latest)
			.field("pending", &self.pending)
			.finish()
	}
}

impl SourceAdapter {
	pub fn new(source: DataSource, tx: UnboundedSender<DropdownMsg>) -> Self {
		Self {
			source,
			latest: 0,
			pending: None,
			tx,
		}
	}

	pub fn source(&self) -> &DataSource {
		&self.source
	}

	/// Sequence number of the most recently resolved query.
	pub fn latest(&self) -> u64 {
		self.latest
	}

	/// Returns true while the most recently issued lookup has not settled.
	pub fn is_awaiting(&self) -> bool {
		self.pending.is_some()
	}

	/// Forgets the in-flight lookup, if any: its settlement will be stale.
	pub fn abandon(&mut self) {
		if let Some(seq) = self.pending.take() {
			trace!(seq, "dropdown.lookup.abandon");
		}
		self.latest = self.latest.wrapping_add(1);
	}

	/// Produces the result list for a settled query.
	///
	/// Dynamic lookups are spawned on the current tokio runtime.
	pub fn resolve(&mut self, query: &str) -> Resolution {
		self.latest = self.latest.wrapping_add(1);
		let seq = self.latest;

		match &self.source {
			DataSource::Static(options) => {
				self.pending = None;
				Resolution::Ready(filter_static(options, query))
			}
			DataSource::Dynamic(_) if query.is_empty() => {
				self.pending = None;
				Resolution::Ready(Vec::new())
			}
			DataSource::Dynamic(lookup) => {
				debug!(seq, query, "dropdown.lookup.issue");
				let fut = lookup.lookup(query);
				let tx = self.tx.clone();
				let ticket = Ticket {
					seq,
					query: query.to_string(),
				};
				let query = ticket.query.clone();
				tokio::spawn(async move {
					let outcome = fut.await;
					let _ = tx.send(DropdownMsg::Resolved { seq, query, outcome });
				});
				self.pending = Some(seq);
				Resolution::Pending(ticket)
			}
		}
	}

	/// Classifies a settlement and clears the pending marker when it is the latest.
	pub fn settle(&mut self, seq: u64, query: &str, current_query: &str) -> Settlement {
		if seq != self.latest {
			trace!(seq, latest = self.latest, query, "dropdown.lookup.stale");
			return Settlement::Stale;
		}
		self.pending = None;
		if query != current_query {
			trace!(seq, query, current_query, "dropdown.lookup.outdated");
			return Settlement::Outdated;
		}
		Settlement::Apply
	}
}
