//! The searchable multi-select dropdown controller.
//!
//! [`SearchDropdown`] composes the data source adapter, the debounce
//! controller, the navigation state machine and the outside-interaction
//! detector. All state changes happen inside `&mut self` calls on the host's
//! thread. Spawned timers and lookups only post [`DropdownMsg`]s, which the
//! host applies by calling [`SearchDropdown::pump`] or awaiting
//! [`SearchDropdown::wait`].

use sift_primitives::{Key, Position};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace};

use crate::choice::Choice;
use crate::config::DropdownConfig;
use crate::debounce::{Debouncer, Schedule};
use crate::events::DropdownMsg;
use crate::host::SelectionHost;
use crate::nav::{NavAction, NavKey, NavState};
use crate::outside::{Boundary, OpenEpoch, OutsideDetector, PointerHub};
use crate::selection;
use crate::source::{DataSource, Resolution, Settlement, SourceAdapter};
use crate::view::{self, DropdownView};

/// Headless searchable multi-select dropdown.
///
/// A non-zero debounce and dynamic sources spawn tokio tasks, so those
/// configurations must be driven from inside a tokio runtime.
#[derive(Debug)]
pub struct SearchDropdown {
	config: DropdownConfig,
	query: String,
	results: Vec<Choice>,
	nav: NavState,
	loading: bool,
	debouncer: Debouncer,
	adapter: SourceAdapter,
	detector: Option<OutsideDetector>,
	epoch: OpenEpoch,
	torn_down: bool,
	tx: UnboundedSender<DropdownMsg>,
	rx: UnboundedReceiver<DropdownMsg>,
}

impl SearchDropdown {
	pub fn new(source: DataSource, config: DropdownConfig) -> Self {
		let (tx, rx) = mpsc::unbounded_channel();
		let results = source.initial_results();
		Self {
			debouncer: Debouncer::new(config.debounce(), tx.clone()),
			adapter: SourceAdapter::new(source, tx.clone()),
			config,
			query: String::new(),
			results,
			nav: NavState::Closed,
			loading: false,
			detector: None,
			epoch: OpenEpoch::default(),
			torn_down: false,
			tx,
			rx,
		}
	}

	/// Replaces the configuration, keeping query, results and open state.
	///
	/// A new debounce delay applies from the next input.
	pub fn with_config(mut self, config: DropdownConfig) -> Self {
		self.debouncer.set_delay(config.debounce());
		self.config = config;
		self
	}

	pub fn config(&self) -> &DropdownConfig {
		&self.config
	}

	pub fn source(&self) -> &DataSource {
		self.adapter.source()
	}

	pub fn set_disabled(&mut self, disabled: bool) {
		self.config.disabled = disabled;
	}

	pub fn is_disabled(&self) -> bool {
		self.config.disabled
	}

	/// Current search text.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Displayed result list.
	pub fn results(&self) -> &[Choice] {
		&self.results
	}

	pub fn nav(&self) -> NavState {
		self.nav
	}

	pub fn is_open(&self) -> bool {
		self.nav.is_open()
	}

	/// Highlighted result index.
	pub fn cursor(&self) -> Option<usize> {
		self.nav.cursor()
	}

	/// Internal loading flag: the latest issued lookup has not settled.
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Returns true while an outside-click listener is installed.
	pub fn is_mounted(&self) -> bool {
		self.detector.as_ref().is_some_and(OutsideDetector::is_attached)
	}

	/// Installs the outside-click listener for the widget's lifetime.
	pub fn mount(&mut self, hub: &PointerHub, boundary: impl Boundary) {
		if let Some(detector) = &mut self.detector {
			detector.detach();
		}
		let mut detector = OutsideDetector::with_epoch(boundary, self.epoch.clone());
		detector.attach(hub, self.tx.clone());
		self.detector = Some(detector);
		self.torn_down = false;
		trace!("dropdown.mount");
	}

	/// Sets the boundary used by [`SearchDropdown::pointer_down`] without
	/// subscribing to a [`PointerHub`].
	pub fn set_boundary(&mut self, boundary: impl Boundary) {
		self.detector = Some(OutsideDetector::with_epoch(boundary, self.epoch.clone()));
	}

	/// Cancels any pending debounce and removes the outside-click listener.
	///
	/// An in-flight lookup is abandoned and the loading flag cleared. Messages
	/// already posted, including late lookup settlements, are discarded.
	pub fn teardown<H: SelectionHost + ?Sized>(&mut self, host: &mut H) {
		self.debouncer.cancel();
		self.adapter.abandon();
		self.set_loading(false, host);
		self.detector = None;
		self.torn_down = true;
		while self.rx.try_recv().is_ok() {}
		trace!("dropdown.teardown");
	}

	/// Text change in the search field.
	pub fn input<H: SelectionHost + ?Sized>(&mut self, text: impl Into<String>, host: &mut H) {
		if self.config.disabled || self.torn_down {
			return;
		}
		self.query = text.into();
		self.open();
		match self.debouncer.schedule(self.query.clone()) {
			Schedule::Immediate(query) => self.settle(&query, host),
			Schedule::Deferred { generation } => {
				trace!(generation, query = %self.query, "dropdown.query.deferred");
			}
		}
	}

	/// Click on the search field.
	pub fn click(&mut self) {
		if !self.config.disabled {
			self.open();
		}
	}

	/// Focus on the search field.
	pub fn focus(&mut self) {
		if !self.config.disabled {
			self.open();
		}
	}

	/// Key press in the search field. Returns true if the key was handled as navigation.
	pub fn key<H: SelectionHost + ?Sized>(&mut self, key: Key, host: &mut H) -> bool {
		if self.config.disabled {
			return false;
		}
		let Some(nav_key) = NavKey::from_key(key) else {
			return false;
		};
		self.navigate(nav_key, host);
		true
	}

	/// Applies a navigation key.
	pub fn navigate<H: SelectionHost + ?Sized>(&mut self, key: NavKey, host: &mut H) {
		if self.config.disabled {
			return;
		}
		if let NavAction::Toggle(index) = self.nav.handle(key, self.results.len()) {
			self.toggle_at(index, host);
		}
	}

	/// Pointer click on a result row. Returns false if no such row is shown.
	pub fn select_result<H: SelectionHost + ?Sized>(&mut self, index: usize, host: &mut H) -> bool {
		if self.config.disabled || !self.nav.is_open() || index >= self.results.len() {
			return false;
		}
		self.toggle_at(index, host);
		true
	}

	/// Direct outside-click check for hosts without a [`PointerHub`].
	///
	/// Uses the boundary given to [`SearchDropdown::mount`] or
	/// [`SearchDropdown::set_boundary`]; without one nothing is outside.
	///
	/// Returns true if the press was outside and the panel closed.
	pub fn pointer_down(&mut self, pos: Position) -> bool {
		let outside = self.detector.as_ref().is_some_and(|detector| detector.is_outside(pos));
		if outside {
			self.nav.close();
		}
		outside
	}

	/// Applies every message posted so far. Returns how many were applied.
	pub fn pump<H: SelectionHost + ?Sized>(&mut self, host: &mut H) -> usize {
		let mut applied = 0;
		while let Ok(msg) = self.rx.try_recv() {
			self.apply(msg, host);
			applied += 1;
		}
		applied
	}

	/// Waits for the next message, then applies it and anything queued behind it.
	pub async fn wait<H: SelectionHost + ?Sized>(&mut self, host: &mut H) -> usize {
		let Some(msg) = self.rx.recv().await else {
			return 0;
		};
		self.apply(msg, host);
		1 + self.pump(host)
	}

	/// Render model for the current state.
	pub fn view(&self, selected: &[Choice]) -> DropdownView {
		let rows = if self.nav.is_open() {
			view::rows(&self.results, self.nav.cursor(), selected)
		} else {
			Vec::new()
		};
		DropdownView {
			label: self.config.label.clone(),
			description: self.config.description.clone(),
			query: self.query.clone(),
			loading: self.loading || self.config.is_loading,
			open: self.nav.is_open(),
			disabled: self.config.disabled,
			rows,
		}
	}

	fn apply<H: SelectionHost + ?Sized>(&mut self, msg: DropdownMsg, host: &mut H) {
		if self.torn_down {
			return;
		}
		match msg {
			DropdownMsg::Settled { generation, query } => {
				if self.debouncer.accept(generation) {
					self.settle(&query, host);
				}
			}
			DropdownMsg::Resolved { seq, query, outcome } => match self.adapter.settle(seq, &query, &self.query) {
				Settlement::Apply => {
					self.replace_results(outcome.unwrap_or_default());
					self.set_loading(self.adapter.is_awaiting(), host);
				}
				Settlement::Outdated => self.set_loading(self.adapter.is_awaiting(), host),
				Settlement::Stale => {}
			},
			DropdownMsg::Dismiss { epoch } => {
				let current = self.epoch.current();
				if epoch == current {
					self.nav.close();
				} else {
					trace!(epoch, current, "dropdown.dismiss.superseded");
				}
			}
		}
	}

	/// Opens the panel and records the request, so pointer-downs queued
	/// before it cannot close it.
	fn open(&mut self) {
		self.epoch.bump();
		self.nav.open();
	}

	fn settle<H: SelectionHost + ?Sized>(&mut self, query: &str, host: &mut H) {
		debug!(query, "dropdown.query.settled");
		match self.adapter.resolve(query) {
			Resolution::Ready(results) => {
				self.replace_results(results);
				self.set_loading(false, host);
			}
			Resolution::Pending(_) => self.set_loading(true, host),
		}
	}

	fn replace_results(&mut self, results: Vec<Choice>) {
		debug!(count = results.len(), "dropdown.results.replace");
		self.results = results;
		self.nav.reset_cursor();
	}

	fn set_loading<H: SelectionHost + ?Sized>(&mut self, loading: bool, host: &mut H) {
		if self.loading != loading {
			self.loading = loading;
			host.on_loading_change(loading);
		}
	}

	fn toggle_at<H: SelectionHost + ?Sized>(&mut self, index: usize, host: &mut H) {
		let Some(item) = self.results.get(index) else {
			return;
		};
		let next = selection::toggle(host.selected_items(), item);
		host.on_selected_change(next);
	}
}
