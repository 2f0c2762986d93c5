//! Debounce controller for typed queries.
//!
//! Each new query bumps a generation and cancels the emission scheduled by
//! the previous one, so only the last query of a burst is ever searched. A
//! zero delay settles synchronously without spawning anything.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::events::DropdownMsg;

/// How a scheduled query will settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
	/// Zero delay: the caller settles `query` right away.
	Immediate(String),
	/// A [`DropdownMsg::Settled`] with this generation will be posted after the delay.
	Deferred {
		generation: u64,
	},
}

/// Delays query settlement until input has been quiet for `delay`.
#[derive(Debug)]
pub struct Debouncer {
	delay: Duration,
	generation: u64,
	pending: Option<CancellationToken>,
	tx: UnboundedSender<DropdownMsg>,
}

impl Debouncer {
	pub fn new(delay: Duration, tx: UnboundedSender<DropdownMsg>) -> Self {
		Self {
			delay,
			generation: 0,
			pending: None,
			tx,
		}
	}

	/// Changes the delay for subsequent schedules; a pending emission keeps its deadline.
	pub fn set_delay(&mut self, delay: Duration) {
		self.delay = delay;
	}

	/// Returns true while an emission is scheduled and not yet accepted.
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Cancels the pending emission, if any.
	pub fn cancel(&mut self) {
		if let Some(cancel) = self.pending.take() {
			trace!(generation = self.generation, "dropdown.debounce.cancel");
			cancel.cancel();
		}
	}

	/// Schedules settlement of `query`, replacing any pending emission.
	///
	/// A non-zero delay spawns a timer task on the current tokio runtime. The
	/// deadline is fixed here, not when the task first runs.
	pub fn schedule(&mut self, query: String) -> Schedule {
		self.generation = self.generation.wrapping_add(1);
		let generation = self.generation;
		self.cancel();

		if self.delay.is_zero() {
			return Schedule::Immediate(query);
		}

		let cancel = CancellationToken::new();
		self.pending = Some(cancel.clone());
		let deadline = Instant::now() + self.delay;
		let tx = self.tx.clone();

		tokio::spawn(async move {
			tokio::select! {
				_ = cancel.cancelled() => return,
				_ = sleep_until(deadline) => {}
			}
			if cancel.is_cancelled() {
				return;
			}
			let _ = tx.send(DropdownMsg::Settled { generation, query });
		});

		Schedule::Deferred { generation }
	}

	/// Accepts a posted emission if it belongs to the latest schedule.
	pub fn accept(&mut self, generation: u64) -> bool {
		if generation != self.generation || self.pending.is_none() {
			trace!(generation, current = self.generation, "dropdown.debounce.superseded");
			return false;
		}
		self.pending = None;
		true
	}
}

impl Drop for Debouncer {
	fn drop(&mut self) {
		self.cancel();
	}
}
