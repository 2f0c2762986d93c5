//! Outside-interaction detection.
//!
//! A [`PointerHub`] stands in for the document-level pointer-down listener
//! list of a DOM host: the host dispatches every pointer-down into it, and
//! widgets subscribe for their mounted lifetime. Subscriptions are guards, so
//! dropping one removes its listener.
//!
//! Whether a position lies inside the widget is an injected [`Boundary`]
//! predicate, which keeps the detector testable without a display surface.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use sift_primitives::{MouseEvent, Position, Rect};
use slab::Slab;
use tokio::sync::mpsc::UnboundedSender;
use tracing::trace;

use crate::events::DropdownMsg;

/// "Is this position inside my region" predicate.
pub trait Boundary: Send + Sync + 'static {
	fn contains(&self, pos: Position) -> bool;
}

impl Boundary for Rect {
	fn contains(&self, pos: Position) -> bool {
		Rect::contains(self, pos)
	}
}

/// Adapts a closure into a [`Boundary`].
#[derive(Debug, Clone, Copy)]
pub struct BoundaryFn<F>(pub F);

impl<F> Boundary for BoundaryFn<F>
where
	F: Fn(Position) -> bool + Send + Sync + 'static,
{
	fn contains(&self, pos: Position) -> bool {
		(self.0)(pos)
	}
}

/// Widget region that the host updates after each layout pass.
#[derive(Debug, Clone, Default)]
pub struct SharedBounds(Arc<RwLock<Rect>>);

impl SharedBounds {
	pub fn new(rect: Rect) -> Self {
		Self(Arc::new(RwLock::new(rect)))
	}

	pub fn set(&self, rect: Rect) {
		*self.0.write() = rect;
	}

	pub fn get(&self) -> Rect {
		*self.0.read()
	}
}

impl Boundary for SharedBounds {
	fn contains(&self, pos: Position) -> bool {
		self.0.read().contains(pos)
	}
}

/// Count of open requests, shared between a widget and its pointer listener.
///
/// A pointer-down is stamped with the count current at dispatch. A queued
/// dismissal whose stamp is older than the latest open request lost the race
/// and must not close the panel.
#[derive(Debug, Clone, Default)]
pub struct OpenEpoch(Arc<AtomicU64>);

impl OpenEpoch {
	pub fn current(&self) -> u64 {
		self.0.load(Ordering::Acquire)
	}

	/// Records an open request.
	pub fn bump(&self) -> u64 {
		self.0.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
	}
}

type Listener = Arc<dyn Fn(Position) + Send + Sync>;

/// Pointer-down dispatcher shared by every widget of a host surface.
#[derive(Clone, Default)]
pub struct PointerHub {
	listeners: Arc<Mutex<Slab<Listener>>>,
}

impl fmt::Debug for PointerHub {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PointerHub").field("listeners", &self.listener_count()).finish()
	}
}

impl PointerHub {
	pub fn new() -> Self {
		Self::default()
	}

	/// Installs a listener until the returned guard is dropped.
	#[must_use = "dropping the subscription removes the listener"]
	pub fn subscribe(&self, listener: impl Fn(Position) + Send + Sync + 'static) -> PointerSubscription {
		let key = self.listeners.lock().insert(Arc::new(listener));
		trace!(key, "pointer_hub.subscribe");
		PointerSubscription {
			hub: Arc::downgrade(&self.listeners),
			key,
		}
	}

	/// Delivers a pointer-down to every listener.
	///
	/// Listeners run outside the lock, so they may subscribe or unsubscribe.
	pub fn dispatch(&self, pos: Position) {
		let listeners: Vec<Listener> = self.listeners.lock().iter().map(|(_, l)| l.clone()).collect();
		for listener in listeners {
			listener(pos);
		}
	}

	/// Routes a backend mouse event; only presses reach the listeners.
	pub fn dispatch_mouse(&self, event: MouseEvent) {
		if event.is_press() {
			self.dispatch(event.position());
		}
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.lock().len()
	}
}

/// Guard for a [`PointerHub`] listener.
pub struct PointerSubscription {
	hub: Weak<Mutex<Slab<Listener>>>,
	key: usize,
}

impl fmt::Debug for PointerSubscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PointerSubscription").field("key", &self.key).finish()
	}
}

impl Drop for PointerSubscription {
	fn drop(&mut self) {
		if let Some(listeners) = self.hub.upgrade() {
			let mut listeners = listeners.lock();
			if listeners.contains(self.key) {
				listeners.remove(self.key);
				trace!(key = self.key, "pointer_hub.unsubscribe");
			}
		}
	}
}

/// Closes the dropdown when a pointer-down lands outside its boundary.
pub struct OutsideDetector {
	boundary: Arc<dyn Boundary>,
	epoch: OpenEpoch,
	subscription: Option<PointerSubscription>,
}

impl fmt::Debug for OutsideDetector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OutsideDetector")
			.field("attached", &self.subscription.is_some())
			.finish()
	}
}

impl OutsideDetector {
	pub fn new(boundary: impl Boundary) -> Self {
		Self::with_epoch(boundary, OpenEpoch::default())
	}

	/// Detector whose dismissals are stamped from `epoch`.
	pub fn with_epoch(boundary: impl Boundary, epoch: OpenEpoch) -> Self {
		Self {
			boundary: Arc::new(boundary),
			epoch,
			subscription: None,
		}
	}

	pub fn is_outside(&self, pos: Position) -> bool {
		!self.boundary.contains(pos)
	}

	pub fn is_attached(&self) -> bool {
		self.subscription.is_some()
	}

	/// Installs the listener; a second call while attached does nothing.
	pub fn attach(&mut self, hub: &PointerHub, tx: UnboundedSender<DropdownMsg>) {
		if self.subscription.is_some() {
			return;
		}
		let boundary = self.boundary.clone();
		let epoch = self.epoch.clone();
		self.subscription = Some(hub.subscribe(move |pos| {
			if !boundary.contains(pos) {
				let _ = tx.send(DropdownMsg::Dismiss { epoch: epoch.current() });
			}
		}));
	}

	/// Removes the listener.
	pub fn detach(&mut self) {
		self.subscription = None;
	}
}
