//! Headless searchable multi-select dropdown.
//!
//! The widget accepts a [`DataSource`] (a static collection or an async
//! lookup), filters or fetches results for the typed query after a debounce
//! delay, tracks keyboard navigation and open/closed state, and proposes
//! selection changes to a host that owns the selection set.
//!
//! Rendering is left to the host: [`SearchDropdown::view`] produces a
//! [`DropdownView`] describing what to draw.

/// Option model.
pub mod choice;
/// Dropdown configuration.
pub mod config;
/// Debounce controller.
pub mod debounce;
/// The dropdown controller.
pub mod dropdown;
/// Error types.
pub mod error;
/// Internal messages and outward events.
pub mod events;
/// Selection host interface.
pub mod host;
/// Navigation state machine.
pub mod nav;
/// Outside-interaction detection.
pub mod outside;
/// Selection set operations.
pub mod selection;
/// Data source adapter.
pub mod source;
/// Render model.
pub mod view;

pub use choice::{Choice, ChoiceIdentity, StructuredChoice};
pub use config::DropdownConfig;
pub use dropdown::SearchDropdown;
pub use error::{ConfigError, LookupError};
pub use events::{DropdownEvent, DropdownMsg};
pub use host::{EventLog, SelectionHost, VecHost};
pub use nav::{NavKey, NavState};
pub use outside::{Boundary, BoundaryFn, OpenEpoch, PointerHub, SharedBounds};
pub use source::{DataSource, Lookup, LookupResult};
pub use view::{DropdownView, RowView};
