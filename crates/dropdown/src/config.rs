//! Dropdown configuration.
//!
//! Mirrors the widget's optional props. The data source and the selection
//! callbacks are not configuration: they are passed to
//! [`SearchDropdown::new`](crate::SearchDropdown::new) and implemented by the
//! [`SelectionHost`](crate::SelectionHost) respectively.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Upper bound accepted for `debounce_ms`.
pub const MAX_DEBOUNCE_MS: u64 = 60_000;

/// Optional dropdown props.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownConfig {
	/// Label shown above the search field.
	pub label: Option<String>,
	/// Secondary text shown under the label.
	pub description: Option<String>,
	/// Suppresses all input handling.
	pub disabled: bool,
	/// Quiet period before a typed query is searched, in milliseconds.
	pub debounce_ms: u64,
	/// Host-forced loading indicator, combined with the internal loading flag.
	pub is_loading: bool,
}

impl DropdownConfig {
	/// Parses and validates configuration from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self> {
		let config: Self = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads and parses a TOML configuration file.
	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}

	/// Returns the debounce delay.
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_debounce(mut self, delay: Duration) -> Self {
		self.debounce_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
		self
	}

	pub fn with_disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn with_loading_indicator(mut self, is_loading: bool) -> Self {
		self.is_loading = is_loading;
		self
	}

	/// Checks field values that deserialization alone cannot reject.
	pub fn validate(&self) -> Result<()> {
		if self.debounce_ms > MAX_DEBOUNCE_MS {
			return Err(ConfigError::InvalidOption {
				key: "debounce_ms",
				reason: format!("{} exceeds the maximum of {MAX_DEBOUNCE_MS}", self.debounce_ms),
			});
		}
		Ok(())
	}
}
