//! CLI schema for the sift demo binary.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sift_dropdown::DropdownConfig;

/// Debounce used when neither the config file nor `--debounce` sets one.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Searchable multi-select dropdown, driven line by line")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Dataset to search.
	#[command(subcommand)]
	pub source: Source,

	/// Debounce delay in milliseconds (overrides the config file)
	#[arg(long, short = 'd', global = true, value_name = "MS")]
	pub debounce: Option<u64>,

	/// Dropdown config file (TOML)
	#[arg(long, short = 'c', global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,
}

/// Available datasets.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Source {
	/// Search US states by name or abbreviation
	States,
	/// Search countries through a simulated remote lookup
	Countries {
		/// Simulated lookup latency in milliseconds
		#[arg(long, short = 'l', default_value_t = 300, value_name = "MS")]
		latency: u64,

		/// Queries containing this text fail as if the remote were down
		#[arg(long, value_name = "TEXT", default_value = "offline")]
		fail_on: String,
	},
}

impl Source {
	/// Label shown when the config file does not set one.
	pub fn default_label(&self) -> &'static str {
		match self {
			Source::States => "US States Search",
			Source::Countries { .. } => "Asynchronous Countries Search",
		}
	}

	pub fn default_description(&self) -> &'static str {
		match self {
			Source::States => "Search US states by name or abbreviation",
			Source::Countries { .. } => "Search countries by name from remote API",
		}
	}

	/// Simulated lookup latency, for dynamic sources.
	pub fn latency(&self) -> Option<Duration> {
		match self {
			Source::States => None,
			Source::Countries { latency, .. } => Some(Duration::from_millis(*latency)),
		}
	}
}

impl Cli {
	/// Builds the dropdown config from the optional file, flags and per-source defaults.
	pub fn dropdown_config(&self) -> anyhow::Result<DropdownConfig> {
		let mut config = match &self.config {
			Some(path) => DropdownConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
			None => DropdownConfig::default().with_debounce(Duration::from_millis(DEFAULT_DEBOUNCE_MS)),
		};
		if let Some(ms) = self.debounce {
			config.debounce_ms = ms;
			config.validate().context("--debounce")?;
		}
		if config.label.is_none() {
			config.label = Some(self.source.default_label().to_string());
		}
		if config.description.is_none() {
			config.description = Some(self.source.default_description().to_string());
		}
		Ok(config)
	}
}
