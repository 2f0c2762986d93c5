//! Sift demo binary.
//!
//! Mounts one searchable dropdown over an embedded dataset and drives it
//! from stdin, one command per line.

mod cli;
mod data;
mod session;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Source};
use data::CountryLookup;
use session::{Command, Flow, Session};
use sift_dropdown::{DataSource, SearchDropdown};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let config = cli.dropdown_config()?;
	let source = match &cli.source {
		Source::States => DataSource::fixed(data::us_states().context("parsing embedded US states")?),
		Source::Countries { fail_on, .. } => {
			let countries = data::countries().context("parsing embedded countries")?;
			let latency = cli.source.latency().unwrap_or_default();
			DataSource::from_lookup(CountryLookup::new(countries, latency, fail_on.as_str()))
		}
	};
	info!(source = ?cli.source, debounce_ms = config.debounce_ms, "starting sift");

	let mut session = Session::new(SearchDropdown::new(source, config));
	run(&mut session).await
}

async fn run(session: &mut Session) -> anyhow::Result<()> {
	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	let mut stdout = std::io::stdout();
	draw(&mut stdout, session)?;

	loop {
		tokio::select! {
			line = lines.next_line() => {
				let Some(line) = line.context("reading stdin")? else {
					break;
				};
				match Command::parse(&line) {
					Ok(command) => match session.execute(command) {
						Flow::Redraw => draw(&mut stdout, session)?,
						Flow::Notice(message) => {
							writeln!(stdout, "{message}")?;
							draw(&mut stdout, session)?;
						}
						Flow::Quit => break,
					},
					Err(err) => writeln!(stdout, "{err}")?,
				}
			}
			applied = session.wait() => {
				if applied > 0 {
					draw(&mut stdout, session)?;
				}
			}
		}
	}

	session.close();
	info!(selected = session.selected().len(), "sift exiting");
	Ok(())
}

fn draw(out: &mut impl Write, session: &Session) -> std::io::Result<()> {
	writeln!(out, "{}\n", session.render())?;
	out.flush()
}

fn setup_tracing(verbose: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = || {
		EnvFilter::try_from_env("SIFT_LOG")
			.or_else(|_| EnvFilter::try_from_default_env())
			.unwrap_or_else(|_| {
				if verbose {
					EnvFilter::new("sift_dropdown=trace,sift_term=trace,info")
				} else {
					EnvFilter::new("warn")
				}
			})
	};

	// SIFT_LOG_DIR keeps stdout clean for the rendered dropdown.
	if let Some(log_dir) = std::env::var("SIFT_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("sift.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);

			tracing_subscriber::registry().with(filter()).with(file_layer).init();

			tracing::info!(path = ?log_path, "sift tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(filter())
		.with_writer(std::io::stderr)
		.init();
}
