//! Line-driven dropdown session.
//!
//! Each stdin line is one [`Command`]: plain text replaces the query, lines
//! starting with `:` drive navigation and pointer input. The widget lives in
//! a virtual screen: the search field occupies row 0 and result rows follow
//! beneath it, so `:pick`, `:inside` and `:outside` become pointer presses at
//! concrete positions.

use sift_dropdown::{Choice, DropdownView, NavKey, PointerHub, SearchDropdown, SharedBounds, VecHost};
use sift_primitives::{Modifiers, MouseButton, MouseEvent, Position, Rect};
use thiserror::Error;
use tracing::debug;

/// Width of the virtual widget area.
const WIDTH: u16 = 60;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Replace the search text.
	Query(String),
	Nav(NavKey),
	Click,
	Focus,
	/// Click the result row with this zero-based index.
	Pick(usize),
	/// Pointer press outside the widget.
	Outside,
	/// Pointer press on the search field.
	Inside,
	Selected,
	Help,
	Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	#[error("unknown command ':{0}' (try :help)")]
	Unknown(String),
	#[error(":pick needs a row number")]
	MissingRow,
	#[error("invalid row number '{0}'")]
	InvalidRow(String),
}

impl Command {
	/// Parses one input line. A leading `::` escapes a query that starts with `:`.
	pub fn parse(line: &str) -> Result<Self, ParseError> {
		let line = line.trim_end_matches(['\r', '\n']);
		if let Some(query) = line.strip_prefix("::") {
			return Ok(Command::Query(format!(":{query}")));
		}
		let Some(rest) = line.strip_prefix(':') else {
			return Ok(Command::Query(line.to_string()));
		};
		let mut words = rest.split_whitespace();
		let name = words.next().unwrap_or_default();
		let command = match name {
			"down" | "j" => Command::Nav(NavKey::Down),
			"up" | "k" => Command::Nav(NavKey::Up),
			"enter" => Command::Nav(NavKey::Enter),
			"esc" | "escape" => Command::Nav(NavKey::Escape),
			"click" => Command::Click,
			"focus" => Command::Focus,
			"pick" => {
				let arg = words.next().ok_or(ParseError::MissingRow)?;
				// Rows are numbered from 1 on screen.
				match arg.parse::<usize>() {
					Ok(row) if row > 0 => Command::Pick(row - 1),
					_ => return Err(ParseError::InvalidRow(arg.to_string())),
				}
			}
			"outside" => Command::Outside,
			"inside" => Command::Inside,
			"selected" => Command::Selected,
			"help" | "h" => Command::Help,
			"quit" | "q" => Command::Quit,
			other => return Err(ParseError::Unknown(other.to_string())),
		};
		Ok(command)
	}
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
	Redraw,
	/// Print this message, then redraw.
	Notice(String),
	Quit,
}

pub const HELP: &str = "\
text        set the search query (::text for a query starting with ':')
:down :up   move the highlight (also :j :k)
:enter      toggle the highlighted row
:esc        close the result panel
:click      click the search field
:focus      focus the search field
:pick <n>   click result row n
:outside    click outside the dropdown
:inside     click the search field area without focusing
:selected   list the selection
:quit       exit";

/// A dropdown mounted on a virtual screen, with a `Vec` selection host.
#[derive(Debug)]
pub struct Session {
	dropdown: SearchDropdown,
	host: VecHost,
	hub: PointerHub,
	bounds: SharedBounds,
}

impl Session {
	pub fn new(mut dropdown: SearchDropdown) -> Self {
		let hub = PointerHub::new();
		let bounds = SharedBounds::new(Rect::new(0, 0, WIDTH, 1));
		dropdown.mount(&hub, bounds.clone());
		Self {
			dropdown,
			host: VecHost::new(),
			hub,
			bounds,
		}
	}

	pub fn selected(&self) -> &[Choice] {
		&self.host.selected
	}

	pub fn execute(&mut self, command: Command) -> Flow {
		debug!(?command, "session.command");
		match command {
			Command::Query(text) => self.dropdown.input(text, &mut self.host),
			Command::Nav(key) => self.dropdown.navigate(key, &mut self.host),
			Command::Click => {
				self.press(Position::new(0, 0));
				self.dropdown.click();
			}
			Command::Focus => self.dropdown.focus(),
			Command::Pick(index) => {
				self.press(row_position(index));
				if !self.dropdown.select_result(index, &mut self.host) {
					return Flow::Notice(format!("no result row {}", index + 1));
				}
			}
			Command::Outside => self.press(Position::new(0, self.bounds.get().bottom())),
			Command::Inside => self.press(Position::new(0, 0)),
			Command::Selected => return Flow::Notice(selection_summary(&self.host.selected)),
			Command::Help => return Flow::Notice(HELP.to_string()),
			Command::Quit => return Flow::Quit,
		}
		Flow::Redraw
	}

	/// Waits for debounce or lookup settlements. Returns how many messages were applied.
	pub async fn wait(&mut self) -> usize {
		self.dropdown.wait(&mut self.host).await
	}

	/// Renders the widget and resizes its boundary to the drawn area.
	pub fn render(&self) -> String {
		let view = self.dropdown.view(&self.host.selected);
		let field = Rect::new(0, 0, WIDTH, 1);
		self.bounds.set(field.union(Rect::new(0, 1, WIDTH, panel_rows(&view))));
		render(&view, &self.host.selected)
	}

	/// Removes the outside-click listener and drops pending settlements.
	pub fn close(&mut self) {
		self.dropdown.teardown(&mut self.host);
	}

	fn press(&mut self, pos: Position) {
		self.hub.dispatch_mouse(MouseEvent::Press {
			button: MouseButton::Left,
			row: pos.y,
			col: pos.x,
			modifiers: Modifiers::NONE,
		});
		self.dropdown.pump(&mut self.host);
	}

	#[cfg(test)]
	fn bounds(&self) -> Rect {
		self.bounds.get()
	}

	#[cfg(test)]
	fn dropdown(&self) -> &SearchDropdown {
		&self.dropdown
	}
}

/// Screen position of a result row, below the search field.
fn row_position(index: usize) -> Position {
	let row = u16::try_from(index).unwrap_or(u16::MAX).saturating_add(1);
	Position::new(2, row)
}

/// One line per result row, or one line for the empty state. Zero while closed.
fn panel_rows(view: &DropdownView) -> u16 {
	if !view.open {
		return 0;
	}
	u16::try_from(view.rows.len()).unwrap_or(u16::MAX).max(1)
}

fn selection_summary(selected: &[Choice]) -> String {
	if selected.is_empty() {
		return "nothing selected".to_string();
	}
	let labels: Vec<&str> = selected.iter().map(Choice::label).collect();
	format!("selected: {}", labels.join(", "))
}

/// Draws a view as plain text.
///
/// ```text
/// US States Search
/// Search US states by name or abbreviation
/// [?] new
///   > 1. [ ] New Hampshire
///     2. [x] New Jersey
/// ```
pub fn render(view: &DropdownView, selected: &[Choice]) -> String {
	let mut out = Vec::new();
	if let Some(label) = &view.label {
		out.push(label.clone());
	}
	if let Some(description) = &view.description {
		out.push(description.clone());
	}

	let icon = if view.loading { "[~]" } else { "[?]" };
	let mut field = format!("{icon} {}", view.query);
	if view.disabled {
		field.push_str("  (disabled)");
	}
	out.push(field);

	if view.is_empty_state() {
		out.push("    No results found".to_string());
	}
	for (index, row) in view.rows.iter().enumerate() {
		let cursor = if row.highlighted { '>' } else { ' ' };
		let check = if row.selected { 'x' } else { ' ' };
		let prefix = format!("  {cursor} {}. [{check}] ", index + 1);
		let mut lines = row.text.lines();
		out.push(format!("{prefix}{}", lines.next().unwrap_or_default()));
		let indent = " ".repeat(prefix.chars().count());
		out.extend(lines.map(|line| format!("{indent}{line}")));
	}

	if !selected.is_empty() {
		out.push(selection_summary(selected));
	}
	out.join("\n")
}
