//! Line-oriented console front end.
//!
//! Each input line is one user event: editing a field, pressing one of the
//! two buttons, or inspecting the session. The loop blocks on input and runs
//! every event to completion before reading the next line.

use std::io::{self, BufRead, Write};

use invoicer_render::{item_row, RenderBackend};
use thiserror::Error;

use crate::commands::{Action, AppState};
use crate::form::{Field, UnknownField};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Set(Field, String),
    Run(Action),
    Items,
    Form,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (type 'help')")]
    UnknownCommand(String),
    #[error("usage: set <field> <value>")]
    MissingField,
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

/// Parse one input line.
///
/// `set <field> <value>` keeps the value verbatim after the single separating
/// space, so values may contain spaces.
pub fn parse_line(line: &str) -> Result<ConsoleCommand, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (trimmed, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "" => Ok(ConsoleCommand::Empty),
        "set" => {
            let rest = rest.trim_start();
            if rest.is_empty() {
                return Err(ParseError::MissingField);
            }
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            Ok(ConsoleCommand::Set(field.parse()?, value.to_string()))
        }
        "add" => Ok(ConsoleCommand::Run(Action::AddItem)),
        "generate" => Ok(ConsoleCommand::Run(Action::GenerateInvoice)),
        "items" => Ok(ConsoleCommand::Items),
        "form" => Ok(ConsoleCommand::Form),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "exit" => Ok(ConsoleCommand::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

const HELP: &str = "\
Commands:
  set <field> <value>  fill a form field
  add                  add the typed item (Add Item)
  generate             write the invoice PDF (Generate Invoice)
  items                list the items added so far
  form                 show every field
  help                 show this text
  quit                 leave
Fields:";

fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HELP}")?;
    for field in Field::ALL {
        writeln!(out, "  {:<16} {}", field.key(), field.label())?;
    }
    Ok(())
}

fn write_form<B: RenderBackend>(state: &AppState<B>, out: &mut impl Write) -> io::Result<()> {
    for field in Field::ALL {
        writeln!(out, "  {:<16} {}", field.label(), state.form.get(field))?;
    }
    Ok(())
}

fn write_items<B: RenderBackend>(state: &AppState<B>, out: &mut impl Write) -> io::Result<()> {
    let collector = state.collector();
    if collector.is_empty() {
        return writeln!(out, "No items yet.");
    }
    let currency = &state.renderer().config().currency_symbol;
    for item in collector.items() {
        writeln!(out, "  {}", item_row(item, currency).join(" | "))?;
    }
    match collector.running_total() {
        Ok(total) => writeln!(out, "  Total: {}", total.format_with(currency)),
        Err(err) => writeln!(out, "  Total unavailable: {err}"),
    }
}

/// Drive `state` from `input` until end of input or `quit`.
pub fn run<B, R, W>(state: &mut AppState<B>, input: R, mut out: W) -> io::Result<()>
where
    B: RenderBackend,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Invoice Generator (type 'help' for commands)")?;
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        match parse_line(&line) {
            Ok(ConsoleCommand::Empty) => {}
            Ok(ConsoleCommand::Set(field, value)) => state.form.set(field, value),
            Ok(ConsoleCommand::Run(action)) => {
                let notification = state.dispatch(action);
                writeln!(out, "{notification}")?;
            }
            Ok(ConsoleCommand::Items) => write_items(state, &mut out)?,
            Ok(ConsoleCommand::Form) => write_form(state, &mut out)?,
            Ok(ConsoleCommand::Help) => write_help(&mut out)?,
            Ok(ConsoleCommand::Quit) => break,
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}
