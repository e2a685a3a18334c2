//! Interactive command loop for the address book.
//!
//! This module is thin glue around the core: it reads a line, splits it into
//! a command keyword and space-separated arguments, dispatches to the book
//! through [`handlers::execute`], and prints the reply. All validation and
//! query logic lives in the core; argument-count and unknown-command errors
//! are caught here before the core is ever called.

pub mod handlers;

pub use handlers::{execute, Reply};

use crate::book::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A parsed REPL command.
///
/// Keywords are matched case-insensitively; arguments are taken verbatim
/// (names are case-sensitive keys). A recognized keyword with the wrong
/// number of arguments becomes `Invalid` with a usage line, anything else
/// becomes `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
    Invalid { usage: &'static str },
    Unknown,
}

impl Command {
    /// Parse one input line into a command.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Self::Unknown;
        };
        let args: Vec<&str> = parts.collect();

        match (keyword.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("hello", []) => Self::Hello,
            ("add", [name, phone]) => Self::Add {
                name: (*name).to_string(),
                phone: (*phone).to_string(),
            },
            ("add", _) => Self::Invalid {
                usage: "Usage: add <name> <phone>",
            },
            ("change", [name, phone]) => Self::Change {
                name: (*name).to_string(),
                phone: (*phone).to_string(),
            },
            ("change", _) => Self::Invalid {
                usage: "Usage: change <name> <phone>",
            },
            ("phone", [name]) => Self::Phone {
                name: (*name).to_string(),
            },
            ("phone", _) => Self::Invalid {
                usage: "Usage: phone <name>",
            },
            ("all", []) => Self::All,
            ("add-birthday", [name, birthday]) => Self::AddBirthday {
                name: (*name).to_string(),
                birthday: (*birthday).to_string(),
            },
            ("add-birthday", _) => Self::Invalid {
                usage: "Usage: add-birthday <name> <DD.MM.YYYY>",
            },
            ("show-birthday", [name]) => Self::ShowBirthday {
                name: (*name).to_string(),
            },
            ("show-birthday", _) => Self::Invalid {
                usage: "Usage: show-birthday <name>",
            },
            ("birthdays", []) => Self::Birthdays,
            ("exit" | "close", []) => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

/// Run the read-eval-print loop until `exit`/`close` or end of input.
///
/// The loop owns all I/O; `execute` itself never touches stdin or stdout, so
/// transcripts can be driven from tests with in-memory buffers.
pub fn run<R, W>(
    book: &mut AddressBook,
    input: R,
    mut output: W,
    prompt: &str,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            // End of input behaves like an exit
            writeln!(output, "Goodbye!")?;
            return Ok(());
        };

        if line.trim().is_empty() {
            continue;
        }

        let command = Command::parse(&line);
        debug!(?command, "executing command");

        let reply = execute(book, command);
        writeln!(output, "{}", reply.text)?;

        if reply.exit {
            return Ok(());
        }
    }
}
