//! Interactive console
//!
//! A line-based front end over the form handlers. Reads commands from
//! a prompt, walks the user through the form fields, and prints the
//! outcome. Generic over its input and output so sessions can be
//! scripted in tests.

use log::{error, info};
use std::io::{self, BufRead, Write};

use crate::console::command::{ConsoleCommand, parse_command};
use crate::forms::submission::{
    FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CHECK, FIELD_PERSIST, FIELD_TERMS, FIELD_USERNAME,
    FormSubmission,
};
use crate::forms::{SubmissionOutcome, handle_login, handle_registration};
use crate::store::CredentialStore;

const PROMPT: &str = "credgate> ";

pub struct Console<'a> {
    store: &'a mut dyn CredentialStore,
}

impl<'a> Console<'a> {
    pub fn new(store: &'a mut dyn CredentialStore) -> Self {
        Self { store }
    }

    /// Runs the prompt loop until `quit` or end of input.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        info!("Console session started");

        writeln!(output, "Welcome to credgate.")?;
        print_help(&mut output)?;

        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            let n = input.read_line(&mut line)?;
            if n == 0 {
                break; // End of input
            }

            match parse_command(&line) {
                ConsoleCommand::Register => self.register(&mut input, &mut output)?,
                ConsoleCommand::Login => self.login(&mut input, &mut output)?,
                ConsoleCommand::Help => print_help(&mut output)?,
                ConsoleCommand::Quit => {
                    writeln!(output, "Goodbye")?;
                    break;
                }
                ConsoleCommand::Empty => {}
                ConsoleCommand::Unknown => {
                    writeln!(output, "Unknown command. Type 'help' for the command list.")?;
                }
            }
        }

        info!("Console session ended");
        Ok(())
    }

    /// Walks through the registration form and hands it off.
    fn register<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        let prompts = [
            (FIELD_USERNAME, "username"),
            (FIELD_EMAIL, "email"),
            (FIELD_PASSWORD, "password"),
            (FIELD_PASSWORD_CHECK, "repeat password"),
            (FIELD_TERMS, "accept the Terms of Use? [y/N]"),
        ];

        let mut submission = FormSubmission::new();
        for (field, label) in prompts {
            match read_field(input, output, label)? {
                Some(value) => submission.set(field, value),
                None => return Ok(()), // End of input mid-form
            }
        }

        match handle_registration(&submission, &mut *self.store) {
            Ok(outcome) => print_outcome(output, &outcome),
            Err(e) => {
                error!("Credential store failure: {}", e);
                writeln!(output, "credential store failure: {e}")
            }
        }
    }

    /// Walks through the login form and hands it off.
    fn login<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        let prompts = [
            (FIELD_USERNAME, "username"),
            (FIELD_PASSWORD, "password"),
            (FIELD_PERSIST, "stay logged in? [y/N]"),
        ];

        let mut submission = FormSubmission::new();
        for (field, label) in prompts {
            match read_field(input, output, label)? {
                Some(value) => submission.set(field, value),
                None => return Ok(()), // End of input mid-form
            }
        }

        match handle_login(&submission, &*self.store) {
            Ok(outcome) => print_outcome(output, &outcome),
            Err(e) => {
                error!("Credential store failure: {}", e);
                writeln!(output, "credential store failure: {e}")
            }
        }
    }
}

/// Prompts for one field and reads the reply.
///
/// Only the line ending is stripped; leading and trailing spaces reach
/// the form untouched so passwords keep their exact value. Returns
/// `None` at end of input.
fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn print_outcome<W: Write>(output: &mut W, outcome: &SubmissionOutcome) -> io::Result<()> {
    match outcome {
        SubmissionOutcome::Ok { message } => writeln!(output, "{message}"),
        SubmissionOutcome::Error { message, field } => {
            writeln!(output, "error: {message} (field: {field})")
        }
    }
}

fn print_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "commands:")?;
    writeln!(output, "  register (r)  create a new account")?;
    writeln!(output, "  login (l)     sign in with an existing account")?;
    writeln!(output, "  help (h)      show this list")?;
    writeln!(output, "  quit (q)      leave")?;
    Ok(())
}
