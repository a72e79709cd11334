//! Line prompts.

use std::io::{BufRead, Write};

use console::Term;
use dialoguer::Input;

use crate::error::{BootstrapError, Result};

use super::Prompt;

/// Convert dialoguer errors to BootstrapError.
fn map_dialoguer_err(e: dialoguer::Error) -> BootstrapError {
    BootstrapError::Io(e.into())
}

/// Ask a free-text question and return the answer.
///
/// Uses a dialoguer text input when `term` is attached to a terminal, and
/// reads a plain line from stdin otherwise so answers can be piped in.
pub fn prompt_line(prompt: &Prompt, term: &Term) -> Result<String> {
    if term.is_term() {
        return Input::<String>::new()
            .with_prompt(&prompt.question)
            .allow_empty(true)
            .interact_text_on(term)
            .map_err(map_dialoguer_err);
    }

    let mut out = term.clone();
    write!(out, "{} ", prompt.question)?;
    out.flush()?;

    let stdin = std::io::stdin();
    let mut lock = stdin.lock();
    read_answer(&mut lock)
}

/// Read one answer line, without its line terminator.
///
/// End of input is an error: a closed stdin would otherwise be read as an
/// endless stream of empty answers.
pub fn read_answer<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        return Err(BootstrapError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        )));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
