//! Token-printing read-eval-print loop.
//!
//! Each line is appended to a buffer. While the buffer has unclosed `(` or
//! `{` the loop asks for more with the continuation prompt; once the
//! delimiters settle, the buffered input is scanned and its tokens printed,
//! one per line, and the buffer starts over.
//!
//! Delimiter state is carried across lines, so each line is scanned once
//! for balance. A newline always ends a token, which makes per-line
//! scanning agree with scanning the whole buffer.

use std::io::{BufRead, Write};

use monkey_lexer::{DelimiterStack, Scanner};
use tracing::debug;

use crate::CliError;

/// Prompt shown when the buffer is empty.
pub const PROMPT: &str = ">> ";
/// Prompt shown while waiting for closing delimiters.
pub const CONTINUATION: &str = ".. ";

/// Run the loop until `input` is exhausted.
///
/// Input still buffered at end of input is scanned and printed as-is.
pub fn run<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<(), CliError> {
    let mut buffer = String::new();
    let mut line = String::new();
    let mut delimiters = DelimiterStack::new();

    loop {
        let prompt = if buffer.is_empty() { PROMPT } else { CONTINUATION };
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            if !buffer.is_empty() {
                writeln!(out)?;
                print_tokens(&buffer, out)?;
            }
            return Ok(());
        }
        buffer.push_str(&line);
        delimiters.extend(Scanner::new(&line));

        let balance = delimiters.balance();
        if balance.ready() {
            debug!(?balance, bytes = buffer.len(), "scanning buffered input");
            print_tokens(&buffer, out)?;
            buffer.clear();
            delimiters.clear();
        } else {
            debug!(?balance, "waiting for closing delimiters");
        }
    }
}

fn print_tokens(source: &str, out: &mut impl Write) -> Result<(), CliError> {
    for tok in Scanner::new(source) {
        writeln!(out, "{tok}")?;
    }
    Ok(())
}
