//! CLI commands.

use std::io::Write;

use monkey_lexer::tokenize;
use tracing::debug;

use crate::CliError;

/// Read a source file, mapping I/O failures to user-facing errors.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::from_read(path, e))?;
    debug!(path, bytes = content.len(), "read source file");
    Ok(content)
}

/// Write the token stream of `source`, `EOF` included, one token per line.
pub fn write_tokens(label: &str, source: &str, out: &mut impl Write) -> Result<(), CliError> {
    let toks = tokenize(source);

    writeln!(out, "Tokens for '{label}' ({} tokens):", toks.len())?;
    for tok in &toks {
        writeln!(out, "  {tok}")?;
    }
    Ok(())
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, out: &mut impl Write) -> Result<(), CliError> {
    let content = read_file(path)?;
    write_tokens(path, &content, out)
}
