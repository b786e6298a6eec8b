//! Reserved word table.
//!
//! Exact, case-sensitive lookup. The reserved set is shared with the parser:
//! `fn`, `let`, `true`, `false`, `if`, `else`, `return`. Every other letter
//! run scans as [`TokenKind::Ident`].
//!
//! The lookup buckets by length first, so most identifiers are rejected
//! without a single string comparison.

use crate::TokenKind;

/// Look up a reserved word.
///
/// Returns `None` for anything that should be an identifier.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    // All keywords are 2-6 chars.
    match text.len() {
        2 => match text {
            "fn" => Some(TokenKind::Function),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "let" => Some(TokenKind::Let),
            _ => None,
        },
        4 => match text {
            "true" => Some(TokenKind::True),
            "else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

/// Kind for a scanned letter run: its keyword kind, or `IDENT`.
#[inline]
pub fn ident_kind(text: &str) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Ident)
}
