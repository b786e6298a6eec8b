//! Delimiter matching over a token stream.
//!
//! Interactive consumers buffer input line by line and only hand it on once
//! every `(` and `{` has been closed. [`check_balance`] walks the tokens
//! with a stack of open delimiters and reports where the stream stands;
//! [`DelimiterStack`] keeps that stack between calls for input that arrives
//! in pieces.

use crate::token::{Token, TokenKind};

/// Delimiter state of a token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Balance {
    /// Every opener has been closed by its partner.
    Complete,
    /// `open` delimiters are still waiting for their closers.
    Incomplete { open: usize },
    /// A closer met an opener of the other kind.
    Mismatched { expected: TokenKind, found: TokenKind },
    /// A closer appeared with nothing open.
    Unopened { found: TokenKind },
}

impl Balance {
    /// Returns `true` when the input should be handed on.
    ///
    /// Only `Incomplete` asks for more input. Malformed streams are passed
    /// through so that whoever consumes them can report the problem.
    pub fn ready(self) -> bool {
        !matches!(self, Balance::Incomplete { .. })
    }
}

/// The closer that pairs with `opener`, if it is one.
fn closer_for(opener: TokenKind) -> Option<TokenKind> {
    match opener {
        TokenKind::LParen => Some(TokenKind::RParen),
        TokenKind::LBrace => Some(TokenKind::RBrace),
        _ => None,
    }
}

fn is_closer(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::RParen | TokenKind::RBrace)
}

/// Running delimiter state, fed one token at a time.
///
/// Lets a consumer that receives input in pieces (a line at a time, say)
/// scan only the new piece instead of the whole buffer. Once a mismatch or
/// unopened closer is seen the result is fixed until [`clear`](Self::clear).
#[derive(Clone, Debug, Default)]
pub struct DelimiterStack {
    open: Vec<TokenKind>,
    error: Option<Balance>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one token. Kinds other than `(`, `)`, `{`, `}` are ignored.
    pub fn push(&mut self, token: Token<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Some(closer) = closer_for(token.kind) {
            self.open.push(closer);
        } else if is_closer(token.kind) {
            match self.open.pop() {
                Some(expected) if expected == token.kind => {}
                Some(expected) => {
                    self.error = Some(Balance::Mismatched {
                        expected,
                        found: token.kind,
                    });
                }
                None => self.error = Some(Balance::Unopened { found: token.kind }),
            }
        }
    }

    /// Where the tokens pushed so far stand.
    pub fn balance(&self) -> Balance {
        match self.error {
            Some(err) => err,
            None if self.open.is_empty() => Balance::Complete,
            None => Balance::Incomplete {
                open: self.open.len(),
            },
        }
    }

    /// Forget everything pushed so far.
    pub fn clear(&mut self) {
        self.open.clear();
        self.error = None;
    }
}

impl<'a> Extend<Token<'a>> for DelimiterStack {
    fn extend<I: IntoIterator<Item = Token<'a>>>(&mut self, tokens: I) {
        for token in tokens {
            self.push(token);
        }
    }
}

/// Match delimiters across `tokens`.
///
/// The first mismatch or unopened closer decides the result. `EOF` and
/// every other kind are ignored.
pub fn check_balance<'a, I>(tokens: I) -> Balance
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut stack = DelimiterStack::new();
    stack.extend(tokens);
    stack.balance()
}
