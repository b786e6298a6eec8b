//! Hand-written scanner producing one [`Token`] per call.
//!
//! The core is [`scan_at`], a pure function from `(input, position)` to
//! `(token, next position)`. [`Scanner`] owns nothing but the input and a
//! position and drives `scan_at` in a loop, so the stateful and the pure
//! form always agree on the token stream.
//!
//! # Dispatch
//!
//! After skipping whitespace the current byte is classified in this order:
//!
//! 1. single-character punctuation, looked up in [`PUNCTUATION`]
//! 2. letter run (`a-z`, `A-Z`, `_`), resolved against the keyword table
//! 3. digit run (`0-9`)
//! 4. end of input
//! 5. anything else, one whole character, as `ILLEGAL`
//!
//! Every non-`EOF` token consumes at least one byte, so a scan of `n` bytes
//! reaches `EOF` within `n + 1` calls.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords;
use crate::token::{Token, TokenKind};

/// Byte-indexed punctuation table.
///
/// Dispatch is a single array read. Adding a punctuation character means
/// adding one line to `build_punctuation`.
pub static PUNCTUATION: [Option<TokenKind>; 256] = build_punctuation();

const fn build_punctuation() -> [Option<TokenKind>; 256] {
    let mut table = [None; 256];
    table[b'=' as usize] = Some(TokenKind::Assign);
    table[b';' as usize] = Some(TokenKind::Semicolon);
    table[b'(' as usize] = Some(TokenKind::LParen);
    table[b')' as usize] = Some(TokenKind::RParen);
    table[b'{' as usize] = Some(TokenKind::LBrace);
    table[b'}' as usize] = Some(TokenKind::RBrace);
    table[b',' as usize] = Some(TokenKind::Comma);
    table[b'+' as usize] = Some(TokenKind::Plus);
    table
}

/// ASCII letter or underscore. Digits never continue an identifier.
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Space, tab, newline, or carriage return.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Scan one token starting at byte offset `pos`.
///
/// Returns the token and the offset to resume from. Positions past the end
/// of `input` are treated as end of input. At end of input the returned
/// offset is `input.len()` and every further call returns `EOF` again.
///
/// A `pos` inside a multi-byte character is moved forward to the next
/// character boundary before scanning.
pub fn scan_at(input: &str, pos: usize) -> (Token<'_>, usize) {
    let mut cursor = Cursor::at(input, pos);
    let token = scan(&mut cursor);
    (token, cursor.pos())
}

fn scan<'a>(cursor: &mut Cursor<'a>) -> Token<'a> {
    cursor.eat_while(is_whitespace);

    if cursor.is_eof() {
        return Token::eof();
    }

    let start = cursor.pos();
    let byte = cursor.current();

    if let Some(kind) = PUNCTUATION[usize::from(byte)] {
        cursor.advance();
        return Token::new(kind, cursor.slice_from(start));
    }

    if is_letter(byte) {
        cursor.eat_while(is_letter);
        let literal = cursor.slice_from(start);
        return Token::new(keywords::ident_kind(literal), literal);
    }

    if is_digit(byte) {
        cursor.eat_while(is_digit);
        return Token::new(TokenKind::Int, cursor.slice_from(start));
    }

    cursor.advance_char();
    let literal = cursor.slice_from(start);
    debug!(pos = start, literal, "illegal character");
    Token::new(TokenKind::Illegal, literal)
}

/// Pull-based scanner over an in-memory source.
///
/// Call [`next_token`](Self::next_token) until it returns `EOF`. Calling
/// again after that is fine and keeps returning `EOF`.
///
/// The scanner also implements [`Iterator`], yielding every token before
/// `EOF` and then `None` forever.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token<'a> {
        let (token, next) = scan_at(self.input, self.pos);
        trace!(
            pos = self.pos,
            next,
            kind = %token.kind,
            literal = token.literal,
            "next_token"
        );
        self.pos = next;
        token
    }

    /// Byte offset the next scan starts from.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Scan all of `input`, including the trailing `EOF` token.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        tokens.push(token);
        if token.is_eof() {
            break;
        }
    }
    tokens
}
