//! Scanner for the Monkey language.
//!
//! Turns source text into a stream of [`Token`]s: single-character
//! punctuation, identifiers and keywords, integer literals, and `EOF`.
//! Whitespace is skipped. Anything else comes out as an `ILLEGAL` token;
//! scanning never fails.
//!
//! ```
//! use monkey_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! assert_eq!(scanner.next_token().literal, "five");
//! ```
//!
//! # Crate layout
//!
//! - [`cursor`]: byte cursor with an explicit end-of-input check
//! - [`token`]: [`Token`] and the closed [`TokenKind`] set
//! - [`keywords`]: reserved word table
//! - [`scanner`]: the stateful [`Scanner`] and the pure [`scan_at`]
//! - [`balance`]: delimiter matching over a token stream

pub mod balance;
pub mod cursor;
pub mod keywords;
pub mod scanner;
pub mod token;

pub use balance::{check_balance, Balance, DelimiterStack};
pub use cursor::Cursor;
pub use scanner::{is_digit, is_letter, is_whitespace, scan_at, tokenize, Scanner};
pub use token::{Token, TokenKind};
