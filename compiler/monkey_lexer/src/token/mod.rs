//! Token model: the closed [`TokenKind`] set and the [`Token`] value.

use std::fmt;

/// Kind of a scanned token.
///
/// Closed set. Keyword kinds come from the reserved word table in
/// [`keywords`](crate::keywords); extend that table by adding entries, not
/// by changing how lookup works.
///
/// # Discriminant Layout
///
/// - Control and literals: 0-3
/// - Operators: 16-17
/// - Delimiters: 32-37
/// - Keywords: 64-70
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unrecognized character. The literal carries the character.
    Illegal = 0,
    /// End of input. The literal is empty.
    Eof = 1,
    /// Letter run that is not a reserved word.
    Ident = 2,
    /// Digit run.
    Int = 3,

    /// `=`
    Assign = 16,
    /// `+`
    Plus = 17,

    /// `,`
    Comma = 32,
    /// `;`
    Semicolon = 33,
    /// `(`
    LParen = 34,
    /// `)`
    RParen = 35,
    /// `{`
    LBrace = 36,
    /// `}`
    RBrace = 37,

    /// `fn`
    Function = 64,
    /// `let`
    Let = 65,
    /// `true`
    True = 66,
    /// `false`
    False = 67,
    /// `if`
    If = 68,
    /// `else`
    Else = 69,
    /// `return`
    Return = 70,
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

impl TokenKind {
    /// Upper-case name used when printing token streams.
    pub fn name(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        }
    }

    /// The fixed spelling of this kind, if it has one.
    ///
    /// `None` for kinds whose literal varies (`IDENT`, `INT`, `ILLEGAL`) and
    /// for `EOF`.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Illegal | Self::Eof | Self::Ident | Self::Int => None,
            Self::Assign => Some("="),
            Self::Plus => Some("+"),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::LBrace => Some("{"),
            Self::RBrace => Some("}"),
            Self::Function => Some("fn"),
            Self::Let => Some("let"),
            Self::True => Some("true"),
            Self::False => Some("false"),
            Self::If => Some("if"),
            Self::Else => Some("else"),
            Self::Return => Some("return"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token.
///
/// `literal` is the exact slice of the input that produced the token, so a
/// token borrows the caller's source and never the scanner itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub literal: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, literal: &'a str) -> Self {
        Self { kind, literal }
    }

    /// End-of-input token (empty literal).
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: "",
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Formats as `KIND "literal"`, the layout the CLI prints.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}
