//! Token definitions for the lexer.

use crate::Span;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Number literal, kept as source text (`12`, `3.14`).
    Number(String),
    /// Plain string literal contents (without the quotes).
    Str(String),
    /// Interpolated string literal (`$"..."`), pre-segmented by the lexer.
    InterpStr(Vec<InterpPart>),
    Bool(bool),

    // Identifier
    Ident(String),

    // Keywords
    Const,
    Mutex,
    Shared,
    Inline,
    Return,
    As,
    Void,
    NumberTy,
    StringTy,
    BoolTy,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    EqEq,
    BangEq,
    Bang,
    Eq,

    // Delimiters
    LBrace,
    RBrace,
    LParen,
    RParen,
    Comma,
    Semi,
    Dot,
    At,

    // Special
    Eof,
}

/// One part of an interpolated string literal's body.
///
/// The lexer splits `$"x={a+1}!"` into a text part, an expression part, and
/// another text part. Expression parts keep their raw source text; the parser
/// re-lexes them at `span.start` so nested errors report absolute offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpPart {
    pub kind: InterpPartKind,
    pub span: Span,
}

/// The kind of interpolated string part.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpPartKind {
    /// A run of raw text, kept verbatim (no escape processing).
    Text(String),
    /// The source text between a `{` and its matching `}`.
    Expr(String),
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            // Literals
            TokenKind::Number(_) => "a number",
            TokenKind::Str(_) => "a string",
            TokenKind::InterpStr(_) => "an interpolated string",
            TokenKind::Bool(_) => "'true' or 'false'",

            // Identifier
            TokenKind::Ident(_) => "a name",

            // Keywords
            TokenKind::Const => "'const'",
            TokenKind::Mutex => "'mutex'",
            TokenKind::Shared => "'shared'",
            TokenKind::Inline => "'inline'",
            TokenKind::Return => "'return'",
            TokenKind::As => "'as'",
            TokenKind::Void => "'void'",
            TokenKind::NumberTy => "'number'",
            TokenKind::StringTy => "'string'",
            TokenKind::BoolTy => "'bool'",

            // Operators
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::EqEq => "'=='",
            TokenKind::BangEq => "'!='",
            TokenKind::Bang => "'!'",
            TokenKind::Eq => "'='",

            // Delimiters
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Semi => "';'",
            TokenKind::Dot => "'.'",
            TokenKind::At => "'@'",

            // Special
            TokenKind::Eof => "end of file",
        }
    }
}
