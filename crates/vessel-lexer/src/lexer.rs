//! The lexer implementation using logos.

use logos::Logos;
use vessel_ast::token::{InterpPart, InterpPartKind, Token, TokenKind};
use vessel_ast::Span;

/// What went wrong inside the logos automaton. Turned into a full
/// [`LexError`] (message + span) by `tokenize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RawError {
    #[default]
    UnexpectedChar,
    UnterminatedString,
    UnterminatedInterp,
    BareBackslash,
}

/// Raw token type for logos. The `extras` field carries the base offset of
/// the source fragment being lexed, so interpolation callbacks can record
/// absolute spans even when re-lexing an embedded expression.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(extras = usize)]
#[logos(error = RawError)]
enum RawToken {
    // === Keywords ===
    #[token("const")]
    Const,
    #[token("mutex")]
    Mutex,
    #[token("shared")]
    Shared,
    #[token("inline")]
    Inline,
    #[token("return")]
    Return,
    #[token("as")]
    As,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("void")]
    Void,
    #[token("number")]
    NumberTy,
    #[token("string")]
    StringTy,
    #[token("bool")]
    BoolTy,

    // === Operators (longer first) ===
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // === Delimiters ===
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
    #[token("@")]
    At,

    // === Literals ===
    // Digits, optionally a dot and more digits. No exponent, no sign:
    // unary '-' is an operator, not part of the literal.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    // Plain string: no escapes, so the contents cannot contain '"'.
    // Lexed by callback so an unterminated string reports the offset of
    // the opening quote.
    #[token("\"", lex_string)]
    Str(String),

    // Interpolated string: '$"' switches into interpolation mode. The
    // callback scans raw-text runs and '{...}' expression fragments.
    #[token("$\"", lex_interp)]
    InterpStr(Vec<InterpPart>),

    // === Identifier (must come after keywords) ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Scan a plain string literal body after the opening quote.
fn lex_string(lex: &mut logos::Lexer<RawToken>) -> Result<String, RawError> {
    let rest = lex.remainder();
    match rest.find('"') {
        Some(i) => {
            lex.bump(i + 1);
            Ok(rest[..i].to_string())
        }
        None => {
            lex.bump(rest.len());
            Err(RawError::UnterminatedString)
        }
    }
}

/// Scan an interpolated string body after the `$"` opener.
///
/// Raw-text runs are maximal runs of characters that are none of `"`, `{`,
/// `\`. A `{` opens an expression fragment terminated by its matching `}`;
/// brace/paren nesting and nested plain strings inside the fragment are
/// tracked so an inner `}` or `)` does not close the literal early.
fn lex_interp(lex: &mut logos::Lexer<RawToken>) -> Result<Vec<InterpPart>, RawError> {
    // Absolute offset of the first body character.
    let base = lex.extras + lex.span().end;
    let rest = lex.remainder();
    let bytes = rest.as_bytes();

    let mut parts = Vec::new();
    let mut i = 0;
    let mut text_start = 0;

    let push_text = |parts: &mut Vec<InterpPart>, from: usize, to: usize| {
        if to > from {
            parts.push(InterpPart {
                kind: InterpPartKind::Text(rest[from..to].to_string()),
                span: Span::new(base + from, base + to),
            });
        }
    };

    loop {
        let Some(&b) = bytes.get(i) else {
            lex.bump(rest.len());
            return Err(RawError::UnterminatedInterp);
        };
        match b {
            b'"' => {
                push_text(&mut parts, text_start, i);
                lex.bump(i + 1);
                return Ok(parts);
            }
            b'\\' => {
                lex.bump(i + 1);
                return Err(RawError::BareBackslash);
            }
            b'{' => {
                push_text(&mut parts, text_start, i);
                let expr_start = i + 1;
                let mut j = expr_start;
                let mut depth = 0usize;
                let mut in_str = false;
                loop {
                    let Some(&c) = bytes.get(j) else {
                        lex.bump(rest.len());
                        return Err(RawError::UnterminatedInterp);
                    };
                    if in_str {
                        if c == b'"' {
                            in_str = false;
                        }
                    } else {
                        match c {
                            b'"' => in_str = true,
                            b'{' | b'(' => depth += 1,
                            b')' => depth = depth.saturating_sub(1),
                            b'}' => {
                                if depth == 0 {
                                    break;
                                }
                                depth -= 1;
                            }
                            _ => {}
                        }
                    }
                    j += 1;
                }
                parts.push(InterpPart {
                    kind: InterpPartKind::Expr(rest[expr_start..j].to_string()),
                    span: Span::new(base + expr_start, base + j),
                });
                i = j + 1;
                text_start = i;
            }
            _ => i += 1,
        }
    }
}

/// The lexer for Vessel source code.
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// Lex a fragment that starts at `offset` in some larger source. All
    /// emitted spans are shifted accordingly. Used to re-lex the expression
    /// fragments of interpolated strings.
    pub fn with_offset(source: &'a str, offset: usize) -> Self {
        Self { source, offset }
    }

    /// Tokenize the entire source. Fails on the first lexical error.
    pub fn tokenize(self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut lexer = RawToken::lexer_with_extras(self.source, self.offset);

        while let Some(result) = lexer.next() {
            let raw_span = lexer.span();
            let span = Span::new(raw_span.start + self.offset, raw_span.end + self.offset);
            match result {
                Ok(raw) => tokens.push(Token {
                    kind: convert_token(raw, lexer.slice()),
                    span,
                }),
                Err(kind) => return Err(LexError::new(kind, lexer.slice(), span)),
            }
        }

        let end = self.source.len() + self.offset;
        tokens.push(Token {
            kind: TokenKind::Eof,
            span: Span::new(end, end),
        });

        Ok(tokens)
    }
}

/// Convert a raw logos token to our TokenKind.
fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        // Keywords
        RawToken::Const => TokenKind::Const,
        RawToken::Mutex => TokenKind::Mutex,
        RawToken::Shared => TokenKind::Shared,
        RawToken::Inline => TokenKind::Inline,
        RawToken::Return => TokenKind::Return,
        RawToken::As => TokenKind::As,
        RawToken::True => TokenKind::Bool(true),
        RawToken::False => TokenKind::Bool(false),
        RawToken::Void => TokenKind::Void,
        RawToken::NumberTy => TokenKind::NumberTy,
        RawToken::StringTy => TokenKind::StringTy,
        RawToken::BoolTy => TokenKind::BoolTy,

        // Operators
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::BangEq => TokenKind::BangEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,

        // Delimiters
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semi => TokenKind::Semi,
        RawToken::Dot => TokenKind::Dot,
        RawToken::At => TokenKind::At,

        // Literals
        RawToken::Number => TokenKind::Number(slice.to_string()),
        RawToken::Str(s) => TokenKind::Str(s),
        RawToken::InterpStr(parts) => TokenKind::InterpStr(parts),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),
    }
}

/// A lexer error with location and friendly message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    pub span: Span,
    pub message: String,
    pub hint: Option<String>,
}

impl LexError {
    fn new(kind: RawError, slice: &str, span: Span) -> Self {
        match kind {
            RawError::UnexpectedChar => {
                let ch = slice.chars().next().unwrap_or('?');
                Self {
                    // Point at the offending character only.
                    span: Span::new(span.start, span.start + ch.len_utf8()),
                    message: format!("Unexpected character '{}'", ch),
                    hint: None,
                }
            }
            RawError::UnterminatedString => Self {
                span,
                message: "Unterminated string".to_string(),
                hint: Some("Add a closing '\"'".to_string()),
            },
            RawError::UnterminatedInterp => Self {
                span,
                message: "Unterminated interpolated string".to_string(),
                hint: Some("Add a closing '\"'".to_string()),
            },
            RawError::BareBackslash => Self {
                span,
                message: "'\\' is not allowed in an interpolated string".to_string(),
                hint: Some("interpolated strings have no escape sequences".to_string()),
            },
        }
    }
}
