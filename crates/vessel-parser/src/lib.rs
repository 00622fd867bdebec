//! Parser for the Vessel language.
//!
//! Transforms source text into a parse tree. [`parse`] is the single entry
//! point: it lexes and parses in one synchronous pass and returns either a
//! complete [`SourceFile`] or the first error encountered.

mod hints;
mod parser;

pub use parser::{ParseError, Parser};

use vessel_ast::decl::SourceFile;
use vessel_ast::Span;
use vessel_lexer::{LexError, Lexer};

/// A syntax error: either lexical (bad character, unterminated literal) or
/// structural (unexpected token, missing token). Carries enough to render a
/// caret diagnostic.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(e) => e.span,
            SyntaxError::Parse(e) => e.span,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SyntaxError::Lex(e) => &e.message,
            SyntaxError::Parse(e) => &e.message,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            SyntaxError::Lex(e) => e.hint.as_deref(),
            SyntaxError::Parse(e) => e.hint.as_deref(),
        }
    }
}

/// Parse a Vessel source file.
pub fn parse(source: &str) -> Result<SourceFile, SyntaxError> {
    let tokens = Lexer::new(source).tokenize()?;
    let file = Parser::new(tokens).parse()?;
    Ok(file)
}
