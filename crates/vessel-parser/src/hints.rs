// SPDX-License-Identifier: MIT
//! Error hints - suggestions for fixing common mistakes.
//!
//! Kept separate from the main parser to avoid clutter.

use vessel_ast::token::TokenKind;

/// Get a hint for an "expected X" error based on context.
pub fn for_expected(expected: &str, found: &TokenKind) -> Option<&'static str> {
    match (expected, found) {
        // Block hints
        ("'{'", _) => Some("blocks start with '{'"),
        ("'}'", TokenKind::Eof) => Some("every '{' needs a matching '}'"),

        // Parentheses hints
        ("')'", TokenKind::Eof) => Some("add ')' to close the parenthesis"),
        ("')'", _) => None,

        // Statement terminator
        ("';'", _) => Some("end statements with ';'"),

        // Expression hints
        ("expression", TokenKind::Semi) => Some("statement is incomplete"),
        ("expression", TokenKind::Eof) => Some("expression is incomplete"),
        ("expression", _) => Some("try a value, variable, or function call"),

        // Name/identifier hints
        ("a name", TokenKind::Number(_)) => Some("names can't start with a number"),
        ("a name", _) => Some("names start with a letter or '_'"),

        // Type hints
        ("type", _) => Some("try 'void', 'number', 'string', 'bool', or a type name"),

        // Declaration hints
        ("'(' or '='", _) => Some("functions take '(params)', variables take '= value'"),
        (s, _) if s.starts_with("declaration") => {
            Some("start with a type, 'const', 'inline', 'mutex', 'shared', or '@'")
        }

        _ => None,
    }
}
