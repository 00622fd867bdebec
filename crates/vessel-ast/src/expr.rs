// SPDX-License-Identifier: MIT
//! Expression nodes.

use crate::Span;

/// An identifier with its source span.
///
/// The grammar distinguishes variable names, function names, parameter
/// names, type names, and field names only by where they appear; all of
/// them are this one payload type held in a distinctly-named parent field.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

/// An expression in the parse tree.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// The kind of expression.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// Identifier
    Ident(String),
    /// Number literal, kept as source text
    Number(String),
    /// Plain string literal (contents without quotes)
    Str(String),
    /// Interpolated string literal (`$"x={a+1}!"`)
    Interpolated(Vec<StringSegment>),
    /// Boolean literal
    Bool(bool),
    /// Parenthesized expression
    Paren(Box<Expr>),
    /// Unary operation
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// Binary operation
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Field access (`object.field`)
    Member {
        object: Box<Expr>,
        field: Ident,
    },
    /// Function call (`callee(args)`)
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

/// One segment of an interpolated string literal.
#[derive(Debug, Clone)]
pub enum StringSegment {
    /// Raw text, verbatim (the sub-grammar has no escapes).
    Text { text: String, span: Span },
    /// An embedded `{ ... }` expression.
    Expr(Expr),
}

/// Binary operators, lowest to highest precedence.
///
/// `As` is the cast-shaped operator; its right-hand side is an ordinary
/// expression, typically an identifier naming a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Eq,
    Ne,
    Add,
    Sub,
    Mul,
    Div,
    As,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical not (!)
    Not,
    /// Negation (-)
    Neg,
}
