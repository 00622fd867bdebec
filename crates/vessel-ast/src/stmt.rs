//! Statement nodes.

use crate::expr::Expr;
use crate::Span;

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// A statement in the parse tree.
#[derive(Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

/// The kind of statement.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// Expression statement (`expr;`). The only way a call or `=`-free
    /// assignment-like expression appears as a statement.
    Expr(Expr),
    /// Return statement (`return;` or `return expr;`)
    Return(Option<Expr>),
}
