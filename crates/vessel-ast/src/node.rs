// SPDX-License-Identifier: MIT
//! Generic tree-query surface for external consumers.
//!
//! The parse tree itself is plain structs with named fields; bindings that
//! cannot use the static types walk the tree through [`NodeRef`] instead:
//! every node exposes its kind tag, its source span, and its ordered
//! children.

use crate::decl::{Decl, DeclKind, FnDecl, Param, SourceFile, TypeSpec};
use crate::expr::{Expr, ExprKind, Ident, StringSegment};
use crate::stmt::{Block, Stmt, StmtKind};
use crate::Span;

/// The kind tag of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    SourceFile,
    FunctionDeclaration,
    Parameter,
    VariableDeclaration,
    EventHandler,
    MutexDeclaration,
    SharedBlock,
    Block,
    ExpressionStatement,
    ReturnStatement,
    Identifier,
    NumberLiteral,
    StringLiteral,
    InterpolatedString,
    RawText,
    BoolLiteral,
    Parenthesized,
    Unary,
    Binary,
    Member,
    Call,
    TypeSpecifier,
}

/// A borrowed view of any node in the tree.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    SourceFile(&'a SourceFile),
    Decl(&'a Decl),
    Fn(&'a FnDecl),
    Param(&'a Param),
    Block(&'a Block),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Segment(&'a StringSegment),
    TypeSpec(&'a TypeSpec),
    Ident(&'a Ident),
}

impl<'a> NodeRef<'a> {
    /// The node's kind tag.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::SourceFile(_) => NodeKind::SourceFile,
            NodeRef::Decl(d) => match &d.kind {
                DeclKind::Fn(_) => NodeKind::FunctionDeclaration,
                DeclKind::Var(_) => NodeKind::VariableDeclaration,
                DeclKind::EventHandler(_) => NodeKind::EventHandler,
                DeclKind::Mutex(_) => NodeKind::MutexDeclaration,
                DeclKind::Shared(_) => NodeKind::SharedBlock,
            },
            NodeRef::Fn(_) => NodeKind::FunctionDeclaration,
            NodeRef::Param(_) => NodeKind::Parameter,
            NodeRef::Block(_) => NodeKind::Block,
            NodeRef::Stmt(s) => match &s.kind {
                StmtKind::Expr(_) => NodeKind::ExpressionStatement,
                StmtKind::Return(_) => NodeKind::ReturnStatement,
            },
            NodeRef::Expr(e) => match &e.kind {
                ExprKind::Ident(_) => NodeKind::Identifier,
                ExprKind::Number(_) => NodeKind::NumberLiteral,
                ExprKind::Str(_) => NodeKind::StringLiteral,
                ExprKind::Interpolated(_) => NodeKind::InterpolatedString,
                ExprKind::Bool(_) => NodeKind::BoolLiteral,
                ExprKind::Paren(_) => NodeKind::Parenthesized,
                ExprKind::Unary { .. } => NodeKind::Unary,
                ExprKind::Binary { .. } => NodeKind::Binary,
                ExprKind::Member { .. } => NodeKind::Member,
                ExprKind::Call { .. } => NodeKind::Call,
            },
            NodeRef::Segment(seg) => match seg {
                StringSegment::Text { .. } => NodeKind::RawText,
                StringSegment::Expr(e) => NodeRef::Expr(e).kind(),
            },
            NodeRef::TypeSpec(_) => NodeKind::TypeSpecifier,
            NodeRef::Ident(_) => NodeKind::Identifier,
        }
    }

    /// The node's source span.
    pub fn span(&self) -> Span {
        match self {
            NodeRef::SourceFile(f) => f.span,
            NodeRef::Decl(d) => d.span,
            NodeRef::Fn(f) => f.span,
            NodeRef::Param(p) => p.span,
            NodeRef::Block(b) => b.span,
            NodeRef::Stmt(s) => s.span,
            NodeRef::Expr(e) => e.span,
            NodeRef::Segment(seg) => match seg {
                StringSegment::Text { span, .. } => *span,
                StringSegment::Expr(e) => e.span,
            },
            NodeRef::TypeSpec(t) => t.span,
            NodeRef::Ident(i) => i.span,
        }
    }

    /// The node's direct children, in source order.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match self {
            NodeRef::SourceFile(f) => f.decls.iter().map(NodeRef::Decl).collect(),
            NodeRef::Decl(d) => match &d.kind {
                DeclKind::Fn(f) => NodeRef::Fn(f).children(),
                DeclKind::Var(v) => vec![
                    NodeRef::TypeSpec(&v.ty),
                    NodeRef::Ident(&v.name),
                    NodeRef::Expr(&v.value),
                ],
                DeclKind::EventHandler(h) => {
                    vec![NodeRef::Ident(&h.decorator), NodeRef::Fn(&h.func)]
                }
                DeclKind::Mutex(m) => vec![NodeRef::Ident(&m.name)],
                DeclKind::Shared(s) => {
                    vec![NodeRef::Ident(&s.mutex), NodeRef::Block(&s.body)]
                }
            },
            NodeRef::Fn(f) => {
                let mut out = vec![NodeRef::TypeSpec(&f.ret_ty), NodeRef::Ident(&f.name)];
                out.extend(f.params.iter().map(NodeRef::Param));
                out.push(NodeRef::Block(&f.body));
                out
            }
            NodeRef::Param(p) => vec![NodeRef::TypeSpec(&p.ty), NodeRef::Ident(&p.name)],
            NodeRef::Block(b) => b.stmts.iter().map(NodeRef::Stmt).collect(),
            NodeRef::Stmt(s) => match &s.kind {
                StmtKind::Expr(e) => vec![NodeRef::Expr(e)],
                StmtKind::Return(Some(e)) => vec![NodeRef::Expr(e)],
                StmtKind::Return(None) => vec![],
            },
            NodeRef::Expr(e) => match &e.kind {
                ExprKind::Ident(_)
                | ExprKind::Number(_)
                | ExprKind::Str(_)
                | ExprKind::Bool(_) => vec![],
                ExprKind::Interpolated(segments) => {
                    segments.iter().map(NodeRef::Segment).collect()
                }
                ExprKind::Paren(inner) => vec![NodeRef::Expr(inner)],
                ExprKind::Unary { operand, .. } => vec![NodeRef::Expr(operand)],
                ExprKind::Binary { left, right, .. } => {
                    vec![NodeRef::Expr(left), NodeRef::Expr(right)]
                }
                ExprKind::Member { object, field } => {
                    vec![NodeRef::Expr(object), NodeRef::Ident(field)]
                }
                ExprKind::Call { callee, args } => {
                    let mut out = vec![NodeRef::Expr(callee)];
                    out.extend(args.iter().map(NodeRef::Expr));
                    out
                }
            },
            NodeRef::Segment(seg) => match seg {
                StringSegment::Text { .. } => vec![],
                StringSegment::Expr(e) => NodeRef::Expr(e).children(),
            },
            NodeRef::TypeSpec(_) | NodeRef::Ident(_) => vec![],
        }
    }
}
