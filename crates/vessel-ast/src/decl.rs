// SPDX-License-Identifier: MIT
//! Declaration nodes.

use crate::expr::{Expr, Ident};
use crate::stmt::Block;
use crate::Span;

/// A parsed source file: zero or more top-level declarations.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub decls: Vec<Decl>,
    pub span: Span,
}

/// A declaration.
#[derive(Debug, Clone)]
pub struct Decl {
    pub kind: DeclKind,
    pub span: Span,
}

/// The kind of declaration.
#[derive(Debug, Clone)]
pub enum DeclKind {
    /// Function declaration
    Fn(FnDecl),
    /// Typed variable declaration
    Var(VarDecl),
    /// `@decorator` followed by a function declaration
    EventHandler(EventHandler),
    /// `mutex name;`
    Mutex(MutexDecl),
    /// `shared (name) { ... }`
    Shared(SharedBlock),
}

/// A function declaration.
#[derive(Debug, Clone)]
pub struct FnDecl {
    pub is_inline: bool,
    pub ret_ty: TypeSpec,
    pub name: Ident,
    pub params: Vec<Param>,
    pub body: Block,
    pub span: Span,
}

/// A function parameter (`type name`).
#[derive(Debug, Clone)]
pub struct Param {
    pub ty: TypeSpec,
    pub name: Ident,
    pub span: Span,
}

/// A variable declaration (`const? type name = value;`).
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub is_const: bool,
    pub ty: TypeSpec,
    pub name: Ident,
    pub value: Expr,
}

/// An event handler: a decorated function declaration.
///
/// The decorator name is any identifier; it carries no meaning at the
/// syntax level.
#[derive(Debug, Clone)]
pub struct EventHandler {
    pub decorator: Ident,
    pub func: FnDecl,
}

/// A mutex declaration.
#[derive(Debug, Clone)]
pub struct MutexDecl {
    pub name: Ident,
}

/// A block guarded by a named mutex. Whether the name refers to a declared
/// mutex is a semantic question, not checked here.
#[derive(Debug, Clone)]
pub struct SharedBlock {
    pub mutex: Ident,
    pub body: Block,
}

/// A type specifier: one of the four primitive keywords, or any identifier
/// naming a user type.
#[derive(Debug, Clone)]
pub struct TypeSpec {
    pub kind: TypeSpecKind,
    pub span: Span,
}

/// The kind of type specifier.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeSpecKind {
    Primitive(Primitive),
    Named(String),
}

/// The primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Void,
    Number,
    String,
    Bool,
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Void => "void",
            Primitive::Number => "number",
            Primitive::String => "string",
            Primitive::Bool => "bool",
        }
    }
}
