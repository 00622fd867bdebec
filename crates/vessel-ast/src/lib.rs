// SPDX-License-Identifier: MIT
//! Syntax tree types for the Vessel language.
//!
//! This crate defines the tokens and parse-tree nodes shared between the
//! lexer, the parser, and external consumers of the tree. Nodes are built
//! bottom-up in a single parse pass and are immutable afterwards; every node
//! carries its byte span in the original source.

pub mod span;
pub mod token;
pub mod expr;
pub mod stmt;
pub mod decl;
pub mod node;

pub use span::{LineMap, Span};
pub use node::{NodeKind, NodeRef};
