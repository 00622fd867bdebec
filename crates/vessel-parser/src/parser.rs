// SPDX-License-Identifier: MIT
//! The parser implementation using Pratt parsing for expressions.

use vessel_ast::decl::{
    Decl, DeclKind, EventHandler, FnDecl, MutexDecl, Param, Primitive, SharedBlock, SourceFile,
    TypeSpec, TypeSpecKind, VarDecl,
};
use vessel_ast::expr::{BinOp, Expr, ExprKind, Ident, StringSegment, UnaryOp};
use vessel_ast::stmt::{Block, Stmt, StmtKind};
use vessel_ast::token::{InterpPart, InterpPartKind, Token, TokenKind};
use vessel_ast::Span;
use vessel_lexer::{LexError, Lexer};

/// Recursion limit for nested expressions. Deeper nesting fails with a
/// dedicated error instead of overflowing the stack.
const MAX_EXPR_DEPTH: usize = 128;

/// The parser for Vessel source code.
///
/// Parsing is a single synchronous pass; the first error aborts it.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Current expression nesting depth, bounded by MAX_EXPR_DEPTH.
    expr_depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_depth(tokens, 0)
    }

    /// Parser for an interpolation fragment, continuing at the nesting
    /// depth of the enclosing expression so the recursion limit bounds the
    /// whole parse, not each fragment separately.
    fn with_depth(tokens: Vec<Token>, expr_depth: usize) -> Self {
        Self { tokens, pos: 0, expr_depth }
    }

    // =========================================================================
    // Token Navigation
    // =========================================================================

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| self.tokens.last().unwrap())
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn advance(&mut self) -> &Token {
        if !self.at_end() {
            self.pos += 1;
        }
        self.tokens.get(self.pos - 1).unwrap()
    }

    /// End offset of the last consumed token.
    fn prev_end(&self) -> usize {
        self.tokens[self.pos.saturating_sub(1)].span.end
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(
                kind.display_name(),
                self.current_kind(),
                self.current().span,
            ))
        }
    }

    fn expect_ident(&mut self) -> Result<Ident, ParseError> {
        match self.current_kind().clone() {
            TokenKind::Ident(name) => {
                let span = self.current().span;
                self.advance();
                Ok(Ident { name, span })
            }
            _ => Err(ParseError::expected(
                "a name",
                self.current_kind(),
                self.current().span,
            )),
        }
    }

    // =========================================================================
    // Top-Level Parsing
    // =========================================================================

    /// Parse a whole source file: zero or more declarations, then EOF.
    pub fn parse(&mut self) -> Result<SourceFile, ParseError> {
        let mut decls = Vec::new();
        while !self.at_end() {
            decls.push(self.parse_decl()?);
        }
        let end = self.current().span.end;
        Ok(SourceFile { decls, span: Span::new(0, end) })
    }

    fn parse_decl(&mut self) -> Result<Decl, ParseError> {
        let start = self.current().span.start;

        let kind = match self.current_kind() {
            TokenKind::At => self.parse_event_handler()?,
            TokenKind::Mutex => self.parse_mutex_decl()?,
            TokenKind::Shared => self.parse_shared_block()?,
            TokenKind::Const => {
                self.advance();
                let ty = self.parse_type_spec()?;
                let name = self.expect_ident()?;
                self.parse_var_tail(true, ty, name)?
            }
            TokenKind::Inline => DeclKind::Fn(self.parse_fn_decl()?),
            TokenKind::Void
            | TokenKind::NumberTy
            | TokenKind::StringTy
            | TokenKind::BoolTy
            | TokenKind::Ident(_) => {
                // Both functions and variables start `type name`; the next
                // token decides which one this is.
                let ty = self.parse_type_spec()?;
                let name = self.expect_ident()?;
                match self.current_kind() {
                    TokenKind::LParen => {
                        DeclKind::Fn(self.parse_fn_tail(false, ty, name, start)?)
                    }
                    TokenKind::Eq => self.parse_var_tail(false, ty, name)?,
                    _ => {
                        return Err(ParseError::expected(
                            "'(' or '='",
                            self.current_kind(),
                            self.current().span,
                        ));
                    }
                }
            }
            _ => {
                return Err(ParseError::expected(
                    "declaration (function, variable, '@' handler, mutex, shared)",
                    self.current_kind(),
                    self.current().span,
                ));
            }
        };

        Ok(Decl { kind, span: Span::new(start, self.prev_end()) })
    }

    /// `@name` followed by a function declaration.
    fn parse_event_handler(&mut self) -> Result<DeclKind, ParseError> {
        self.expect(&TokenKind::At)?;
        let decorator = self.expect_ident()?;
        let func = self.parse_fn_decl()?;
        Ok(DeclKind::EventHandler(EventHandler { decorator, func }))
    }

    /// `mutex name;`
    fn parse_mutex_decl(&mut self) -> Result<DeclKind, ParseError> {
        self.expect(&TokenKind::Mutex)?;
        let name = self.expect_ident()?;
        self.expect(&TokenKind::Semi)?;
        Ok(DeclKind::Mutex(MutexDecl { name }))
    }

    /// `shared ( name ) { ... }`
    ///
    /// Whether the name refers to a declared mutex is not checked here.
    fn parse_shared_block(&mut self) -> Result<DeclKind, ParseError> {
        self.expect(&TokenKind::Shared)?;
        self.expect(&TokenKind::LParen)?;
        let mutex = self.expect_ident()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(DeclKind::Shared(SharedBlock { mutex, body }))
    }

    /// A full function declaration, including its optional `inline`.
    fn parse_fn_decl(&mut self) -> Result<FnDecl, ParseError> {
        let start = self.current().span.start;
        let is_inline = self.match_token(&TokenKind::Inline);
        let ret_ty = self.parse_type_spec()?;
        let name = self.expect_ident()?;
        self.parse_fn_tail(is_inline, ret_ty, name, start)
    }

    /// Parameter list and body, after `type name` has been consumed.
    fn parse_fn_tail(
        &mut self,
        is_inline: bool,
        ret_ty: TypeSpec,
        name: Ident,
        start: usize,
    ) -> Result<FnDecl, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;
        let span = Span::new(start, body.span.end);
        Ok(FnDecl { is_inline, ret_ty, name, params, body, span })
    }

    /// Zero parameters, or one or more `type name` pairs. No trailing comma.
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                let ty = self.parse_type_spec()?;
                let name = self.expect_ident()?;
                let span = ty.span.to(name.span);
                params.push(Param { ty, name, span });
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        Ok(params)
    }

    /// `= value ;` after `const? type name`.
    fn parse_var_tail(
        &mut self,
        is_const: bool,
        ty: TypeSpec,
        name: Ident,
    ) -> Result<DeclKind, ParseError> {
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_expr()?;
        self.expect(&TokenKind::Semi)?;
        Ok(DeclKind::Var(VarDecl { is_const, ty, name, value }))
    }

    /// One of the four primitive keywords, or any identifier naming a user
    /// type. The parser cannot tell a valid user type from a typo.
    fn parse_type_spec(&mut self) -> Result<TypeSpec, ParseError> {
        let span = self.current().span;
        let kind = match self.current_kind() {
            TokenKind::Void => TypeSpecKind::Primitive(Primitive::Void),
            TokenKind::NumberTy => TypeSpecKind::Primitive(Primitive::Number),
            TokenKind::StringTy => TypeSpecKind::Primitive(Primitive::String),
            TokenKind::BoolTy => TypeSpecKind::Primitive(Primitive::Bool),
            TokenKind::Ident(name) => TypeSpecKind::Named(name.clone()),
            _ => {
                return Err(ParseError::expected(
                    "type",
                    self.current_kind(),
                    self.current().span,
                ));
            }
        };
        self.advance();
        Ok(TypeSpec { kind, span })
    }

    // =========================================================================
    // Statement Parsing
    // =========================================================================

    /// `{`, zero or more statements, `}`.
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start = self.current().span.start;
        self.expect(&TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.at_end() {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(&TokenKind::RBrace)?;
        Ok(Block { stmts, span: Span::new(start, self.prev_end()) })
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current().span.start;
        if self.match_token(&TokenKind::Return) {
            // `return;` is a void return.
            let value = if self.check(&TokenKind::Semi) {
                None
            } else {
                Some(self.parse_expr()?)
            };
            self.expect(&TokenKind::Semi)?;
            return Ok(Stmt {
                kind: StmtKind::Return(value),
                span: Span::new(start, self.prev_end()),
            });
        }

        let expr = self.parse_expr()?;
        self.expect(&TokenKind::Semi)?;
        Ok(Stmt { kind: StmtKind::Expr(expr), span: Span::new(start, self.prev_end()) })
    }

    // =========================================================================
    // Expression Parsing
    // =========================================================================

    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_bp(0)
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        self.expr_depth += 1;
        if self.expr_depth > MAX_EXPR_DEPTH {
            self.expr_depth -= 1;
            return Err(ParseError {
                span: self.current().span,
                message: "Expression is too deeply nested".to_string(),
                hint: Some("split it into simpler sub-expressions".to_string()),
            });
        }
        let result = self.parse_expr_bp_inner(min_bp);
        self.expr_depth -= 1;
        result
    }

    fn parse_expr_bp_inner(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let start = self.current().span.start;
        let mut lhs = self.parse_prefix()?;

        loop {
            // Postfix `.field` and `(args)` bind tighter than everything
            // else and chain left-to-right.
            if let Some(bp) = self.postfix_bp() {
                if bp < min_bp {
                    break;
                }
                lhs = self.parse_postfix(lhs, start)?;
                continue;
            }

            if let Some((l_bp, r_bp)) = self.infix_bp() {
                if l_bp < min_bp {
                    break;
                }
                let op = self.parse_binop()?;
                let rhs = self.parse_expr_bp(r_bp)?;
                let end = rhs.span.end;
                lhs = Expr {
                    kind: ExprKind::Binary { op, left: Box::new(lhs), right: Box::new(rhs) },
                    span: Span::new(start, end),
                };
                continue;
            }

            break;
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let start = self.current().span.start;

        match self.current_kind().clone() {
            TokenKind::Number(text) => {
                self.advance();
                Ok(Expr { kind: ExprKind::Number(text), span: Span::new(start, self.prev_end()) })
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(Expr { kind: ExprKind::Str(s), span: Span::new(start, self.prev_end()) })
            }
            TokenKind::InterpStr(parts) => {
                self.advance();
                let span = Span::new(start, self.prev_end());
                let segments = self.parse_interp_parts(parts)?;
                Ok(Expr { kind: ExprKind::Interpolated(segments), span })
            }
            TokenKind::Bool(b) => {
                self.advance();
                Ok(Expr { kind: ExprKind::Bool(b), span: Span::new(start, self.prev_end()) })
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr { kind: ExprKind::Ident(name), span: Span::new(start, self.prev_end()) })
            }
            // Type keywords double as plain names in expression position,
            // most commonly on the right of `as`.
            TokenKind::Void | TokenKind::NumberTy | TokenKind::StringTy | TokenKind::BoolTy => {
                let name = match self.current_kind() {
                    TokenKind::Void => "void",
                    TokenKind::NumberTy => "number",
                    TokenKind::StringTy => "string",
                    _ => "bool",
                };
                self.advance();
                Ok(Expr {
                    kind: ExprKind::Ident(name.to_string()),
                    span: Span::new(start, self.prev_end()),
                })
            }
            TokenKind::LParen => {
                self.advance();
                // Parentheses reset precedence to lowest.
                let inner = self.parse_expr_bp(0)?;
                self.expect(&TokenKind::RParen)?;
                Ok(Expr {
                    kind: ExprKind::Paren(Box::new(inner)),
                    span: Span::new(start, self.prev_end()),
                })
            }
            TokenKind::Bang => {
                self.advance();
                let operand = self.parse_expr_bp(Self::PREFIX_BP)?;
                let end = operand.span.end;
                Ok(Expr {
                    kind: ExprKind::Unary { op: UnaryOp::Not, operand: Box::new(operand) },
                    span: Span::new(start, end),
                })
            }
            TokenKind::Minus => {
                self.advance();
                let operand = self.parse_expr_bp(Self::PREFIX_BP)?;
                let end = operand.span.end;
                Ok(Expr {
                    kind: ExprKind::Unary { op: UnaryOp::Neg, operand: Box::new(operand) },
                    span: Span::new(start, end),
                })
            }
            _ => Err(ParseError::expected(
                "expression",
                self.current_kind(),
                self.current().span,
            )),
        }
    }

    fn parse_postfix(&mut self, lhs: Expr, start: usize) -> Result<Expr, ParseError> {
        if self.match_token(&TokenKind::Dot) {
            let field = self.expect_ident()?;
            let span = Span::new(start, field.span.end);
            return Ok(Expr {
                kind: ExprKind::Member { object: Box::new(lhs), field },
                span,
            });
        }

        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;
        Ok(Expr {
            kind: ExprKind::Call { callee: Box::new(lhs), args },
            span: Span::new(start, self.prev_end()),
        })
    }

    /// Expand a pre-segmented interpolated string token: raw parts are kept
    /// verbatim, expression parts are re-lexed at their absolute offset and
    /// must parse as exactly one expression.
    fn parse_interp_parts(
        &mut self,
        parts: Vec<InterpPart>,
    ) -> Result<Vec<StringSegment>, ParseError> {
        let mut segments = Vec::new();
        for part in parts {
            match part.kind {
                InterpPartKind::Text(text) => {
                    segments.push(StringSegment::Text { text, span: part.span });
                }
                InterpPartKind::Expr(text) => {
                    let tokens = Lexer::with_offset(&text, part.span.start)
                        .tokenize()
                        .map_err(ParseError::from_lex)?;
                    let mut sub = Parser::with_depth(tokens, self.expr_depth);
                    let expr = sub.parse_expr()?;
                    if !sub.at_end() {
                        return Err(ParseError::expected(
                            "'}'",
                            sub.current_kind(),
                            sub.current().span,
                        ));
                    }
                    segments.push(StringSegment::Expr(expr));
                }
            }
        }
        Ok(segments)
    }

    // =========================================================================
    // Operator Precedence
    // =========================================================================

    // The ladder, loosest to tightest: `== !=` < `+ -` < `* /` < unary
    // `! -` < `as` < `.`/call. The levels below comparison (assignment,
    // ternary, logical or/and) are reserved and have no operators wired in.
    const PREFIX_BP: u8 = 7;

    fn postfix_bp(&self) -> Option<u8> {
        match self.current_kind() {
            TokenKind::Dot | TokenKind::LParen => Some(11),
            _ => None,
        }
    }

    fn infix_bp(&self) -> Option<(u8, u8)> {
        match self.current_kind() {
            TokenKind::EqEq | TokenKind::BangEq => Some((1, 2)),
            TokenKind::Plus | TokenKind::Minus => Some((3, 4)),
            TokenKind::Star | TokenKind::Slash => Some((5, 6)),
            TokenKind::As => Some((9, 10)),
            _ => None,
        }
    }

    fn parse_binop(&mut self) -> Result<BinOp, ParseError> {
        let op = match self.current_kind() {
            TokenKind::EqEq => BinOp::Eq,
            TokenKind::BangEq => BinOp::Ne,
            TokenKind::Plus => BinOp::Add,
            TokenKind::Minus => BinOp::Sub,
            TokenKind::Star => BinOp::Mul,
            TokenKind::Slash => BinOp::Div,
            TokenKind::As => BinOp::As,
            _ => {
                return Err(ParseError::expected(
                    "operator like '+' or '-'",
                    self.current_kind(),
                    self.current().span,
                ));
            }
        };
        self.advance();
        Ok(op)
    }
}

/// A parser error with location and friendly message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub span: Span,
    pub message: String,
    pub hint: Option<String>,
}

impl ParseError {
    fn expected(expected: &str, found: &TokenKind, span: Span) -> Self {
        let message = format_expected_message(expected, found);
        let hint = crate::hints::for_expected(expected, found).map(String::from);
        Self { span, message, hint }
    }

    fn from_lex(e: LexError) -> Self {
        Self { span: e.span, message: e.message, hint: e.hint }
    }
}

/// Format a user-friendly "expected X, found Y" message.
fn format_expected_message(expected: &str, found: &TokenKind) -> String {
    match expected {
        "';'" => format!("Expected ';' after statement, found {}", found.display_name()),
        "'{'" => format!("Expected '{{' to start block, found {}", found.display_name()),
        "'}'" => format!("Expected '}}' to close block, found {}", found.display_name()),
        "')'" => {
            if matches!(found, TokenKind::Eof) {
                "Unclosed '(' - missing ')'".to_string()
            } else {
                format!("Expected ')', found {}", found.display_name())
            }
        }
        "a name" => format!("Expected name, found {}", found.display_name()),
        "expression" => format!("Expected expression, found {}", found.display_name()),
        "type" => format!("Expected type, found {}", found.display_name()),
        "declaration (function, variable, '@' handler, mutex, shared)" => {
            format!("Expected declaration, found {}", found.display_name())
        }
        _ => format!("Expected {}, found {}", expected, found.display_name()),
    }
}
