//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser cursor and the top-level `parse` loop.
//! Grammar rules are free functions in `expr`, `stmt` and `types` that
//! take the parser by mutable reference and return either a node or a
//! diagnostic.

use std::rc::Rc;

use crate::{
    ast::ast::Expr,
    errors::errors::{Diagnostic, DiagnosticKind},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{lookups::SYNC_KEYWORDS, stmt::parse_expr};

/// Grammar rules return boxed diagnostics so that every frame of the
/// recursive descent stays small.
pub type ParseResult<T> = Result<T, Box<Diagnostic>>;

/// How many expressions and prefix operators may enclose one another.
pub const MAX_NESTING_DEPTH: usize = 32;

/// The parsing state: a read-only token stream and a cursor into it.
pub struct Parser<'a> {
    /// The list of tokens to parse
    tokens: &'a [Token],
    /// Raw source lines, used for diagnostic excerpts
    lines: &'a [String],
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// How many function bodies enclose the cursor
    fn_depth: usize,
    /// How many expressions are being parsed around the cursor
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], lines: &'a [String], file: Rc<String>) -> Self {
        Parser {
            tokens,
            lines,
            pos: 0,
            file,
            fn_depth: 0,
            depth: 0,
        }
    }

    /// Returns the current token without advancing, `None` at end of input.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// The most recently consumed token.
    pub fn previous_token(&self) -> Option<&'a Token> {
        self.pos
            .checked_sub(1)
            .and_then(|previous| self.tokens.get(previous))
    }

    /// Advances to the next token and returns the one just consumed.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current_token();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    pub fn check_any(&self, kinds: &[TokenKind]) -> bool {
        self.current_token()
            .is_some_and(|token| token.is_one_of_many(kinds))
    }

    /// Consumes the current token if it is one of `kinds`.
    pub fn match_kinds(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if self.check_any(kinds) {
            self.advance()
        } else {
            None
        }
    }

    /// Consumes a token of one of `kinds` or reports what was found instead.
    pub fn expect_one_of(&mut self, kinds: &[TokenKind]) -> ParseResult<&'a Token> {
        match self.match_kinds(kinds) {
            Some(token) => Ok(token),
            None => Err(self.unexpected_token(kinds)),
        }
    }

    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<&'a Token> {
        self.expect_one_of(&[kind])
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Snapshot of the cursor for speculative parsing.
    pub fn save(&self) -> usize {
        self.pos
    }

    pub fn restore(&mut self, saved: usize) {
        self.pos = saved;
    }

    pub fn in_fn(&self) -> bool {
        self.fn_depth > 0
    }

    pub fn enter_fn(&mut self) {
        self.fn_depth += 1;
    }

    pub fn exit_fn(&mut self) {
        self.fn_depth = self.fn_depth.saturating_sub(1);
    }

    /// Steps one level deeper, failing at the current token once
    /// `MAX_NESTING_DEPTH` is reached. Every successful call is paired with
    /// `exit_nesting`.
    pub fn enter_nesting(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_here(DiagnosticKind::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Position just past the last consumed token, used when input runs out.
    fn end_of_input_position(&self) -> Position {
        match self.previous_token() {
            Some(token) => Position::new(token.line, token.end_col()),
            None => Position::start(),
        }
    }

    fn source_line(&self, line: u32) -> String {
        (line as usize)
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .cloned()
            .unwrap_or_default()
    }

    /// Builds a diagnostic anchored at `position`.
    pub fn error_at(&self, kind: DiagnosticKind, position: Position) -> Box<Diagnostic> {
        Box::new(Diagnostic::new(
            kind,
            Rc::clone(&self.file),
            position,
            self.source_line(position.line),
        ))
    }

    /// Builds a diagnostic anchored at the current token, or just past the
    /// last token at end of input.
    pub fn error_here(&self, kind: DiagnosticKind) -> Box<Diagnostic> {
        let position = match self.current_token() {
            Some(token) => token.position(),
            None => self.end_of_input_position(),
        };
        self.error_at(kind, position)
    }

    pub fn unexpected_token(&self, expected: &[TokenKind]) -> Box<Diagnostic> {
        self.error_here(DiagnosticKind::UnexpectedToken {
            expected: expected.to_vec(),
            got: self.current_token().cloned(),
        })
    }

    /// Skips past a malformed statement.
    ///
    /// Always consumes one token, then stops *at* the next statement
    /// keyword or at end of input.
    pub fn synchronize(&mut self) {
        let start = self.pos;
        self.advance();

        while self.has_tokens() && !self.check_any(SYNC_KEYWORDS) {
            self.advance();
        }

        tracing::trace!(from = start, to = self.pos, "synchronized after syntax error");
    }
}

/// Parses a token stream into its top-level expressions.
///
/// Parsing continues after errors: each malformed top-level statement
/// yields one diagnostic and the parser resynchronises. If any diagnostic
/// was recorded, all of them are returned instead of the tree.
pub fn parse(
    tokens: &[Token],
    lines: &[String],
    file: Rc<String>,
) -> Result<Vec<Expr>, Vec<Diagnostic>> {
    let mut parser = Parser::new(tokens, lines, file);

    let mut body = vec![];
    let mut errors = vec![];

    while parser.has_tokens() {
        match parse_expr(&mut parser) {
            Ok(expr) => body.push(expr),
            Err(error) => {
                errors.push(*error);
                parser.synchronize();
            }
        }
    }

    tracing::debug!(
        exprs = body.len(),
        errors = errors.len(),
        "parsed {} tokens",
        tokens.len()
    );

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(body)
}
