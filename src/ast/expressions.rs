use crate::lexer::tokens::{Token, TokenKind};

use super::ast::Expr;

// LITERALS

/// Literal Expression
/// Represents an integer, float, string, `nil` or identifier in the AST.
///
/// String literals hold their unescaped contents.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: String,
    pub kind: TokenKind,
}

impl LiteralExpr {
    pub fn new(value: String, kind: TokenKind) -> Self {
        debug_assert!(kind.is_literal(), "{:?} is not a literal kind", kind);
        LiteralExpr { value, kind }
    }

    pub fn nil() -> Self {
        LiteralExpr {
            value: String::from("nil"),
            kind: TokenKind::Nil,
        }
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }
}

// COMPLEX

/// Binary Expression
/// Represents an arithmetic or comparison operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        debug_assert!(
            operator.kind.is_binary_operator(),
            "{:?} is not a binary operator",
            operator.kind
        );
        BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

/// Unary Expression
/// Represents a prefix `-` or `!`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub right: Box<Expr>,
}

impl UnaryExpr {
    pub fn new(operator: Token, right: Expr) -> Self {
        debug_assert!(
            operator.kind.is_unary_operator(),
            "{:?} is not a prefix operator",
            operator.kind
        );
        UnaryExpr {
            operator,
            right: Box::new(right),
        }
    }
}

/// Grouping Expression
/// A parenthesised expression. Renders as its inner expression.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
}

impl GroupingExpr {
    pub fn new(inner: Expr) -> Self {
        GroupingExpr {
            inner: Box::new(inner),
        }
    }
}

/// Assignment Expression
/// `name = value`, where the target is always a plain identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub name: String,
    pub value: Box<Expr>,
}

impl AssignmentExpr {
    pub fn new(name: String, value: Expr) -> Self {
        AssignmentExpr {
            name,
            value: Box::new(value),
        }
    }
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
}

impl CallExpr {
    pub fn new(callee: Expr, args: Vec<Expr>) -> Self {
        CallExpr {
            callee: Box::new(callee),
            args,
        }
    }
}
