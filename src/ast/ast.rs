use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    expressions::{AssignmentExpr, BinaryExpr, CallExpr, GroupingExpr, LiteralExpr, UnaryExpr},
    statements::{FnExpr, IfExpr, ReturnExpr, VarDeclExpr, WhileExpr},
    types::TypeAnnotation,
    visitor::{SExprPrinter, Visitor},
};

/// Expression Types
///
/// A fieldless tag for each kind of expression in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Binary,
    Unary,
    Literal,
    Grouping,
    Assignment,
    VarDecl,
    If,
    While,
    Fn,
    Call,
    Return,
}

/// Every syntactic form of the language. The tree owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Literal(LiteralExpr),
    Grouping(GroupingExpr),
    Assignment(AssignmentExpr),
    VarDecl(VarDeclExpr),
    If(IfExpr),
    While(WhileExpr),
    Fn(FnExpr),
    Call(CallExpr),
    Return(ReturnExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Binary(_) => ExprType::Binary,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Literal(_) => ExprType::Literal,
            Expr::Grouping(_) => ExprType::Grouping,
            Expr::Assignment(_) => ExprType::Assignment,
            Expr::VarDecl(_) => ExprType::VarDecl,
            Expr::If(_) => ExprType::If,
            Expr::While(_) => ExprType::While,
            Expr::Fn(_) => ExprType::Fn,
            Expr::Call(_) => ExprType::Call,
            Expr::Return(_) => ExprType::Return,
        }
    }

    /// Dispatches to the visitor method for this node's kind.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Binary(expr) => visitor.visit_binary(expr),
            Expr::Unary(expr) => visitor.visit_unary(expr),
            Expr::Literal(expr) => visitor.visit_literal(expr),
            Expr::Grouping(expr) => visitor.visit_grouping(expr),
            Expr::Assignment(expr) => visitor.visit_assignment(expr),
            Expr::VarDecl(expr) => visitor.visit_var_decl(expr),
            Expr::If(expr) => visitor.visit_if(expr),
            Expr::While(expr) => visitor.visit_while(expr),
            Expr::Fn(expr) => visitor.visit_fn(expr),
            Expr::Call(expr) => visitor.visit_call(expr),
            Expr::Return(expr) => visitor.visit_return(expr),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(BinaryExpr::new(left, operator, right))
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary(UnaryExpr::new(operator, right))
    }

    pub fn literal(value: impl Into<String>, kind: TokenKind) -> Self {
        Expr::Literal(LiteralExpr::new(value.into(), kind))
    }

    pub fn nil() -> Self {
        Expr::Literal(LiteralExpr::nil())
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(GroupingExpr::new(inner))
    }

    pub fn assignment(name: impl Into<String>, value: Expr) -> Self {
        Expr::Assignment(AssignmentExpr::new(name.into(), value))
    }

    pub fn var_decl(
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
        is_mutable: bool,
        value: Expr,
    ) -> Self {
        Expr::VarDecl(VarDeclExpr::new(name.into(), type_annotation, is_mutable, value))
    }

    pub fn while_expr(condition: Expr, body: Vec<Expr>) -> Self {
        Expr::While(WhileExpr::new(condition, body))
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr::new(callee, args))
    }

    pub fn return_expr(value: Expr) -> Self {
        Expr::Return(ReturnExpr::new(value))
    }
}

impl From<IfExpr> for Expr {
    fn from(expr: IfExpr) -> Self {
        Expr::If(expr)
    }
}

impl Display for Expr {
    /// The canonical S-expression form, e.g. `(let x int (+ 1 2))`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.accept(&mut SExprPrinter))
    }
}
