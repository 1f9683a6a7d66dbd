//! The visitor contract over the AST.
//!
//! Consumers of the tree (a type checker, an interpreter, a code generator)
//! implement [`Visitor`] and call [`Expr::accept`]. The front end ships one
//! implementation, [`SExprPrinter`], which produces the canonical textual
//! rendering of a node.

use super::{
    ast::Expr,
    expressions::{AssignmentExpr, BinaryExpr, CallExpr, GroupingExpr, LiteralExpr, UnaryExpr},
    statements::{FnExpr, IfExpr, Param, ReturnExpr, VarDeclExpr, WhileExpr},
};
use crate::lexer::tokens::TokenKind;

/// One operation per node kind.
pub trait Visitor {
    type Output;

    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_unary(&mut self, expr: &UnaryExpr) -> Self::Output;
    fn visit_literal(&mut self, expr: &LiteralExpr) -> Self::Output;
    fn visit_grouping(&mut self, expr: &GroupingExpr) -> Self::Output;
    fn visit_assignment(&mut self, expr: &AssignmentExpr) -> Self::Output;
    fn visit_var_decl(&mut self, expr: &VarDeclExpr) -> Self::Output;
    fn visit_if(&mut self, expr: &IfExpr) -> Self::Output;
    fn visit_while(&mut self, expr: &WhileExpr) -> Self::Output;
    fn visit_param(&mut self, param: &Param) -> Self::Output;
    fn visit_fn(&mut self, expr: &FnExpr) -> Self::Output;
    fn visit_call(&mut self, expr: &CallExpr) -> Self::Output;
    fn visit_return(&mut self, expr: &ReturnExpr) -> Self::Output;
}

/// Renders nodes as S-expressions.
///
/// The rendering is not a bijection: a grouping prints only its inner
/// expression, so `(1 + 2)` and `1 + 2` render the same.
pub struct SExprPrinter;

impl SExprPrinter {
    fn list(&mut self, exprs: &[Expr]) -> String {
        exprs
            .iter()
            .map(|expr| expr.accept(self))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Re-escapes a string literal's value so the output reads like source.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for ch in value.chars() {
        match ch {
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\r' => escaped.push_str("\\r"),
            '\x0B' => escaped.push_str("\\v"),
            _ => escaped.push(ch),
        }
    }
    escaped.push('"');
    escaped
}

impl Visitor for SExprPrinter {
    type Output = String;

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        format!(
            "({} {} {})",
            expr.operator.kind,
            expr.left.accept(self),
            expr.right.accept(self)
        )
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
        format!("({} {})", expr.operator.kind, expr.right.accept(self))
    }

    fn visit_literal(&mut self, expr: &LiteralExpr) -> String {
        match expr.kind {
            TokenKind::String => escape(&expr.value),
            _ => expr.value.clone(),
        }
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr) -> String {
        expr.inner.accept(self)
    }

    fn visit_assignment(&mut self, expr: &AssignmentExpr) -> String {
        format!("(= {} {})", expr.name, expr.value.accept(self))
    }

    fn visit_var_decl(&mut self, expr: &VarDeclExpr) -> String {
        let binding = if expr.is_mutable { "let mut" } else { "let" };
        format!(
            "({} {} {} {})",
            binding,
            expr.name,
            expr.type_annotation,
            expr.value.accept(self)
        )
    }

    fn visit_if(&mut self, expr: &IfExpr) -> String {
        let mut parts = vec![
            String::from("if"),
            expr.condition.accept(self),
            format!("({})", self.list(&expr.body)),
        ];

        for clause in &expr.else_ifs {
            parts.push(format!(
                "(elseif {} ({}))",
                clause.condition.accept(self),
                self.list(&clause.body)
            ));
        }

        if !expr.else_body.is_empty() {
            parts.push(format!("(else {})", self.list(&expr.else_body)));
        }

        format!("({})", parts.join(" "))
    }

    fn visit_while(&mut self, expr: &WhileExpr) -> String {
        format!(
            "(while {} ({}))",
            expr.condition.accept(self),
            self.list(&expr.body)
        )
    }

    fn visit_param(&mut self, param: &Param) -> String {
        format!("{}: {}", param.name, param.type_annotation)
    }

    fn visit_fn(&mut self, expr: &FnExpr) -> String {
        let params = expr
            .params
            .iter()
            .map(|param| self.visit_param(param))
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "(fn {} ({}) ({}))",
            expr.return_type,
            params,
            self.list(&expr.body)
        )
    }

    fn visit_call(&mut self, expr: &CallExpr) -> String {
        let mut parts = vec![String::from("call"), expr.callee.accept(self)];
        parts.extend(expr.args.iter().map(|arg| arg.accept(self)));

        format!("({})", parts.join(" "))
    }

    fn visit_return(&mut self, expr: &ReturnExpr) -> String {
        format!("(return {})", expr.value.accept(self))
    }
}
