//! Unit tests for AST nodes and the visitor contract.

use std::{iter::Peekable, rc::Rc, str::SplitWhitespace};

use crate::{
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::parser::parse,
};

use super::{
    ast::{Expr, ExprType},
    expressions::{AssignmentExpr, BinaryExpr, CallExpr, GroupingExpr, LiteralExpr, UnaryExpr},
    statements::{FnExpr, IfExpr, Param, ReturnExpr, VarDeclExpr, WhileExpr},
    types::TypeAnnotation,
    visitor::Visitor,
};

fn op(kind: TokenKind, literal: &str) -> Token {
    Token::new(kind, String::from(literal), 1, 1)
}

fn ident(name: &str) -> Expr {
    Expr::literal(name, TokenKind::Identifier)
}

fn int(value: &str) -> Expr {
    Expr::literal(value, TokenKind::Int)
}

/// Counts every node reachable from the visited one.
struct NodeCounter;

impl NodeCounter {
    fn all(&mut self, exprs: &[Expr]) -> usize {
        exprs.iter().map(|expr| expr.accept(self)).sum()
    }
}

impl Visitor for NodeCounter {
    type Output = usize;

    fn visit_binary(&mut self, expr: &BinaryExpr) -> usize {
        1 + expr.left.accept(self) + expr.right.accept(self)
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> usize {
        1 + expr.right.accept(self)
    }

    fn visit_literal(&mut self, _expr: &LiteralExpr) -> usize {
        1
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr) -> usize {
        1 + expr.inner.accept(self)
    }

    fn visit_assignment(&mut self, expr: &AssignmentExpr) -> usize {
        1 + expr.value.accept(self)
    }

    fn visit_var_decl(&mut self, expr: &VarDeclExpr) -> usize {
        1 + expr.value.accept(self)
    }

    fn visit_if(&mut self, expr: &IfExpr) -> usize {
        let clauses: usize = expr.else_ifs.iter().map(|clause| self.visit_if(clause)).sum();
        1 + expr.condition.accept(self) + self.all(&expr.body) + clauses + self.all(&expr.else_body)
    }

    fn visit_while(&mut self, expr: &WhileExpr) -> usize {
        1 + expr.condition.accept(self) + self.all(&expr.body)
    }

    fn visit_param(&mut self, _param: &Param) -> usize {
        1
    }

    fn visit_fn(&mut self, expr: &FnExpr) -> usize {
        let params: usize = expr.params.iter().map(|param| self.visit_param(param)).sum();
        1 + params + self.all(&expr.body)
    }

    fn visit_call(&mut self, expr: &CallExpr) -> usize {
        1 + expr.callee.accept(self) + self.all(&expr.args)
    }

    fn visit_return(&mut self, expr: &ReturnExpr) -> usize {
        1 + expr.value.accept(self)
    }
}

#[test]
fn test_visitor_reaches_every_node() {
    // fn(a: int): int while a (a = a - 1) end return f(a) end
    let body = vec![
        Expr::while_expr(
            ident("a"),
            vec![Expr::grouping(Expr::assignment(
                "a",
                Expr::binary(ident("a"), op(TokenKind::Dash, "-"), int("1")),
            ))],
        ),
        Expr::return_expr(Expr::call(ident("f"), vec![ident("a")])),
    ];
    let function = Expr::Fn(FnExpr::new(
        vec![Param::new(String::from("a"), TypeAnnotation::Int)],
        body,
        TypeAnnotation::Int,
    ));

    assert_eq!(function.accept(&mut NodeCounter), 13);
}

#[test]
fn test_visitor_visits_if_clauses() {
    let if_expr = Expr::from(IfExpr::new(
        ident("a"),
        vec![int("1")],
        vec![IfExpr::clause(ident("b"), vec![int("2")])],
        vec![Expr::unary(op(TokenKind::Not, "!"), ident("c"))],
    ));

    assert_eq!(if_expr.accept(&mut NodeCounter), 8);
}

#[test]
fn test_expr_type_tags() {
    assert_eq!(int("1").get_expr_type(), ExprType::Literal);
    assert_eq!(Expr::nil().get_expr_type(), ExprType::Literal);
    assert_eq!(
        Expr::grouping(int("1")).get_expr_type(),
        ExprType::Grouping
    );
    assert_eq!(
        Expr::call(ident("f"), vec![]).get_expr_type(),
        ExprType::Call
    );
}

#[test]
fn test_render_if_without_else() {
    let if_expr = Expr::from(IfExpr::new(
        Expr::binary(ident("a"), op(TokenKind::Less, "<"), ident("b")),
        vec![ident("a")],
        vec![],
        vec![],
    ));

    assert_eq!(if_expr.to_string(), "(if (< a b) (a))");
}

#[test]
fn test_render_is_not_a_bijection() {
    let sum = Expr::binary(int("1"), op(TokenKind::Plus, "+"), int("2"));
    let grouped = Expr::grouping(sum.clone());

    assert_ne!(grouped, sum);
    assert_eq!(grouped.to_string(), sum.to_string());
}

#[test]
fn test_render_string_literal_escapes() {
    let literal = Expr::literal("tab\there \"quoted\" \\ \x0B", TokenKind::String);

    assert_eq!(literal.to_string(), r#""tab\there \"quoted\" \\ \v""#);
}

#[test]
fn test_fn_type_from_signature() {
    let function = FnExpr::new(
        vec![
            Param::new(String::from("a"), TypeAnnotation::Int),
            Param::new(String::from("b"), TypeAnnotation::Float),
        ],
        vec![],
        TypeAnnotation::String,
    );

    assert_eq!(
        function.get_type(),
        TypeAnnotation::function(
            vec![TypeAnnotation::Int, TypeAnnotation::Float],
            TypeAnnotation::String
        )
    );
    assert_eq!(function.get_type().to_string(), "(fn string (int float))");
}

#[test]
fn test_literal_identifier_check() {
    let Expr::Literal(literal) = ident("x") else {
        panic!("expected a literal");
    };

    assert!(literal.is_identifier());
    assert!(!LiteralExpr::nil().is_identifier());
}

#[test]
fn test_node_count_is_bounded_by_token_count() {
    let programs = [
        "let x: int = 1 + 2 * 3",
        "let s: string",
        "f()",
        "fn add(a: int, b: int): int return a + b end",
        "let apply: fn(fn(int): int, int): int",
        "if a < b a else if -b c else d end",
        "while i < 10 i = i + 1 end\nprint(f(1, (2)), !x)",
    ];

    for source in programs {
        let file = Rc::new(String::from("test.gph"));
        let (tokens, lines) = tokenize(source, Rc::clone(&file)).unwrap();
        let exprs = parse(&tokens, &lines, file).unwrap();

        let nodes = NodeCounter.all(&exprs);
        assert!(nodes > 0, "{}", source);
        assert!(
            nodes <= tokens.len(),
            "{} nodes from {} tokens in {:?}",
            nodes,
            tokens.len(),
            source
        );
    }
}

/// Rebuilds operator tokens at a fixed position and drops groupings, which
/// the S-expression form does not keep.
fn normalize(expr: &Expr) -> Expr {
    match expr {
        Expr::Binary(binary) => Expr::binary(
            normalize(&binary.left),
            op(binary.operator.kind, &binary.operator.literal),
            normalize(&binary.right),
        ),
        Expr::Unary(unary) => Expr::unary(
            op(unary.operator.kind, &unary.operator.literal),
            normalize(&unary.right),
        ),
        Expr::Grouping(grouping) => normalize(&grouping.inner),
        other => other.clone(),
    }
}

const OPERATORS: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Dash,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Equals,
    TokenKind::NotEquals,
    TokenKind::Less,
    TokenKind::LessEquals,
    TokenKind::Greater,
    TokenKind::GreaterEquals,
    TokenKind::Not,
];

/// Reads back the S-expression form of literals, unary and binary nodes.
fn read_sexpr(atoms: &mut Peekable<SplitWhitespace>) -> Expr {
    let atom = atoms.next().unwrap();

    if atom != "(" {
        return match atom {
            "nil" => Expr::nil(),
            _ if atom.starts_with(|ch: char| ch.is_ascii_digit()) && atom.contains('.') => {
                Expr::literal(atom, TokenKind::Float)
            }
            _ if atom.starts_with(|ch: char| ch.is_ascii_digit()) => {
                Expr::literal(atom, TokenKind::Int)
            }
            _ => ident(atom),
        };
    }

    let spelling = atoms.next().unwrap();
    let kind = *OPERATORS
        .iter()
        .find(|kind| kind.to_string() == spelling)
        .unwrap();

    let first = read_sexpr(atoms);
    if atoms.peek() == Some(&")") {
        atoms.next();
        return Expr::unary(op(kind, spelling), first);
    }

    let second = read_sexpr(atoms);
    assert_eq!(atoms.next(), Some(")"));
    Expr::binary(first, op(kind, spelling), second)
}

#[test]
fn test_render_round_trips_operator_trees() {
    let sources = [
        "1",
        "2.5",
        "nil",
        "x",
        "-x",
        "!-1",
        "1 + 2 * 3",
        "(1 + 2) * -(3 - x)",
        "a < b == (c >= d) != !e",
        "((4 / y) <= 0.5)",
    ];

    for source in sources {
        let exprs = crate::parse_source(source, None).unwrap();
        let rendered = exprs[0].to_string();

        let spaced = rendered.replace('(', " ( ").replace(')', " ) ");
        let mut atoms = spaced.split_whitespace().peekable();
        let read_back = read_sexpr(&mut atoms);

        assert_eq!(atoms.next(), None, "{}", rendered);
        assert_eq!(read_back, normalize(&exprs[0]), "{}", source);
    }
}
