//! Integration tests for the front end.
//!
//! These tests drive the public API the way a consumer would: source text
//! goes in, and either the rendered tree or rendered diagnostics come out.

use std::rc::Rc;

use expect_test::expect;
use graphene::{
    ast::{ast::Expr, visitor::SExprPrinter},
    errors::errors::{render_diagnostics, Phase},
    lexer::lexer::tokenize,
    parse_source,
    parser::parser::parse,
    DEFAULT_FILE_NAME,
};

fn render_program(source: &str) -> String {
    parse_source(source, Some(String::from("prog.gph")))
        .unwrap()
        .iter()
        .map(|expr| format!("{}\n", expr))
        .collect()
}

#[test]
fn test_parse_full_program() {
    let source = r#"
fn fib(n: int): int
    if n < 2
        return n
    end
    return fib(n - 1) + fib(n - 2)
end

let mut i: int = 0
while i < 10
    i = i + 1
end

let greeting: string = "hi\tthere"
let apply: fn(fn(int): int, int): int
"#;

    expect![[r#"
        (let fib (fn int (int)) (fn int (n: int) ((if (< n 2) ((return n))) (return (+ (call fib (- n 1)) (call fib (- n 2)))))))
        (let mut i int 0)
        (while (< i 10) ((= i (+ i 1))))
        (let greeting string "hi\tthere")
        (let apply (fn int ((fn int (int)) int)) nil)
    "#]]
    .assert_eq(&render_program(source));
}

#[test]
fn test_parse_if_chain() {
    let source = "if x == 1\n  a\nelse if x == 2\n  b\nelse\n  c\nend\n";

    expect![[r#"
        (if (== x 1) (a) (elseif (== x 2) (b)) (else c))
    "#]]
    .assert_eq(&render_program(source));
}

#[test]
fn test_separate_passes_share_file_name() {
    let file = Rc::new(String::from("split.gph"));
    let (tokens, lines) = tokenize("let x: int = (1 + 2) * 3", Rc::clone(&file)).unwrap();
    let exprs = parse(&tokens, &lines, file).unwrap();

    assert_eq!(exprs.len(), 1);
    assert_eq!(exprs[0].accept(&mut SExprPrinter), "(let x int (* (+ 1 2) 3))");
}

#[test]
fn test_default_file_name() {
    let errors = parse_source("let = 1", None).unwrap_err();

    assert_eq!(errors[0].file(), DEFAULT_FILE_NAME);
    assert!(errors[0].to_string().contains(" --> shell:1:5"));
}

#[test]
fn test_lexical_errors_are_reported_together() {
    let errors = parse_source("let a: int = 1.2.3\nlet b: string = \"oops\\z\"", Some(String::from("bad.gph"))).unwrap_err();

    assert!(errors.iter().all(|error| error.phase() == Phase::Lexical));

    expect![[r#"
        error: too many dots in number literal
         --> bad.gph:1:14
          |
        1 | let a: int = 1.2.3
          |              ^ too many dots in number literal

        error: invalid escape character '\z'
         --> bad.gph:2:23
          |
        2 | let b: string = "oops\z"
          |                       ^ invalid escape character '\z'
    "#]]
    .assert_eq(&render_diagnostics(&errors));
}

#[test]
fn test_syntax_errors_after_recovery() {
    let source = "let x: int = 1\nlet y: = 2\nlet w: int = x +\nlet z: int = 3\nlet q: int = 4\nwhile q\n";
    let errors = parse_source(source, Some(String::from("bad.gph"))).unwrap_err();

    assert!(errors.iter().all(|error| error.phase() == Phase::Syntax));

    expect![[r#"
        error: unexpected token: expected "int" or "float" or "string" or "fn" got "="
         --> bad.gph:2:8
          |
        2 | let y: = 2
          |        ^ unexpected token: expected "int" or "float" or "string" or "fn" got "="

        error: expected expression
         --> bad.gph:4:1
          |
        4 | let z: int = 3
          | ^ expected expression

        error: unexpected token: expected "end" got end of input
         --> bad.gph:6:8
          |
        6 | while q
          |        ^ unexpected token: expected "end" got end of input
    "#]]
    .assert_eq(&render_diagnostics(&errors));
}

#[test]
fn test_tree_is_owned_and_comparable() {
    let first = parse_source("a + b * c", None).unwrap();
    let second = parse_source("a + (b * c)", None).unwrap();

    assert_ne!(first, second);
    assert_eq!(first[0].to_string(), second[0].to_string());
    assert!(matches!(first[0], Expr::Binary(_)));
}
