#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{ast::ast::Expr, errors::errors::Diagnostic};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// File name used when the caller does not supply one.
pub const DEFAULT_FILE_NAME: &str = "shell";

/// A 1-based line/column pair. Columns count code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub fn new(line: u32, col: u32) -> Self {
        Position { line, col }
    }

    pub fn start() -> Self {
        Position { line: 1, col: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Lexes and parses `source` in one go.
///
/// A lexical failure suppresses parsing: only the lexer's diagnostics are
/// returned in that case.
pub fn parse_source(source: &str, file: Option<String>) -> Result<Vec<Expr>, Vec<Diagnostic>> {
    let file = Rc::new(file.unwrap_or_else(|| String::from(DEFAULT_FILE_NAME)));
    let (tokens, lines) = lexer::lexer::tokenize(source, Rc::clone(&file))?;

    parser::parser::parse(&tokens, &lines, file)
}

#[cfg(test)]
mod tests {
    use super::{parse_source, Position};

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
        assert_eq!(Position::start(), Position::new(1, 1));
    }

    #[test]
    fn test_parse_source_runs_both_passes() {
        let exprs = parse_source("let x: int = 1\nx = x + 1", None).unwrap();
        let rendered: Vec<String> = exprs.iter().map(|expr| expr.to_string()).collect();

        assert_eq!(rendered, vec!["(let x int 1)", "(= x (+ x 1))"]);
    }

    #[test]
    fn test_lexical_failure_suppresses_parsing() {
        // `let x:` alone would be a syntax error, but the lexer fails first.
        let errors = parse_source("let x: @", Some(String::from("main.gph"))).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].get_error_name(), "UnexpectedCharacter");
        assert_eq!(errors[0].file(), "main.gph");
    }
}
