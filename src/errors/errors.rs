use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A located, renderable error produced by the lexer or the parser.
///
/// Diagnostics are plain values: a pass collects them in detection order
/// and hands the whole list back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    file: Rc<String>,
    position: Position,
    source_line: String,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        file: Rc<String>,
        position: Position,
        source_line: String,
    ) -> Self {
        Diagnostic {
            kind,
            file,
            position,
            source_line,
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// The raw text of the line the diagnostic points into.
    pub fn source_line(&self) -> &str {
        &self.source_line
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn phase(&self) -> Phase {
        self.kind.phase()
    }

    /// Token kinds that would have been accepted, for unexpected-token errors.
    pub fn expected(&self) -> &[TokenKind] {
        match &self.kind {
            DiagnosticKind::UnexpectedToken { expected, .. } => expected,
            _ => &[],
        }
    }

    /// The token actually found, `None` when the input ended instead.
    pub fn got(&self) -> Option<&Token> {
        match &self.kind {
            DiagnosticKind::UnexpectedToken { got, .. } => got.as_ref(),
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            DiagnosticKind::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            DiagnosticKind::TooManyDots { .. } => "TooManyDots",
            DiagnosticKind::UnclosedString => "UnclosedString",
            DiagnosticKind::InvalidEscape { .. } => "InvalidEscape",
            DiagnosticKind::ExpectedExpression => "ExpectedExpression",
            DiagnosticKind::UnexpectedToken { .. } => "UnexpectedToken",
            DiagnosticKind::ReturnOutsideFunction => "ReturnOutsideFunction",
            DiagnosticKind::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.kind {
            DiagnosticKind::UnexpectedCharacter { .. } => ErrorTip::None,
            DiagnosticKind::TooManyDots { literal } => ErrorTip::Suggestion(format!(
                "`{}` has more than one `.`, a number literal may contain at most one",
                literal
            )),
            DiagnosticKind::UnclosedString => ErrorTip::Suggestion(String::from(
                "add a closing `\"` before the end of the line",
            )),
            DiagnosticKind::InvalidEscape { .. } => ErrorTip::Suggestion(String::from(
                "valid escapes are \\t, \\n, \\\", \\\\, \\r and \\v",
            )),
            DiagnosticKind::ExpectedExpression => ErrorTip::None,
            DiagnosticKind::UnexpectedToken { expected, got: None } => {
                if expected.contains(&TokenKind::End) {
                    ErrorTip::Suggestion(String::from("did you forget an `end`?"))
                } else {
                    ErrorTip::None
                }
            }
            DiagnosticKind::UnexpectedToken { .. } => ErrorTip::None,
            DiagnosticKind::ReturnOutsideFunction => ErrorTip::Suggestion(String::from(
                "`return` may only appear inside a `fn` body",
            )),
            DiagnosticKind::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "at most {} levels of nesting are supported, bind inner parts with `let` first",
                limit
            )),
        }
    }
}

impl Display for Diagnostic {
    /// ```text
    /// error: message
    ///  --> file:1:9
    ///   |
    /// 1 | let a = #
    ///   |         ^ message
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message();
        let line = self.position.line.to_string();
        let padding = line.len() + 2;

        writeln!(f, "error: {}", message)?;
        writeln!(f, " --> {}:{}", self.file, self.position)?;
        writeln!(f, "{:>padding$}", "|")?;
        writeln!(
            f,
            "{} | {}",
            line,
            self.source_line.trim_end_matches(['\n', '\r'])
        )?;
        writeln!(
            f,
            "{:>padding$}{}^ {}",
            "|",
            " ".repeat(self.position.col as usize),
            message
        )
    }
}

impl std::error::Error for Diagnostic {}

/// Renders every diagnostic of a pass, separated by blank lines.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lexical,
    Syntax,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("unexpected character '{character}'")]
    UnexpectedCharacter { character: char },
    #[error("too many dots in number literal")]
    TooManyDots { literal: String },
    #[error("unclosed string")]
    UnclosedString,
    #[error("invalid escape character '\\{character}'")]
    InvalidEscape { character: char },
    #[error("expected expression")]
    ExpectedExpression,
    #[error("unexpected token: expected {} got {}", describe_expected(.expected), describe_got(.got))]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        got: Option<Token>,
    },
    #[error("return outside of a function body")]
    ReturnOutsideFunction,
    #[error("expression nested too deeply")]
    NestingTooDeep { limit: usize },
}

impl DiagnosticKind {
    pub fn phase(&self) -> Phase {
        match self {
            DiagnosticKind::UnexpectedCharacter { .. }
            | DiagnosticKind::TooManyDots { .. }
            | DiagnosticKind::UnclosedString
            | DiagnosticKind::InvalidEscape { .. } => Phase::Lexical,
            DiagnosticKind::ExpectedExpression
            | DiagnosticKind::UnexpectedToken { .. }
            | DiagnosticKind::ReturnOutsideFunction
            | DiagnosticKind::NestingTooDeep { .. } => Phase::Syntax,
        }
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    expected
        .iter()
        .map(TokenKind::describe)
        .collect::<Vec<_>>()
        .join(" or ")
}

fn describe_got(got: &Option<Token>) -> String {
    match got {
        Some(token) => token.kind.describe(),
        None => String::from("end of input"),
    }
}
