use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Diagnostic, DiagnosticKind},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Handles a pattern match of `len` bytes at the lexer's cursor.
pub type RegexHandler = fn(&mut Lexer, usize);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Tried in order, the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^else if\b").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ElseIf, "else if")},
        RegexPattern { regex: Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*").unwrap(), handler: symbol_handler},
        RegexPattern { regex: Regex::new(r"^[0-9][0-9.]*").unwrap(), handler: number_handler},
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler},
        RegexPattern { regex: Regex::new(r"^[ \t\r\x0B]+").unwrap(), handler: skip_handler},
        RegexPattern { regex: Regex::new(r"^\n").unwrap(), handler: newline_handler},
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")},
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")},
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")},
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")},
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")},
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!")},
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<")},
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")},
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")},
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")},
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*")},
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")},
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")},
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")},
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")},
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")},
    ];
}

/// An error seen on the current physical line. It becomes a `Diagnostic`
/// once the line is complete and its text is known.
struct PendingError {
    kind: DiagnosticKind,
    position: Position,
}

pub struct Lexer {
    tokens: Vec<Token>,
    lines: Vec<String>,
    source: String,
    pos: usize,
    line: u32,
    col: u32,
    line_start: usize,
    pending: Vec<PendingError>,
    errors: Vec<Diagnostic>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Rc<String>) -> Lexer {
        Lexer {
            tokens: vec![],
            lines: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            col: 1,
            line_start: 0,
            pending: vec![],
            errors: vec![],
            file,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    /// Moves the cursor `n` bytes forward on the current line.
    pub fn advance_n(&mut self, n: usize) {
        let width = self.source[self.pos..self.pos + n].chars().count();
        self.pos += n;
        self.col += width as u32;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn error_at(&mut self, kind: DiagnosticKind, col: u32) {
        tracing::trace!(line = self.line, col, "lexical error: {}", kind);
        self.pending.push(PendingError {
            kind,
            position: Position::new(self.line, col),
        });
    }

    /// Records the physical line ending at the cursor and releases the
    /// errors collected on it.
    fn finish_line(&mut self) {
        let text = self.source[self.line_start..self.pos].to_string();

        for pending in self.pending.drain(..) {
            self.errors.push(Diagnostic::new(
                pending.kind,
                Rc::clone(&self.file),
                pending.position,
                text.clone(),
            ));
        }

        self.lines.push(text);
        self.line_start = self.pos;
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_n(len);
}

fn newline_handler(lexer: &mut Lexer, len: usize) {
    lexer.pos += len;
    lexer.finish_line();
    lexer.line += 1;
    lexer.col = 1;
}

fn number_handler(lexer: &mut Lexer, len: usize) {
    let literal = lexer.remainder()[..len].to_string();
    let col = lexer.col;
    lexer.advance_n(len);

    match literal.matches('.').count() {
        0 => lexer.push(MK_TOKEN!(TokenKind::Int, literal, lexer.line, col)),
        1 => lexer.push(MK_TOKEN!(TokenKind::Float, literal, lexer.line, col)),
        _ => lexer.error_at(DiagnosticKind::TooManyDots { literal }, col),
    }
}

fn symbol_handler(lexer: &mut Lexer, len: usize) {
    let value = lexer.remainder()[..len].to_string();
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, value, lexer.line, lexer.col));
    lexer.advance_n(len);
}

fn unescape(escaped: char) -> Option<char> {
    match escaped {
        't' => Some('\t'),
        'n' => Some('\n'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        'r' => Some('\r'),
        'v' => Some('\x0B'),
        _ => None,
    }
}

/// Scans a string literal starting at the opening quote.
///
/// An unclosed string stops before the newline so the newline is still
/// counted. An invalid escape is reported but scanning continues to the
/// closing quote.
fn string_handler(lexer: &mut Lexer, len: usize) {
    let start_col = lexer.col;
    let mut value = String::new();
    let mut consumed = len;
    let mut width = 1;
    let mut invalid_escape = None;
    let mut closed = false;

    let mut chars = lexer.remainder()[len..].chars();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                consumed += 1;
                width += 1;
                closed = true;
                break;
            }
            '\n' => break,
            '\\' => {
                consumed += 1;
                width += 1;

                let escaped = match chars.next() {
                    Some('\n') | None => break,
                    Some(escaped) => escaped,
                };
                consumed += escaped.len_utf8();
                width += 1;

                match unescape(escaped) {
                    Some(unescaped) => value.push(unescaped),
                    None if invalid_escape.is_none() => {
                        invalid_escape = Some((escaped, start_col + width - 1));
                    }
                    None => {}
                }
            }
            _ => {
                consumed += ch.len_utf8();
                width += 1;
                value.push(ch);
            }
        }
    }

    lexer.pos += consumed;
    lexer.col += width;

    if let Some((character, col)) = invalid_escape {
        lexer.error_at(DiagnosticKind::InvalidEscape { character }, col);
    }

    if !closed {
        let col = lexer.col;
        lexer.error_at(DiagnosticKind::UnclosedString, col);
    } else if invalid_escape.is_none() {
        lexer.push(MK_TOKEN!(TokenKind::String, value, lexer.line, start_col, width));
    }
}

/// Converts `source` into tokens plus the table of its raw lines.
///
/// Lexing continues past errors; if any occurred the tokens are dropped
/// and every diagnostic is returned instead.
pub fn tokenize(
    source: &str,
    file: Rc<String>,
) -> Result<(Vec<Token>, Vec<String>), Vec<Diagnostic>> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(lex.remainder()) {
                let len = found.end();
                (pattern.handler)(&mut lex, len);
                matched = true;
                break;
            }
        }

        if !matched {
            if let Some(character) = lex.at() {
                let col = lex.col;
                lex.error_at(DiagnosticKind::UnexpectedCharacter { character }, col);
                lex.advance_n(character.len_utf8());
            }
        }
    }

    if lex.line_start < lex.source.len() || !lex.pending.is_empty() {
        lex.finish_line();
    }

    tracing::debug!(
        file = %lex.file,
        tokens = lex.tokens.len(),
        lines = lex.lines.len(),
        errors = lex.errors.len(),
        "tokenized source"
    );

    if !lex.errors.is_empty() {
        return Err(lex.errors);
    }

    Ok((lex.tokens, lex.lines))
}
