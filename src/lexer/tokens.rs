use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::IntType);
        map.insert("float", TokenKind::FloatType);
        map.insert("string", TokenKind::StringType);
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("nil", TokenKind::Nil);
        map.insert("if", TokenKind::If);
        map.insert("end", TokenKind::End);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Int,
    Float,
    String,
    Nil,
    Identifier,

    // Type keywords
    IntType,
    FloatType,
    StringType,
    Fn,

    // Control keywords
    Let,
    Mut,
    If,
    ElseIf,
    Else,
    End,
    While,
    Return,

    Plus,
    Dash,
    Star,
    Slash,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    OpenParen,
    CloseParen,
    Comma,
    Colon,
}

impl TokenKind {
    /// Kinds that name a class of tokens rather than one spelling.
    pub fn is_literal_class(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::String | TokenKind::Identifier
        )
    }

    pub fn is_literal(&self) -> bool {
        self.is_literal_class() || *self == TokenKind::Nil
    }

    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Dash
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
        )
    }

    pub fn is_unary_operator(&self) -> bool {
        matches!(self, TokenKind::Dash | TokenKind::Not)
    }

    /// Renders the kind the way diagnostics quote it.
    pub fn describe(&self) -> String {
        if self.is_literal_class() {
            self.to_string()
        } else {
            format!("\"{}\"", self)
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TokenKind::Int => "integer literal",
            TokenKind::Float => "float literal",
            TokenKind::String => "string literal",
            TokenKind::Nil => "nil",
            TokenKind::Identifier => "identifier",
            TokenKind::IntType => "int",
            TokenKind::FloatType => "float",
            TokenKind::StringType => "string",
            TokenKind::Fn => "fn",
            TokenKind::Let => "let",
            TokenKind::Mut => "mut",
            TokenKind::If => "if",
            TokenKind::ElseIf => "else if",
            TokenKind::Else => "else",
            TokenKind::End => "end",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
        };

        write!(f, "{}", text)
    }
}

/// A lexical unit. `line` and `col` are 1-based and point at the first
/// character of the token; `col` and `width` count code points.
///
/// `width` is the length of the token's source text, which differs from the
/// literal for strings (quotes and escapes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: u32,
    pub col: u32,
    pub width: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self.kind, self.literal)
    }
}

impl Token {
    /// A token whose source text is exactly its literal.
    pub fn new(kind: TokenKind, literal: String, line: u32, col: u32) -> Self {
        let width = literal.chars().count() as u32;
        Token {
            kind,
            literal,
            line,
            col,
            width,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Column just past the token's source text.
    pub fn end_col(&self) -> u32 {
        self.col + self.width
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
