use crate::lexer::tokens::TokenKind;

/// The binary-operator layers, lowest binding power first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Equality,
    Comparison,
    Term,
    Factor,
}

impl BindingPower {
    pub fn operators(self) -> &'static [TokenKind] {
        match self {
            BindingPower::Equality => &[TokenKind::Equals, TokenKind::NotEquals],
            BindingPower::Comparison => &[
                TokenKind::Less,
                TokenKind::LessEquals,
                TokenKind::Greater,
                TokenKind::GreaterEquals,
            ],
            BindingPower::Term => &[TokenKind::Dash, TokenKind::Plus],
            BindingPower::Factor => &[TokenKind::Slash, TokenKind::Star],
        }
    }

    /// The next tighter layer, `None` once operands become unary expressions.
    pub fn next(self) -> Option<BindingPower> {
        match self {
            BindingPower::Equality => Some(BindingPower::Comparison),
            BindingPower::Comparison => Some(BindingPower::Term),
            BindingPower::Term => Some(BindingPower::Factor),
            BindingPower::Factor => None,
        }
    }
}

/// Keywords a statement may start at; recovery resumes at one of these.
pub const SYNC_KEYWORDS: &[TokenKind] = &[
    TokenKind::Let,
    TokenKind::If,
    TokenKind::Else,
    TokenKind::ElseIf,
    TokenKind::End,
];

/// Terminators of an `if`, `else if` or `else` body.
pub const IF_TERMINATORS: &[TokenKind] = &[TokenKind::ElseIf, TokenKind::Else, TokenKind::End];

/// Terminators of a `while` or `fn` body.
pub const BLOCK_TERMINATORS: &[TokenKind] = &[TokenKind::End];

pub const TYPE_KEYWORDS: &[TokenKind] = &[
    TokenKind::IntType,
    TokenKind::FloatType,
    TokenKind::StringType,
    TokenKind::Fn,
];

pub const LITERAL_KINDS: &[TokenKind] = &[
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Nil,
    TokenKind::Identifier,
    TokenKind::String,
];
