//! Type annotation parsing.
//!
//! ```text
//! type := int | float | string | fn '(' [type (',' type)*] ')' ':' type
//! ```
//!
//! `fn(): int` is a function type with no parameters.

use crate::{ast::types::TypeAnnotation, lexer::tokens::TokenKind};

use super::{
    lookups::TYPE_KEYWORDS,
    parser::{ParseResult, Parser},
};

pub fn parse_type(parser: &mut Parser) -> ParseResult<TypeAnnotation> {
    let token = parser.expect_one_of(TYPE_KEYWORDS)?;

    match token.kind {
        TokenKind::IntType => Ok(TypeAnnotation::Int),
        TokenKind::FloatType => Ok(TypeAnnotation::Float),
        TokenKind::StringType => Ok(TypeAnnotation::String),
        _ => {
            parser.enter_nesting()?;
            let function = parse_function_type(parser);
            parser.exit_nesting();

            function
        }
    }
}

/// The rest of a function type, after its `fn`.
pub fn parse_function_type(parser: &mut Parser) -> ParseResult<TypeAnnotation> {
    parser.expect(TokenKind::OpenParen)?;

    let mut params = vec![];
    if !parser.check(TokenKind::CloseParen) {
        params.push(parse_type(parser)?);
        while parser.match_kinds(&[TokenKind::Comma]).is_some() {
            params.push(parse_type(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Colon)?;
    let return_type = parse_type(parser)?;

    Ok(TypeAnnotation::function(params, return_type))
}
