use crate::{
    ast::ast::Expr,
    errors::errors::DiagnosticKind,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, LITERAL_KINDS},
    parser::{ParseResult, Parser},
    stmt::parse_expr,
};

/// `name = value`, falling back to an equality expression.
///
/// This is the only rule that needs to look past its first token, so it
/// snapshots the cursor and rewinds when no `=` follows the identifier.
pub fn parse_assignment_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let saved = parser.save();

    if let Some(name) = parser.match_kinds(&[TokenKind::Identifier]) {
        if parser.match_kinds(&[TokenKind::Assignment]).is_some() {
            let value = parse_expr(parser)?;
            return Ok(Expr::assignment(name.literal.clone(), value));
        }

        parser.restore(saved);
    }

    parse_binary_expr(parser, BindingPower::Equality)
}

fn parse_operand(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    match bp.next() {
        Some(next) => parse_binary_expr(parser, next),
        None => parse_prefix_expr(parser),
    }
}

/// Parses a left-associative chain of the operators bound at `bp`.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    let mut left = parse_operand(parser, bp)?;

    while let Some(operator) = parser.match_kinds(bp.operators()) {
        let right = parse_operand(parser, bp)?;
        left = Expr::binary(left, operator.clone(), right);
    }

    Ok(left)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> ParseResult<Expr> {
    if let Some(operator) = parser.match_kinds(&[TokenKind::Dash, TokenKind::Not]) {
        parser.enter_nesting()?;
        let right = parse_prefix_expr(parser);
        parser.exit_nesting();

        return Ok(Expr::unary(operator.clone(), right?));
    }

    parse_call_expr(parser)
}

pub fn parse_call_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let mut expr = parse_primary_expr(parser)?;

    while parser.match_kinds(&[TokenKind::OpenParen]).is_some() {
        let mut args = vec![];

        if !parser.check(TokenKind::CloseParen) {
            args.push(parse_expr(parser)?);
            while parser.match_kinds(&[TokenKind::Comma]).is_some() {
                args.push(parse_expr(parser)?);
            }
        }

        parser.expect(TokenKind::CloseParen)?;
        expr = Expr::call(expr, args);
    }

    Ok(expr)
}

pub fn parse_primary_expr(parser: &mut Parser) -> ParseResult<Expr> {
    if let Some(token) = parser.match_kinds(LITERAL_KINDS) {
        return Ok(Expr::literal(token.literal.clone(), token.kind));
    }

    if parser.match_kinds(&[TokenKind::OpenParen]).is_some() {
        return parse_grouping_expr(parser);
    }

    Err(parser.error_here(DiagnosticKind::ExpectedExpression))
}

/// The rest of a parenthesised expression, after its `(`.
pub fn parse_grouping_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let inner = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::grouping(inner))
}
