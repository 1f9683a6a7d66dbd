use crate::{
    ast::{
        ast::Expr,
        statements::{FnExpr, IfExpr, Param},
    },
    errors::errors::DiagnosticKind,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_assignment_expr,
    lookups::{BLOCK_TERMINATORS, IF_TERMINATORS},
    parser::{ParseResult, Parser},
    types::parse_type,
};

/// Parses one expression, starting from the loosest rule.
pub fn parse_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.enter_nesting()?;
    let expr = parse_return_expr(parser);
    parser.exit_nesting();

    expr
}

/// Parses expressions until one fails in front of a terminator.
///
/// A failed expression followed by one of `terminators` ends the body
/// without an error, and the terminator is left for the caller. Any other
/// failure propagates. Running out of input is reported as a missing `end`.
pub fn parse_body(parser: &mut Parser, terminators: &[TokenKind]) -> ParseResult<Vec<Expr>> {
    let mut body = vec![];

    loop {
        if !parser.has_tokens() {
            return Err(parser.unexpected_token(&[TokenKind::End]));
        }

        match parse_expr(parser) {
            Ok(expr) => body.push(expr),
            Err(_) if parser.check_any(terminators) => return Ok(body),
            Err(error) => return Err(error),
        }
    }
}

pub fn parse_return_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let Some(keyword) = parser.match_kinds(&[TokenKind::Return]) else {
        return parse_while_expr(parser);
    };

    if !parser.in_fn() {
        return Err(parser.error_at(DiagnosticKind::ReturnOutsideFunction, keyword.position()));
    }

    let value = parse_expr(parser)?;

    Ok(Expr::return_expr(value))
}

pub fn parse_while_expr(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.match_kinds(&[TokenKind::While]).is_none() {
        return parse_if_expr(parser);
    }

    let condition = parse_expr(parser)?;
    let body = parse_body(parser, BLOCK_TERMINATORS)?;
    parser.expect(TokenKind::End)?;

    Ok(Expr::while_expr(condition, body))
}

pub fn parse_if_expr(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.match_kinds(&[TokenKind::If]).is_none() {
        return parse_var_decl_expr(parser);
    }

    let condition = parse_expr(parser)?;
    let body = parse_body(parser, IF_TERMINATORS)?;

    let mut else_ifs = vec![];
    while parser.match_kinds(&[TokenKind::ElseIf]).is_some() {
        let condition = parse_expr(parser)?;
        let body = parse_body(parser, IF_TERMINATORS)?;
        else_ifs.push(IfExpr::clause(condition, body));
    }

    let else_body = if parser.match_kinds(&[TokenKind::Else]).is_some() {
        parse_body(parser, IF_TERMINATORS)?
    } else {
        vec![]
    };

    parser.expect(TokenKind::End)?;

    Ok(Expr::from(IfExpr::new(condition, body, else_ifs, else_body)))
}

pub fn parse_var_decl_expr(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.match_kinds(&[TokenKind::Let]).is_none() {
        return parse_fn_expr(parser);
    }

    let is_mutable = parser.match_kinds(&[TokenKind::Mut]).is_some();
    let name = parser.expect(TokenKind::Identifier)?.literal.clone();
    parser.expect(TokenKind::Colon)?;
    let type_annotation = parse_type(parser)?;

    let value = if parser.match_kinds(&[TokenKind::Assignment]).is_some() {
        parse_expr(parser)?
    } else {
        Expr::nil()
    };

    Ok(Expr::var_decl(name, type_annotation, is_mutable, value))
}

fn parse_param(parser: &mut Parser) -> ParseResult<Param> {
    let name = parser.expect(TokenKind::Identifier)?.literal.clone();
    parser.expect(TokenKind::Colon)?;
    let type_annotation = parse_type(parser)?;

    Ok(Param::new(name, type_annotation))
}

/// `fn [name] (params): type body end`
///
/// A named function becomes an immutable binding of that name.
pub fn parse_fn_expr(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.match_kinds(&[TokenKind::Fn]).is_none() {
        return parse_assignment_expr(parser);
    }

    let name = parser
        .match_kinds(&[TokenKind::Identifier])
        .map(|token| token.literal.clone());

    parser.expect(TokenKind::OpenParen)?;

    let mut params = vec![];
    if parser.check(TokenKind::Identifier) {
        params.push(parse_param(parser)?);
        while parser.match_kinds(&[TokenKind::Comma]).is_some() {
            params.push(parse_param(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Colon)?;
    let return_type = parse_type(parser)?;

    parser.enter_fn();
    let body = parse_body(parser, BLOCK_TERMINATORS);
    parser.exit_fn();
    let body = body?;

    parser.expect(TokenKind::End)?;

    let function = FnExpr::new(params, body, return_type);
    match name {
        Some(name) => Ok(Expr::var_decl(name, function.get_type(), false, Expr::Fn(function))),
        None => Ok(Expr::Fn(function)),
    }
}
