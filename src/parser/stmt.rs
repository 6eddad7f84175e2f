use crate::{
    ast::{
        ast::Term,
        statements::{AssignStat, Block, FunCallStat, IfStat, Stmt, VarStat},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::{parse_exp, parse_function_call},
    Span,
};

use super::parser::Parser;

/// Parses `block := stat*`. Statements are collected until no stat
/// production matches; the token that ended the block is left
/// unconsumed, which is how nested blocks stop at `else`/`end` and the
/// outermost block stops at EOF.
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let start = parser.current_token().span.start.clone();

    let mut body = Vec::new();
    while parser.has_tokens() {
        match parse_stat(parser)? {
            Some(stat) => body.push(stat),
            None => break,
        }
    }

    Ok(Block {
        body,
        span: Span {
            start,
            end: parser.current_token().span.start.clone(),
        },
    })
}

/// Statement dispatch on the current token and, without consuming, the
/// one after it. Returns Ok(None) when no production matches so the
/// enclosing block can stop.
fn parse_stat(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    if parser.current_token_kind() == TokenKind::Local {
        return Ok(Some(Stmt::Var(parse_var_stat(parser)?)));
    }

    if parser.current_token_kind() == TokenKind::If {
        return Ok(Some(Stmt::If(parse_if_stat(parser)?)));
    }

    if parser.next_token_kind() == TokenKind::Assignment {
        return Ok(Some(Stmt::Assign(parse_assign_stat(parser)?)));
    }

    match parser.current_token_kind() {
        TokenKind::OpenParen | TokenKind::Identifier => {
            Ok(Some(Stmt::FunCall(parse_funcall_stat(parser)?)))
        }
        _ => Ok(None),
    }
}

/// `varstat := "local" var ("=" exp)? ";"`
pub fn parse_var_stat(parser: &mut Parser) -> Result<VarStat, Error> {
    let start_token = parser.advance().clone();

    let name = parse_var(parser)?;

    let value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_exp(parser)?)
    } else {
        None
    };

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(VarStat {
        name,
        value,
        span: Span {
            start: start_token.span.start,
            end: semicolon.span.end,
        },
    })
}

/// `ifstat := "if" exp "then" block ("else" block)? "end" ";"`
pub fn parse_if_stat(parser: &mut Parser) -> Result<IfStat, Error> {
    let start_token = parser.advance().clone();

    let condition = parse_exp(parser)?;
    parser.expect(TokenKind::Then)?;

    let then_block = parse_block(parser)?;

    let else_block = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::End)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(IfStat {
        condition,
        then_block,
        else_block,
        span: Span {
            start: start_token.span.start,
            end: semicolon.span.end,
        },
    })
}

/// `assignstat := var "=" exp ";"` - both the target and the assigned
/// value are kept on the node.
pub fn parse_assign_stat(parser: &mut Parser) -> Result<AssignStat, Error> {
    let target = parse_var(parser)?;

    parser.expect(TokenKind::Assignment)?;
    let value = parse_exp(parser)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    let start = target.token.span.start.clone();

    Ok(AssignStat {
        target,
        value,
        span: Span {
            start,
            end: semicolon.span.end,
        },
    })
}

/// `funcallstat := functioncall ";"`
pub fn parse_funcall_stat(parser: &mut Parser) -> Result<FunCallStat, Error> {
    let start = parser.current_token().span.start.clone();

    let call = parse_function_call(parser)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(FunCallStat {
        call,
        span: Span {
            start,
            end: semicolon.span.end,
        },
    })
}

/// `var := IDENTIFIER`
pub fn parse_var(parser: &mut Parser) -> Result<Term, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(Term::new(token))
}
