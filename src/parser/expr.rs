use crate::{
    ast::{
        ast::Term,
        expressions::{Args, Binary, Exp, FunctionCall, Primary, Unary},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_var};

/// `exp := binary`
pub fn parse_exp(parser: &mut Parser) -> Result<Exp, Error> {
    Ok(Exp {
        binary: parse_binary(parser)?,
    })
}

/// `binary := unary (binop unary)?` - at most one operator application.
fn parse_binary(parser: &mut Parser) -> Result<Binary, Error> {
    let left = parse_unary(parser)?;

    let rest = if is_binop(parser.current_token_kind()) {
        let operator = Term::new(parser.advance().clone());
        let right = parse_unary(parser)?;
        Some((operator, right))
    } else {
        None
    };

    Ok(Binary { left, rest })
}

/// `unary := unop unary | functioncall | primary`
///
/// Prefix operators are right-recursive. An identifier immediately
/// followed by `(` is a call expression rather than a bare variable
/// reference; that one token of lookahead is what separates `f(x)`
/// from `f`.
fn parse_unary(parser: &mut Parser) -> Result<Unary, Error> {
    if is_unop(parser.current_token_kind()) {
        let operator = Term::new(parser.advance().clone());
        let right = Box::new(parse_unary(parser)?);
        return Ok(Unary::Prefix { operator, right });
    }

    if parser.current_token_kind() == TokenKind::Identifier
        && parser.next_token_kind() == TokenKind::OpenParen
    {
        return Ok(Unary::Call(parse_function_call(parser)?));
    }

    Ok(Unary::Primary(parse_primary(parser)?))
}

/// `functioncall := primary args` - call syntax is applied to whatever
/// the primary produced; callability is not validated here.
pub fn parse_function_call(parser: &mut Parser) -> Result<FunctionCall, Error> {
    let callee = parse_primary(parser)?;
    let args = parse_args(parser)?;

    Ok(FunctionCall { callee, args })
}

/// `primary := "nil" | "false" | "true" | NUMBER | STRING | "(" exp ")" | var`
fn parse_primary(parser: &mut Parser) -> Result<Primary, Error> {
    match parser.current_token_kind() {
        TokenKind::Nil => Ok(Primary::Nil(Term::new(parser.advance().clone()))),
        TokenKind::False => Ok(Primary::False(Term::new(parser.advance().clone()))),
        TokenKind::True => Ok(Primary::True(Term::new(parser.advance().clone()))),
        TokenKind::Number => Ok(Primary::Number(Term::new(parser.advance().clone()))),
        TokenKind::String => Ok(Primary::Str(Term::new(parser.advance().clone()))),
        TokenKind::OpenParen => {
            parser.advance();
            let exp = parse_exp(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(Primary::Grouping(Box::new(exp)))
        }
        _ => Ok(Primary::Var(parse_var(parser)?)),
    }
}

/// `args := "(" exp? ")"`
fn parse_args(parser: &mut Parser) -> Result<Args, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let value = if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
        None
    } else {
        let exp = parse_exp(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        Some(Box::new(exp))
    };

    Ok(Args { value })
}

/// `binop := "+" | "-" | "*" | "/" | "<" | ">" | "==" | "~="`
fn is_binop(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::Equals
            | TokenKind::NotEquals
    )
}

/// `unop := "-" | "not"`
fn is_unop(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Dash | TokenKind::Not)
}
