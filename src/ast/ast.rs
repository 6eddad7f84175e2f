use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::statements::Block;

/// The outermost parse result. Holds exactly one top-level block and is
/// produced once per successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    pub block: Block,
}

impl Display for Root {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(root {})", self.block)
    }
}

/// A leaf node wrapping exactly one token. Terminal nodes carry the token
/// and nothing else; every other node kind carries children instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub token: Token,
}

impl Term {
    pub fn new(token: Token) -> Self {
        Term { token }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(term {} {:?})", self.token.kind, self.token.lexeme)
    }
}
