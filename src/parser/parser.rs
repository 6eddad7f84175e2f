//! Parser state and the `parse` entry point.
//!
//! The parser owns the token sequence produced by the lexer and a read
//! cursor into it. Grammar functions live in `stmt` and `expr`; this
//! module provides the token-consumption primitives they share:
//! current-token inspection, one-token lookahead, advancing, and the
//! "require next token of kind K" primitive (`expect`).

use crate::{
    ast::ast::Root,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::stmt::parse_block;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the current position in it.
/// Error positions come from the offending token's span, which already
/// carries the source file name.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse, terminated by an EOF token
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos as usize).unwrap().kind
    }

    /// Returns the kind of the token after the current one without
    /// advancing. At the end of the stream this is EOF.
    pub fn next_token_kind(&self) -> TokenKind {
        if !self.has_tokens() {
            return TokenKind::EOF;
        }

        self.tokens.get((self.pos + 1) as usize).unwrap().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get((self.pos - 1) as usize).unwrap()
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        let kind = token.kind;
        if kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        expected: expected_kind,
                        found: token.lexeme.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    ///
    /// # Returns
    ///
    /// Returns true if there are more tokens and the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.pos + 1 < self.tokens.len() as i32 && self.current_token_kind() != TokenKind::EOF
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser
/// instance, parses the outermost block, and requires the cursor to sit
/// exactly on the EOF token afterwards. Nested blocks terminate
/// naturally at `else`/`end` and are not subject to that check.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, terminated by an EOF token
///
/// # Returns
///
/// The Root node owning the whole tree, or the first error encountered.
pub fn parse(tokens: Vec<Token>) -> Result<Root, Error> {
    let mut parser = Parser::new(tokens);

    let block = parse_block(&mut parser)?;

    if parser.current_token_kind() != TokenKind::EOF {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnexpectedTopLevelToken {
                token: token.lexeme.clone(),
            },
            token.span.start.clone(),
        ));
    }

    Ok(Root { block })
}
