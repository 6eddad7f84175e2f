use std::fmt::Display;

use thiserror::Error as ThisError;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedTopLevelToken { .. } => "UnexpectedTopLevelToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String is missing a closing `\"`"))
            }
            ErrorImpl::ExpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`, did you miss a semicolon?",
                expected, found
            )),
            ErrorImpl::UnexpectedTopLevelToken { token } => ErrorTip::Suggestion(format!(
                "Token `{}` does not start a statement, is there a stray `end` or `else`?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: String },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("expected {expected:?}, found {found:?}")]
    ExpectedToken { expected: TokenKind, found: String },
    #[error("unexpected token at top level: {token:?}")]
    UnexpectedTopLevelToken { token: String },
}
