//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            character: "@".to_string(),
        },
        Position(10, Rc::new("test.klua".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.klua".to_string()));
    let error = Error::new(
        ErrorImpl::UnterminatedString,
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(
        ErrorImpl::UnterminatedString,
        Position(0, Rc::new("test.klua".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_expected_token_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Semicolon,
            found: "end".to_string(),
        },
        Position(0, Rc::new("test.klua".to_string())),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
}

#[test]
fn test_unexpected_top_level_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedTopLevelToken {
            token: "end".to_string(),
        },
        Position(0, Rc::new("test.klua".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedTopLevelToken");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            character: "@".to_string(),
        },
        Position(0, Rc::new("test.klua".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Then,
            found: "local".to_string(),
        },
        Position(0, Rc::new("test.klua".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_impl_display() {
    let error = ErrorImpl::ExpectedToken {
        expected: TokenKind::CloseParen,
        found: ";".to_string(),
    };

    assert_eq!(error.to_string(), "expected CloseParen, found \";\"");
}
