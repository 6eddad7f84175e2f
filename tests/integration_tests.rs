//! Integration tests for the end-to-end pipeline.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through tokenization and parsing to the final AST, and
//! that failures in either stage surface unchanged at the call boundary.

use klua::{
    ast::statements::Stmt,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
};

#[test]
fn test_pipeline_simple_program() {
    let source = "local x = 42;".to_string();
    let tokens = tokenize(source, Some("test.klua".to_string())).unwrap();
    let root = parse(tokens).unwrap();

    assert_eq!(root.block.body.len(), 1);
    assert!(matches!(root.block.body[0], Stmt::Var(_)));
}

#[test]
fn test_pipeline_full_program() {
    let source = r#"
        local x = 1;
        local msg = "hello";
        if x == 1 then
            print(msg);
        else
            x = x + 1;
        end;
        print(x);
    "#
    .to_string();

    let tokens = tokenize(source, Some("test.klua".to_string())).unwrap();
    let root = parse(tokens).unwrap();

    assert_eq!(root.block.body.len(), 4);
    assert!(matches!(root.block.body[2], Stmt::If(_)));
    assert!(matches!(root.block.body[3], Stmt::FunCall(_)));
}

#[test]
fn test_pipeline_whitespace_only_source() {
    let source = " \t\r\n".to_string();
    let tokens = tokenize(source, Some("test.klua".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);

    let root = parse(tokens).unwrap();
    assert!(root.block.body.is_empty());
}

#[test]
fn test_pipeline_lexical_error_surfaces() {
    let source = "local x = \"hello".to_string();
    let result = tokenize(source, Some("test.klua".to_string()));

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_pipeline_syntax_error_surfaces() {
    let source = "local x; end;".to_string();
    let tokens = tokenize(source, Some("test.klua".to_string())).unwrap();
    let result = parse(tokens);

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnexpectedTopLevelToken");
}

#[test]
fn test_pipeline_lexeme_fidelity() {
    let source = "abc123 + 45".to_string();
    let tokens = tokenize(source.clone(), Some("test.klua".to_string())).unwrap();

    for token in tokens.iter().filter(|t| t.kind != TokenKind::EOF) {
        let start = token.span.start.0 as usize;
        let end = token.span.end.0 as usize;
        assert_eq!(token.lexeme, &source[start..end]);
    }
}

#[test]
fn test_pipeline_independent_calls_are_isolated() {
    // A failing input does not disturb a later, valid one.
    let bad = tokenize("~".to_string(), Some("bad.klua".to_string()));
    assert!(bad.is_err());

    let good = tokenize("local x;".to_string(), Some("good.klua".to_string())).unwrap();
    let root = parse(good);
    assert!(root.is_ok());
}
