use std::rc::Rc;

use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: i32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            // Order matters: two-character operators must come before their
            // one-character prefixes. There is no pattern for a bare `~`, so
            // a `~` without `=` falls through to the unexpected-character error.
            patterns: vec![
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler},
                RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler},
                RegexPattern { regex: Regex::new("[ \r\n\t]+").unwrap(), handler: skip_handler},
                RegexPattern { regex: Regex::new("\"").unwrap(), handler: string_handler},
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")},
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")},
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")},
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")},
                RegexPattern { regex: Regex::new("~=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "~=")},
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<")},
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")},
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")},
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")},
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")},
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")},
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")},
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*")}
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap()
    }

    /// The unconsumed tail of the source. The cursor only ever advances
    /// by whole pattern matches, so it always sits on a char boundary.
    pub fn remainder(&self) -> &str {
        &self.source[(self.pos as usize)..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.push(MK_TOKEN!(TokenKind::Number, matched.clone(), Span { start: Position(lexer.pos as u32, Rc::clone(&lexer.file)), end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file)) }));
    lexer.advance_n(matched.len() as i32);

    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched as i32);

    Ok(())
}

fn string_handler(lexer: &mut Lexer, _regex: Regex) -> Result<(), Error> {
    // No escape processing: the literal runs to the next `"`, whatever it
    // contains. Lexeme and cursor advance are both taken from the source
    // byte range, so multi-byte characters pass through untouched.
    let closing = lexer.remainder()[1..].find('"');

    match closing {
        Some(offset) => {
            let literal = String::from(&lexer.remainder()[1..offset + 1]);

            lexer.push(MK_TOKEN!(TokenKind::String, literal.clone(), Span { start: Position(lexer.pos as u32, Rc::clone(&lexer.file)), end: Position((lexer.pos + literal.len() as i32 + 2) as u32, Rc::clone(&lexer.file)) }));
            lexer.advance_n(literal.len() as i32 + 2);

            Ok(())
        }
        None => Err(Error::new(ErrorImpl::UnterminatedString, Position(lexer.pos as u32, Rc::clone(&lexer.file)))),
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        lexer.push(MK_TOKEN!(*kind, value.clone(), Span { start: Position(lexer.pos as u32, Rc::clone(&lexer.file)), end: Position((lexer.pos + value.len() as i32) as u32, Rc::clone(&lexer.file)) }));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, value.clone(), Span { start: Position(lexer.pos as u32, Rc::clone(&lexer.file)), end: Position((lexer.pos + value.len() as i32) as u32, Rc::clone(&lexer.file)) }));
    }

    lexer.advance_n(value.len() as i32);

    Ok(())
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in lex.clone().patterns.iter() {
            let matches_here = pattern
                .regex
                .find(lex.remainder())
                .map(|found| found.start() == 0)
                .unwrap_or(false);

            if matches_here {
                (pattern.handler)(&mut lex, pattern.regex.clone())?;
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(ErrorImpl::UnexpectedCharacter { character: lex.at().to_string() }, Position(lex.pos as u32, Rc::clone(&lex.file))));
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span { start: Position(lex.pos as u32, Rc::clone(&lex.file)), end: Position(lex.pos as u32, Rc::clone(&lex.file)) }));
    Ok(lex.tokens)
}
