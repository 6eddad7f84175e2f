#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

pub fn get_line_at_position(file: PathBuf, position: u32) -> (usize, String, usize) {
    let content = fs::read_to_string(&file).unwrap();

    if content.is_empty() {
        return (1, String::new(), 0);
    }

    // Errors raised at the EOF sentinel sit one past the last byte;
    // clamp those onto the last line so the caret still renders.
    let pos = (position as usize).min(content.len() - 1);

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    panic!("Failed to find line containing position");
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::lexer::tokens::TokenKind;
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) =
            super::get_line_at_position(PathBuf::from("tests/test_file.txt"), 3);
        assert_eq!(line_number, 1);
        assert_eq!(line, "local x = 1;\n");
        assert_eq!(line_pos, 3);

        let (line_number, line, line_pos) =
            super::get_line_at_position(PathBuf::from("tests/test_file.txt"), 22);
        assert_eq!(line_number, 2);
        assert_eq!(line, "if x == 1 then\n");
        assert_eq!(line_pos, 9);
    }

    #[test]
    fn test_get_line_at_position_clamps_past_end() {
        // The fixture is 72 bytes long; a position at or past the end
        // lands on the last line instead of panicking.
        let (line_number, line, line_pos) =
            super::get_line_at_position(PathBuf::from("tests/test_file.txt"), 72);
        assert_eq!(line_number, 6);
        assert_eq!(line, "end;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) =
            super::get_line_at_position(PathBuf::from("tests/test_file.txt"), 1000);
        assert_eq!(line_number, 6);
        assert_eq!(line, "end;\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_display_error_at_end_of_file() {
        // A missing trailing semicolon reports at the EOF token, whose
        // position equals the source length.
        let error = Error::new(
            ErrorImpl::ExpectedToken {
                expected: TokenKind::Semicolon,
                found: String::new(),
            },
            Position(72, Rc::new("test_file.txt".to_string())),
        );

        super::display_error(error, PathBuf::from("tests/test_file.txt"));
    }

    #[test]
    fn test_display_error_caret_in_leading_whitespace() {
        // Position 29 falls inside line 3's stripped indentation; the
        // caret offset saturates instead of underflowing.
        let error = Error::new(
            ErrorImpl::UnexpectedCharacter {
                character: " ".to_string(),
            },
            Position(29, Rc::new("test_file.txt".to_string())),
        );

        super::display_error(error, PathBuf::from("tests/test_file.txt"));
    }
}

pub fn display_error(error: Error, file: PathBuf) {
    /*
        error: message
        -> final.klua
           |
        20 | local a = #;
           | ----------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(file.clone(), position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
