#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    compiler::compiler::compile,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Byte offset into a source file, paired with the file's name.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs every stage over `source` and returns the generated C program.
pub fn compile_source(source: String, file: Option<String>) -> Result<String, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));

    let tokens = tokenize(source, file)?;
    let program = parse(tokens, file_name)?;
    let typed_program = type_check(&program)?;
    let compiler = compile(&typed_program)?;

    Ok(compiler.get_output())
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within that line.
/// Offsets past the end of the source resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = String::new();

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        last_line = line.to_string();
        line_number += 1;
    }

    if last_line.is_empty() {
        return (1, String::new(), 0);
    }

    // End of input: point just past the last visible character
    let trimmed = last_line.trim_end_matches(['\n', '\r']).to_string();
    let line_pos = trimmed.len();
    (line_number - 1, trimmed, line_pos)
}

pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: name (tip)
        -> prog.bas:20
           |
        20 | LET INT a = @
           | ------------^
    */

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    if !error.has_source_position() {
        output.push_str(&format!("-> {}\n", file));
        return output;
    }

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("-> {}:{}\n", file, line));
    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    print!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    const SOURCE: &str = "LET INT x = 1\nPRINT x\n    PRINT y\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "LET INT x = 1\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 20);
        assert_eq!(line_number, 2);
        assert_eq!(line, "PRINT x\n");
        assert_eq!(line_pos, 6);
    }

    #[test]
    fn test_get_line_past_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 500);
        assert_eq!(line_number, 3);
        assert_eq!(line, "    PRINT y");
        assert_eq!(line_pos, 11);

        assert_eq!(super::get_line_at_position("", 3), (1, String::new(), 0));
    }

    #[test]
    fn test_format_error_points_at_column() {
        let error = Error::new(
            ErrorImpl::VariableNotDeclared { variable: "y".to_string() },
            Position(32, Rc::new("prog.bas".to_string())),
        );

        let report = super::format_error(&error, SOURCE, "prog.bas");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines[0],
            "Error: VariableNotDeclared (Variable `y` referenced before declaration)"
        );
        assert_eq!(lines[1], "-> prog.bas:3");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "3 | PRINT y");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_format_resource_error_has_no_source_line() {
        let error = Error::new(
            ErrorImpl::FileNotReadable {
                path: "missing.bas".to_string(),
                reason: "not found".to_string(),
            },
            Position::null(),
        );

        let report = super::format_error(&error, "", "missing.bas");
        assert_eq!(report.lines().count(), 2);
        assert!(report.starts_with("Error: FileNotReadable"));
    }

    #[test]
    fn test_compile_source_reports_first_error() {
        let error = super::compile_source("PRINT nope\n".to_string(), None).unwrap_err();
        assert_eq!(error.get_error_name(), "VariableNotDeclared");
        assert_eq!(error.get_position().0, 6);
    }
}
