//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, type keywords and identifiers
//! - Numeric literals (integers and decimals)
//! - String literals and their forbidden characters
//! - Operators, newlines and comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.bas".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "LABEL GOTO PRINT INPUT LET IF THEN ELSEIF ELSE ENDIF WHILE REPEAT ENDWHILE FOR TO ENDFOR";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Label,
            TokenKind::Goto,
            TokenKind::Print,
            TokenKind::Input,
            TokenKind::Let,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::ElseIf,
            TokenKind::Else,
            TokenKind::EndIf,
            TokenKind::While,
            TokenKind::Repeat,
            TokenKind::EndWhile,
            TokenKind::For,
            TokenKind::To,
            TokenKind::EndFor,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_type_keywords_and_booleans() {
    assert_eq!(
        kinds("INT FLOAT BOOL STRING TRUE FALSE"),
        vec![
            TokenKind::IntType,
            TokenKind::FloatType,
            TokenKind::BoolType,
            TokenKind::StringType,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    let tokens = tokenize("print Let".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "print");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "Let");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_2 _under PRINTER".to_string(), None).unwrap();

    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_2");
    assert_eq!(tokens[2].value, "_under");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "PRINTER");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "100.5");
}

#[test]
fn test_number_with_trailing_decimal_point_fails() {
    let error = tokenize("LET INT x = 1.".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::MalformedNumber { token: "1.".to_string() }
    );
    assert_eq!(error.get_position().0, 12);
}

#[test]
fn test_number_followed_by_letter_fails() {
    let error = tokenize("12abc".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "MalformedNumber");
}

#[test]
fn test_integer_literal_must_fit_int() {
    let tokens = tokenize("2147483647".to_string(), None).unwrap();
    assert_eq!(tokens[0].value, "2147483647");

    let error = tokenize("LET INT x = 2147483648".to_string(), None).unwrap_err();
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::NumberOutOfRange { token: "2147483648".to_string() }
    );
    assert_eq!(error.get_position().0, 12);

    // Large fractional literals are left to C
    assert!(tokenize("99999999999.5".to_string(), None).is_ok());
}

#[test]
fn test_leading_zeros_are_kept_in_token() {
    let tokens = tokenize("010".to_string(), None).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "010");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize("PRINT \"hello world\"".to_string(), None).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "hello world");
    assert_eq!(tokens[1].span.start.0, 6);
    assert_eq!(tokens[1].span.end.0, 19);
}

#[test]
fn test_empty_string() {
    let tokens = tokenize("\"\"".to_string(), None).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "");
}

#[test]
fn test_illegal_characters_in_string() {
    for (source, character) in [
        ("\"50%\"", '%'),
        ("\"a\\b\"", '\\'),
        ("\"tab\there\"", '\t'),
        ("\"split\nline\"", '\n'),
    ] {
        let error = tokenize(source.to_string(), None).unwrap_err();
        assert_eq!(
            error.get_error_impl(),
            &ErrorImpl::IllegalCharacterInString { character }
        );
    }
}

#[test]
fn test_illegal_character_position_points_into_string() {
    let error = tokenize("PRINT \"ab%\"".to_string(), None).unwrap_err();
    assert_eq!(error.get_position().0, 9);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("PRINT \"oops".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / = == != < <= > >= ( )"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operators_without_spaces() {
    assert_eq!(
        kinds("x<=10"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_newlines_are_tokens() {
    assert_eq!(
        kinds("PRINT 1\r\n\nPRINT 2"),
        vec![
            TokenKind::Print,
            TokenKind::Number,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Print,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("# heading\nPRINT 1 # trailing"),
        vec![
            TokenKind::Newline,
            TokenKind::Print,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("LET INT x = 5 @".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnrecognisedToken { token: "@".to_string() }
    );
    assert_eq!(error.get_position().0, 14);
}

#[test]
fn test_lone_bang_is_unrecognised() {
    let error = tokenize("x ! y".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_empty_source_yields_eof() {
    let tokens = tokenize(String::new(), None).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans_carry_file_name() {
    let tokens = tokenize("PRINT x".to_string(), Some("prog.bas".to_string())).unwrap();
    assert_eq!(tokens[1].span.start.1.as_str(), "prog.bas");
    assert_eq!(tokens[1].span.start.0, 6);
    assert_eq!(tokens[1].span.end.0, 7);
}
