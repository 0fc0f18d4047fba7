use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

// Every pattern is anchored, so a match is always a match at the cursor.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[ \\t\\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\n").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Newline, "\n") },
        RegexPattern { regex: Regex::new("^#[^\\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
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
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes from the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }
}

fn matched_text(lexer: &Lexer, regex: &Regex) -> String {
    regex
        .find(lexer.remainder())
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_default()
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = matched_text(lexer, regex);

    // `1.`, `1.x` and `12abc` are all rejected rather than split into two tokens
    if let Some(next) = lexer.remainder()[matched.len()..].chars().next() {
        if next == '.' || next == '_' || next.is_ascii_alphabetic() {
            return Err(Error::new(
                ErrorImpl::MalformedNumber { token: format!("{}{}", matched, next) },
                lexer.position(),
            ));
        }
    }

    if !matched.contains('.') && matched.parse::<i32>().is_err() {
        return Err(Error::new(
            ErrorImpl::NumberOutOfRange { token: matched },
            lexer.position(),
        ));
    }

    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, span));
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = matched_text(lexer, regex);
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = matched_text(lexer, regex);
    let string_literal = &matched[1..matched.len() - 1];

    // The literal text is copied verbatim into a C format string.
    for (offset, ch) in string_literal.char_indices() {
        if matches!(ch, '\r' | '\n' | '\t' | '\\' | '%') {
            return Err(Error::new(
                ErrorImpl::IllegalCharacterInString { character: ch },
                Position((lexer.pos + 1 + offset) as u32, Rc::clone(&lexer.file)),
            ));
        }
    }

    let value = string_literal.to_string();
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::String, value, span));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = matched_text(lexer, regex);
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(value.len());
    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(kind, value, span));
    Ok(())
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None if lex.at() == '"' => {
                return Err(Error::new(ErrorImpl::UnterminatedString, lex.position()));
            }
            None => {
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token: lex.at().to_string() }, lex.position()));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}
