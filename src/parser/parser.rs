//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements are dispatched on their leading keyword; expressions use a
//! Pratt parser with NUD/LED handlers and binding powers.
//!
//! While parsing, the parser also builds:
//! - The symbol table (every variable and its declared type)
//! - The set of declared labels
//! - The list of GOTO targets, checked once the whole program is parsed

use std::{
    collections::{HashMap, HashSet},
    rc::Rc,
};

use crate::{
    ast::{
        ast::Program,
        types::{Symbol, SymbolTable, ValueType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    symbols: SymbolTable,
    labels_declared: HashSet<String>,
    labels_gotoed: Vec<(String, Position)>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A missing EOF sentinel is appended so the cursor can never run off the stream.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            symbols: SymbolTable::new(),
            labels_declared: HashSet::new(),
            labels_gotoed: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token after the current one, or EOF.
    pub fn peek(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor stays on EOF once it gets there.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if index < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.describe(),
                        message: format!("expected {}", expected_kind),
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

    /// Consumes the end of a line: one or more newlines, or the end of input.
    pub fn expect_newline(&mut self) -> Result<(), Error> {
        match self.current_token_kind() {
            TokenKind::EOF => Ok(()),
            TokenKind::Newline => {
                self.skip_newlines();
                Ok(())
            }
            _ => Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: self.current_token().describe(),
                    message: String::from("expected a newline after the statement"),
                },
                self.get_position(),
            )),
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.current_token_kind() == TokenKind::Newline {
            self.advance();
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Binding powers belong to infix use only; `-` is both.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Applies the declaration rule for LET, INPUT and FOR.
    ///
    /// With a type keyword the name must be new; without one it must already exist.
    pub fn check_declaration(
        &self,
        name: &str,
        declared_type: Option<ValueType>,
        position: &Position,
    ) -> Result<(), Error> {
        match (declared_type, self.symbols.contains(name)) {
            (Some(_), true) => Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.to_string(),
                },
                position.clone(),
            )),
            (None, false) => Err(Error::new(
                ErrorImpl::MissingTypeKeyword {
                    variable: name.to_string(),
                },
                position.clone(),
            )),
            _ => Ok(()),
        }
    }

    pub fn declare_symbol(&mut self, name: &str, declared_type: ValueType, position: Position) {
        self.symbols.insert(Symbol {
            name: name.to_string(),
            declared_type,
            position,
        });
    }

    pub fn declare_label(&mut self, name: &str, position: Position) -> Result<(), Error> {
        if !self.labels_declared.insert(name.to_string()) {
            return Err(Error::new(
                ErrorImpl::LabelAlreadyDeclared {
                    label: name.to_string(),
                },
                position,
            ));
        }
        Ok(())
    }

    pub fn record_goto(&mut self, name: &str, position: Position) {
        self.labels_gotoed.push((name.to_string(), position));
    }
}

/// Parses a stream of tokens into a `Program`.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, parses every statement until EOF and
/// finally checks that every GOTO names a declared label.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, Rc::clone(&file));
    create_token_lookups(&mut parser);

    let mut body = vec![];

    parser.skip_newlines();
    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    for (label, position) in &parser.labels_gotoed {
        if !parser.labels_declared.contains(label) {
            return Err(Error::new(
                ErrorImpl::UndeclaredLabel {
                    label: label.clone(),
                },
                position.clone(),
            ));
        }
    }

    let end = parser.get_position();
    Ok(Program {
        body,
        symbols: parser.symbols,
        labels_declared: parser.labels_declared,
        labels_gotoed: parser.labels_gotoed,
        span: Span {
            start: Position(0, file),
            end,
        },
    })
}
