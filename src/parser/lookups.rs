use std::collections::HashMap;

use crate::{ast::ast::{ExprWrapper, StmtWrapper}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
    Unary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<ExprWrapper, Error>;
pub type LEDHandler = fn(&mut Parser, ExprWrapper, BindingPower) -> Result<ExprWrapper, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::Equals, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Relational, parse_comparison_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Plus, parse_unary_expr);
    parser.nud(TokenKind::Dash, parse_unary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Label, parse_label_stmt);
    parser.stmt(TokenKind::Goto, parse_goto_stmt);
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Input, parse_input_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
