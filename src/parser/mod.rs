//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. It uses a Pratt parser for expressions with proper
//! operator precedence and handles:
//!
//! - Statement parsing (PRINT, IF, WHILE, FOR, LABEL, GOTO, LET, INPUT)
//! - Expression parsing (arithmetic, comparisons, groups, signs)
//! - Declaration checks for variables and labels
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
