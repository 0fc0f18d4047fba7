//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts BASIC source
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Significant newlines (statements are line terminated)
//! - `#` comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
