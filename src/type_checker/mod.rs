//! Type checking and semantic analysis module.
//!
//! This module performs type checking on the parsed program.
//! It transforms the untyped AST into a typed AST while:
//!
//! - Assigning a value type to every expression
//! - Resolving variable types from the parser's symbol table
//! - Validating operator and operand compatibility
//! - Checking assignments and loop bounds
//!
//! There is no implicit conversion other than INT widening to FLOAT.

pub mod type_checker;
pub mod typed_ast;
