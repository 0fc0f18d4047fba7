//! Code generation module for the compiler.
//!
//! This module contains the C code generator that transforms the typed
//! AST into a standalone C program. It handles:
//!
//! - Compilation of expressions and statements
//! - Variable declarations and string ownership
//! - The C preamble and string helpers
//! - Writing the finished program out

pub mod compiler;
pub mod expr;
pub mod stdlib;
pub mod stmt;
