/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions, traits and the parsed `Program`
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
/// - types: Value types and the symbol table
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
