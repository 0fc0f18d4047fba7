//! Value types and the symbol table.
//!
//! Every variable has exactly one of four value types, fixed at the
//! statement that first declares it. The symbol table keeps symbols in
//! declaration order so that generated declarations are deterministic.

use std::{collections::HashMap, fmt::Display};

use crate::{lexer::tokens::TokenKind, Position};

/// The type of a value at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    Float,
    Bool,
    String,
}

impl ValueType {
    /// Maps a type keyword token to its value type.
    pub fn from_keyword(kind: TokenKind) -> Option<ValueType> {
        match kind {
            TokenKind::IntType => Some(ValueType::Int),
            TokenKind::FloatType => Some(ValueType::Float),
            TokenKind::BoolType => Some(ValueType::Bool),
            TokenKind::StringType => Some(ValueType::String),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Int | ValueType::Float)
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::Int => "INT",
            ValueType::Float => "FLOAT",
            ValueType::Bool => "BOOL",
            ValueType::String => "STRING",
        };
        write!(f, "{}", name)
    }
}

/// A declared variable.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub declared_type: ValueType,
    pub position: Position,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Registers a symbol. Returns false, leaving the table unchanged, if the name is taken.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        if self.index.contains_key(&symbol.name) {
            return false;
        }

        self.index.insert(symbol.name.clone(), self.symbols.len());
        self.symbols.push(symbol);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|index| &self.symbols[*index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Symbols in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
