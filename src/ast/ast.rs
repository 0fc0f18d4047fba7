use std::{any::Any, collections::HashSet, fmt::Debug, ops::Deref};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

use super::types::SymbolTable;

/// Statement Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    PrintStmt,
    IfStmt,
    WhileStmt,
    ForStmt,
    LabelStmt,
    GotoStmt,
    LetStmt,
    InputStmt,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST.
pub trait Stmt: Debug {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
    /// Returns the span of the statement.
    fn get_span(&self) -> &Span;
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }

    /// Borrows the inner statement as a concrete node type.
    pub fn downcast<T: 'static>(&self) -> Result<&T, Error> {
        downcast_node(self.0.as_any(), self.0.get_span())
    }
}

impl Deref for StmtWrapper {
    type Target = Box<dyn Stmt>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &Span {
        self.0.get_span()
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    String,
    Boolean,
    Symbol,
    Binary,
    Comparison,
    Grouping,
}

pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &Span;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }

    /// Borrows the inner expression as a concrete node type.
    pub fn downcast<T: 'static>(&self) -> Result<&T, Error> {
        downcast_node(self.0.as_any(), self.0.get_span())
    }
}

impl Expr for ExprWrapper {
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &Span {
        self.0.get_span()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Downcasts a node, turning a kind/shape mismatch into a `MalformedTree` error.
pub fn downcast_node<'a, T: 'static>(node: &'a dyn Any, span: &Span) -> Result<&'a T, Error> {
    node.downcast_ref::<T>().ok_or_else(|| {
        Error::new(
            ErrorImpl::MalformedTree {
                expected: String::from(std::any::type_name::<T>()),
            },
            span.start.clone(),
        )
    })
}

/// A parsed program together with the tables built while parsing it.
#[derive(Debug, Clone)]
pub struct Program {
    pub body: Vec<StmtWrapper>,
    pub symbols: SymbolTable,
    pub labels_declared: HashSet<String>,
    /// Every GOTO target in source order, with the position of the GOTO.
    pub labels_gotoed: Vec<(String, Position)>,
    pub span: Span,
}
