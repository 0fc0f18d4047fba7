//! Typed Abstract Syntax Tree definitions.
//!
//! This module contains the typed variants of AST nodes produced by
//! the type checker. The typed AST mirrors the parsed tree, but every
//! expression carries the value type it was assigned during checking,
//! and every operation in it has been validated.
//!
//! Literals, labels and GOTOs have nothing left to resolve, so their
//! parsed nodes implement the typed traits directly.
//!
//! This typed AST is consumed by the code generator to produce C.

use std::any::Any;

use crate::{
    ast::{
        ast::{downcast_node, Expr, ExprType, ExprWrapper, Stmt, StmtType, StmtWrapper},
        types::{SymbolTable, ValueType},
    },
    errors::errors::Error,
    lexer::tokens::Token,
    Span,
};

/// Trait for typed statement nodes.
///
/// Extends the Stmt trait with typed-specific functionality.
pub trait TypedStmt: Stmt {
    /// Clones this statement into a TypedStmtWrapper.
    fn clone_typed_wrapper(&self) -> TypedStmtWrapper;
}

/// Wrapper for typed statement nodes.
///
/// Provides a uniform interface for all typed statement types.
#[derive(Debug)]
pub struct TypedStmtWrapper(Box<dyn TypedStmt>);

impl TypedStmtWrapper {
    /// Creates a new TypedStmtWrapper around a typed statement.
    pub fn new<T: TypedStmt + 'static>(stmt: T) -> Self {
        TypedStmtWrapper(Box::new(stmt))
    }

    /// Borrows the inner statement as a concrete node type.
    pub fn downcast<T: 'static>(&self) -> Result<&T, Error> {
        downcast_node(self.0.as_any(), self.0.get_span())
    }
}

impl Stmt for TypedStmtWrapper {
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

impl TypedStmt for TypedStmtWrapper {
    fn clone_typed_wrapper(&self) -> TypedStmtWrapper {
        self.0.clone_typed_wrapper()
    }
}

impl Clone for TypedStmtWrapper {
    fn clone(&self) -> Self {
        self.0.clone_typed_wrapper()
    }
}

pub trait TypedExpr: Expr {
    /// The value type assigned by the type checker.
    fn get_value_type(&self) -> ValueType;
    fn clone_typed_wrapper(&self) -> TypedExprWrapper;
}

#[derive(Debug)]
pub struct TypedExprWrapper(Box<dyn TypedExpr>);

impl TypedExprWrapper {
    pub fn new<T: TypedExpr + 'static>(expression: T) -> Self {
        TypedExprWrapper(Box::new(expression))
    }

    /// Borrows the inner expression as a concrete node type.
    pub fn downcast<T: 'static>(&self) -> Result<&T, Error> {
        downcast_node(self.0.as_any(), self.0.get_span())
    }
}

impl Expr for TypedExprWrapper {
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

impl TypedExpr for TypedExprWrapper {
    fn get_value_type(&self) -> ValueType {
        self.0.get_value_type()
    }
    fn clone_typed_wrapper(&self) -> TypedExprWrapper {
        self.0.clone_typed_wrapper()
    }
}

impl Clone for TypedExprWrapper {
    fn clone(&self) -> Self {
        self.0.clone_typed_wrapper()
    }
}

/// The checked program handed to the code generator.
#[derive(Debug, Clone)]
pub struct TypedProgram {
    pub body: Vec<TypedStmtWrapper>,
    pub symbols: SymbolTable,
}

// EXPRESSIONS

#[derive(Debug, Clone)]
pub struct TypedSymbolExpr {
    pub value: String,
    pub value_type: ValueType,
    pub span: Span,
}

impl Expr for TypedSymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedExpr for TypedSymbolExpr {
    fn get_value_type(&self) -> ValueType {
        self.value_type
    }
    fn clone_typed_wrapper(&self) -> TypedExprWrapper {
        TypedExprWrapper::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct TypedBinaryExpr {
    pub left: TypedExprWrapper,
    pub operator: Token,
    pub right: TypedExprWrapper,
    pub value_type: ValueType,
    pub span: Span,
}

impl Expr for TypedBinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedExpr for TypedBinaryExpr {
    fn get_value_type(&self) -> ValueType {
        self.value_type
    }
    fn clone_typed_wrapper(&self) -> TypedExprWrapper {
        TypedExprWrapper::new(self.clone())
    }
}

/// A checked comparison. Its value is always BOOL; the operand types decide how it is emitted.
#[derive(Debug, Clone)]
pub struct TypedComparisonExpr {
    pub left: TypedExprWrapper,
    pub operator: Token,
    pub right: TypedExprWrapper,
    pub span: Span,
}

impl Expr for TypedComparisonExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Comparison
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedExpr for TypedComparisonExpr {
    fn get_value_type(&self) -> ValueType {
        ValueType::Bool
    }
    fn clone_typed_wrapper(&self) -> TypedExprWrapper {
        TypedExprWrapper::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct TypedGroupingExpr {
    pub expression: TypedExprWrapper,
    pub span: Span,
}

impl Expr for TypedGroupingExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Grouping
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedExpr for TypedGroupingExpr {
    fn get_value_type(&self) -> ValueType {
        self.expression.get_value_type()
    }
    fn clone_typed_wrapper(&self) -> TypedExprWrapper {
        TypedExprWrapper::new(self.clone())
    }
}

// STATEMENTS

#[derive(Debug, Clone)]
pub struct TypedPrintStmt {
    pub value: TypedExprWrapper,
    pub span: Span,
}

impl Stmt for TypedPrintStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::PrintStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedStmt for TypedPrintStmt {
    fn clone_typed_wrapper(&self) -> TypedStmtWrapper {
        TypedStmtWrapper::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub enum TypedElseBranch {
    ElseIf(Box<TypedIfStmt>),
    Else(Vec<TypedStmtWrapper>),
}

#[derive(Debug, Clone)]
pub struct TypedIfStmt {
    pub condition: TypedExprWrapper,
    pub then_body: Vec<TypedStmtWrapper>,
    pub else_branch: Option<TypedElseBranch>,
    pub span: Span,
}

impl Stmt for TypedIfStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IfStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedStmt for TypedIfStmt {
    fn clone_typed_wrapper(&self) -> TypedStmtWrapper {
        TypedStmtWrapper::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct TypedWhileStmt {
    pub condition: TypedExprWrapper,
    pub body: Vec<TypedStmtWrapper>,
    pub span: Span,
}

impl Stmt for TypedWhileStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::WhileStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedStmt for TypedWhileStmt {
    fn clone_typed_wrapper(&self) -> TypedStmtWrapper {
        TypedStmtWrapper::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct TypedForStmt {
    pub variable: String,
    pub var_type: ValueType,
    pub start: TypedExprWrapper,
    pub end: TypedExprWrapper,
    pub body: Vec<TypedStmtWrapper>,
    pub span: Span,
}

impl Stmt for TypedForStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ForStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedStmt for TypedForStmt {
    fn clone_typed_wrapper(&self) -> TypedStmtWrapper {
        TypedStmtWrapper::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct TypedLetStmt {
    pub variable: String,
    pub var_type: ValueType,
    pub value: TypedExprWrapper,
    pub span: Span,
}

impl Stmt for TypedLetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedStmt for TypedLetStmt {
    fn clone_typed_wrapper(&self) -> TypedStmtWrapper {
        TypedStmtWrapper::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct TypedInputStmt {
    pub variable: String,
    pub var_type: ValueType,
    pub span: Span,
}

impl Stmt for TypedInputStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::InputStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedStmt for TypedInputStmt {
    fn clone_typed_wrapper(&self) -> TypedStmtWrapper {
        TypedStmtWrapper::new(self.clone())
    }
}
