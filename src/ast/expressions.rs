use std::any::Any;

use crate::{
    ast::types::ValueType,
    lexer::tokens::Token,
    type_checker::typed_ast::{TypedExpr, TypedExprWrapper},
    Span,
};

use super::ast::{Expr, ExprType, ExprWrapper};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
///
/// The source spelling is kept so the literal is emitted exactly as written.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: String,
    pub span: Span,
}

impl NumberExpr {
    pub fn is_float(&self) -> bool {
        self.value.contains('.')
    }
}

impl Expr for NumberExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedExpr for NumberExpr {
    fn get_value_type(&self) -> ValueType {
        if self.is_float() {
            ValueType::Float
        } else {
            ValueType::Int
        }
    }
    fn clone_typed_wrapper(&self) -> TypedExprWrapper {
        TypedExprWrapper::new(self.clone())
    }
}

/// String Expression
/// Represents a string literal in the AST, without its quotes.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for StringExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedExpr for StringExpr {
    fn get_value_type(&self) -> ValueType {
        ValueType::String
    }
    fn clone_typed_wrapper(&self) -> TypedExprWrapper {
        TypedExprWrapper::new(self.clone())
    }
}

/// Boolean Expression
/// Represents `TRUE` or `FALSE`.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Expr for BooleanExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl TypedExpr for BooleanExpr {
    fn get_value_type(&self) -> ValueType {
        ValueType::Bool
    }
    fn clone_typed_wrapper(&self) -> TypedExprWrapper {
        TypedExprWrapper::new(self.clone())
    }
}

/// Symbol Expression
/// Represents a reference to a declared variable.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for SymbolExpr {
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

// COMPLEX

/// Binary Expression
/// Represents an arithmetic operation (`+ - * /`) between two expressions.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
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

/// Comparison Expression
/// Represents a relational operation. Chains fold to the left, so in
/// `a < b == c` the outer node's left operand is the comparison `a < b`.
#[derive(Debug, Clone)]
pub struct ComparisonExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for ComparisonExpr {
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

/// Grouping Expression
/// An expression that is emitted between literal parentheses.
#[derive(Debug, Clone)]
pub struct GroupingExpr {
    pub expression: ExprWrapper,
    pub span: Span,
}

impl Expr for GroupingExpr {
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
