use std::any::Any;

use crate::{
    type_checker::typed_ast::{TypedStmt, TypedStmtWrapper},
    Span,
};

use super::{
    ast::{ExprWrapper, Stmt, StmtType, StmtWrapper},
    types::ValueType,
};

/// `PRINT value`. The value is either a string literal or any expression.
#[derive(Debug, Clone)]
pub struct PrintStmt {
    pub value: ExprWrapper,
    pub span: Span,
}

impl Stmt for PrintStmt {
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

/// What follows the THEN body of an IF.
#[derive(Debug, Clone)]
pub enum ElseBranch {
    ElseIf(Box<IfStmt>),
    Else(Vec<StmtWrapper>),
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: ExprWrapper,
    pub then_body: Vec<StmtWrapper>,
    pub else_branch: Option<ElseBranch>,
    pub span: Span,
}

impl Stmt for IfStmt {
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

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: ExprWrapper,
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}

impl Stmt for WhileStmt {
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

/// `FOR [type] i = start TO end REPEAT ... ENDFOR`, inclusive of `end`.
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub variable: String,
    /// Set when the loop itself declares the variable.
    pub declared_type: Option<ValueType>,
    pub start: ExprWrapper,
    pub end: ExprWrapper,
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}

impl Stmt for ForStmt {
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

#[derive(Debug, Clone)]
pub struct LabelStmt {
    pub name: String,
    pub span: Span,
}

impl Stmt for LabelStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LabelStmt
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

impl TypedStmt for LabelStmt {
    fn clone_typed_wrapper(&self) -> TypedStmtWrapper {
        TypedStmtWrapper::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct GotoStmt {
    pub label: String,
    pub span: Span,
}

impl Stmt for GotoStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::GotoStmt
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

impl TypedStmt for GotoStmt {
    fn clone_typed_wrapper(&self) -> TypedStmtWrapper {
        TypedStmtWrapper::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct LetStmt {
    pub variable: String,
    pub declared_type: Option<ValueType>,
    pub value: ExprWrapper,
    pub span: Span,
}

impl Stmt for LetStmt {
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

#[derive(Debug, Clone)]
pub struct InputStmt {
    pub variable: String,
    pub declared_type: Option<ValueType>,
    pub span: Span,
}

impl Stmt for InputStmt {
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
