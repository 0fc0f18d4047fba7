use crate::{ast::{ast::{Expr, ExprType, ExprWrapper, Program, Stmt, StmtType, StmtWrapper}, expressions::{BinaryExpr, BooleanExpr, ComparisonExpr, GroupingExpr, NumberExpr, StringExpr, SymbolExpr}, statements::{ElseBranch, ForStmt, GotoStmt, IfStmt, InputStmt, LabelStmt, LetStmt, PrintStmt, WhileStmt}, types::{SymbolTable, ValueType}}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind, Position};

use super::typed_ast::{TypedBinaryExpr, TypedComparisonExpr, TypedElseBranch, TypedExpr, TypedExprWrapper, TypedForStmt, TypedGroupingExpr, TypedIfStmt, TypedInputStmt, TypedLetStmt, TypedPrintStmt, TypedProgram, TypedStmtWrapper, TypedSymbolExpr, TypedWhileStmt};

/// Resolves variable types against the symbol table built by the parser.
#[derive(Debug)]
pub struct TypeChecker<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> TypeChecker<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        TypeChecker { symbols }
    }

    pub fn fetch_variable_type(&self, variable: &str, position: &Position) -> Result<ValueType, Error> {
        match self.symbols.get(variable) {
            Some(symbol) => Ok(symbol.declared_type),
            None => Err(Error::new(ErrorImpl::VariableNotDeclared { variable: variable.to_string() }, position.clone())),
        }
    }
}

fn operator_spelling(operator: TokenKind) -> &'static str {
    match operator {
        TokenKind::Plus => "+",
        TokenKind::Dash => "-",
        TokenKind::Star => "*",
        TokenKind::Slash => "/",
        TokenKind::Less => "<",
        TokenKind::LessEquals => "<=",
        TokenKind::Greater => ">",
        TokenKind::GreaterEquals => ">=",
        TokenKind::Equals => "==",
        TokenKind::NotEquals => "!=",
        _ => "=",
    }
}

/// Computes the result type of `left operator right`.
///
/// For `=` the left type is the assignment target and the right type is the value.
pub fn combine_types(left: ValueType, right: ValueType, operator: TokenKind, position: &Position) -> Result<ValueType, Error> {
    let numeric = if left.is_numeric() && right.is_numeric() {
        if left == ValueType::Int && right == ValueType::Int {
            Some(ValueType::Int)
        } else {
            Some(ValueType::Float)
        }
    } else {
        None
    };

    let result = match operator {
        TokenKind::Plus => match (left, right) {
            (ValueType::String, ValueType::String) => Some(ValueType::String),
            _ => numeric,
        },
        TokenKind::Dash | TokenKind::Star | TokenKind::Slash => numeric,
        TokenKind::Less | TokenKind::LessEquals | TokenKind::Greater | TokenKind::GreaterEquals => numeric.map(|_| ValueType::Bool),
        TokenKind::Equals | TokenKind::NotEquals => {
            if numeric.is_some() || (left == right && !left.is_numeric()) {
                Some(ValueType::Bool)
            } else {
                None
            }
        }
        _ => {
            if numeric.is_some() {
                numeric
            } else if left == right {
                Some(left)
            } else {
                None
            }
        }
    };

    if let Some(result) = result {
        return Ok(result);
    }

    let spelling = operator_spelling(operator).to_string();
    let error = match operator {
        TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash => ErrorImpl::InvalidOperationTypes { operator: spelling, left: left.to_string(), right: right.to_string() },
        TokenKind::Less | TokenKind::LessEquals | TokenKind::Greater | TokenKind::GreaterEquals => ErrorImpl::InvalidComparisonTypes { operator: spelling, left: left.to_string(), right: right.to_string() },
        TokenKind::Equals | TokenKind::NotEquals => ErrorImpl::InvalidEqualityTypes { operator: spelling, left: left.to_string(), right: right.to_string() },
        _ => ErrorImpl::InvalidAssignmentTypes { expected: left.to_string(), received: right.to_string() },
    };

    Err(Error::new(error, position.clone()))
}

pub fn type_check_expr(type_checker: &TypeChecker, ast: &ExprWrapper) -> Result<TypedExprWrapper, Error> {
    match ast.get_expr_type() {
        ExprType::Number => Ok(TypedExprWrapper::new(ast.downcast::<NumberExpr>()?.clone())),
        ExprType::String => Ok(TypedExprWrapper::new(ast.downcast::<StringExpr>()?.clone())),
        ExprType::Boolean => Ok(TypedExprWrapper::new(ast.downcast::<BooleanExpr>()?.clone())),
        ExprType::Symbol => {
            let symbol = ast.downcast::<SymbolExpr>()?;
            let value_type = type_checker.fetch_variable_type(&symbol.value, &symbol.span.start)?;

            Ok(TypedExprWrapper::new(TypedSymbolExpr {
                value: symbol.value.clone(),
                value_type,
                span: symbol.span.clone(),
            }))
        }
        ExprType::Binary => {
            let binary = ast.downcast::<BinaryExpr>()?;
            let left = type_check_expr(type_checker, &binary.left)?;
            let right = type_check_expr(type_checker, &binary.right)?;

            let value_type = combine_types(left.get_value_type(), right.get_value_type(), binary.operator.kind, &binary.operator.span.start)?;

            Ok(TypedExprWrapper::new(TypedBinaryExpr {
                left,
                operator: binary.operator.clone(),
                right,
                value_type,
                span: binary.span.clone(),
            }))
        }
        ExprType::Comparison => {
            let comparison = ast.downcast::<ComparisonExpr>()?;
            let left = type_check_expr(type_checker, &comparison.left)?;
            let right = type_check_expr(type_checker, &comparison.right)?;

            combine_types(left.get_value_type(), right.get_value_type(), comparison.operator.kind, &comparison.operator.span.start)?;

            Ok(TypedExprWrapper::new(TypedComparisonExpr {
                left,
                operator: comparison.operator.clone(),
                right,
                span: comparison.span.clone(),
            }))
        }
        ExprType::Grouping => {
            let grouping = ast.downcast::<GroupingExpr>()?;

            Ok(TypedExprWrapper::new(TypedGroupingExpr {
                expression: type_check_expr(type_checker, &grouping.expression)?,
                span: grouping.span.clone(),
            }))
        }
    }
}

fn type_check_body(type_checker: &TypeChecker, body: &[StmtWrapper]) -> Result<Vec<TypedStmtWrapper>, Error> {
    body.iter().map(|stmt| type_check_stmt(type_checker, stmt)).collect()
}

fn type_check_if(type_checker: &TypeChecker, stmt: &IfStmt) -> Result<TypedIfStmt, Error> {
    let condition = type_check_expr(type_checker, &stmt.condition)?;
    let then_body = type_check_body(type_checker, &stmt.then_body)?;

    let else_branch = match &stmt.else_branch {
        Some(ElseBranch::ElseIf(else_if)) => Some(TypedElseBranch::ElseIf(Box::new(type_check_if(type_checker, else_if)?))),
        Some(ElseBranch::Else(body)) => Some(TypedElseBranch::Else(type_check_body(type_checker, body)?)),
        None => None,
    };

    Ok(TypedIfStmt {
        condition,
        then_body,
        else_branch,
        span: stmt.span.clone(),
    })
}

fn expect_loop_type(value_type: ValueType, position: &Position) -> Result<(), Error> {
    if value_type.is_numeric() {
        Ok(())
    } else {
        Err(Error::new(ErrorImpl::InvalidLoopType { received: value_type.to_string() }, position.clone()))
    }
}

pub fn type_check_stmt(type_checker: &TypeChecker, ast: &StmtWrapper) -> Result<TypedStmtWrapper, Error> {
    match ast.get_stmt_type() {
        StmtType::PrintStmt => {
            let print = ast.downcast::<PrintStmt>()?;

            Ok(TypedStmtWrapper::new(TypedPrintStmt {
                value: type_check_expr(type_checker, &print.value)?,
                span: print.span.clone(),
            }))
        }
        StmtType::IfStmt => Ok(TypedStmtWrapper::new(type_check_if(type_checker, ast.downcast::<IfStmt>()?)?)),
        StmtType::WhileStmt => {
            let while_stmt = ast.downcast::<WhileStmt>()?;

            Ok(TypedStmtWrapper::new(TypedWhileStmt {
                condition: type_check_expr(type_checker, &while_stmt.condition)?,
                body: type_check_body(type_checker, &while_stmt.body)?,
                span: while_stmt.span.clone(),
            }))
        }
        StmtType::ForStmt => {
            let for_stmt = ast.downcast::<ForStmt>()?;

            let var_type = type_checker.fetch_variable_type(&for_stmt.variable, &for_stmt.span.start)?;
            expect_loop_type(var_type, &for_stmt.span.start)?;

            let start = type_check_expr(type_checker, &for_stmt.start)?;
            expect_loop_type(start.get_value_type(), &start.get_span().start)?;

            let end = type_check_expr(type_checker, &for_stmt.end)?;
            expect_loop_type(end.get_value_type(), &end.get_span().start)?;

            Ok(TypedStmtWrapper::new(TypedForStmt {
                variable: for_stmt.variable.clone(),
                var_type,
                start,
                end,
                body: type_check_body(type_checker, &for_stmt.body)?,
                span: for_stmt.span.clone(),
            }))
        }
        StmtType::LabelStmt => Ok(TypedStmtWrapper::new(ast.downcast::<LabelStmt>()?.clone())),
        StmtType::GotoStmt => Ok(TypedStmtWrapper::new(ast.downcast::<GotoStmt>()?.clone())),
        StmtType::LetStmt => {
            let let_stmt = ast.downcast::<LetStmt>()?;

            let var_type = type_checker.fetch_variable_type(&let_stmt.variable, &let_stmt.span.start)?;
            let value = type_check_expr(type_checker, &let_stmt.value)?;

            combine_types(var_type, value.get_value_type(), TokenKind::Assignment, &value.get_span().start)?;

            Ok(TypedStmtWrapper::new(TypedLetStmt {
                variable: let_stmt.variable.clone(),
                var_type,
                value,
                span: let_stmt.span.clone(),
            }))
        }
        StmtType::InputStmt => {
            let input = ast.downcast::<InputStmt>()?;

            Ok(TypedStmtWrapper::new(TypedInputStmt {
                variable: input.variable.clone(),
                var_type: type_checker.fetch_variable_type(&input.variable, &input.span.start)?,
                span: input.span.clone(),
            }))
        }
    }
}

/// Checks every statement of a parsed program and builds its typed AST.
///
/// Stops at the first type error.
pub fn type_check(program: &Program) -> Result<TypedProgram, Error> {
    let type_checker = TypeChecker::new(&program.symbols);

    Ok(TypedProgram {
        body: type_check_body(&type_checker, &program.body)?,
        symbols: program.symbols.clone(),
    })
}
