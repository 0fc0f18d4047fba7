//! Unit tests for the parser module.
//!
//! This module contains tests for parsing language constructs including:
//! - Declarations and the symbol table
//! - Labels and GOTO resolution
//! - Expression precedence, associativity, groups and signs
//! - Control flow statements
//! - Error cases

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, ExprType, ExprWrapper, Program, StmtType},
        expressions::{BinaryExpr, ComparisonExpr, GroupingExpr, NumberExpr, SymbolExpr},
        statements::{ElseBranch, ForStmt, IfStmt, LetStmt, WhileStmt},
        types::ValueType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.bas".to_string())).unwrap();
    parse(tokens, Rc::new("test.bas".to_string()))
}

fn let_value(program: &Program, index: usize) -> ExprWrapper {
    program.body[index].downcast::<LetStmt>().unwrap().value.clone()
}

fn number(expr: &ExprWrapper) -> String {
    expr.downcast::<NumberExpr>().unwrap().value.clone()
}

#[test]
fn test_parse_let_declaration() {
    let program = parse_source("LET INT x = 42\n").unwrap();

    assert_eq!(program.body.len(), 1);
    assert_eq!(program.body[0].get_stmt_type(), StmtType::LetStmt);

    let symbol = program.symbols.get("x").unwrap();
    assert_eq!(symbol.declared_type, ValueType::Int);
    assert_eq!(symbol.position.0, 8);
}

#[test]
fn test_parse_without_trailing_newline() {
    let program = parse_source("LET FLOAT f = 1.5").unwrap();
    assert_eq!(program.symbols.get("f").unwrap().declared_type, ValueType::Float);
}

#[test]
fn test_blank_lines_and_comments() {
    let program = parse_source("\n\n# setup\nLET INT x = 1\n\n\nPRINT x # show\n\n").unwrap();
    assert_eq!(program.body.len(), 2);
}

#[test]
fn test_empty_program() {
    let program = parse_source("").unwrap();
    assert!(program.body.is_empty());
    assert!(program.symbols.is_empty());
}

#[test]
fn test_symbols_keep_declaration_order() {
    let program = parse_source("LET STRING s = \"a\"\nINPUT BOOL b\nLET INT a = 1\n").unwrap();
    let names: Vec<&str> = program.symbols.iter().map(|symbol| symbol.name.as_str()).collect();
    assert_eq!(names, vec!["s", "b", "a"]);
}

#[test]
fn test_undeclared_variable() {
    let error = parse_source("PRINT y\n").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::VariableNotDeclared { variable: "y".to_string() }
    );
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_declaration_cannot_reference_itself() {
    let error = parse_source("LET INT x = x + 1\n").unwrap_err();
    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_redeclaration_fails() {
    let error = parse_source("LET INT x = 1\nLET FLOAT x = 2.0\n").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::VariableAlreadyDeclared { variable: "x".to_string() }
    );
    assert_eq!(error.get_position().0, 24);
}

#[test]
fn test_assignment_without_declaration_fails() {
    let error = parse_source("LET x = 1\n").unwrap_err();
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::MissingTypeKeyword { variable: "x".to_string() }
    );
}

#[test]
fn test_input_without_declaration_fails() {
    let error = parse_source("INPUT n\n").unwrap_err();
    assert_eq!(error.get_error_name(), "MissingTypeKeyword");
}

#[test]
fn test_reassignment_without_type_keyword() {
    let program = parse_source("LET INT x = 1\nLET x = x + 1\n").unwrap();
    let stmt = program.body[1].downcast::<LetStmt>().unwrap();
    assert!(stmt.declared_type.is_none());
}

#[test]
fn test_goto_forward_label() {
    let program = parse_source("GOTO skip\nPRINT \"never\"\nLABEL skip\n").unwrap();

    assert!(program.labels_declared.contains("skip"));
    assert_eq!(program.labels_gotoed.len(), 1);
    assert_eq!(program.labels_gotoed[0].0, "skip");
}

#[test]
fn test_goto_undeclared_label() {
    let error = parse_source("LABEL a\nGOTO b\nGOTO c\n").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UndeclaredLabel { label: "b".to_string() }
    );
    assert_eq!(error.get_position().0, 13);
}

#[test]
fn test_duplicate_label() {
    let error = parse_source("LABEL a\nLABEL a\n").unwrap_err();
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::LabelAlreadyDeclared { label: "a".to_string() }
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    let program = parse_source("LET INT x = 10 - 2 - 3\n").unwrap();
    let value = let_value(&program, 0);

    let outer = value.downcast::<BinaryExpr>().unwrap();
    assert_eq!(outer.operator.value, "-");
    assert_eq!(number(&outer.right), "3");

    let inner = outer.left.downcast::<BinaryExpr>().unwrap();
    assert_eq!(number(&inner.left), "10");
    assert_eq!(number(&inner.right), "2");
}

#[test]
fn test_multiplication_binds_tighter() {
    let program = parse_source("LET INT x = 1 + 2 * 3\n").unwrap();
    let value = let_value(&program, 0);

    let outer = value.downcast::<BinaryExpr>().unwrap();
    assert_eq!(outer.operator.value, "+");
    assert_eq!(number(&outer.left), "1");
    assert_eq!(outer.right.get_expr_type(), ExprType::Binary);
}

#[test]
fn test_parenthesised_group() {
    let program = parse_source("LET INT x = (1 + 2) * 3\n").unwrap();
    let value = let_value(&program, 0);

    let outer = value.downcast::<BinaryExpr>().unwrap();
    assert_eq!(outer.operator.value, "*");
    assert_eq!(outer.left.get_expr_type(), ExprType::Grouping);

    let group = outer.left.downcast::<GroupingExpr>().unwrap();
    assert_eq!(group.expression.get_expr_type(), ExprType::Binary);
}

#[test]
fn test_negative_operand_is_grouped() {
    let program = parse_source("LET INT x = 2 * -3\n").unwrap();
    let value = let_value(&program, 0);

    let outer = value.downcast::<BinaryExpr>().unwrap();
    let group = outer.right.downcast::<GroupingExpr>().unwrap();
    let negation = group.expression.downcast::<BinaryExpr>().unwrap();

    assert_eq!(number(&negation.left), "0");
    assert_eq!(negation.operator.value, "-");
    assert_eq!(number(&negation.right), "3");
}

#[test]
fn test_double_sign_fails() {
    let error = parse_source("LET INT x = --3\n").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(error.get_position().0, 13);
}

#[test]
fn test_missing_closing_paren() {
    let error = parse_source("LET INT x = (1 + 2\n").unwrap_err();
    assert_eq!(error.get_error_impl(), &ErrorImpl::MissingClosingParen);
}

#[test]
fn test_let_accepts_comparison_value() {
    let program = parse_source("LET INT x = 1\nLET BOOL b = x < 3\n").unwrap();
    assert_eq!(let_value(&program, 1).get_expr_type(), ExprType::Comparison);
}

#[test]
fn test_comparison_chain_is_left_associative() {
    let program =
        parse_source("LET INT a = 1\nWHILE a < 2 == 1 REPEAT\nLET a = a + 1\nENDWHILE\n").unwrap();
    let stmt = program.body[1].downcast::<WhileStmt>().unwrap();

    let outer = stmt.condition.downcast::<ComparisonExpr>().unwrap();
    assert_eq!(outer.operator.value, "==");
    assert_eq!(outer.left.get_expr_type(), ExprType::Comparison);
    assert_eq!(number(&outer.right), "1");
    assert_eq!(stmt.body.len(), 1);
}

#[test]
fn test_if_requires_comparison() {
    let error = parse_source("LET INT x = 1\nIF x THEN\nENDIF\n").unwrap_err();
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::ExpectedComparisonOperator { token: "THEN".to_string() }
    );
}

#[test]
fn test_if_accepts_parenthesised_comparison() {
    assert!(parse_source("IF (1 < 2) THEN\nPRINT 1\nENDIF\n").is_ok());
}

#[test]
fn test_if_elseif_else_chain() {
    let source = "LET INT x = 2\n\
                  IF x == 1 THEN\n\
                  PRINT \"one\"\n\
                  ELSEIF x == 2 THEN\n\
                  PRINT \"two\"\n\
                  PRINT \"still two\"\n\
                  ELSE\n\
                  PRINT \"other\"\n\
                  ENDIF\n\
                  PRINT x\n";
    let program = parse_source(source).unwrap();
    assert_eq!(program.body.len(), 3);

    let stmt = program.body[1].downcast::<IfStmt>().unwrap();
    assert_eq!(stmt.then_body.len(), 1);

    let else_if = match &stmt.else_branch {
        Some(ElseBranch::ElseIf(else_if)) => else_if,
        other => panic!("expected ELSEIF branch, found {:?}", other),
    };
    assert_eq!(else_if.then_body.len(), 2);

    match &else_if.else_branch {
        Some(ElseBranch::Else(body)) => assert_eq!(body.len(), 1),
        other => panic!("expected ELSE branch, found {:?}", other),
    }
}

#[test]
fn test_if_without_else() {
    let program = parse_source("IF 1 < 2 THEN\nPRINT \"yes\"\nENDIF\n").unwrap();
    let stmt = program.body[0].downcast::<IfStmt>().unwrap();
    assert!(stmt.else_branch.is_none());
}

#[test]
fn test_missing_endif() {
    let error = parse_source("IF 1 < 2 THEN\nPRINT \"yes\"\n").unwrap_err();
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: "end of file".to_string(),
            message: "expected ElseIf or Else or EndIf".to_string(),
        }
    );
}

#[test]
fn test_for_declares_loop_variable() {
    let program = parse_source("FOR INT i = 1 TO 3 REPEAT\nPRINT i\nENDFOR\n").unwrap();
    let stmt = program.body[0].downcast::<ForStmt>().unwrap();

    assert_eq!(stmt.variable, "i");
    assert_eq!(stmt.declared_type, Some(ValueType::Int));
    assert_eq!(number(&stmt.start), "1");
    assert_eq!(number(&stmt.end), "3");
    assert_eq!(program.symbols.get("i").unwrap().declared_type, ValueType::Int);
}

#[test]
fn test_for_bounds_cannot_be_comparisons() {
    let error = parse_source("FOR INT i = 1 < 2 TO 3 REPEAT\nENDFOR\n").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(error.get_position().0, 14);
}

#[test]
fn test_for_reuses_declared_variable() {
    let program =
        parse_source("LET INT i = 0\nFOR i = i TO 10 REPEAT\nENDFOR\n").unwrap();
    let stmt = program.body[1].downcast::<ForStmt>().unwrap();
    assert!(stmt.declared_type.is_none());
    assert_eq!(stmt.start.downcast::<SymbolExpr>().unwrap().value, "i");
}

#[test]
fn test_two_statements_on_one_line_fail() {
    let error = parse_source("PRINT 1 PRINT 2\n").unwrap_err();
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: "PRINT".to_string(),
            message: "expected a newline after the statement".to_string(),
        }
    );
}

#[test]
fn test_invalid_statement() {
    let error = parse_source("ENDIF\n").unwrap_err();
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::InvalidStatement { token: "ENDIF".to_string() }
    );
}

#[test]
fn test_bare_assignment_points_to_let() {
    let error = parse_source("LET INT x = 1\nx = 2\n").unwrap_err();
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: "x".to_string(),
            message: "assignments must start with LET".to_string(),
        }
    );
}

#[test]
fn test_print_requires_value() {
    let error = parse_source("PRINT\n").unwrap_err();
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: "newline".to_string(),
            message: "expected an expression".to_string(),
        }
    );
}
