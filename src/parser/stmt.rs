use crate::{ast::{ast::StmtWrapper, statements::{ElseBranch, ForStmt, GotoStmt, IfStmt, InputStmt, LabelStmt, LetStmt, PrintStmt, WhileStmt}, types::ValueType}, errors::errors::{Error, ErrorImpl}, lexer::tokens::{Token, TokenKind}, parser::{expr::{parse_comparison, parse_expr}, lookups::BindingPower}, Position, Span};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let stmt_fn = match parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        Some(stmt_fn) => *stmt_fn,
        None => {
            if parser.current_token_kind() == TokenKind::Identifier && parser.peek().kind == TokenKind::Assignment {
                return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().describe(), message: String::from("assignments must start with LET") }, parser.get_position()));
            }

            return Err(Error::new(ErrorImpl::InvalidStatement { token: parser.current_token().describe() }, parser.get_position()));
        }
    };

    let stmt = stmt_fn(parser)?;
    parser.expect_newline()?;

    Ok(stmt)
}

/// Parses statements until one of `terminators` is reached, without consuming it.
fn parse_body(parser: &mut Parser, terminators: &[TokenKind]) -> Result<Vec<StmtWrapper>, Error> {
    let mut body = vec![];

    while !terminators.contains(&parser.current_token_kind()) {
        if !parser.has_tokens() {
            let expected = terminators.iter().map(|kind| kind.to_string()).collect::<Vec<String>>().join(" or ");
            return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().describe(), message: format!("expected {}", expected) }, parser.get_position()));
        }

        body.push(parse_stmt(parser)?);
    }

    Ok(body)
}

fn parse_type_keyword(parser: &mut Parser) -> Option<ValueType> {
    if parser.current_token_kind().is_type_keyword() {
        ValueType::from_keyword(parser.advance().kind)
    } else {
        None
    }
}

fn expect_identifier(parser: &mut Parser, after: &str) -> Result<Token, Error> {
    let error = Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().describe(), message: format!("expected identifier after {}", after) }, parser.get_position());
    parser.expect_error(TokenKind::Identifier, Some(error))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(StmtWrapper::new(PrintStmt {
        value,
        span: Span {
            start,
            end: parser.get_position()
        }
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();
    Ok(StmtWrapper::new(parse_if_chain(parser, start)?))
}

/// Parses everything after an IF or ELSEIF keyword.
///
/// The innermost link of an ELSEIF chain consumes the shared ENDIF.
fn parse_if_chain(parser: &mut Parser, start: Position) -> Result<IfStmt, Error> {
    let condition = parse_comparison(parser)?;
    parser.expect(TokenKind::Then)?;
    parser.expect_newline()?;

    let then_body = parse_body(parser, &[TokenKind::ElseIf, TokenKind::Else, TokenKind::EndIf])?;

    let else_branch = match parser.current_token_kind() {
        TokenKind::ElseIf => {
            let else_if_start = parser.advance().span.start.clone();
            Some(ElseBranch::ElseIf(Box::new(parse_if_chain(parser, else_if_start)?)))
        }
        TokenKind::Else => {
            parser.advance();
            parser.expect_newline()?;
            let body = parse_body(parser, &[TokenKind::EndIf])?;
            parser.expect(TokenKind::EndIf)?;
            Some(ElseBranch::Else(body))
        }
        _ => {
            parser.expect(TokenKind::EndIf)?;
            None
        }
    };

    Ok(IfStmt {
        condition,
        then_body,
        else_branch,
        span: Span {
            start,
            end: parser.get_position()
        }
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_comparison(parser)?;
    parser.expect(TokenKind::Repeat)?;
    parser.expect_newline()?;

    let body = parse_body(parser, &[TokenKind::EndWhile])?;
    parser.expect(TokenKind::EndWhile)?;

    Ok(StmtWrapper::new(WhileStmt {
        condition,
        body,
        span: Span {
            start,
            end: parser.get_position()
        }
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let declared_type = parse_type_keyword(parser);
    let variable = expect_identifier(parser, "FOR")?;
    parser.check_declaration(&variable.value, declared_type, &variable.span.start)?;

    parser.expect(TokenKind::Assignment)?;
    let from = parse_expr(parser, BindingPower::Relational)?;
    parser.expect(TokenKind::To)?;
    let to = parse_expr(parser, BindingPower::Relational)?;
    parser.expect(TokenKind::Repeat)?;

    if let Some(declared_type) = declared_type {
        parser.declare_symbol(&variable.value, declared_type, variable.span.start.clone());
    }

    parser.expect_newline()?;
    let body = parse_body(parser, &[TokenKind::EndFor])?;
    parser.expect(TokenKind::EndFor)?;

    Ok(StmtWrapper::new(ForStmt {
        variable: variable.value,
        declared_type,
        start: from,
        end: to,
        body,
        span: Span {
            start,
            end: parser.get_position()
        }
    }))
}

pub fn parse_label_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let name = expect_identifier(parser, "LABEL")?;
    parser.declare_label(&name.value, name.span.start.clone())?;

    Ok(StmtWrapper::new(LabelStmt {
        name: name.value,
        span: Span {
            start,
            end: parser.get_position()
        }
    }))
}

pub fn parse_goto_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let label = expect_identifier(parser, "GOTO")?;
    parser.record_goto(&label.value, label.span.start.clone());

    Ok(StmtWrapper::new(GotoStmt {
        label: label.value,
        span: Span {
            start,
            end: parser.get_position()
        }
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let declared_type = parse_type_keyword(parser);
    let variable = expect_identifier(parser, "LET")?;
    parser.check_declaration(&variable.value, declared_type, &variable.span.start)?;

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    // Registered only now, so the value cannot refer to the variable it declares
    if let Some(declared_type) = declared_type {
        parser.declare_symbol(&variable.value, declared_type, variable.span.start.clone());
    }

    Ok(StmtWrapper::new(LetStmt {
        variable: variable.value,
        declared_type,
        value,
        span: Span {
            start,
            end: parser.get_position()
        }
    }))
}

pub fn parse_input_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let declared_type = parse_type_keyword(parser);
    let variable = expect_identifier(parser, "INPUT")?;
    parser.check_declaration(&variable.value, declared_type, &variable.span.start)?;

    if let Some(declared_type) = declared_type {
        parser.declare_symbol(&variable.value, declared_type, variable.span.start.clone());
    }

    Ok(StmtWrapper::new(InputStmt {
        variable: variable.value,
        declared_type,
        span: Span {
            start,
            end: parser.get_position()
        }
    }))
}
