use crate::{ast::{ast::{Expr, ExprType, ExprWrapper}, expressions::{BinaryExpr, BooleanExpr, ComparisonExpr, GroupingExpr, NumberExpr, StringExpr, SymbolExpr}}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind, Span};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().describe(), message: String::from("expected an expression") }, parser.get_position()));
        }
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while let Some(token_bp) = parser.get_bp_lookup().get(&parser.current_token_kind()).copied() {
        if token_bp <= bp {
            break;
        }

        let led_fn = match parser.get_led_lookup().get(&parser.current_token_kind()) {
            Some(led_fn) => *led_fn,
            None => break,
        };

        left = led_fn(parser, left, token_bp)?;
    }

    Ok(left)
}

/// Parses an expression that must be a comparison, as IF and WHILE require.
///
/// A parenthesised comparison is accepted as well.
pub fn parse_comparison(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;

    if !is_comparison(&expr)? {
        return Err(Error::new(ErrorImpl::ExpectedComparisonOperator { token: parser.current_token().describe() }, parser.get_position()));
    }

    Ok(expr)
}

fn is_comparison(expr: &ExprWrapper) -> Result<bool, Error> {
    match expr.get_expr_type() {
        ExprType::Comparison => Ok(true),
        ExprType::Grouping => is_comparison(&expr.downcast::<GroupingExpr>()?.expression),
        _ => Ok(false),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();
            Ok(ExprWrapper::new(NumberExpr { value: token.value, span: token.span }))
        },
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            if !parser.get_symbols().contains(&token.value) {
                return Err(Error::new(ErrorImpl::VariableNotDeclared { variable: token.value }, token.span.start));
            }

            Ok(ExprWrapper::new(SymbolExpr { value: token.value, span: token.span }))
        },
        TokenKind::String => {
            let token = parser.advance().clone();
            Ok(ExprWrapper::new(StringExpr { value: token.value, span: token.span }))
        },
        TokenKind::True | TokenKind::False => {
            let token = parser.advance().clone();
            Ok(ExprWrapper::new(BooleanExpr { value: token.kind == TokenKind::True, span: token.span }))
        },
        _ => {
            Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().describe() }, parser.get_position()))
        }
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: ExprWrapper, bp: BindingPower) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone()
        },
        left,
        operator: operator_token,
        right,
    }))
}

pub fn parse_comparison_expr(parser: &mut Parser, left: ExprWrapper, bp: BindingPower) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(ComparisonExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone()
        },
        left,
        operator: operator_token,
        right,
    }))
}

/// `-x` becomes the group `(0 - x)`, so the sign binds tighter than any operator around it.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    if matches!(parser.current_token_kind(), TokenKind::Plus | TokenKind::Dash) {
        return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().describe(), message: String::from("only one sign is allowed before a value") }, parser.get_position()));
    }

    let operand = parse_expr(parser, BindingPower::Unary)?;

    let span = Span {
        start: operator_token.span.start.clone(),
        end: operand.get_span().end.clone()
    };

    let zero = ExprWrapper::new(NumberExpr { value: String::from("0"), span: operator_token.span.clone() });

    Ok(ExprWrapper::new(GroupingExpr {
        expression: ExprWrapper::new(BinaryExpr {
            left: zero,
            operator: operator_token,
            right: operand,
            span: span.clone()
        }),
        span
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    let error = Error::new(ErrorImpl::MissingClosingParen, parser.get_position());
    let close = parser.expect_error(TokenKind::CloseParen, Some(error))?;

    Ok(ExprWrapper::new(GroupingExpr {
        expression,
        span: Span {
            start,
            end: close.span.end
        }
    }))
}
