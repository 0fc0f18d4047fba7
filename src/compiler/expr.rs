use crate::{
    ast::{
        ast::{Expr, ExprType},
        expressions::{BooleanExpr, NumberExpr, StringExpr},
        types::ValueType,
    },
    errors::errors::Error,
    type_checker::typed_ast::{
        TypedBinaryExpr, TypedComparisonExpr, TypedExpr, TypedExprWrapper, TypedGroupingExpr,
        TypedSymbolExpr,
    },
};

use super::compiler::{c_ident, Compiler};

/// A generated C expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CExpr {
    pub code: String,
    /// The expression evaluates to freshly allocated string storage that someone must free.
    pub owned: bool,
}

impl CExpr {
    fn borrowed(code: String) -> Self {
        CExpr { code, owned: false }
    }
}

fn owns_flag(expr: &CExpr) -> &'static str {
    if expr.owned {
        "1"
    } else {
        "0"
    }
}

pub fn gen_expression(compiler: &mut Compiler, expression: &TypedExprWrapper) -> Result<CExpr, Error> {
    match expression.get_expr_type() {
        ExprType::Number => {
            let number = expression.downcast::<NumberExpr>()?;
            if number.is_float() {
                return Ok(CExpr::borrowed(number.value.clone()));
            }

            // A leading zero would make C read the literal as octal
            let digits = number.value.trim_start_matches('0');
            let digits = if digits.is_empty() { "0" } else { digits };
            Ok(CExpr::borrowed(String::from(digits)))
        }
        ExprType::String => Ok(CExpr::borrowed(format!("\"{}\"", expression.downcast::<StringExpr>()?.value))),
        ExprType::Boolean => {
            let value = if expression.downcast::<BooleanExpr>()?.value { "1" } else { "0" };
            Ok(CExpr::borrowed(String::from(value)))
        }
        ExprType::Symbol => Ok(CExpr::borrowed(c_ident(&expression.downcast::<TypedSymbolExpr>()?.value))),
        ExprType::Binary => {
            let binary = expression.downcast::<TypedBinaryExpr>()?;
            let left = gen_expression(compiler, &binary.left)?;
            let right = gen_expression(compiler, &binary.right)?;

            if binary.value_type == ValueType::String {
                compiler.uses_concat = true;
                return Ok(CExpr {
                    code: format!("btoc_concat({}, {}, {}, {})", left.code, owns_flag(&left), right.code, owns_flag(&right)),
                    owned: true,
                });
            }

            Ok(CExpr::borrowed(format!("{} {} {}", left.code, binary.operator.value, right.code)))
        }
        ExprType::Comparison => {
            let comparison = expression.downcast::<TypedComparisonExpr>()?;
            let left = gen_expression(compiler, &comparison.left)?;
            let right = gen_expression(compiler, &comparison.right)?;
            let operator = &comparison.operator.value;

            if comparison.left.get_value_type() == ValueType::String {
                if left.owned || right.owned {
                    compiler.uses_compare = true;
                    return Ok(CExpr::borrowed(format!(
                        "btoc_compare({}, {}, {}, {}) {} 0",
                        left.code, owns_flag(&left), right.code, owns_flag(&right), operator
                    )));
                }

                return Ok(CExpr::borrowed(format!("strcmp({}, {}) {} 0", left.code, right.code, operator)));
            }

            // C ranks `<` above `==`, chains here fold strictly left to right
            let left_code = if comparison.left.get_expr_type() == ExprType::Comparison {
                format!("({})", left.code)
            } else {
                left.code
            };

            Ok(CExpr::borrowed(format!("{} {} {}", left_code, operator, right.code)))
        }
        ExprType::Grouping => {
            let grouping = expression.downcast::<TypedGroupingExpr>()?;
            let inner = gen_expression(compiler, &grouping.expression)?;

            Ok(CExpr {
                code: format!("({})", inner.code),
                owned: inner.owned,
            })
        }
    }
}
