use crate::{
    ast::{
        ast::{Expr, ExprType, Stmt, StmtType},
        expressions::StringExpr,
        statements::{GotoStmt, LabelStmt},
        types::ValueType,
    },
    errors::errors::Error,
    type_checker::typed_ast::{
        TypedElseBranch, TypedExpr, TypedForStmt, TypedIfStmt, TypedInputStmt, TypedLetStmt,
        TypedPrintStmt, TypedStmtWrapper, TypedWhileStmt,
    },
};

use super::{
    compiler::{c_ident, Compiler},
    expr::gen_expression,
};

pub fn gen_statement(compiler: &mut Compiler, statement: &TypedStmtWrapper) -> Result<(), Error> {
    match statement.get_stmt_type() {
        StmtType::PrintStmt => gen_print(compiler, statement.downcast::<TypedPrintStmt>()?),
        StmtType::IfStmt => gen_if(compiler, statement.downcast::<TypedIfStmt>()?, ""),
        StmtType::WhileStmt => {
            let while_stmt = statement.downcast::<TypedWhileStmt>()?;
            let condition = gen_expression(compiler, &while_stmt.condition)?;

            compiler.emit_line(&format!("while ({}) {{", condition.code));
            gen_body(compiler, &while_stmt.body)?;
            compiler.emit_line("}");
            Ok(())
        }
        StmtType::ForStmt => {
            let for_stmt = statement.downcast::<TypedForStmt>()?;
            let start = gen_expression(compiler, &for_stmt.start)?;
            let end = gen_expression(compiler, &for_stmt.end)?;
            let variable = c_ident(&for_stmt.variable);

            compiler.emit_line(&format!(
                "for ({} = {}; {} <= {}; {}++) {{",
                variable, start.code, variable, end.code, variable
            ));
            gen_body(compiler, &for_stmt.body)?;
            compiler.emit_line("}");
            Ok(())
        }
        StmtType::LabelStmt => {
            // The null statement keeps a label valid right before a closing brace
            let label = statement.downcast::<LabelStmt>()?;
            compiler.emit_line(&format!("{}: ;", c_ident(&label.name)));
            Ok(())
        }
        StmtType::GotoStmt => {
            let goto = statement.downcast::<GotoStmt>()?;
            compiler.emit_line(&format!("goto {};", c_ident(&goto.label)));
            Ok(())
        }
        StmtType::LetStmt => gen_let(compiler, statement.downcast::<TypedLetStmt>()?),
        StmtType::InputStmt => gen_input(compiler, statement.downcast::<TypedInputStmt>()?),
    }
}

fn gen_body(compiler: &mut Compiler, body: &[TypedStmtWrapper]) -> Result<(), Error> {
    compiler.indent();
    for statement in body {
        gen_statement(compiler, statement)?;
    }
    compiler.dedent();
    Ok(())
}

fn gen_print(compiler: &mut Compiler, print: &TypedPrintStmt) -> Result<(), Error> {
    if print.value.get_expr_type() == ExprType::String {
        let text = &print.value.downcast::<StringExpr>()?.value;
        compiler.emit_line(&format!("printf(\"{}\\n\");", text));
        return Ok(());
    }

    let format = match print.value.get_value_type() {
        ValueType::Int | ValueType::Bool => "%d",
        ValueType::Float => "%.2f",
        ValueType::String => "%s",
    };

    let value = gen_expression(compiler, &print.value)?;

    if value.owned {
        compiler.emit_line("{");
        compiler.indent();
        compiler.emit_line(&format!("char *btoc_tmp = {};", value.code));
        compiler.emit_line(&format!("printf(\"{}\\n\", btoc_tmp);", format));
        compiler.emit_line("free(btoc_tmp);");
        compiler.dedent();
        compiler.emit_line("}");
        return Ok(());
    }

    compiler.emit_line(&format!("printf(\"{}\\n\", ({}));", format, value.code));
    Ok(())
}

/// Emits one link of an IF/ELSEIF chain; `prefix` closes the previous link.
fn gen_if(compiler: &mut Compiler, if_stmt: &TypedIfStmt, prefix: &str) -> Result<(), Error> {
    let condition = gen_expression(compiler, &if_stmt.condition)?;

    compiler.emit_line(&format!("{}if ({}) {{", prefix, condition.code));
    gen_body(compiler, &if_stmt.then_body)?;

    match &if_stmt.else_branch {
        Some(TypedElseBranch::ElseIf(else_if)) => gen_if(compiler, else_if, "} else "),
        Some(TypedElseBranch::Else(body)) => {
            compiler.emit_line("} else {");
            gen_body(compiler, body)?;
            compiler.emit_line("}");
            Ok(())
        }
        None => {
            compiler.emit_line("}");
            Ok(())
        }
    }
}

fn gen_let(compiler: &mut Compiler, let_stmt: &TypedLetStmt) -> Result<(), Error> {
    let value = gen_expression(compiler, &let_stmt.value)?;
    let variable = c_ident(&let_stmt.variable);

    match let_stmt.var_type {
        ValueType::String => {
            // The new value is built before the old one is released, so `LET s = s + "x"` is safe
            let fresh = if value.owned {
                value.code
            } else {
                format!("strdup({})", value.code)
            };

            compiler.emit_line("{");
            compiler.indent();
            compiler.emit_line(&format!("char *btoc_tmp = {};", fresh));
            compiler.emit_line(&format!("free({});", variable));
            compiler.emit_line(&format!("{} = btoc_tmp;", variable));
            compiler.dedent();
            compiler.emit_line("}");
        }
        ValueType::Bool => {
            compiler.emit_line(&format!("{} = ({}) ? 1 : 0;", variable, value.code));
        }
        ValueType::Int | ValueType::Float => {
            compiler.emit_line(&format!("{} = {};", variable, value.code));
        }
    }

    Ok(())
}

fn gen_input(compiler: &mut Compiler, input: &TypedInputStmt) -> Result<(), Error> {
    let variable = c_ident(&input.variable);

    if input.var_type == ValueType::String {
        compiler.emit_line("{");
        compiler.indent();
        compiler.emit_line("char *btoc_line = NULL;");
        compiler.emit_line("size_t btoc_cap = 0;");
        compiler.emit_line("ssize_t btoc_len = getline(&btoc_line, &btoc_cap, stdin);");
        compiler.emit_line("if (btoc_len == -1) {");
        compiler.indent();
        compiler.emit_line("free(btoc_line);");
        compiler.emit_line("btoc_line = strdup(\"\");");
        compiler.dedent();
        compiler.emit_line("} else if (btoc_len > 0 && btoc_line[btoc_len - 1] == '\\n') {");
        compiler.indent();
        compiler.emit_line("btoc_line[btoc_len - 1] = '\\0';");
        compiler.dedent();
        compiler.emit_line("}");
        compiler.emit_line(&format!("free({});", variable));
        compiler.emit_line(&format!("{} = btoc_line;", variable));
        compiler.dedent();
        compiler.emit_line("}");
        return Ok(());
    }

    let format = if input.var_type == ValueType::Float { "%f" } else { "%d" };

    compiler.emit_line(&format!("if (scanf(\"{}\", &{}) != 1) {{", format, variable));
    compiler.indent();
    compiler.emit_line(&format!("{} = 0;", variable));
    compiler.dedent();
    compiler.emit_line("}");
    // Drop the rest of the line, including any unparsed text
    compiler.emit_line("scanf(\"%*[^\\n]\");");
    compiler.emit_line("scanf(\"%*1[\\n]\");");

    if input.var_type == ValueType::Bool {
        compiler.emit_line(&format!("{} = {} ? 1 : 0;", variable, variable));
    }

    Ok(())
}
