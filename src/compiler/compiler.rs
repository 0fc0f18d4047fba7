//! Main compiler module.
//!
//! This module contains the core Compiler structure and drives code
//! generation from the typed AST to a standalone C program. Output is
//! written to two regions: the header (preamble, helpers, declarations)
//! and the body (translated statements), joined on finalize.

use std::{fs, path::Path};

use crate::{
    ast::types::ValueType,
    errors::errors::{Error, ErrorImpl},
    type_checker::typed_ast::TypedProgram,
    Position,
};

use super::{
    stdlib::{emit_helpers, emit_preamble},
    stmt::gen_statement,
};

/// Prefix carried by every user variable and label in the generated C.
const IDENT_PREFIX: &str = "bas_";

/// The C spelling of a BASIC variable or label.
///
/// Prefixing keeps user names clear of C keywords, libc and the `btoc_` names
/// the emitter uses itself.
pub fn c_ident(name: &str) -> String {
    format!("{}{}", IDENT_PREFIX, name)
}

/// In-memory destination for generated code.
#[derive(Debug, Default, Clone)]
pub struct OutputSink {
    header: String,
    body: String,
}

impl OutputSink {
    pub fn new() -> Self {
        OutputSink::default()
    }

    pub fn emit(&mut self, code: &str) {
        self.body.push_str(code);
    }

    pub fn emit_line(&mut self, code: &str) {
        self.body.push_str(code);
        self.body.push('\n');
    }

    pub fn emit_header(&mut self, code: &str) {
        self.header.push_str(code);
    }

    pub fn emit_header_line(&mut self, code: &str) {
        self.header.push_str(code);
        self.header.push('\n');
    }

    /// The complete artifact: header region first, then the body region.
    pub fn finalize(&self) -> String {
        format!("{}{}", self.header, self.body)
    }
}

/// The main compiler structure that holds the state of code generation.
///
/// The typed program is only ever borrowed, so the same program can be
/// compiled any number of times with identical output.
pub struct Compiler<'a> {
    /// The typed program being compiled
    pub program: &'a TypedProgram,
    pub output: OutputSink,
    /// Current nesting depth of the generated C
    indent: usize,
    /// Set when a string concatenation is generated
    pub uses_concat: bool,
    /// Set when a comparison has to free a concatenated operand
    pub uses_compare: bool,
}

impl<'a> Compiler<'a> {
    pub fn new(program: &'a TypedProgram) -> Self {
        Compiler {
            program,
            output: OutputSink::new(),
            indent: 1,
            uses_concat: false,
            uses_compare: false,
        }
    }

    /// Writes one indented line to the body region.
    pub fn emit_line(&mut self, code: &str) {
        self.output.emit(&"    ".repeat(self.indent));
        self.output.emit_line(code);
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn get_output(&self) -> String {
        self.output.finalize()
    }

    /// Saves the generated program to a file.
    pub fn save_to_file(&self, output_file: &Path) -> Result<(), Error> {
        fs::write(output_file, self.get_output()).map_err(|error| {
            Error::new(
                ErrorImpl::FileNotWritable {
                    path: output_file.to_string_lossy().to_string(),
                    reason: error.to_string(),
                },
                Position::null(),
            )
        })
    }

    /// Generates the statements, then the header they depend on.
    fn compile(&mut self) -> Result<(), Error> {
        let program = self.program;

        for statement in &program.body {
            gen_statement(self, statement)?;
        }

        for symbol in program.symbols.iter() {
            if symbol.declared_type == ValueType::String {
                self.emit_line(&format!("free({});", c_ident(&symbol.name)));
            }
        }
        self.emit_line("return 0;");
        self.output.emit_line("}");

        emit_preamble(&mut self.output);
        emit_helpers(&mut self.output, self.uses_concat, self.uses_compare);

        self.output.emit_header_line("int main(void) {");
        for symbol in program.symbols.iter() {
            let name = c_ident(&symbol.name);
            let declaration = match symbol.declared_type {
                ValueType::Int | ValueType::Bool => format!("int {} = 0;", name),
                ValueType::Float => format!("float {} = 0;", name),
                ValueType::String => format!("char *{} = strdup(\"\");", name),
            };
            self.output.emit_header_line(&format!("    {}", declaration));
        }

        Ok(())
    }
}

/// Compiles a typed program into C source held by the returned compiler.
pub fn compile(program: &TypedProgram) -> Result<Compiler<'_>, Error> {
    let mut compiler = Compiler::new(program);
    compiler.compile()?;
    Ok(compiler)
}
