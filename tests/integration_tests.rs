//! Integration tests for end-to-end compilation.
//!
//! These tests verify that the complete compilation pipeline works correctly
//! from source code through tokenization, parsing, type checking, and C generation.
//! When a C compiler is on the path the generated programs are also built and run.

use std::{
    env, fs,
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use btoc::{compile_source, errors::errors::ErrorImpl, format_error};

fn compile_and_run(name: &str, source: &str, stdin: &str) -> Option<String> {
    let c_source = compile_source(source.to_string(), Some(format!("{}.bas", name))).unwrap();

    let dir = env::temp_dir().join("btoc_tests");
    fs::create_dir_all(&dir).unwrap();
    let c_path = dir.join(format!("{}.c", name));
    let binary_path: PathBuf = dir.join(name);
    fs::write(&c_path, c_source).unwrap();

    let cc = Command::new("cc").arg("-o").arg(&binary_path).arg(&c_path).output();
    let cc = match cc {
        Ok(output) => output,
        // No C compiler available
        Err(_) => return None,
    };
    assert!(cc.status.success(), "cc failed:\n{}", String::from_utf8_lossy(&cc.stderr));

    let mut child = Command::new(&binary_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    Some(String::from_utf8(output.stdout).unwrap())
}

#[test]
fn test_compile_simple_program() {
    let output = compile_source("LET INT x = 5\nPRINT x\n".to_string(), Some("test.bas".to_string())).unwrap();

    assert!(output.starts_with("#define _POSIX_C_SOURCE 200809L\n"));
    assert!(output.contains("int main(void) {\n    int bas_x = 0;\n"));
    assert!(output.ends_with("    return 0;\n}\n"));
}

#[test]
fn test_compile_is_deterministic() {
    let source = "INPUT STRING name\nPRINT \"hi \" + name\nFOR INT i = 1 TO 2 REPEAT\nPRINT i\nENDFOR\n";

    let first = compile_source(source.to_string(), None).unwrap();
    let second = compile_source(source.to_string(), None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_each_stage_reports_errors() {
    let lex = compile_source("PRINT @\n".to_string(), None).unwrap_err();
    assert!(matches!(lex.get_error_impl(), ErrorImpl::UnrecognisedToken { .. }));

    let parse = compile_source("PRINT y\n".to_string(), None).unwrap_err();
    assert!(matches!(parse.get_error_impl(), ErrorImpl::VariableNotDeclared { .. }));

    let types = compile_source("LET INT x = \"a\"\n".to_string(), None).unwrap_err();
    assert!(matches!(types.get_error_impl(), ErrorImpl::InvalidAssignmentTypes { .. }));
}

#[test]
fn test_error_report_names_file_and_line() {
    let source = "LET INT x = 1\nPRINT y\n";
    let error = compile_source(source.to_string(), Some("prog.bas".to_string())).unwrap_err();

    let report = format_error(&error, source, "prog.bas");
    assert!(report.starts_with("Error: VariableNotDeclared"));
    assert!(report.contains("-> prog.bas:2\n"));
    assert!(report.contains("2 | PRINT y\n"));
}

#[test]
fn test_run_print_program() {
    if let Some(stdout) = compile_and_run("print", "LET INT x = 5\nPRINT x\n", "") {
        assert_eq!(stdout, "5\n");
    }
}

#[test]
fn test_run_if_program() {
    let source = "LET INT x = 3\nIF x > 2 THEN\nPRINT \"yes\"\nELSE\nPRINT \"no\"\nENDIF\n";
    if let Some(stdout) = compile_and_run("branch", source, "") {
        assert_eq!(stdout, "yes\n");
    }
}

#[test]
fn test_run_for_program() {
    let source = "FOR INT i = 1 TO 3 REPEAT\nPRINT i\nENDFOR\n";
    if let Some(stdout) = compile_and_run("count", source, "") {
        assert_eq!(stdout, "1\n2\n3\n");
    }
}

#[test]
fn test_run_input_and_strings() {
    let source = "INPUT STRING name\nINPUT INT n\nLET STRING greeting = \"hi \" + name\nPRINT greeting\nPRINT n * 2\nIF name == \"bob\" THEN\nPRINT \"match\"\nENDIF\n";
    if let Some(stdout) = compile_and_run("input", source, "bob\n21 extra\n") {
        assert_eq!(stdout, "hi bob\n42\nmatch\n");
    }
}

#[test]
fn test_run_goto_loop() {
    let source = "LET INT i = 0\nLABEL top\nLET i = i + 1\nIF i < 3 THEN\nGOTO top\nENDIF\nPRINT i\n";
    if let Some(stdout) = compile_and_run("goto", source, "") {
        assert_eq!(stdout, "3\n");
    }
}

#[test]
fn test_run_reserved_c_names() {
    let source = "LET STRING btoc_tmp = \"abc\"\nLET STRING s = btoc_tmp\nPRINT s\nLET INT int = 5\nLET INT printf = int + 1\nPRINT printf\n";
    if let Some(stdout) = compile_and_run("names", source, "") {
        assert_eq!(stdout, "abc\n6\n");
    }
}

#[test]
fn test_run_leading_zero_literal() {
    if let Some(stdout) = compile_and_run("decimal", "LET INT x = 010\nPRINT x\n", "") {
        assert_eq!(stdout, "10\n");
    }
}

#[test]
fn test_oversized_integer_is_rejected() {
    let error = compile_source("PRINT 99999999999\n".to_string(), None).unwrap_err();
    assert!(matches!(error.get_error_impl(), ErrorImpl::NumberOutOfRange { .. }));
    assert_eq!(error.get_position().0, 6);
}
