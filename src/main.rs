use std::{env, fs::read_to_string, path::PathBuf, process::exit, rc::Rc, time::Instant};

use btoc::{
    compiler::compiler::compile,
    display_error,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
    Position,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        println!("Usage: btoc <source-file>");
        exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap_or(file_path)
    } else {
        file_path
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            let error = Error::new(
                ErrorImpl::FileNotReadable {
                    path: file_path.to_string(),
                    reason: error.to_string(),
                },
                Position::null(),
            );
            display_error(&error, "", file_path);
            exit(1);
        }
    };

    let start = Instant::now();

    if let Err(error) = run(&source, file_name, start) {
        display_error(&error, &source, file_path);
        exit(1);
    }

    println!("Total time: {:?}", start.elapsed());
}

fn run(source: &str, file_name: &str, start: Instant) -> Result<(), Error> {
    let tokens = tokenize(source.to_string(), Some(String::from(file_name)))?;
    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = parse(tokens, Rc::new(String::from(file_name)))?;
    println!("Parsed in {:?}", parse_start.elapsed());

    let type_check_start = Instant::now();
    let typed_program = type_check(&program)?;
    println!("Type checked in {:?}", type_check_start.elapsed());

    let compile_start = Instant::now();
    let compiled = compile(&typed_program)?;
    println!("Emitted in {:?}", compile_start.elapsed());

    compiled.save_to_file(&PathBuf::from("out.c"))?;
    println!("Wrote out.c");

    Ok(())
}
