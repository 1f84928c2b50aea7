use std::fs;
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use ember::interpreter::environment::Environment;
use ember::interpreter::evaluator::eval_program;
use ember::interpreter::parser::Parser;
use ember::interpreter::value::Value;
use ember::{logger, repl};

/// Ember is a small, dynamically-typed, expression-oriented scripting
/// language.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to an Ember script; must have the `.em` extension. Starts the
    /// interactive REPL when omitted. Set DEBUG=1 for verbose dumps.
    script: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => execute_file(&path),
        None => repl::start(),
    }
}

fn execute_file(path: &str) {
    if Path::new(path).extension().and_then(|ext| ext.to_str()) != Some("em") {
        eprintln!("Error: File must have .em extension");
        process::exit(1);
    }

    let code = fs::read_to_string(path).unwrap_or_else(|error| {
        eprintln!("Error reading file: {error}");
        process::exit(1);
    });

    if logger::enabled() {
        logger::log_source(&code);
        logger::log_tokens(&code);
    }

    let mut parser = Parser::new(&code);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        repl::print_parse_errors(parser.errors());
        process::exit(1);
    }

    if logger::enabled() {
        logger::log_ast(&program);
    }

    let env = Environment::new();
    let result = eval_program(&program, &env);

    if logger::enabled() {
        logger::log_result(&result);
    }

    if !matches!(result, Value::Null) {
        println!("{}", result.inspect());
    }
}
