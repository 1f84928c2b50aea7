//! Verbose dumps of each execution stage, gated on `DEBUG=1` in the process
//! environment. Everything here is diagnostic output for humans; nothing in
//! the interpreter depends on it.

use crate::ast::Program;
use crate::interpreter::lexer::tokenize;
use crate::interpreter::value::Value;

const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Whether `DEBUG=1` is set for this process.
pub fn enabled() -> bool {
    std::env::var("DEBUG").as_deref() == Ok("1")
}

fn header(title: &str) {
    println!("\n{CYAN}========================= {title} ========================={RESET}");
}

pub fn log_source(source: &str) {
    header("Source Code");
    println!("{source}");
}

pub fn log_tokens(source: &str) {
    header("Tokens");
    for (token, line) in tokenize(source) {
        println!(
            "{DIM}(line {line:>3}){RESET} {:?} {DIM}=>{RESET} {}",
            token.literal(),
            token.kind()
        );
    }
}

pub fn log_ast(program: &Program) {
    header("AST");
    println!("{program}");
}

pub fn log_result(result: &Value) {
    header("Result");
    println!("{}", result.inspect());
}
