//! A line-reader REPL: every line is lexed, parsed and evaluated against a
//! single environment that persists for the whole session, so bindings and
//! closures carry over from line to line.

use std::io::{self, BufRead, Write};

use crate::error::ParseError;
use crate::interpreter::environment::Environment;
use crate::interpreter::evaluator::eval_program;
use crate::interpreter::parser::Parser;
use crate::logger;

const CYAN: &str = "\x1b[1;96m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Reads lines from stdin until end of input or an `exit`/`quit` command.
pub fn start() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let env = Environment::new();

    loop {
        print!("{CYAN}\u{27f6} {RESET}");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        // A few REPL words are intercepted before the lexer sees them.
        match line.trim() {
            "" => continue,
            "exit" | "quit" => return,
            "help" => {
                print_help();
                continue;
            }
            _ => {}
        }

        eval_line(&line, &env);
    }
}

fn eval_line(line: &str, env: &std::rc::Rc<Environment>) {
    if logger::enabled() {
        logger::log_source(line);
        logger::log_tokens(line);
    }

    let mut parser = Parser::new(line);
    let program = parser.parse_program();

    if logger::enabled() {
        logger::log_ast(&program);
    }

    if !parser.errors().is_empty() {
        print_parse_errors(parser.errors());
        return;
    }

    if program.statements.is_empty() {
        return;
    }

    let result = eval_program(&program, env);

    if logger::enabled() {
        logger::log_result(&result);
    }

    println!("{}", result.inspect());
}

/// Prints the collected parse errors under a red header, one per line,
/// tab-indented.
pub fn print_parse_errors(errors: &[ParseError]) {
    println!("{RED}Parser errors:{RESET}");
    for error in errors {
        println!("\t{error}");
    }
}

fn print_help() {
    println!("Ember REPL");
    println!("  type an expression or statement to evaluate it");
    println!("  bindings persist for the whole session");
    println!("  help          show this text");
    println!("  exit, quit    leave the REPL");
}
