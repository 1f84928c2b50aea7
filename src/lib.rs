//! # ember
//!
//! Ember is a small, dynamically-typed, expression-oriented scripting
//! language in the Monkey lineage: a hand-written lexer, a Pratt parser and
//! a tree-walking evaluator with lexically-scoped environments, first-class
//! closures, mutability tracking and a fixed table of builtin functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::match_same_arms,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity
)]

use std::rc::Rc;

use crate::ast::Program;
use crate::error::ParseError;
use crate::interpreter::environment::Environment;
use crate::interpreter::evaluator::eval_program;
use crate::interpreter::parser::Parser;
use crate::interpreter::value::Value;

/// Defines the structure of parsed code.
///
/// The `Statement` and `Expression` enums represent source text as a tree,
/// with source line numbers attached where evaluation can fail. Built by
/// the parser, walked by the evaluator.
pub mod ast;
/// The two error surfaces: accumulated parse errors and the runtime errors
/// that become first-class `ERROR` values.
pub mod error;
/// The interpreter core: lexer, parser, evaluator, values and environments.
pub mod interpreter;
/// `DEBUG=1` dumps of source, tokens, AST and results.
pub mod logger;
/// The interactive line-reader loop.
pub mod repl;

/// Parses `source` into a program, or hands back everything the parser
/// recorded. Evaluation must not run when this returns `Err`.
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}

/// Parses and evaluates `source` in the given environment.
///
/// Parse errors come back through `Err`; runtime failures are ordinary
/// `ERROR` values in the `Ok` result, matching how the language surfaces
/// them.
///
/// # Examples
/// ```
/// use ember::interpreter::environment::Environment;
///
/// let env = Environment::new();
/// let result = ember::run("let x = 2; x * 21", &env).unwrap();
/// assert_eq!(result.inspect(), "42");
///
/// // 'y' was never bound, so the result is an ERROR value.
/// let result = ember::run("y + 1", &env).unwrap();
/// assert!(result.is_error());
/// ```
pub fn run(source: &str, env: &Rc<Environment>) -> Result<Value, Vec<ParseError>> {
    let program = parse(source)?;
    Ok(eval_program(&program, env))
}
