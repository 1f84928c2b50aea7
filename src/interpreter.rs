/// Lexically scoped bindings with mutability flags, shared through
/// reference counting so closures keep their defining frame alive.
pub mod environment;
/// The tree-walking evaluator: dispatch over AST variants, control-flow
/// unwinding through wrapper values, and the builtin table.
pub mod evaluator;
/// The scanner: source text to a stream of line-tagged tokens.
pub mod lexer;
/// The Pratt parser: tokens to the AST, with accumulated error reporting.
pub mod parser;
/// Runtime values, type tags, inspectors and hash keys.
pub mod value;
