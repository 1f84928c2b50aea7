/// Parser state, the Pratt expression driver and the precedence ladder.
pub mod core;
/// Infix (led) handlers: binary operators, calls, indexing, suffix `++`
/// and assignment.
mod infix;
/// Prefix (nud) handlers: literals, grouping, control-flow expressions,
/// function literals and pointer operators.
mod prefix;
/// Statement forms and blocks.
mod statement;

pub use self::core::{Parser, Precedence};
