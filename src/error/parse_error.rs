#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
///
/// The parser collects these instead of aborting; when any are present after
/// the parse, evaluation is skipped and the messages are printed.
pub enum ParseError {
    /// The next token was not the one the grammar requires.
    UnexpectedToken {
        /// The kind name the parser expected.
        expected: &'static str,
        /// The kind name actually found.
        got: &'static str,
        /// The literal text of the offending token.
        literal: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// No prefix parse rule exists for the token at expression position.
    NoPrefixParseFn {
        /// The kind name of the offending token.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal did not fit a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The digit text as written.
        literal: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of `=` is not an identifier, index or dereference.
    InvalidAssignmentTarget {
        /// The textual form of the rejected target.
        target: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken {
                expected,
                got,
                literal,
                line,
            } => write!(
                f,
                "(line {line}) expected next token to be: {expected}, got: {got} ({literal}) instead."
            ),
            Self::NoPrefixParseFn { kind, line } => {
                write!(f, "(line {line}) no prefix parse function for {kind} found")
            }
            Self::InvalidIntegerLiteral { literal, line } => {
                write!(f, "(line {line}) could not parse {literal:?} as integer")
            }
            Self::InvalidAssignmentTarget { target, line } => {
                write!(f, "(line {line}) invalid assignment target: {target}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
