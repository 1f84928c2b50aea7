#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are never thrown: each one is rendered into an `ERROR`
/// value at its point of creation and then short-circuits every enclosing
/// evaluation until it becomes the program's result. The `Display` forms
/// below are the language's canonical messages and are matched verbatim by
/// the test suites.
pub enum RuntimeError {
    /// An infix operator was applied to operands of two different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left: &'static str,
        /// The operator spelling.
        operator: String,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// A prefix operator was applied to an operand it is not defined for.
    UnknownPrefixOperator {
        /// The operator spelling.
        operator: String,
        /// Type tag of the operand.
        right: &'static str,
    },
    /// An infix operator was applied to operands it is not defined for.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left: &'static str,
        /// The operator spelling.
        operator: String,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// The suffix `++` operator was applied to a non-integer.
    UnknownSuffixOperator {
        /// Type tag of the operand.
        left: &'static str,
    },
    /// A name resolved neither in the environment chain nor in the builtin
    /// table.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A value that is not an integer, boolean or string was used as a hash
    /// key.
    UnusableAsHashKey {
        /// Type tag of the offending key.
        kind: &'static str,
    },
    /// The index operator was applied to an unsupported receiver/index pair.
    IndexNotSupported {
        /// Type tag of the receiver.
        left: &'static str,
        /// Type tag of the index.
        index: &'static str,
    },
    /// Call syntax was applied to a value that is not callable.
    NotAFunction {
        /// Type tag of the callee.
        kind: &'static str,
    },
    /// Assignment to a binding that was not declared `mut`.
    AssignToImmutable {
        /// The binding name.
        name: String,
        /// The source line of the assignment target.
        line: usize,
    },
    /// Index assignment outside the bounds of the array.
    ArrayIndexOutOfBounds {
        /// The resolved (possibly negative-wrapped) index.
        index: i64,
        /// The source line of the assignment.
        line: usize,
    },
    /// Array index assignment with a non-integer index.
    ArrayIndexNotInteger {
        /// The source line of the assignment.
        line: usize,
    },
    /// Nested index targets such as `a[i][j] = v` are not supported.
    ComplexIndexAssignment {
        /// The source line of the assignment.
        line: usize,
    },
    /// Hash index assignment with an unhashable key.
    UnusableAsHashKeyAssign {
        /// Type tag of the offending key.
        kind: &'static str,
        /// The source line of the assignment.
        line: usize,
    },
    /// Index assignment into a value that is neither array nor hash.
    CannotIndexInto {
        /// Type tag of the receiver.
        kind: &'static str,
        /// The source line of the assignment.
        line: usize,
    },
    /// Assignment through `*expr` where the expression is not a pointer.
    CannotDereferenceAssign {
        /// Type tag of the non-pointer value.
        kind: &'static str,
        /// The source line of the assignment.
        line: usize,
    },
    /// The parser admitted an assignment target evaluation cannot handle.
    InvalidAssignmentTarget {
        /// The source line of the assignment.
        line: usize,
    },
    /// `&` applied to a name with no binding.
    AddressOfUndefined {
        /// The unresolved name.
        name: String,
    },
    /// `&` applied to something other than an identifier.
    AddressOfNonIdentifier,
    /// `*` applied to a value that is not a pointer.
    CannotDereference {
        /// Type tag of the non-pointer value.
        kind: &'static str,
    },
    /// A pointer whose referenced variable no longer resolves.
    DanglingPointer {
        /// The name stored in the pointer.
        name: String,
    },
    /// Integer division or the `div` builtin with a zero divisor.
    DivisionByZero,
    /// A call supplied the wrong number of arguments.
    WrongNumberOfArguments {
        /// How many arguments arrived.
        got: usize,
        /// How many were expected, e.g. `1` or `0 or 1`.
        expected: String,
    },
    /// A builtin received an argument of the wrong type.
    InvalidArgument {
        /// The builtin name.
        name: &'static str,
        /// Type tag of the argument that arrived.
        got: &'static str,
        /// Description of what was expected.
        expected: &'static str,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch {
                left,
                operator,
                right,
            } => write!(f, "Type mismatch: {left} {operator} {right}"),
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "Unknown operator: {operator}{right}")
            }
            Self::UnknownInfixOperator {
                left,
                operator,
                right,
            } => write!(f, "Unknown operator: {left} {operator} {right}"),
            Self::UnknownSuffixOperator { left } => write!(f, "Unknown operator: {left}++"),
            Self::IdentifierNotFound { name } => write!(f, "Identifier not found: {name}"),
            Self::UnusableAsHashKey { kind } => write!(f, "Unusable as hash key: {kind}"),
            Self::IndexNotSupported { left, index } => {
                write!(f, "Index operator not supported: {left} {index}")
            }
            Self::NotAFunction { kind } => write!(f, "Not a function: {kind}"),
            Self::AssignToImmutable { name, line } => {
                write!(f, "(line {line}) Cannot assign to immutable variable: {name}")
            }
            Self::ArrayIndexOutOfBounds { index, line } => {
                write!(f, "(line {line}) Array index out of bounds: {index}")
            }
            Self::ArrayIndexNotInteger { line } => {
                write!(f, "(line {line}) Array index must be an integer")
            }
            Self::ComplexIndexAssignment { line } => write!(
                f,
                "(line {line}) Complex index expressions not yet supported for assignment"
            ),
            Self::UnusableAsHashKeyAssign { kind, line } => {
                write!(f, "(line {line}) Unusable as hash key: {kind}")
            }
            Self::CannotIndexInto { kind, line } => {
                write!(f, "(line {line}) Cannot index into type: {kind}")
            }
            Self::CannotDereferenceAssign { kind, line } => {
                write!(f, "(line {line}) Cannot dereference non-pointer value: {kind}")
            }
            Self::InvalidAssignmentTarget { line } => {
                write!(f, "(line {line}) invalid assignment target")
            }
            Self::AddressOfUndefined { name } => {
                write!(f, "Cannot take address of undefined variable: {name}")
            }
            Self::AddressOfNonIdentifier => {
                write!(f, "Cannot take address of non-identifier expression")
            }
            Self::CannotDereference { kind } => {
                write!(f, "Cannot dereference non-pointer value: {kind}")
            }
            Self::DanglingPointer { name } => {
                write!(f, "Pointer references undefined variable: {name}")
            }
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::WrongNumberOfArguments { got, expected } => {
                write!(f, "Invalid number of arguments. Got: {got}, Expected: {expected}")
            }
            Self::InvalidArgument {
                name,
                got,
                expected,
            } => write!(f, "Invalid argument to {name}. Got: {got}, Expected: {expected}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
