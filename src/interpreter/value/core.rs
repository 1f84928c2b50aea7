use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::Block;
use crate::error::RuntimeError;
use crate::interpreter::environment::Environment;
use crate::interpreter::value::hash_key::HashKey;

/// Represents a runtime value in the interpreter.
///
/// Arrays and hashes are held behind shared handles so that index assignment
/// through one binding is observable through every other binding of the same
/// value. `Return` and `Error` are internal wrappers used to unwind
/// statement sequences without host exceptions.
#[derive(Debug, Clone)]
pub enum Value {
    /// A signed 64-bit integer. Arithmetic wraps; division truncates toward
    /// zero.
    Integer(i64),
    /// A boolean value.
    Boolean(bool),
    /// A byte string. `+` concatenates; `len` reports the byte length.
    Str(Rc<String>),
    /// The absence of a value.
    Null,
    /// An ordered, heterogeneous sequence. Supports negative indexing.
    Array(Rc<RefCell<Vec<Value>>>),
    /// A mapping from hash keys to key/value pairs. Only integers, booleans
    /// and strings are usable as keys.
    Hash(Rc<RefCell<HashMap<HashKey, HashPair>>>),
    /// A closure: parameters, body, and the environment captured at the
    /// point of definition.
    Function(Rc<Function>),
    /// A host-provided function.
    Builtin(Builtin),
    /// Wrapper produced by `return`; unwrapped at the nearest function
    /// boundary or the program root.
    Return(Box<Value>),
    /// Wrapper produced by a runtime failure; bubbles out of every compound
    /// evaluation and is never unwrapped.
    Error(String),
    /// A reference cell produced by `&ident`: the referenced name plus a
    /// snapshot of its value at capture or last write-through.
    Pointer(Rc<RefCell<Pointer>>),
}

/// A user-defined function value. The environment link is what makes it a
/// closure: nested functions capture their defining frame by reference.
#[derive(Clone)]
pub struct Function {
    pub parameters: Vec<String>,
    pub body: Block,
    pub env: Rc<Environment>,
}

// The captured environment can reach this function again through the name
// it was bound to, so Debug stays shallow.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// A reference cell: the name of the variable it was taken from and the
/// value observed at capture time. Reads go back through the environment;
/// writes refresh the snapshot.
#[derive(Debug, Clone)]
pub struct Pointer {
    pub name: String,
    pub value: Value,
}

/// The signature shared by every builtin function.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A named host function. Builtins are variadic at the call boundary and
/// validate their own arity.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish()
    }
}

/// A single hash entry, keeping the original key value alongside the value
/// so the inspector can print both.
#[derive(Debug, Clone)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

impl Value {
    /// The stable textual type tag, as used in error messages and by the
    /// `type` builtin.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Null => "NULL",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Return(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Pointer(_) => "POINTER",
        }
    }

    /// Whether the value decides a conditional as true. Only `false` and
    /// `null` are false.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    /// Whether the value is the internal error wrapper.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// The value's textual form, as printed by the REPL and by `print`.
    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(value) => value.to_string(),
            Value::Boolean(value) => value.to_string(),
            Value::Str(value) => value.as_ref().clone(),
            Value::Null => "null".to_string(),
            Value::Array(elements) => {
                let elements: Vec<String> =
                    elements.borrow().iter().map(Value::inspect).collect();
                format!("[{}]", elements.join(", "))
            }
            Value::Hash(pairs) => {
                let pairs: Vec<String> = pairs
                    .borrow()
                    .values()
                    .map(|pair| format!("{}: {}", pair.key.inspect(), pair.value.inspect()))
                    .collect();
                format!("{{{}}}", pairs.join(", "))
            }
            Value::Function(function) => {
                format!(
                    "fn({}) {{\n{}\n}}",
                    function.parameters.join(", "),
                    function.body
                )
            }
            Value::Builtin(_) => "builtin function".to_string(),
            Value::Return(value) => value.inspect(),
            Value::Error(message) => format!("\x1b[31mERROR: {message}\x1b[0m"),
            Value::Pointer(cell) => format!("&{}", cell.borrow().name),
        }
    }
}

/// Equality follows the language's observables: integers, booleans and null
/// compare by value; strings, arrays, hashes, functions and pointers compare
/// by handle identity; builtins by host function identity. Cross-type
/// comparisons never reach this point because the evaluator reports a type
/// mismatch first.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => left == right,
            (Value::Boolean(left), Value::Boolean(right)) => left == right,
            (Value::Null, Value::Null) => true,
            (Value::Str(left), Value::Str(right)) => Rc::ptr_eq(left, right),
            (Value::Array(left), Value::Array(right)) => Rc::ptr_eq(left, right),
            (Value::Hash(left), Value::Hash(right)) => Rc::ptr_eq(left, right),
            (Value::Function(left), Value::Function(right)) => Rc::ptr_eq(left, right),
            (Value::Pointer(left), Value::Pointer(right)) => Rc::ptr_eq(left, right),
            (Value::Builtin(left), Value::Builtin(right)) => left.name == right.name,
            _ => false,
        }
    }
}

impl From<RuntimeError> for Value {
    fn from(error: RuntimeError) -> Self {
        Value::Error(error.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Rc::new(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(elements)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_are_stable() {
        assert_eq!(Value::Integer(1).type_name(), "INTEGER");
        assert_eq!(Value::Null.type_name(), "NULL");
        assert_eq!(Value::from(vec![]).type_name(), "ARRAY");
        assert_eq!(Value::Error("boom".into()).type_name(), "ERROR");
    }

    #[test]
    fn truthiness() {
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::from("".to_string()).is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn fresh_strings_are_not_identical() {
        let left = Value::from("a".to_string());
        let right = Value::from("a".to_string());
        assert_ne!(left, right);
        assert_eq!(left, left.clone());
    }

    #[test]
    fn arrays_compare_by_handle() {
        let left = Value::from(vec![Value::Integer(1)]);
        let right = Value::from(vec![Value::Integer(1)]);
        assert_ne!(left, right);
        assert_eq!(left, left.clone());
    }

    #[test]
    fn inspect_forms() {
        assert_eq!(Value::Integer(5).inspect(), "5");
        assert_eq!(Value::Boolean(true).inspect(), "true");
        assert_eq!(Value::Null.inspect(), "null");
        assert_eq!(Value::from("raw text".to_string()).inspect(), "raw text");
        assert_eq!(
            Value::from(vec![Value::Integer(1), Value::Integer(2)]).inspect(),
            "[1, 2]"
        );
    }
}
