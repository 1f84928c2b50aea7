use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::Expression;
use crate::error::RuntimeError;
use crate::interpreter::environment::Environment;
use crate::interpreter::evaluator::core::eval_expression;
use crate::interpreter::value::{Pointer, Value};

/// `&ident` — only identifiers have an address. The cell stores the name
/// and a snapshot of the current value.
pub fn eval_ref_expression(right: &Expression, env: &Rc<Environment>) -> Value {
    let Expression::Identifier { name, .. } = right else {
        return RuntimeError::AddressOfNonIdentifier.into();
    };

    let Some(value) = env.get(name) else {
        return RuntimeError::AddressOfUndefined { name: name.clone() }.into();
    };

    Value::Pointer(Rc::new(RefCell::new(Pointer {
        name: name.clone(),
        value,
    })))
}

/// `*expr` — demands a pointer and re-reads the named variable from the
/// environment rather than the stored snapshot, so writes made after the
/// capture are visible.
pub fn eval_deref_expression(right: &Expression, env: &Rc<Environment>) -> Value {
    let value = eval_expression(right, env);
    if value.is_error() {
        return value;
    }

    let Value::Pointer(cell) = value else {
        return RuntimeError::CannotDereference {
            kind: value.type_name(),
        }
        .into();
    };

    let name = cell.borrow().name.clone();
    match env.get(&name) {
        Some(current) => current,
        None => RuntimeError::DanglingPointer { name }.into(),
    }
}
