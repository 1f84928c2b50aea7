use std::rc::Rc;

use crate::ast::Expression;
use crate::error::RuntimeError;
use crate::interpreter::environment::Environment;
use crate::interpreter::evaluator::core::eval_expression;
use crate::interpreter::value::{HashPair, Value};

/// Evaluates `target = value`. The policy is target-dependent:
///
/// 1. Identifier: the binding must be mutable; the write lands in the
///    current frame. The mutability check runs before the right-hand side
///    is evaluated.
/// 2. Index expression: the receiver must be a mutable identifier; arrays
///    support negative indices but reject out-of-bounds writes, hashes
///    insert or overwrite. Nested index targets are rejected.
/// 3. Dereference: the referenced variable must be mutable; the write goes
///    through the environment and refreshes the pointer's snapshot.
///
/// The assigned value is the expression's result.
pub fn eval_assignment_expression(
    target: &Expression,
    value: &Expression,
    line: usize,
    env: &Rc<Environment>,
) -> Value {
    match target {
        Expression::Identifier {
            name,
            line: target_line,
        } => {
            if !env.is_mutable(name) {
                return RuntimeError::AssignToImmutable {
                    name: name.clone(),
                    line: *target_line,
                }
                .into();
            }

            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }

            env.set(name, value.clone(), true);
            value
        }
        Expression::Deref { right, .. } => eval_deref_assignment(right, value, line, env),
        Expression::Index {
            left: receiver,
            index,
            ..
        } => eval_index_assignment(receiver, index, value, line, env),
        _ => RuntimeError::InvalidAssignmentTarget { line }.into(),
    }
}

/// `*p = v` — writes the variable named by the pointer and updates the
/// cell's snapshot.
fn eval_deref_assignment(
    pointer_expression: &Expression,
    value: &Expression,
    line: usize,
    env: &Rc<Environment>,
) -> Value {
    let pointer = eval_expression(pointer_expression, env);
    if pointer.is_error() {
        return pointer;
    }

    let Value::Pointer(cell) = pointer else {
        return RuntimeError::CannotDereferenceAssign {
            kind: pointer.type_name(),
            line,
        }
        .into();
    };

    let name = cell.borrow().name.clone();
    if !env.is_mutable(&name) {
        return RuntimeError::AssignToImmutable { name, line }.into();
    }

    let value = eval_expression(value, env);
    if value.is_error() {
        return value;
    }

    env.set(&name, value.clone(), true);
    cell.borrow_mut().value = value.clone();
    value
}

/// `a[i] = v` and `h[k] = v`.
fn eval_index_assignment(
    receiver: &Expression,
    index: &Expression,
    value: &Expression,
    line: usize,
    env: &Rc<Environment>,
) -> Value {
    let target = eval_expression(receiver, env);
    if target.is_error() {
        return target;
    }

    // Only a plain identifier receiver can be checked for mutability;
    // nested index targets such as `a[i][j]` are rejected outright.
    match receiver {
        Expression::Identifier {
            name,
            line: target_line,
        } => {
            if !env.is_mutable(name) {
                return RuntimeError::AssignToImmutable {
                    name: name.clone(),
                    line: *target_line,
                }
                .into();
            }
        }
        _ => return RuntimeError::ComplexIndexAssignment { line }.into(),
    }

    let index = eval_expression(index, env);
    if index.is_error() {
        return index;
    }

    let value = eval_expression(value, env);
    if value.is_error() {
        return value;
    }

    match target {
        Value::Array(elements) => {
            let Value::Integer(raw_index) = index else {
                return RuntimeError::ArrayIndexNotInteger { line }.into();
            };

            let mut elements = elements.borrow_mut();
            let length = elements.len() as i64;
            let resolved = if raw_index < 0 {
                length + raw_index
            } else {
                raw_index
            };

            if resolved < 0 || resolved >= length {
                return RuntimeError::ArrayIndexOutOfBounds {
                    index: resolved,
                    line,
                }
                .into();
            }

            elements[resolved as usize] = value.clone();
            value
        }
        Value::Hash(pairs) => {
            let Some(key) = index.hash_key() else {
                return RuntimeError::UnusableAsHashKeyAssign {
                    kind: index.type_name(),
                    line,
                }
                .into();
            };

            pairs.borrow_mut().insert(
                key,
                HashPair {
                    key: index,
                    value: value.clone(),
                },
            );
            value
        }
        other => RuntimeError::CannotIndexInto {
            kind: other.type_name(),
            line,
        }
        .into(),
    }
}
