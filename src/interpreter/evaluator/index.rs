use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::RuntimeError;
use crate::interpreter::value::{HashKey, HashPair, Value};

/// Evaluates `receiver[index]` on already-evaluated operands.
pub fn eval_index_expression(left: &Value, index: &Value) -> Value {
    match (left, index) {
        (Value::Array(elements), Value::Integer(index)) => {
            eval_array_index(&elements.borrow(), *index)
        }
        (Value::Hash(pairs), index) => eval_hash_index(pairs, index),
        _ => RuntimeError::IndexNotSupported {
            left: left.type_name(),
            index: index.type_name(),
        }
        .into(),
    }
}

/// Negative indices count from the end; anything out of range is `null`.
fn eval_array_index(elements: &[Value], index: i64) -> Value {
    let length = elements.len() as i64;

    let index = if index < 0 { length + index } else { index };
    if index < 0 || index >= length {
        return Value::Null;
    }

    elements[index as usize].clone()
}

/// A missing key is `null`; an unhashable key is an error.
fn eval_hash_index(pairs: &RefCell<HashMap<HashKey, HashPair>>, index: &Value) -> Value {
    let Some(key) = index.hash_key() else {
        return RuntimeError::UnusableAsHashKey {
            kind: index.type_name(),
        }
        .into();
    };

    match pairs.borrow().get(&key) {
        Some(pair) => pair.value.clone(),
        None => Value::Null,
    }
}
