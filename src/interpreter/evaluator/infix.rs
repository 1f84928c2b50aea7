use std::rc::Rc;

use crate::ast::InfixOperator;
use crate::error::RuntimeError;
use crate::interpreter::value::Value;

/// Applies an infix operator to two already-evaluated operands.
///
/// Operands of two different types are a type mismatch before anything
/// else. Equality then runs on the language's identity semantics (integers,
/// booleans and null by value, composites by handle); the remaining
/// operators dispatch on the operand type pair.
pub fn eval_infix_expression(operator: InfixOperator, left: &Value, right: &Value) -> Value {
    if left.type_name() != right.type_name() {
        return RuntimeError::TypeMismatch {
            left: left.type_name(),
            operator: operator.to_string(),
            right: right.type_name(),
        }
        .into();
    }

    match operator {
        InfixOperator::Eq => return Value::Boolean(left == right),
        InfixOperator::NotEq => return Value::Boolean(left != right),
        _ => {}
    }

    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => {
            eval_integer_infix(operator, *left, *right)
        }
        (Value::Str(left), Value::Str(right)) => eval_string_infix(operator, left, right),
        (Value::Array(left), Value::Array(right)) => eval_array_infix(operator, left, right),
        _ => unknown_infix(operator, left, right),
    }
}

fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Value {
    match operator {
        InfixOperator::Plus => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Minus => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Asterisk => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Slash => {
            if right == 0 {
                RuntimeError::DivisionByZero.into()
            } else {
                // i64::MIN / -1 is the one remaining overflow; wrap it like
                // the other arithmetic operators.
                Value::Integer(left.wrapping_div(right))
            }
        }
        InfixOperator::Lt => Value::Boolean(left < right),
        InfixOperator::Gt => Value::Boolean(left > right),
        InfixOperator::Lte => Value::Boolean(left <= right),
        InfixOperator::Gte => Value::Boolean(left >= right),
        InfixOperator::Eq | InfixOperator::NotEq => {
            unknown_infix(operator, &Value::Integer(left), &Value::Integer(right))
        }
    }
}

/// `+` concatenates into a fresh string; no other operator is defined.
fn eval_string_infix(operator: InfixOperator, left: &Rc<String>, right: &Rc<String>) -> Value {
    if operator != InfixOperator::Plus {
        return unknown_infix(
            operator,
            &Value::Str(left.clone()),
            &Value::Str(right.clone()),
        );
    }

    let mut joined = String::with_capacity(left.len() + right.len());
    joined.push_str(left);
    joined.push_str(right);
    Value::from(joined)
}

/// `+` concatenates element-wise into a fresh array; neither operand is
/// touched.
fn eval_array_infix(
    operator: InfixOperator,
    left: &Rc<std::cell::RefCell<Vec<Value>>>,
    right: &Rc<std::cell::RefCell<Vec<Value>>>,
) -> Value {
    if operator != InfixOperator::Plus {
        return unknown_infix(
            operator,
            &Value::Array(left.clone()),
            &Value::Array(right.clone()),
        );
    }

    let mut joined = left.borrow().clone();
    joined.extend(right.borrow().iter().cloned());
    Value::from(joined)
}

fn unknown_infix(operator: InfixOperator, left: &Value, right: &Value) -> Value {
    RuntimeError::UnknownInfixOperator {
        left: left.type_name(),
        operator: operator.to_string(),
        right: right.type_name(),
    }
    .into()
}
