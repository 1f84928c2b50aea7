use crate::ast::PrefixOperator;
use crate::error::RuntimeError;
use crate::interpreter::value::Value;

/// Applies a prefix operator to an already-evaluated operand.
pub fn eval_prefix_expression(operator: PrefixOperator, right: &Value) -> Value {
    match operator {
        PrefixOperator::Bang => eval_bang(right),
        PrefixOperator::Minus => match right {
            Value::Integer(value) => Value::Integer(value.wrapping_neg()),
            other => unknown_prefix("-", other),
        },
        PrefixOperator::Plus => match right {
            Value::Integer(value) => Value::Integer(*value),
            other => unknown_prefix("+", other),
        },
    }
}

/// Boolean negation with the language's truthiness coercion: `!false` and
/// `!null` are `true`; everything else negates to `false`.
fn eval_bang(right: &Value) -> Value {
    match right {
        Value::Boolean(value) => Value::Boolean(!value),
        Value::Null => Value::Boolean(true),
        _ => Value::Boolean(false),
    }
}

fn unknown_prefix(operator: &str, right: &Value) -> Value {
    RuntimeError::UnknownPrefixOperator {
        operator: operator.to_string(),
        right: right.type_name(),
    }
    .into()
}
