use std::rc::Rc;

use crate::ast::{Block, Expression, ForInit};
use crate::interpreter::environment::Environment;
use crate::interpreter::evaluator::core::{eval_block, eval_expression};
use crate::interpreter::value::Value;

/// `while (<cond>) { … }` — re-evaluates the condition before every
/// iteration. An error anywhere aborts; a `return` in the body escapes the
/// loop toward the enclosing function boundary. The loop itself evaluates
/// to `null`.
pub fn eval_while_expression(
    condition: &Expression,
    body: &Block,
    env: &Rc<Environment>,
) -> Value {
    loop {
        let decided = eval_expression(condition, env);
        if decided.is_error() {
            return decided;
        }
        if !decided.is_truthy() {
            return Value::Null;
        }

        let result = eval_block(body, env);
        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }
    }
}

/// `for (let [mut] i = <e>; <cond>; i++) { … }`.
///
/// The initializer runs once in the enclosing environment; no new frame is
/// opened, so the loop variable (and any `let` in the body) stays visible
/// after the loop. Each iteration runs condition, body, then the increment,
/// whose result is rebound to the loop variable. The machinery treats the
/// loop variable as mutable regardless of `mut`.
pub fn eval_for_expression(
    init: &ForInit,
    condition: &Expression,
    increment: &Expression,
    body: &Block,
    env: &Rc<Environment>,
) -> Value {
    let initial = eval_expression(&init.value, env);
    if initial.is_error() {
        return initial;
    }
    env.set(&init.name, initial, true);

    loop {
        let decided = eval_expression(condition, env);
        if decided.is_error() {
            return decided;
        }
        if !decided.is_truthy() {
            return Value::Null;
        }

        let result = eval_block(body, env);
        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }

        let stepped = eval_expression(increment, env);
        if stepped.is_error() {
            return stepped;
        }
        env.set(&init.name, stepped, true);
    }
}
