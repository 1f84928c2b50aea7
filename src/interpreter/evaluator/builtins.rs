use rand::Rng;

use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::apply_function;
use crate::interpreter::value::{Builtin, Value};

/// Resolves a name in the builtin table. Consulted by identifier lookup
/// after the environment chain comes up empty.
pub fn lookup(name: &str) -> Option<Value> {
    let entry = |name: &'static str, func| Some(Value::Builtin(Builtin { name, func }));

    match name {
        "print" => entry("print", builtin_print),
        "len" => entry("len", builtin_len),
        "push" => entry("push", builtin_push),
        "concat" => entry("concat", builtin_concat),
        "map" => entry("map", builtin_map),
        "reduce" => entry("reduce", builtin_reduce),
        "add" => entry("add", builtin_add),
        "sub" => entry("sub", builtin_sub),
        "mul" => entry("mul", builtin_mul),
        "div" => entry("div", builtin_div),
        "type" => entry("type", builtin_type),
        "rand" => entry("rand", builtin_rand),
        _ => None,
    }
}

fn wrong_arity(got: usize, expected: &str) -> Value {
    RuntimeError::WrongNumberOfArguments {
        got,
        expected: expected.to_string(),
    }
    .into()
}

/// Prints the inspected arguments joined by a space, then a newline.
/// Variadic; evaluates to `null`.
fn builtin_print(args: &[Value]) -> Value {
    let rendered: Vec<String> = args.iter().map(Value::inspect).collect();
    println!("{}", rendered.join(" "));
    Value::Null
}

/// Byte length of a string, or element count of an array.
fn builtin_len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }

    match &args[0] {
        Value::Str(value) => Value::Integer(value.len() as i64),
        Value::Array(elements) => Value::Integer(elements.borrow().len() as i64),
        other => RuntimeError::InvalidArgument {
            name: "len",
            got: other.type_name(),
            expected: "STRING or ARRAY",
        }
        .into(),
    }
}

/// Returns a fresh array with the element appended; the argument array is
/// untouched.
fn builtin_push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arity(args.len(), "2");
    }

    let Value::Array(elements) = &args[0] else {
        return RuntimeError::InvalidArgument {
            name: "push",
            got: args[0].type_name(),
            expected: "ARRAY",
        }
        .into();
    };

    let mut pushed = elements.borrow().clone();
    pushed.push(args[1].clone());
    Value::from(pushed)
}

/// Returns a fresh array holding the elements of both argument arrays.
fn builtin_concat(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arity(args.len(), "2");
    }

    let (Value::Array(left), Value::Array(right)) = (&args[0], &args[1]) else {
        let offender = if matches!(args[0], Value::Array(_)) {
            &args[1]
        } else {
            &args[0]
        };
        return RuntimeError::InvalidArgument {
            name: "concat",
            got: offender.type_name(),
            expected: "ARRAY",
        }
        .into();
    };

    let mut joined = left.borrow().clone();
    joined.extend(right.borrow().iter().cloned());
    Value::from(joined)
}

/// Applies a callable to every element, collecting the results into a fresh
/// array. The callable may be a user function or another builtin; the first
/// error aborts the traversal.
fn builtin_map(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arity(args.len(), "2");
    }

    let Value::Array(elements) = &args[0] else {
        return RuntimeError::InvalidArgument {
            name: "map",
            got: args[0].type_name(),
            expected: "ARRAY",
        }
        .into();
    };
    if !matches!(args[1], Value::Function(_) | Value::Builtin(_)) {
        return RuntimeError::InvalidArgument {
            name: "map",
            got: args[1].type_name(),
            expected: "FUNCTION",
        }
        .into();
    }

    let snapshot = elements.borrow().clone();
    let mut mapped = Vec::with_capacity(snapshot.len());

    for element in snapshot {
        let result = apply_function(&args[1], vec![element]);
        if result.is_error() {
            return result;
        }
        mapped.push(result);
    }

    Value::from(mapped)
}

/// Folds the array left to right: `acc = f(acc, element)`, starting from
/// the supplied initial value.
fn builtin_reduce(args: &[Value]) -> Value {
    if args.len() != 3 {
        return wrong_arity(args.len(), "3");
    }

    let Value::Array(elements) = &args[0] else {
        return RuntimeError::InvalidArgument {
            name: "reduce",
            got: args[0].type_name(),
            expected: "ARRAY",
        }
        .into();
    };
    if !matches!(args[1], Value::Function(_) | Value::Builtin(_)) {
        return RuntimeError::InvalidArgument {
            name: "reduce",
            got: args[1].type_name(),
            expected: "FUNCTION",
        }
        .into();
    }

    let snapshot = elements.borrow().clone();
    let mut accumulator = args[2].clone();

    for element in snapshot {
        accumulator = apply_function(&args[1], vec![accumulator, element]);
        if accumulator.is_error() {
            return accumulator;
        }
    }

    accumulator
}

fn integer_pair(args: &[Value], name: &'static str) -> Result<(i64, i64), Value> {
    if args.len() != 2 {
        return Err(wrong_arity(args.len(), "2"));
    }
    match (&args[0], &args[1]) {
        (Value::Integer(left), Value::Integer(right)) => Ok((*left, *right)),
        (Value::Integer(_), other) | (other, _) => Err(RuntimeError::InvalidArgument {
            name,
            got: other.type_name(),
            expected: "INTEGER",
        }
        .into()),
    }
}

fn builtin_add(args: &[Value]) -> Value {
    match integer_pair(args, "add") {
        Ok((left, right)) => Value::Integer(left.wrapping_add(right)),
        Err(error) => error,
    }
}

fn builtin_sub(args: &[Value]) -> Value {
    match integer_pair(args, "sub") {
        Ok((left, right)) => Value::Integer(left.wrapping_sub(right)),
        Err(error) => error,
    }
}

fn builtin_mul(args: &[Value]) -> Value {
    match integer_pair(args, "mul") {
        Ok((left, right)) => Value::Integer(left.wrapping_mul(right)),
        Err(error) => error,
    }
}

fn builtin_div(args: &[Value]) -> Value {
    match integer_pair(args, "div") {
        Ok((_, 0)) => RuntimeError::DivisionByZero.into(),
        Ok((left, right)) => Value::Integer(left.wrapping_div(right)),
        Err(error) => error,
    }
}

/// The value's type tag as a string.
fn builtin_type(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    Value::from(args[0].type_name().to_string())
}

/// `rand()` yields a uniform 31-bit integer; `rand(n)` yields a uniform
/// value in `[0, n)` for positive `n`.
fn builtin_rand(args: &[Value]) -> Value {
    let mut rng = rand::thread_rng();

    match args {
        [] => Value::Integer(rng.gen_range(0..(1_i64 << 31))),
        [Value::Integer(bound)] => {
            if *bound <= 0 {
                return RuntimeError::InvalidArgument {
                    name: "rand",
                    got: "INTEGER",
                    expected: "positive INTEGER",
                }
                .into();
            }
            Value::Integer(rng.gen_range(0..*bound))
        }
        [other] => RuntimeError::InvalidArgument {
            name: "rand",
            got: other.type_name(),
            expected: "INTEGER",
        }
        .into(),
        _ => wrong_arity(args.len(), "0 or 1"),
    }
}
