use std::rc::Rc;

use crate::ast::{Block, Expression, Program, Statement};
use crate::error::RuntimeError;
use crate::interpreter::environment::Environment;
use crate::interpreter::evaluator::builtins;
use crate::interpreter::value::{Function, HashPair, Value};

/// Evaluates a whole program in `env` and returns its result.
///
/// A `return` at the top level unwraps here; an `ERROR` value becomes the
/// program's result as-is.
pub fn eval_program(program: &Program, env: &Rc<Environment>) -> Value {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env);

        match result {
            Value::Return(value) => return *value,
            Value::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates the statements of a block in order. `Return` and `Error`
/// wrappers terminate the walk immediately and are passed through unchanged;
/// only a function boundary or the program root unwraps them.
pub fn eval_block(block: &Block, env: &Rc<Environment>) -> Value {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env);

        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Rc<Environment>) -> Value {
    match statement {
        Statement::Let {
            name,
            mutable,
            value,
            ..
        } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.set(name, value.clone(), *mutable);
            value
        }
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Value::Return(Box::new(value))
        }
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

/// Evaluates a single expression node. This is the dispatch heart of the
/// tree walk; each arm delegates to the module that owns its semantics.
pub fn eval_expression(expression: &Expression, env: &Rc<Environment>) -> Value {
    match expression {
        Expression::Integer { value, .. } => Value::Integer(*value),
        Expression::Str { value, .. } => Value::from(value.clone()),
        Expression::Boolean { value, .. } => Value::Boolean(*value),
        Expression::Identifier { name, .. } => eval_identifier(name, env),
        Expression::Prefix {
            operator, right, ..
        } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            super::prefix::eval_prefix_expression(*operator, &right)
        }
        Expression::Infix {
            operator,
            left,
            right,
            ..
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            super::infix::eval_infix_expression(*operator, &left, &right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
            ..
        } => {
            let condition = eval_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Value::Null
            }
        }
        Expression::Function {
            parameters, body, ..
        } => Value::Function(Rc::new(Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: env.clone(),
        })),
        Expression::Call {
            function,
            arguments,
            ..
        } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }
            let arguments = match eval_expressions(arguments, env) {
                Ok(arguments) => arguments,
                Err(error) => return error,
            };
            apply_function(&function, arguments)
        }
        Expression::Array { elements, .. } => match eval_expressions(elements, env) {
            Ok(elements) => Value::from(elements),
            Err(error) => error,
        },
        Expression::Hash { pairs, .. } => eval_hash_literal(pairs, env),
        Expression::Index { left, index, .. } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            super::index::eval_index_expression(&left, &index)
        }
        Expression::Increment { left, .. } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            match left {
                Value::Integer(value) => Value::Integer(value.wrapping_add(1)),
                other => RuntimeError::UnknownSuffixOperator {
                    left: other.type_name(),
                }
                .into(),
            }
        }
        Expression::While {
            condition, body, ..
        } => super::loops::eval_while_expression(condition, body, env),
        Expression::For {
            init,
            condition,
            increment,
            body,
            ..
        } => super::loops::eval_for_expression(init, condition, increment, body, env),
        Expression::Assign {
            target,
            value,
            line,
        } => super::assign::eval_assignment_expression(target, value, *line, env),
        Expression::Ref { right, .. } => super::pointer::eval_ref_expression(right, env),
        Expression::Deref { right, .. } => super::pointer::eval_deref_expression(right, env),
    }
}

/// Resolves a name through the environment chain, then the builtin table.
fn eval_identifier(name: &str, env: &Rc<Environment>) -> Value {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    RuntimeError::IdentifierNotFound {
        name: name.to_string(),
    }
    .into()
}

/// Evaluates a list of expressions left to right, stopping at the first
/// `ERROR` value, which is handed back through `Err`.
fn eval_expressions(
    expressions: &[Expression],
    env: &Rc<Environment>,
) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let value = eval_expression(expression, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }

    Ok(values)
}

fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &Rc<Environment>) -> Value {
    let mut map = std::collections::HashMap::new();

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env);
        if key.is_error() {
            return key;
        }

        let Some(hash_key) = key.hash_key() else {
            return RuntimeError::UnusableAsHashKey {
                kind: key.type_name(),
            }
            .into();
        };

        let value = eval_expression(value_expression, env);
        if value.is_error() {
            return value;
        }

        map.insert(hash_key, HashPair { key, value });
    }

    Value::Hash(Rc::new(std::cell::RefCell::new(map)))
}

/// Applies a callable to already-evaluated arguments.
///
/// User functions get a fresh frame chained to their captured environment,
/// with parameters bound immutably; a `Return` escaping the body unwraps
/// here, at the function boundary. Builtins are host calls and manage their
/// own validation.
pub fn apply_function(function: &Value, arguments: Vec<Value>) -> Value {
    match function {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return RuntimeError::WrongNumberOfArguments {
                    got: arguments.len(),
                    expected: function.parameters.len().to_string(),
                }
                .into();
            }

            let frame = Environment::new_enclosed(function.env.clone());
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                frame.set(parameter, argument, false);
            }

            unwrap_return_value(eval_block(&function.body, &frame))
        }
        Value::Builtin(builtin) => (builtin.func)(&arguments),
        other => RuntimeError::NotAFunction {
            kind: other.type_name(),
        }
        .into(),
    }
}

fn unwrap_return_value(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::Parser;

    fn test_eval(input: &str) -> Value {
        let mut parser = Parser::new(input);
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "parse errors for {input:?}: {:?}",
            parser.errors()
        );

        let env = Environment::new();
        eval_program(&program, &env)
    }

    fn assert_integer(input: &str, expected: i64) {
        match test_eval(input) {
            Value::Integer(value) => assert_eq!(value, expected, "input: {input}"),
            other => panic!("expected INTEGER for {input:?}, got {other:?}"),
        }
    }

    fn assert_boolean(input: &str, expected: bool) {
        match test_eval(input) {
            Value::Boolean(value) => assert_eq!(value, expected, "input: {input}"),
            other => panic!("expected BOOLEAN for {input:?}, got {other:?}"),
        }
    }

    fn assert_null(input: &str) {
        match test_eval(input) {
            Value::Null => {}
            other => panic!("expected NULL for {input:?}, got {other:?}"),
        }
    }

    fn assert_error(input: &str, expected: &str) {
        match test_eval(input) {
            Value::Error(message) => assert_eq!(message, expected, "input: {input}"),
            other => panic!("expected ERROR for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn integer_expressions() {
        let tests = [
            ("5", 5),
            ("10", 10),
            ("-5", -5),
            ("+5", 5),
            ("5 + 5 + 5 + 5 - 10", 10),
            ("2 * 2 * 2 * 2 * 2", 32),
            ("-50 + 100 + -50", 0),
            ("5 * 2 + 10", 20),
            ("5 + 2 * 10", 25),
            ("20 + 2 * -10", 0),
            ("50 / 2 * 2 + 10", 60),
            ("2 * (5 + 10)", 30),
            ("3 * 3 * 3 + 10", 37),
            ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
            ("7 / 2", 3),
            ("-7 / 2", -3),
        ];
        for (input, expected) in tests {
            assert_integer(input, expected);
        }
    }

    #[test]
    fn boolean_expressions() {
        let tests = [
            ("true", true),
            ("false", false),
            ("1 < 2", true),
            ("1 > 2", false),
            ("1 == 1", true),
            ("1 != 1", false),
            ("true == true", true),
            ("false == false", true),
            ("true == false", false),
            ("true != false", true),
            ("(1 < 2) == true", true),
            ("(10 <= 10) == true", true),
            ("(10 >= 10) == true", true),
            ("(10 < 10) == true", false),
        ];
        for (input, expected) in tests {
            assert_boolean(input, expected);
        }
    }

    #[test]
    fn less_greater_or_equal() {
        let tests = [
            ("5 <= 5", true),
            ("4 <= 5", true),
            ("6 <= 5", false),
            ("10 >= 9", true),
            ("10 >= 10", true),
            ("10 >= 11", false),
        ];
        for (input, expected) in tests {
            assert_boolean(input, expected);
        }
    }

    #[test]
    fn bang_operator() {
        let tests = [
            ("!true", false),
            ("!false", true),
            ("!5", false),
            ("!!true", true),
            ("!!false", false),
            ("!!5", true),
        ];
        for (input, expected) in tests {
            assert_boolean(input, expected);
        }
    }

    #[test]
    fn if_else_expressions() {
        assert_integer("if (true) { 10 }", 10);
        assert_null("if (false) { 10 }");
        assert_integer("if (1) { 10 }", 10);
        assert_integer("if (1 < 2) { 10 }", 10);
        assert_null("if (1 > 2) { 10 }");
        assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
        assert_integer("if (1 <= 1) { 10 } else { 20 }", 10);
    }

    #[test]
    fn return_statements() {
        let tests = [
            ("return 10;", 10),
            ("return 10; 9;", 10),
            ("return 2 * 5; 9;", 10),
            ("9; return 2 * 5; 9;", 10),
            (
                "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
                10,
            ),
        ];
        for (input, expected) in tests {
            assert_integer(input, expected);
        }
    }

    #[test]
    fn error_handling() {
        let tests = [
            ("5 + true;", "Type mismatch: INTEGER + BOOLEAN"),
            ("5 + true; 5;", "Type mismatch: INTEGER + BOOLEAN"),
            ("-true", "Unknown operator: -BOOLEAN"),
            ("true + false;", "Unknown operator: BOOLEAN + BOOLEAN"),
            ("5; true + false; 5", "Unknown operator: BOOLEAN + BOOLEAN"),
            (
                "if (10 > 1) { true + false; }",
                "Unknown operator: BOOLEAN + BOOLEAN",
            ),
            (
                "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                "Unknown operator: BOOLEAN + BOOLEAN",
            ),
            ("foobar", "Identifier not found: foobar"),
            (r#""Hello" - "World!""#, "Unknown operator: STRING - STRING"),
            (
                r#"{"name": "Ember"}[fn(x) { x }];"#,
                "Unusable as hash key: FUNCTION",
            ),
            ("5 / 0", "Division by zero"),
            ("5(1)", "Not a function: INTEGER"),
            (r#""text"[0]"#, "Index operator not supported: STRING INTEGER"),
            ("true++", "Unknown operator: BOOLEAN++"),
        ];
        for (input, expected) in tests {
            assert_error(input, expected);
        }
    }

    #[test]
    fn let_statements() {
        let tests = [
            ("let a = 5; a;", 5),
            ("let a = 5 * 5; a;", 25),
            ("let a = 5; let b = a; b;", 5),
            ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
        ];
        for (input, expected) in tests {
            assert_integer(input, expected);
        }
    }

    #[test]
    fn function_values() {
        match test_eval("fn(x) { x + 2; };") {
            Value::Function(function) => {
                assert_eq!(function.parameters, vec!["x".to_string()]);
                assert_eq!(function.body.to_string(), "(x + 2)");
            }
            other => panic!("expected FUNCTION, got {other:?}"),
        }
    }

    #[test]
    fn function_application() {
        let tests = [
            ("let identity = fn(x) { x; }; identity(5);", 5),
            ("let identity = fn(x) { return x; }; identity(5);", 5),
            ("let double = fn(x) { x * 2; }; double(5);", 10),
            ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
            ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
            ("fn(x) { x; }(5)", 5),
        ];
        for (input, expected) in tests {
            assert_integer(input, expected);
        }
    }

    #[test]
    fn wrong_argument_count_is_an_error() {
        assert_error(
            "fn(x) { x; }(1, 2)",
            "Invalid number of arguments. Got: 2, Expected: 1",
        );
        assert_error(
            "fn(x, y) { x + y; }(1)",
            "Invalid number of arguments. Got: 1, Expected: 2",
        );
    }

    #[test]
    fn closures() {
        assert_integer(
            "let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(2);",
            4,
        );
    }

    #[test]
    fn closures_capture_by_reference() {
        assert_integer("let mut x = 1; let f = fn() { x }; x = 2; f()", 2);
    }

    #[test]
    fn recursive_functions() {
        assert_integer(
            "let fib = fn(n) { if (n <= 1) { return n; } return fib(n - 1) + fib(n - 2); }; fib(10);",
            55,
        );
    }

    #[test]
    fn string_literals_and_concatenation() {
        match test_eval(r#""Hello World!""#) {
            Value::Str(value) => assert_eq!(value.as_ref(), "Hello World!"),
            other => panic!("expected STRING, got {other:?}"),
        }
        match test_eval(r#""Hello" + " " + "World!""#) {
            Value::Str(value) => assert_eq!(value.as_ref(), "Hello World!"),
            other => panic!("expected STRING, got {other:?}"),
        }
    }

    #[test]
    fn composite_equality_is_by_handle() {
        assert_boolean("let a = [1, 2]; a == a", true);
        assert_boolean("[1] == [1]", false);
        assert_boolean(r#""a" == "a""#, false);
        assert_boolean("let s = \"a\"; s == s", true);
        assert_boolean("let f = fn() { 0 }; f == f", true);
    }

    #[test]
    fn array_literals_and_indexing() {
        match test_eval("[1, 2 * 2, 3 + 3]") {
            Value::Array(elements) => {
                let elements = elements.borrow();
                assert_eq!(elements.len(), 3);
                assert_eq!(elements[0], Value::Integer(1));
                assert_eq!(elements[1], Value::Integer(4));
                assert_eq!(elements[2], Value::Integer(6));
            }
            other => panic!("expected ARRAY, got {other:?}"),
        }

        let tests = [
            ("[1, 2, 3][0]", 1),
            ("[1, 2, 3][1]", 2),
            ("[1, 2, 3][2]", 3),
            ("let i = 0; [1][i];", 1),
            ("[1, 2, 3][1 + 1];", 3),
            ("let myArray = [1, 2, 3]; myArray[2];", 3),
            (
                "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
                6,
            ),
            ("[1, 2, 3][-1]", 3),
            ("[1, 2, 3][-2]", 2),
        ];
        for (input, expected) in tests {
            assert_integer(input, expected);
        }

        assert_null("[1, 2, 3][3]");
        assert_null("[1, 2, 3][-8]");
    }

    #[test]
    fn array_concatenation() {
        let tests = [
            ("[1, 2, 3] + [4, 5, 6]", vec![1, 2, 3, 4, 5, 6]),
            ("[1, 2, 3] + []", vec![1, 2, 3]),
            ("[] + [1, 2, 3]", vec![1, 2, 3]),
            ("[] + []", vec![]),
        ];
        for (input, expected) in tests {
            match test_eval(input) {
                Value::Array(elements) => {
                    let got: Vec<i64> = elements
                        .borrow()
                        .iter()
                        .map(|element| match element {
                            Value::Integer(value) => *value,
                            other => panic!("non-integer element {other:?}"),
                        })
                        .collect();
                    assert_eq!(got, expected, "input: {input}");
                }
                other => panic!("expected ARRAY for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn plus_does_not_mutate_its_operands() {
        assert_integer("let mut a = [1, 2]; let b = a + [3]; len(a)", 2);
        assert_integer("let mut a = [1, 2]; let b = a + [3]; len(b)", 3);
    }

    #[test]
    fn hash_literals() {
        let input = r#"
            let two = "two";
            {
                "one": 10 - 9,
                two: 1 + 1,
                "thr" + "ee": 6 / 2,
                4: 4,
                true: 5,
                false: 6
            }
        "#;
        match test_eval(input) {
            Value::Hash(pairs) => {
                let pairs = pairs.borrow();
                assert_eq!(pairs.len(), 6);

                let expectations = [
                    (Value::from("one".to_string()), 1),
                    (Value::from("two".to_string()), 2),
                    (Value::from("three".to_string()), 3),
                    (Value::Integer(4), 4),
                    (Value::Boolean(true), 5),
                    (Value::Boolean(false), 6),
                ];
                for (key, expected) in expectations {
                    let pair = pairs
                        .get(&key.hash_key().unwrap())
                        .unwrap_or_else(|| panic!("missing pair for {key:?}"));
                    assert_eq!(pair.value, Value::Integer(expected));
                }
            }
            other => panic!("expected HASH, got {other:?}"),
        }
    }

    #[test]
    fn hash_index_expressions() {
        assert_integer(r#"{"foo": 5}["foo"]"#, 5);
        assert_null(r#"{"foo": 5}["bar"]"#);
        assert_integer(r#"let key = "foo"; {"foo": 5}[key]"#, 5);
        assert_null(r#"{}["foo"]"#);
        assert_integer("{5: 5}[5]", 5);
        assert_integer("{true: 5}[true]", 5);
        assert_integer("{false: 5}[false]", 5);
        assert_integer(r#"{"one": 1, "two": 2}["two"]"#, 2);
    }

    #[test]
    fn increment_is_non_mutating() {
        assert_integer("let x = 5; x++", 6);
        assert_integer("let x = 5; x++; x", 5);
        assert_integer("let mut x = 5; x = x++; x", 6);
    }

    #[test]
    fn while_loops() {
        assert_integer("let mut i = 0; while (i < 5) { i = i + 1; }; i", 5);
        assert_null("while (false) { 1 }");
        assert_error(
            "let mut i = 0; while (i < 5) { j }",
            "Identifier not found: j",
        );
    }

    #[test]
    fn for_loops() {
        assert_integer(
            "let mut s = 0; for (let i = 0; i <= 10; i++) { s = s + i; }; return s;",
            55,
        );
        // No new frame: both the loop variable and body lets stay visible.
        assert_integer("for (let i = 0; i < 3; i++) { let x = i; }; x", 2);
        assert_integer("for (let i = 0; i < 3; i++) { 0 }; i", 3);
    }

    #[test]
    fn return_escapes_loops_to_the_function_boundary() {
        assert_integer(
            "let f = fn() { while (true) { return 7; } }; f()",
            7,
        );
        assert_integer(
            "let f = fn() { for (let i = 0; i < 10; i++) { if (i == 3) { return i; } } }; f()",
            3,
        );
    }

    #[test]
    fn assignment_respects_mutability() {
        assert_error(
            "let x = 5; x = 10;",
            "(line 1) Cannot assign to immutable variable: x",
        );
        assert_integer("let mut x = 5; x = 10; x", 10);
        assert_integer("let mut x = 5; x = x + 1", 6);
        assert_error(
            "y = 1",
            "(line 1) Cannot assign to immutable variable: y",
        );
    }

    #[test]
    fn assignment_error_reports_the_target_line() {
        assert_error(
            "let a = 1;\nlet b = 2;\na = 3;",
            "(line 3) Cannot assign to immutable variable: a",
        );
    }

    #[test]
    fn index_assignment() {
        assert_integer("let mut a = [1, 2, 3]; a[0] = 10; a[0]", 10);
        assert_integer("let mut a = [1, 2, 3]; a[0] = 10; return a[0] + a[-1];", 13);
        assert_integer("let mut a = [1, 2, 3]; a[-1] = 9; a[2]", 9);
        assert_error(
            "let a = [1, 2, 3]; a[0] = 10;",
            "(line 1) Cannot assign to immutable variable: a",
        );
        assert_error(
            "let mut a = [1, 2, 3]; a[5] = 1;",
            "(line 1) Array index out of bounds: 5",
        );
        assert_error(
            "let mut a = [1, 2, 3]; a[-4] = 1;",
            "(line 1) Array index out of bounds: -1",
        );
        assert_error(
            "let mut a = [1, 2, 3]; a[true] = 1;",
            "(line 1) Array index must be an integer",
        );
        assert_error(
            "let mut a = [[1]]; a[0][0] = 2;",
            "(line 1) Complex index expressions not yet supported for assignment",
        );
        assert_error(
            "let mut n = 5; n[0] = 1;",
            "(line 1) Cannot index into type: INTEGER",
        );
    }

    #[test]
    fn hash_assignment_inserts_and_overwrites() {
        assert_integer(r#"let mut h = {}; h["k"] = 1; h["k"]"#, 1);
        assert_integer(r#"let mut h = {"k": 1}; h["k"] = 2; h["k"]"#, 2);
        assert_error(
            r#"let mut h = {}; h[[1]] = 1;"#,
            "(line 1) Unusable as hash key: ARRAY",
        );
    }

    #[test]
    fn shared_array_handles_observe_mutation() {
        assert_integer("let mut a = [1]; let b = a; a[0] = 2; b[0]", 2);
    }

    #[test]
    fn pointers_read_through_the_environment() {
        assert_integer("let mut x = 1; let p = &x; x = 2; *p", 2);
        assert_integer("let x = 1; let p = &x; *p + 1", 2);
    }

    #[test]
    fn pointers_write_through() {
        assert_integer("let mut x = 1; let p = &x; *p = 5; x", 5);
        assert_integer("let mut x = 1; let p = &x; *p = *p + 10; *p", 11);
    }

    #[test]
    fn pointer_errors() {
        assert_error(
            "let x = 1; let p = &x; *p = 2",
            "(line 1) Cannot assign to immutable variable: x",
        );
        assert_error("&missing", "Cannot take address of undefined variable: missing");
        assert_error("&1", "Cannot take address of non-identifier expression");
        assert_error("*5", "Cannot dereference non-pointer value: INTEGER");
        assert_error(
            "let mut x = 1; *x = 2",
            "(line 1) Cannot dereference non-pointer value: INTEGER",
        );
    }

    #[test]
    fn errors_short_circuit_compound_evaluations() {
        assert_error("[1, missing, 3]", "Identifier not found: missing");
        assert_error("len(missing)", "Identifier not found: missing");
        assert_error(
            r#"{"k": missing}"#,
            "Identifier not found: missing",
        );
        assert_error("if (missing) { 1 }", "Identifier not found: missing");
        assert_error(
            "for (let i = missing; i < 3; i++) { 0 }",
            "Identifier not found: missing",
        );
    }
}
