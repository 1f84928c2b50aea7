use std::fmt;

/// A complete parsed program: the ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// A brace-delimited statement sequence, as used by `if`, `while`, `for` and
/// function bodies. Blocks do not open a new environment frame; only
/// function application does.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

/// The statement forms of the language. Everything that is not a `let` or a
/// `return` is an expression in statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let [mut] name = value;`
    Let {
        name: String,
        mutable: bool,
        value: Expression,
        line: usize,
    },
    /// `return value;` — unwinds to the nearest function boundary or the
    /// program root.
    Return { value: Expression, line: usize },
    /// An expression whose value is discarded at statement position.
    Expression { expr: Expression },
}

/// The header of a `for` loop: `let [mut] name = value`. The binding is
/// written into the enclosing environment and rebound on every iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct ForInit {
    pub name: String,
    pub mutable: bool,
    pub value: Box<Expression>,
    pub line: usize,
}

/// Prefix (unary) operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// `!`
    Bang,
    /// `-`
    Minus,
    /// `+`
    Plus,
}

/// Infix (binary) operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Lte,
    /// `>=`
    Gte,
}

/// The expression forms of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer {
        value: i64,
        line: usize,
    },
    Str {
        value: String,
        line: usize,
    },
    Boolean {
        value: bool,
        line: usize,
    },
    Identifier {
        name: String,
        line: usize,
    },
    Prefix {
        operator: PrefixOperator,
        right: Box<Expression>,
        line: usize,
    },
    Infix {
        operator: InfixOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        line: usize,
    },
    If {
        condition: Box<Expression>,
        consequence: Block,
        alternative: Option<Block>,
        line: usize,
    },
    /// An anonymous function literal; becomes a closure at evaluation time.
    Function {
        parameters: Vec<String>,
        body: Block,
        line: usize,
    },
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
        line: usize,
    },
    Array {
        elements: Vec<Expression>,
        line: usize,
    },
    /// Pairs keep their source order; hashability of keys is checked at
    /// evaluation time.
    Hash {
        pairs: Vec<(Expression, Expression)>,
        line: usize,
    },
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
        line: usize,
    },
    /// Suffix `x++`; evaluates to `x + 1` without mutating `x`.
    Increment {
        left: Box<Expression>,
        line: usize,
    },
    While {
        condition: Box<Expression>,
        body: Block,
        line: usize,
    },
    For {
        init: ForInit,
        condition: Box<Expression>,
        increment: Box<Expression>,
        body: Block,
        line: usize,
    },
    /// `target = value` where the target is an identifier, an index
    /// expression or a dereference. Validated at parse time.
    Assign {
        target: Box<Expression>,
        value: Box<Expression>,
        line: usize,
    },
    /// `&ident` — captures the name and current value as a reference cell.
    Ref {
        right: Box<Expression>,
        line: usize,
    },
    /// `*expr` — reads the referenced variable back out of the environment.
    Deref {
        right: Box<Expression>,
        line: usize,
    },
}

impl Expression {
    /// The source line the expression starts on.
    pub fn line(&self) -> usize {
        match self {
            Expression::Integer { line, .. }
            | Expression::Str { line, .. }
            | Expression::Boolean { line, .. }
            | Expression::Identifier { line, .. }
            | Expression::Prefix { line, .. }
            | Expression::Infix { line, .. }
            | Expression::If { line, .. }
            | Expression::Function { line, .. }
            | Expression::Call { line, .. }
            | Expression::Array { line, .. }
            | Expression::Hash { line, .. }
            | Expression::Index { line, .. }
            | Expression::Increment { line, .. }
            | Expression::While { line, .. }
            | Expression::For { line, .. }
            | Expression::Assign { line, .. }
            | Expression::Ref { line, .. }
            | Expression::Deref { line, .. } => *line,
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            PrefixOperator::Bang => "!",
            PrefixOperator::Minus => "-",
            PrefixOperator::Plus => "+",
        };
        write!(f, "{spelling}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::Asterisk => "*",
            InfixOperator::Slash => "/",
            InfixOperator::Eq => "==",
            InfixOperator::NotEq => "!=",
            InfixOperator::Lt => "<",
            InfixOperator::Gt => ">",
            InfixOperator::Lte => "<=",
            InfixOperator::Gte => ">=",
        };
        write!(f, "{spelling}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let {
                name,
                mutable,
                value,
                ..
            } => {
                if *mutable {
                    write!(f, "let mut {name} = {value};")
                } else {
                    write!(f, "let {name} = {value};")
                }
            }
            Statement::Return { value, .. } => write!(f, "return {value};"),
            Statement::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Integer { value, .. } => write!(f, "{value}"),
            Expression::Str { value, .. } => write!(f, "\"{value}\""),
            Expression::Boolean { value, .. } => write!(f, "{value}"),
            Expression::Identifier { name, .. } => write!(f, "{name}"),
            Expression::Prefix {
                operator, right, ..
            } => write!(f, "({operator}{right})"),
            Expression::Infix {
                operator,
                left,
                right,
                ..
            } => write!(f, "({left} {operator} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if ({condition}) {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            }
            Expression::Function {
                parameters, body, ..
            } => write!(f, "fn({}) {{ {body} }}", parameters.join(", ")),
            Expression::Call {
                function,
                arguments,
                ..
            } => {
                let args: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{function}({})", args.join(", "))
            }
            Expression::Array { elements, .. } => {
                let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            Expression::Hash { pairs, .. } => {
                let pairs: Vec<String> = pairs
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Expression::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Expression::Increment { left, .. } => write!(f, "({left}++)"),
            Expression::While {
                condition, body, ..
            } => write!(f, "while ({condition}) {{ {body} }}"),
            Expression::For {
                init,
                condition,
                increment,
                body,
                ..
            } => {
                let header = if init.mutable {
                    format!("let mut {} = {}", init.name, init.value)
                } else {
                    format!("let {} = {}", init.name, init.value)
                };
                // The increment slot is syntactically a bare `name++`, so it
                // prints without the usual grouping parentheses.
                let step = match increment.as_ref() {
                    Expression::Increment { left, .. } => format!("{left}++"),
                    other => other.to_string(),
                };
                write!(f, "for ({header}; {condition}; {step}) {{ {body} }}")
            }
            Expression::Assign { target, value, .. } => write!(f, "{target} = {value}"),
            Expression::Ref { right, .. } => write!(f, "(&{right})"),
            Expression::Deref { right, .. } => write!(f, "(*{right})"),
        }
    }
}
