use crate::ast::{Expression, ForInit, PrefixOperator};
use crate::error::ParseError;
use crate::interpreter::lexer::Token;
use crate::interpreter::parser::core::{Parser, Precedence};

impl Parser {
    /// Dispatches on the current token to its prefix (nud) rule. A token
    /// with no rule records a `no prefix parse function` error and yields
    /// nothing.
    pub(super) fn parse_prefix(&mut self) -> Option<Expression> {
        let line = self.cur_line();

        match self.cur_token().clone() {
            Token::Identifier(name) => Some(Expression::Identifier { name, line }),
            Token::Int(literal) => self.parse_integer_literal(&literal, line),
            Token::Str(value) => Some(Expression::Str { value, line }),
            Token::True => Some(Expression::Boolean { value: true, line }),
            Token::False => Some(Expression::Boolean { value: false, line }),
            Token::Bang => self.parse_prefix_operator(PrefixOperator::Bang, line),
            Token::Minus => self.parse_prefix_operator(PrefixOperator::Minus, line),
            Token::Plus => self.parse_prefix_operator(PrefixOperator::Plus, line),
            Token::Lparen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(line),
            Token::Function => self.parse_function_literal(line),
            Token::Lbracket => self.parse_array_literal(line),
            Token::Lbrace => self.parse_hash_literal(line),
            Token::While => self.parse_while_expression(line),
            Token::For => self.parse_for_expression(line),
            Token::Ampersand => self.parse_ref_expression(line),
            Token::Asterisk => self.parse_deref_expression(line),
            other => {
                self.record(ParseError::NoPrefixParseFn {
                    kind: other.kind(),
                    line,
                });
                None
            }
        }
    }

    fn parse_integer_literal(&mut self, literal: &str, line: usize) -> Option<Expression> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer { value, line }),
            Err(_) => {
                self.record(ParseError::InvalidIntegerLiteral {
                    literal: literal.to_string(),
                    line,
                });
                None
            }
        }
    }

    fn parse_prefix_operator(
        &mut self,
        operator: PrefixOperator,
        line: usize,
    ) -> Option<Expression> {
        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Prefix)?);
        Some(Expression::Prefix {
            operator,
            right,
            line,
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is("RPAREN") {
            self.next_token();
        }
        Some(expression)
    }

    /// `if (<cond>) { … } [else { … }]`
    fn parse_if_expression(&mut self, line: usize) -> Option<Expression> {
        if !self.expect_peek("LPAREN") {
            return None;
        }
        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek("RPAREN") {
            return None;
        }
        if !self.expect_peek("LBRACE") {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is("ELSE") {
            self.next_token();
            if !self.expect_peek("LBRACE") {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expression::If {
            condition,
            consequence,
            alternative,
            line,
        })
    }

    /// `while (<cond>) { … }`
    fn parse_while_expression(&mut self, line: usize) -> Option<Expression> {
        if !self.expect_peek("LPAREN") {
            return None;
        }
        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek("RPAREN") {
            return None;
        }
        if !self.expect_peek("LBRACE") {
            return None;
        }
        let body = self.parse_block();

        Some(Expression::While {
            condition,
            body,
            line,
        })
    }

    /// `for (let [mut] i = <e>; <cond>; <ident>++) { … }` — the increment
    /// slot admits only the suffix `++` form.
    fn parse_for_expression(&mut self, line: usize) -> Option<Expression> {
        if !self.expect_peek("LPAREN") {
            return None;
        }
        if !self.expect_peek("LET") {
            return None;
        }
        let init = self.parse_for_init()?;

        if !self.expect_peek("SEMICOLON") {
            return None;
        }
        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek("SEMICOLON") {
            return None;
        }
        if !self.expect_peek("IDENTIFIER") {
            return None;
        }
        let loop_var = Expression::Identifier {
            name: self.cur_token().literal(),
            line: self.cur_line(),
        };

        if !self.expect_peek("INCREMENT") {
            return None;
        }
        let increment = Box::new(Expression::Increment {
            left: Box::new(loop_var),
            line: self.cur_line(),
        });

        if !self.expect_peek("RPAREN") {
            return None;
        }
        if !self.expect_peek("LBRACE") {
            return None;
        }
        let body = self.parse_block();

        Some(Expression::For {
            init,
            condition,
            increment,
            body,
            line,
        })
    }

    /// The `let [mut] i = <e>` header of a `for`. Called with the cursor on
    /// `let`.
    fn parse_for_init(&mut self) -> Option<ForInit> {
        let line = self.cur_line();

        let mutable = if self.peek_is("MUT") {
            self.next_token();
            true
        } else {
            false
        };

        if !self.expect_peek("IDENTIFIER") {
            return None;
        }
        let name = self.cur_token().literal();

        if !self.expect_peek("ASSIGN") {
            return None;
        }
        self.next_token();
        let value = Box::new(self.parse_expression(Precedence::Lowest)?);

        Some(ForInit {
            name,
            mutable,
            value,
            line,
        })
    }

    /// `fn ( <ident>, … ) { <block> }`
    fn parse_function_literal(&mut self, line: usize) -> Option<Expression> {
        if !self.expect_peek("LPAREN") {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek("LBRACE") {
            return None;
        }
        let body = self.parse_block();

        Some(Expression::Function {
            parameters,
            body,
            line,
        })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is("RPAREN") {
            self.next_token();
            return Some(parameters);
        }

        if !self.expect_peek("IDENTIFIER") {
            return None;
        }
        parameters.push(self.cur_token().literal());

        while self.peek_is("COMMA") {
            self.next_token();
            if !self.expect_peek("IDENTIFIER") {
                return None;
            }
            parameters.push(self.cur_token().literal());
        }

        if !self.expect_peek("RPAREN") {
            return None;
        }

        Some(parameters)
    }

    fn parse_array_literal(&mut self, line: usize) -> Option<Expression> {
        let elements = self.parse_expression_list("RBRACKET")?;
        Some(Expression::Array { elements, line })
    }

    /// `{ key : value (, key : value)* }`; `{}` is a valid empty hash. Keys
    /// are arbitrary expressions; hashability is a runtime concern.
    fn parse_hash_literal(&mut self, line: usize) -> Option<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_is("RBRACE") {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek("COLON") {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is("RBRACE") && !self.expect_peek("COMMA") {
                return None;
            }
        }

        if !self.expect_peek("RBRACE") {
            return None;
        }

        Some(Expression::Hash { pairs, line })
    }

    /// `&<expr>` — the operand is validated to be an identifier at
    /// evaluation time.
    fn parse_ref_expression(&mut self, line: usize) -> Option<Expression> {
        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Prefix)?);
        Some(Expression::Ref { right, line })
    }

    /// `*<expr>`
    fn parse_deref_expression(&mut self, line: usize) -> Option<Expression> {
        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Prefix)?);
        Some(Expression::Deref { right, line })
    }
}
