use crate::ast::{Block, Statement};
use crate::interpreter::parser::core::{Parser, Precedence};

impl Parser {
    /// Parses one statement. `let` and `return` have dedicated forms;
    /// everything else is an expression in statement position. The cursor is
    /// left on the last token of the statement.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token().kind() {
            "LET" => self.parse_let_statement(),
            "RETURN" => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let [mut] name = <expr>;`
    fn parse_let_statement(&mut self) -> Option<Statement> {
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

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is("SEMICOLON") {
            self.next_token();
        }

        Some(Statement::Let {
            name,
            mutable,
            value,
            line,
        })
    }

    /// `return <expr>;`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let line = self.cur_line();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is("SEMICOLON") {
            self.next_token();
        }

        Some(Statement::Return { value, line })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is("SEMICOLON") {
            self.next_token();
        }

        Some(Statement::Expression { expr })
    }

    /// Parses statements up to the closing `}` (or end of input). Called
    /// with the cursor on `{`; leaves it on the closing brace. Errors inside
    /// the block are recorded and the block keeps whatever parsed cleanly.
    pub(super) fn parse_block(&mut self) -> Block {
        let mut block = Block::default();
        self.next_token();

        while !self.cur_is("RBRACE") && !self.cur_is("EOF") {
            match self.parse_statement() {
                Some(statement) => {
                    block.statements.push(statement);
                    self.next_token();
                }
                None => {
                    self.synchronize_in_block();
                    if !self.cur_is("RBRACE") && !self.cur_is("EOF") {
                        self.next_token();
                    }
                }
            }
        }

        block
    }

    fn synchronize_in_block(&mut self) {
        while !self.cur_is("SEMICOLON") && !self.cur_is("RBRACE") && !self.cur_is("EOF") {
            self.next_token();
        }
    }
}
