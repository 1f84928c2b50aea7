use crate::ast::{Expression, Program};
use crate::error::ParseError;
use crate::interpreter::lexer::{tokenize, Token};

/// Binding strength of each operator, lowest to highest. The suffix `++`
/// binds tighter than a call and looser than indexing, and `=` sits between
/// comparison and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>` `<=` `>=`
    LessGreater,
    /// `=`
    Assign,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// Unary `!` `-` `+`
    Prefix,
    /// `fn(x)(…)`
    Call,
    /// `x++`
    Increment,
    /// `array[index]`
    Index,
}

/// The binding strength a token has in infix position.
pub fn token_precedence(token: &Token) -> Precedence {
    match token {
        Token::Eq | Token::NotEq => Precedence::Equals,
        Token::Lt | Token::Gt | Token::Lte | Token::Gte => Precedence::LessGreater,
        Token::Assign => Precedence::Assign,
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Slash | Token::Asterisk => Precedence::Product,
        Token::Lparen => Precedence::Call,
        Token::Increment => Precedence::Increment,
        Token::Lbracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

/// A Pratt (top-down operator precedence) parser.
///
/// The parser walks a fully scanned token stream with a one-token
/// look-ahead cursor. Errors are accumulated rather than thrown: a failed
/// construct records a message, the cursor resynchronizes at the next
/// statement boundary, and parsing continues. Callers must check
/// [`Parser::errors`] before evaluating the resulting program.
pub struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Scans `source` and positions the cursor at the first token.
    pub fn new(source: &str) -> Self {
        Parser {
            tokens: tokenize(source),
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parses the whole token stream into a [`Program`], collecting errors
    /// along the way.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_is("EOF") {
            match self.parse_statement() {
                Some(statement) => program.statements.push(statement),
                None => self.synchronize(),
            }
            self.next_token();
        }

        program
    }

    /// The errors collected so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, yielding the collected errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// The expression driver: parse a prefix construct, then fold in infix
    /// operators for as long as the next token binds tighter than
    /// `precedence`.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is("SEMICOLON") && precedence < self.peek_precedence() {
            if !Self::is_infix(self.peek_token()) {
                break;
            }
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn is_infix(token: &Token) -> bool {
        matches!(
            token,
            Token::Plus
                | Token::Minus
                | Token::Slash
                | Token::Asterisk
                | Token::Eq
                | Token::NotEq
                | Token::Lt
                | Token::Gt
                | Token::Lte
                | Token::Gte
                | Token::Lparen
                | Token::Lbracket
                | Token::Increment
                | Token::Assign
        )
    }

    // ------------------------------------------------------------------
    // Cursor plumbing
    // ------------------------------------------------------------------

    pub(super) fn cur_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)].0
    }

    pub(super) fn cur_line(&self) -> usize {
        self.tokens[self.pos.min(self.tokens.len() - 1)].1
    }

    pub(super) fn peek_token(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)].0
    }

    pub(super) fn peek_line(&self) -> usize {
        self.tokens[(self.pos + 1).min(self.tokens.len() - 1)].1
    }

    /// Advances the cursor one token; the trailing `EOF` is sticky.
    pub(super) fn next_token(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    pub(super) fn cur_is(&self, kind: &str) -> bool {
        self.cur_token().kind() == kind
    }

    pub(super) fn peek_is(&self, kind: &str) -> bool {
        self.peek_token().kind() == kind
    }

    pub(super) fn cur_precedence(&self) -> Precedence {
        token_precedence(self.cur_token())
    }

    pub(super) fn peek_precedence(&self) -> Precedence {
        token_precedence(self.peek_token())
    }

    /// Advances past the next token when it has the expected kind; records
    /// an error and stays put otherwise.
    pub(super) fn expect_peek(&mut self, kind: &'static str) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub(super) fn peek_error(&mut self, expected: &'static str) {
        let got = self.peek_token().kind();
        let literal = self.peek_token().literal();
        let line = self.peek_line();
        self.errors.push(ParseError::UnexpectedToken {
            expected,
            got,
            literal,
            line,
        });
    }

    pub(super) fn record(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Skips to the next statement boundary after a failed construct so the
    /// parser can keep collecting errors.
    fn synchronize(&mut self) {
        while !self.cur_is("SEMICOLON") && !self.cur_is("RBRACE") && !self.cur_is("EOF") {
            self.next_token();
        }
    }
}
