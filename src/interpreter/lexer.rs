use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Identifier tokens; variable or function names such as `x` or `adder`.
    /// Digits are not part of the identifier character class.
    #[regex(r"[A-Za-z_][A-Za-z_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. The digit text is kept verbatim;
    /// conversion to a number happens in the parser.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens. The payload is the body between the quotes with
    /// no escape processing. An unterminated string runs to end of input.
    #[regex(r#""[^"]*""#, terminated_string, priority = 6)]
    #[regex(r#""[^"]*"#, unterminated_string, priority = 5)]
    Str(String),

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `++`
    #[token("++")]
    Increment,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `<=`
    #[token("<=")]
    Lte,
    /// `>=`
    #[token(">=")]
    Gte,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    Lparen,
    /// `)`
    #[token(")")]
    Rparen,
    /// `{`
    #[token("{")]
    Lbrace,
    /// `}`
    #[token("}")]
    Rbrace,
    /// `[`
    #[token("[")]
    Lbracket,
    /// `]`
    #[token("]")]
    Rbracket,
    /// `&`
    #[token("&")]
    Ampersand,

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `mut`
    #[token("mut")]
    Mut,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,

    /// `// Comments.` Skipped during scanning; the variant exists so the
    /// token set stays closed over everything the scanner knows about.
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Newlines advance the line counter and produce nothing.
    #[regex(r"\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,

    /// Any byte the scanner does not recognize. Never raised as an error;
    /// the parser surfaces these.
    Illegal(String),
    /// End of input. Appended once so a cursor can never fall off the stream.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current 1-based line number in the source being tokenized.
    pub line: usize,
}

fn terminated_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

fn unterminated_string(lex: &logos::Lexer<Token>) -> String {
    lex.slice()[1..].to_string()
}

/// Scans the whole input into `(token, line)` pairs.
///
/// Scanning is total: bytes the token rules reject become [`Token::Illegal`]
/// rather than an error, and a final [`Token::Eof`] is appended.
///
/// # Parameters
/// - `source`: The complete source text.
///
/// # Returns
/// Every token paired with the 1-based line it starts on, ending with `Eof`.
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(scanned) = lexer.next() {
        let line = lexer.extras.line;
        match scanned {
            Ok(token) => tokens.push((token, line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), line)),
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    tokens
}

impl Token {
    /// The stable kind name of the token, as used in parser diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Illegal(_) => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Identifier(_) => "IDENTIFIER",
            Token::Int(_) => "INT",
            Token::Str(_) => "STRING",
            Token::Assign => "ASSIGN",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Bang => "BANG",
            Token::Asterisk => "ASTERISK",
            Token::Slash => "SLASH",
            Token::Increment => "INCREMENT",
            Token::Lt => "LT",
            Token::Gt => "GT",
            Token::Lte => "LTE",
            Token::Gte => "GTE",
            Token::Eq => "EQ",
            Token::NotEq => "NEQ",
            Token::Comma => "COMMA",
            Token::Semicolon => "SEMICOLON",
            Token::Colon => "COLON",
            Token::Lparen => "LPAREN",
            Token::Rparen => "RPAREN",
            Token::Lbrace => "LBRACE",
            Token::Rbrace => "RBRACE",
            Token::Lbracket => "LBRACKET",
            Token::Rbracket => "RBRACKET",
            Token::Ampersand => "AMPERSAND",
            Token::Function => "FUNCTION",
            Token::Let => "LET",
            Token::Mut => "MUT",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::If => "IF",
            Token::Else => "ELSE",
            Token::Return => "RETURN",
            Token::While => "WHILE",
            Token::For => "FOR",
            Token::Comment | Token::Newline => "COMMENT",
        }
    }

    /// The source spelling of the token.
    pub fn literal(&self) -> String {
        let fixed = match self {
            Token::Illegal(text)
            | Token::Identifier(text)
            | Token::Int(text)
            | Token::Str(text) => return text.clone(),
            Token::Eof | Token::Comment | Token::Newline => "",
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Bang => "!",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::Increment => "++",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Lte => "<=",
            Token::Gte => ">=",
            Token::Eq => "==",
            Token::NotEq => "!=",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Colon => ":",
            Token::Lparen => "(",
            Token::Rparen => ")",
            Token::Lbrace => "{",
            Token::Rbrace => "}",
            Token::Lbracket => "[",
            Token::Rbracket => "]",
            Token::Ampersand => "&",
            Token::Function => "fn",
            Token::Let => "let",
            Token::Mut => "mut",
            Token::True => "true",
            Token::False => "false",
            Token::If => "if",
            Token::Else => "else",
            Token::Return => "return",
            Token::While => "while",
            Token::For => "for",
        };
        fixed.to_string()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_operators_and_delimiters() {
        let input = "let mut five = 5; five++ <= 10 != &five; *p";
        let kinds: Vec<&str> = tokenize(input).iter().map(|(t, _)| t.kind()).collect();

        assert_eq!(
            kinds,
            vec![
                "LET",
                "MUT",
                "IDENTIFIER",
                "ASSIGN",
                "INT",
                "SEMICOLON",
                "IDENTIFIER",
                "INCREMENT",
                "LTE",
                "INT",
                "NEQ",
                "AMPERSAND",
                "IDENTIFIER",
                "SEMICOLON",
                "ASTERISK",
                "IDENTIFIER",
                "EOF",
            ]
        );
    }

    #[test]
    fn keywords_are_reclassified() {
        let tokens = tokenize("fn let true false if else return while for mut");
        let kinds: Vec<&str> = tokens.iter().map(|(t, _)| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                "FUNCTION", "LET", "TRUE", "FALSE", "IF", "ELSE", "RETURN", "WHILE", "FOR", "MUT",
                "EOF",
            ]
        );
    }

    #[test]
    fn identifiers_do_not_include_digits() {
        let tokens = tokenize("x1");
        assert_eq!(tokens[0].0, Token::Identifier("x".to_string()));
        assert_eq!(tokens[1].0, Token::Int("1".to_string()));
    }

    #[test]
    fn line_numbers_are_monotone_and_one_based() {
        let input = "let a = 1;\nlet b = 2;\n\nb";
        let tokens = tokenize(input);

        let mut previous = 0;
        for (_, line) in &tokens {
            assert!(*line >= 1);
            assert!(*line >= previous);
            previous = *line;
        }
        assert_eq!(tokens[0].1, 1);
        // `b` sits on line 4.
        assert_eq!(tokens[tokens.len() - 2], (Token::Identifier("b".into()), 4));
    }

    #[test]
    fn strings_keep_raw_bytes() {
        let tokens = tokenize(r#""Hello World!""#);
        assert_eq!(tokens[0].0, Token::Str("Hello World!".to_string()));
    }

    #[test]
    fn unterminated_string_runs_to_end_of_input() {
        let tokens = tokenize(r#""dangling"#);
        assert_eq!(tokens[0].0, Token::Str("dangling".to_string()));
        assert_eq!(tokens[1].0, Token::Eof);
    }

    #[test]
    fn comments_produce_no_tokens() {
        let tokens = tokenize("1 // the rest is ignored\n2");
        assert_eq!(tokens[0], (Token::Int("1".into()), 1));
        assert_eq!(tokens[1], (Token::Int("2".into()), 2));
    }

    #[test]
    fn unknown_bytes_become_illegal_tokens() {
        let tokens = tokenize("1 @ 2");
        assert_eq!(tokens[1].0, Token::Illegal("@".to_string()));
    }
}
