use std::fmt;

use crate::error::FilterError;
use crate::token_type::TokenType::{self, *};

/// The `Scanner` walks the source in one left-to-right pass, identifying
/// tokens and returning them as Vec<Token>. The returned stream always ends
/// with exactly one EOF token, even for empty input.
pub struct Scanner<'a> {
    chars: std::str::Chars<'a>,
    current: Option<char>, // one char of lookahead
    position: usize, // 0-based char offset of `current`
    line: usize,     // 1-based current line in source
    column: usize,   // 1-based current column in source
}

impl<'a> Scanner<'a> {

    pub fn new(source: &'a str) -> Self {
        let mut chars = source.chars();
        let current = chars.next();

        Scanner {
            chars,
            current,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn scan(mut self) -> Result<Vec<Token>, FilterError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let (position, line, column) = (self.position, self.line, self.column);

            match self.peek() {
                None => {
                    tokens.push(Token { variant: EOF, value: String::new(), position, line, column });
                    return Ok(tokens);
                }
                Some('(') => {
                    self.advance();
                    tokens.push(Token { variant: LeftParen, value: "(".to_string(), position, line, column });
                }
                Some(')') => {
                    self.advance();
                    tokens.push(Token { variant: RightParen, value: ")".to_string(), position, line, column });
                }
                Some(c) => {
                    let value = self.word();
                    if value.is_empty() {
                        // Unreachable: any char that is not whitespace or a
                        // paren starts a word. Guarded anyway.
                        return Err(FilterError::Tokenizer {
                            message: format!("Unexpected character '{}'", c),
                            position, line, column,
                        });
                    }
                    let variant = Self::keyword(&value).unwrap_or(Identifier);
                    tokens.push(Token { variant, value, position, line, column });
                }
            }
        }
    }

    /// Consumes whitespace between tokens. '\n' and '\r' terminate a line;
    /// a '\r' swallows an immediately following '\n' so CRLF counts once.
    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t') => { self.advance(); }
                Some('\n') => {
                    self.advance();
                    self.newline();
                }
                Some('\r') => {
                    self.advance();
                    if self.peek() == Some('\n') {
                        self.advance();
                    }
                    self.newline();
                }
                _ => break,
            }
        }
    }

    /// Reads a maximal run of chars that can belong to an identifier or
    /// keyword. Only whitespace and parentheses end a run, so dots, colons,
    /// digits, and '*' wildcards all flow into identifiers.
    fn word(&mut self) -> String {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if Self::is_boundary(c) {
                break;
            }
            value.push(c);
            self.advance();
        }
        value
    }

    /// Keywords match case-insensitively; the scanned token keeps the
    /// original-case text as its value.
    fn keyword(value: &str) -> Option<TokenType> {
        if value.eq_ignore_ascii_case("and") {
            Some(And)
        } else if value.eq_ignore_ascii_case("or") {
            Some(Or)
        } else if value.eq_ignore_ascii_case("not") {
            Some(Not)
        } else {
            None
        }
    }

    fn is_boundary(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\r' | '(' | ')')
    }

    /// Return current char and advance to the next.
    fn advance(&mut self) -> Option<char> {
        let c = self.current;
        if c.is_some() {
            self.current = self.chars.next();
            self.position += 1;
            self.column += 1;
        }
        c
    }

    /// Return current char without advancing.
    fn peek(&self) -> Option<char> {
        self.current
    }

    fn newline(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub variant: TokenType,
    pub value: String,
    pub position: usize,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// How the token reads in an error message: its raw text, or a
    /// placeholder for the invisible EOF token.
    pub fn describe(&self) -> &str {
        if self.variant == EOF { "end of input" } else { &self.value }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.variant, self.value)
    }
}
