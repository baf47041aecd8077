// Predicate lexer - tokenizes a WHERE-clause substring.

use super::token::Token;
use crate::error::{QueryError, QueryResult};

/// Char-level lexer over the predicate substring. Bare words and numbers are
/// normalized to lower case here, once; quoted string literals keep their
/// case.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input, with a trailing Eof token.
    pub fn tokenize(mut self) -> QueryResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Get the next token from the input.
    pub fn next_token(&mut self) -> QueryResult<Token> {
        self.skip_whitespace();

        let ch = match self.current_char() {
            Some(ch) => ch,
            None => return Ok(Token::Eof),
        };

        match ch {
            '=' => {
                self.advance();
                Ok(Token::Equal)
            }
            '!' => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Ok(Token::NotEqual)
                } else {
                    Err(QueryError::PredicateSyntax(
                        "expected '=' after '!'".to_string(),
                    ))
                }
            }
            '<' => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Ok(Token::LessEqual)
                } else {
                    Ok(Token::Less)
                }
            }
            '>' => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Ok(Token::GreaterEqual)
                } else {
                    Ok(Token::Greater)
                }
            }
            '(' => {
                self.advance();
                Ok(Token::LeftParen)
            }
            ')' => {
                self.advance();
                Ok(Token::RightParen)
            }
            '\'' | '"' => self.read_string(ch),
            '-' => {
                if self.peek().map_or(false, |c| c.is_ascii_digit()) {
                    self.read_number()
                } else {
                    Err(QueryError::PredicateSyntax(
                        "unexpected character '-'".to_string(),
                    ))
                }
            }
            c if c.is_ascii_digit() => self.read_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.read_identifier()),
            other => Err(QueryError::PredicateSyntax(format!(
                "unexpected character '{}'",
                other
            ))),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().map_or(false, char::is_whitespace) {
            self.advance();
        }
    }

    /// Read an identifier or keyword, lower-casing as it goes.
    fn read_identifier(&mut self) -> Token {
        let mut identifier = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                identifier.push(ch.to_ascii_lowercase());
                self.advance();
            } else {
                break;
            }
        }
        Token::keyword_from_str(&identifier).unwrap_or(Token::Identifier(identifier))
    }

    /// Read a numeric literal: optional leading '-', then digits, letters
    /// (for `0b`/`0x` radix prefixes and hex digits) and at most one '.'.
    /// Classification into i32/i64/f32/f64 happens at evaluation time.
    fn read_number(&mut self) -> QueryResult<Token> {
        let mut number = String::new();
        let mut has_dot = false;

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() {
                number.push(ch.to_ascii_lowercase());
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Ok(Token::Number(number))
    }

    /// Read a string literal delimited by single or double quotes. The
    /// delimiter doubled inside the literal is an escaped quote.
    fn read_string(&mut self, delimiter: char) -> QueryResult<Token> {
        self.advance(); // opening quote
        let mut string = String::new();

        loop {
            match self.current_char() {
                Some(ch) if ch == delimiter => {
                    if self.peek() == Some(delimiter) {
                        string.push(delimiter);
                        self.advance();
                        self.advance();
                    } else {
                        self.advance(); // closing quote
                        return Ok(Token::String(string));
                    }
                }
                Some(ch) => {
                    string.push(ch);
                    self.advance();
                }
                None => {
                    return Err(QueryError::PredicateSyntax(
                        "unterminated string literal".to_string(),
                    ))
                }
            }
        }
    }
}
