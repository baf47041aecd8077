// Predicate tokens for lexical analysis.

/// Tokens produced from a WHERE-clause substring. Identifiers and numbers
/// are carried as raw text; whether a bare word names a column or a literal
/// is decided per row at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Identifier(String),
    Number(String),
    String(String),

    // Keywords
    And,
    Or,
    Null,
    True,
    False,

    // Comparison operators
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Delimiters
    LeftParen,
    RightParen,

    Eof,
}

impl Token {
    /// Convert a string to a keyword token if it matches, case-insensitively.
    pub fn keyword_from_str(s: &str) -> Option<Token> {
        match s.to_lowercase().as_str() {
            "and" => Some(Token::And),
            "or" => Some(Token::Or),
            "null" => Some(Token::Null),
            "true" => Some(Token::True),
            "false" => Some(Token::False),
            _ => None,
        }
    }
}
