//! Predicate parser - recursive descent over the predicate token stream.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! OrExpr     ::= AndExpr ( "or" AndExpr )*
//! AndExpr    ::= Term ( "and" Term )*
//! Term       ::= "(" OrExpr ")" | Comparison
//! Comparison ::= Operand Op Operand
//! ```
//!
//! OR and AND are left-associative; parentheses override both.

use crate::error::{QueryError, QueryResult};
use crate::expression::{CompareOp, Operand, Predicate};
use crate::sql::{Lexer, Token};

/// Validate parenthesis structure before parsing: every `)` must match a
/// previously opened `(`, and no opens may be left over.
pub fn check_parentheses(spec: &str) -> QueryResult<()> {
    let mut open = 0usize;
    for ch in spec.chars() {
        match ch {
            '(' => open += 1,
            ')' => {
                if open == 0 {
                    return Err(QueryError::UnbalancedParentheses);
                }
                open -= 1;
            }
            _ => {}
        }
    }
    if open != 0 {
        return Err(QueryError::UnbalancedParentheses);
    }
    Ok(())
}

pub struct PredicateParser {
    tokens: Vec<Token>,
    position: usize,
}

impl PredicateParser {
    pub fn new(spec: &str) -> QueryResult<Self> {
        check_parentheses(spec)?;
        let tokens = Lexer::new(spec).tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse the whole predicate; trailing tokens are an error.
    pub fn parse(mut self) -> QueryResult<Predicate> {
        let predicate = self.parse_or()?;
        match self.current_token() {
            Token::Eof => Ok(predicate),
            token => Err(QueryError::PredicateSyntax(format!(
                "unexpected token after predicate: {:?}",
                token
            ))),
        }
    }

    fn parse_or(&mut self) -> QueryResult<Predicate> {
        let mut left = self.parse_and()?;

        while self.current_token() == &Token::Or {
            self.advance();
            let right = self.parse_and()?;
            left = Predicate::or(left, right);
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> QueryResult<Predicate> {
        let mut left = self.parse_term()?;

        while self.current_token() == &Token::And {
            self.advance();
            let right = self.parse_term()?;
            left = Predicate::and(left, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> QueryResult<Predicate> {
        if self.current_token() == &Token::LeftParen {
            self.advance();
            let inner = self.parse_or()?;
            self.expect(Token::RightParen)?;
            Ok(inner)
        } else {
            self.parse_comparison()
        }
    }

    fn parse_comparison(&mut self) -> QueryResult<Predicate> {
        let left = self.parse_operand()?;
        let op = CompareOp::from_token(self.current_token()).ok_or_else(|| {
            QueryError::PredicateSyntax(format!(
                "expected comparison operator, found {:?}",
                self.current_token()
            ))
        })?;
        self.advance();
        let right = self.parse_operand()?;
        Ok(Predicate::test(left, op, right))
    }

    fn parse_operand(&mut self) -> QueryResult<Operand> {
        let operand = match self.current_token() {
            Token::Null => Operand::Null,
            Token::True => Operand::Raw("true".to_string()),
            Token::False => Operand::Raw("false".to_string()),
            Token::Identifier(text) | Token::Number(text) => Operand::Raw(text.clone()),
            Token::String(text) => Operand::Str(text.clone()),
            token => {
                return Err(QueryError::PredicateSyntax(format!(
                    "expected operand, found {:?}",
                    token
                )))
            }
        };
        self.advance();
        Ok(operand)
    }

    fn current_token(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn expect(&mut self, token: Token) -> QueryResult<()> {
        if self.current_token() == &token {
            self.advance();
            Ok(())
        } else {
            Err(QueryError::PredicateSyntax(format!(
                "expected {:?}, found {:?}",
                token,
                self.current_token()
            )))
        }
    }
}

/// Build a predicate tree from a WHERE-clause substring.
pub fn parse_predicate(spec: &str) -> QueryResult<Predicate> {
    PredicateParser::new(spec)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str) -> Operand {
        Operand::Raw(text.to_string())
    }

    #[test]
    fn test_single_comparison() {
        let predicate = parse_predicate("id = 1").unwrap();
        assert_eq!(
            predicate,
            Predicate::test(raw("id"), CompareOp::Eq, raw("1"))
        );
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        // a=1 and b=2 or c=3  =>  Or(And(a=1, b=2), c=3)
        let predicate = parse_predicate("a=1 and b=2 or c=3").unwrap();
        assert_eq!(
            predicate,
            Predicate::or(
                Predicate::and(
                    Predicate::test(raw("a"), CompareOp::Eq, raw("1")),
                    Predicate::test(raw("b"), CompareOp::Eq, raw("2")),
                ),
                Predicate::test(raw("c"), CompareOp::Eq, raw("3")),
            )
        );
    }

    #[test]
    fn test_or_is_left_associative() {
        let predicate = parse_predicate("a=1 or b=2 or c=3").unwrap();
        assert_eq!(
            predicate,
            Predicate::or(
                Predicate::or(
                    Predicate::test(raw("a"), CompareOp::Eq, raw("1")),
                    Predicate::test(raw("b"), CompareOp::Eq, raw("2")),
                ),
                Predicate::test(raw("c"), CompareOp::Eq, raw("3")),
            )
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        // a=1 and (b=2 or c=3)  =>  And(a=1, Or(b=2, c=3))
        let predicate = parse_predicate("a=1 and (b=2 or c=3)").unwrap();
        assert_eq!(
            predicate,
            Predicate::and(
                Predicate::test(raw("a"), CompareOp::Eq, raw("1")),
                Predicate::or(
                    Predicate::test(raw("b"), CompareOp::Eq, raw("2")),
                    Predicate::test(raw("c"), CompareOp::Eq, raw("3")),
                ),
            )
        );
    }

    #[test]
    fn test_nested_parentheses() {
        let predicate = parse_predicate("((a = 1))").unwrap();
        assert_eq!(
            predicate,
            Predicate::test(raw("a"), CompareOp::Eq, raw("1"))
        );
    }

    #[test]
    fn test_null_and_string_operands() {
        let predicate = parse_predicate("first_name != 'Rodion' and id = null").unwrap();
        assert_eq!(
            predicate,
            Predicate::and(
                Predicate::test(
                    raw("first_name"),
                    CompareOp::Ne,
                    Operand::Str("Rodion".to_string()),
                ),
                Predicate::test(raw("id"), CompareOp::Eq, Operand::Null),
            )
        );
    }

    #[test]
    fn test_check_parentheses() {
        assert!(check_parentheses("(a and (b or c))").is_ok());
        assert!(check_parentheses("no parens at all").is_ok());
        assert!(matches!(
            check_parentheses("(a and b"),
            Err(QueryError::UnbalancedParentheses)
        ));
        assert!(matches!(
            check_parentheses("a and b)"),
            Err(QueryError::UnbalancedParentheses)
        ));
        assert!(matches!(
            check_parentheses(")a("),
            Err(QueryError::UnbalancedParentheses)
        ));
    }

    #[test]
    fn test_malformed_comparisons() {
        // Missing operator.
        assert!(matches!(
            parse_predicate("id 1"),
            Err(QueryError::PredicateSyntax(_))
        ));
        // Dangling operand.
        assert!(matches!(
            parse_predicate("id ="),
            Err(QueryError::PredicateSyntax(_))
        ));
        // Dangling AND.
        assert!(matches!(
            parse_predicate("id = 1 and"),
            Err(QueryError::PredicateSyntax(_))
        ));
        // Empty input.
        assert!(matches!(
            parse_predicate(""),
            Err(QueryError::PredicateSyntax(_))
        ));
        // Trailing garbage.
        assert!(matches!(
            parse_predicate("id = 1 2"),
            Err(QueryError::PredicateSyntax(_))
        ));
    }
}
