/// A recursive descent parser for boolean tag filter expressions.
///
/// Grammar of the filter syntax, lowest precedence first:
///
/// expression ::= or_expr
/// or_expr    ::= and_expr ( "or" and_expr )*
/// and_expr   ::= not_expr ( "and" not_expr )*
/// not_expr   ::= "not" not_expr | primary
/// primary    ::= IDENTIFIER | "(" expression ")"
///
/// "and" and "or" fold left to left-associative trees; the recursive call in
/// not_expr nests chained "not"s to the right.
///
/// Examples: "slow", "slow and not (integration or flaky)"

use crate::error::FilterError;
use crate::expr::Expr;
use crate::scanner::Token;
use crate::token_type::TokenType::{self, *};

pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
}

impl<'a> Parser<'a> {

    /// `tokens` must be a scanner-produced stream, ending with EOF.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            current: 0,
        }
    }

    /// Parses the whole token stream into a single expression tree. The
    /// stream must be fully consumed: any token left over after the
    /// top-level expression is an error.
    pub fn parse(&mut self) -> Result<Expr, FilterError> {
        if self.at_end() {
            return Err(self.error("expression", "Unexpected end of input: expected expression".to_string()));
        }
        let expr = self.or_expr()?;
        if !self.at_end() {
            let message = format!("Unexpected token '{}'", self.peek().value);
            return Err(self.error("end of expression", message));
        }
        Ok(expr)
    }

    /// Matches production: or_expr ::= and_expr ( "or" and_expr )*
    fn or_expr(&mut self) -> Result<Expr, FilterError> {
        let mut left = self.and_expr()?;
        while self.match_token(Or) {
            let right = self.and_expr()?;
            left = Expr::or(left, right);
        }
        Ok(left)
    }

    /// Matches production: and_expr ::= not_expr ( "and" not_expr )*
    fn and_expr(&mut self) -> Result<Expr, FilterError> {
        let mut left = self.not_expr()?;
        while self.match_token(And) {
            let right = self.not_expr()?;
            left = Expr::and(left, right);
        }
        Ok(left)
    }

    /// Matches production: not_expr ::= "not" not_expr | primary
    fn not_expr(&mut self) -> Result<Expr, FilterError> {
        if self.match_token(Not) {
            let expr = self.not_expr()?;
            Ok(Expr::not(expr))
        } else {
            self.primary()
        }
    }

    /// Matches production: primary ::= IDENTIFIER | "(" expression ")"
    fn primary(&mut self) -> Result<Expr, FilterError> {
        match self.peek().variant {
            Identifier => {
                self.advance();
                Ok(Expr::identifier(self.previous().value.clone()))
            }
            LeftParen => {
                self.advance();
                let expr = self.or_expr()?;
                if self.match_token(RightParen) {
                    Ok(expr)
                } else {
                    Err(self.error("')'", "Expected ')' after expression".to_string()))
                }
            }
            // Keyword messages reproduce the casing the user typed.
            And | Or => {
                let message = format!("Unexpected '{}': missing left operand", self.peek().value);
                Err(self.error("identifier or '('", message))
            }
            RightParen => {
                let message = "Unexpected ')': missing opening parenthesis or expression".to_string();
                Err(self.error("identifier or '('", message))
            }
            EOF => {
                let message = "Unexpected end of input: expected identifier or '('".to_string();
                Err(self.error("identifier or '('", message))
            }
            _ => {
                let message = format!("Unexpected token '{}'", self.peek().value);
                Err(self.error("identifier or '('", message))
            }
        }
    }

    fn match_token(&mut self, variant: TokenType) -> bool {
        if self.check(variant) {
            self.advance();
            return true
        }
        false
    }

    fn check(&self, variant: TokenType) -> bool {
        self.peek().variant == variant
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.current += 1;
        }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn at_end(&self) -> bool {
        self.peek().variant == EOF
    }

    /// Creates a new parse error at the current token.
    fn error(&self, expected: &str, message: String) -> FilterError {
        let token = self.peek();
        FilterError::Parse {
            message,
            expected: expected.to_string(),
            actual: token.describe().to_string(),
            position: token.position,
            line: token.line,
            column: token.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::FilterError;
    use crate::expr::Expr;
    use crate::parse;

    fn id(pattern: &str) -> Expr {
        Expr::identifier(pattern)
    }

    #[test]
    fn or_binds_looser_than_and() {
        let expr = parse("a or b and c").unwrap();
        assert_eq!(expr, Expr::or(id("a"), Expr::and(id("b"), id("c"))));
    }

    #[test]
    fn not_binds_tighter_than_and() {
        let expr = parse("not a and b").unwrap();
        assert_eq!(expr, Expr::and(Expr::not(id("a")), id("b")));
    }

    #[test]
    fn and_is_left_associative() {
        let expr = parse("a and b and c").unwrap();
        assert_eq!(expr, Expr::and(Expr::and(id("a"), id("b")), id("c")));
    }

    #[test]
    fn or_is_left_associative() {
        let expr = parse("a or b or c").unwrap();
        assert_eq!(expr, Expr::or(Expr::or(id("a"), id("b")), id("c")));
    }

    #[test]
    fn not_chains_by_nesting() {
        let expr = parse("not not a").unwrap();
        assert_eq!(expr, Expr::not(Expr::not(id("a"))));
    }

    #[test]
    fn parens_override_precedence() {
        let expr = parse("(a or b) and c").unwrap();
        assert_eq!(expr, Expr::and(Expr::or(id("a"), id("b")), id("c")));
    }

    #[test]
    fn parens_leave_no_grouping_node() {
        assert_eq!(parse("((a))").unwrap(), id("a"));
    }

    #[test]
    fn error_messages_are_exact() {
        let cases = vec![
            ("", "Unexpected end of input: expected expression"),
            ("and slow", "Unexpected 'and': missing left operand"),
            ("or slow", "Unexpected 'or': missing left operand"),
            ("slow and and fast", "Unexpected 'and': missing left operand"),
            ("()", "Unexpected ')': missing opening parenthesis or expression"),
            (")", "Unexpected ')': missing opening parenthesis or expression"),
            ("slow and fast)", "Unexpected token ')'"),
            ("slow (integration)", "Unexpected token '('"),
            ("(slow and fast", "Expected ')' after expression"),
            ("slow and", "Unexpected end of input: expected identifier or '('"),
            ("not", "Unexpected end of input: expected identifier or '('"),
        ];

        for (source, expected_message) in cases {
            let error = parse(source).unwrap_err();
            assert_eq!(error.message(), expected_message, "input {:?}", source);
        }
    }

    #[test]
    fn keyword_errors_keep_original_casing() {
        let error = parse("AND slow").unwrap_err();
        assert_eq!(error.message(), "Unexpected 'AND': missing left operand");
    }

    #[test]
    fn parse_errors_carry_expected_actual_and_position() {
        let error = parse("slow and fast)").unwrap_err();
        match error {
            FilterError::Parse { expected, actual, position, line, column, .. } => {
                assert_eq!(expected, "end of expression");
                assert_eq!(actual, ")");
                assert_eq!(position, 13);
                assert_eq!((line, column), (1, 14));
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn eof_errors_point_past_the_input() {
        let error = parse("slow and").unwrap_err();
        assert_eq!(error.position(), 8);
        assert_eq!(error.actual(), Some("end of input"));
    }
}
