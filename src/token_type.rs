#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TokenType {
    LeftParen, RightParen, // ()
    And, Or, Not, // keywords, matched case-insensitively
    Identifier,
    EOF,
}
