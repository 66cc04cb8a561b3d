//! A small engine for boolean filter expressions over named tags, e.g.
//! `slow and not (integration or flaky)`. The pipeline is
//! text → [`tokenize`] → [`parse`] → [`evaluate`]; the parsed [`Expr`] is
//! immutable and can be evaluated repeatedly against different subject
//! lists without re-parsing.

pub mod error;
pub mod eval;
pub mod expr;
pub mod parser;
pub mod scanner;
pub mod token_type;

pub use error::FilterError;
pub use eval::{create_evaluator, evaluate};
pub use expr::Expr;
pub use scanner::Token;
pub use token_type::TokenType;

use parser::Parser;
use scanner::Scanner;

/// Scans a filter expression into its token stream. The stream always ends
/// with exactly one EOF token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, FilterError> {
    Scanner::new(input).scan()
}

/// Parses a filter expression into its syntax tree.
pub fn parse(input: &str) -> Result<Expr, FilterError> {
    let tokens = tokenize(input)?;
    Parser::new(&tokens).parse()
}
