//! Lexical analysis module
//!
//! This module handles tokenization of Rill source code.

pub mod token;
pub mod scanner;

pub use token::{token_name, Lexeme, Span, Token, TokenKind};
pub use scanner::{Scanner, Tokens};

/// Scan a whole buffer, up to and including the EOF token
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).tokens().collect()
}
