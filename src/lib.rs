//! # Rill Programming Language
//!
//! Lexical front end for Rill, a small statically-typed scripting language
//! with C/Rust-flavored syntax.
//!
//! ## Architecture
//!
//! - `lexer`: the pull-based scanner and the token kinds it produces
//! - `error`: lexical error values and diagnostic rendering
//! - `trace`: the `<line>: <lexeme> -> <kind-name>` token trace
//!
//! ```
//! use rill_lang::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let x = 1;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! ```

pub mod error;
pub mod lexer;
pub mod trace;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, SourceLocation};
pub use lexer::{token_name, tokenize, Lexeme, Scanner, Span, Token, TokenKind};

/// Version of the Rill language
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
