//! Error handling and diagnostics for the Rill language
//!
//! Lexical errors are not raised: the scanner hands them to the consumer as
//! error tokens. This module defines the error values those tokens carry and
//! the location type used to report them.

use std::fmt;
use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

const UNEXPECTED_CHARACTER: &str = "Unexpected character.";
const UNTERMINATED_STRING: &str = "Unterminated string.";

/// Lexical error carried by an error token
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexError {
    /// No scanning rule matches the leading character
    #[error("{}", UNEXPECTED_CHARACTER)]
    UnexpectedCharacter,
    /// Input ended before a string literal was closed
    #[error("{}", UNTERMINATED_STRING)]
    UnterminatedString,
}

impl LexError {
    /// Get the fixed diagnostic message
    pub fn message(self) -> &'static str {
        match self {
            Self::UnexpectedCharacter => UNEXPECTED_CHARACTER,
            Self::UnterminatedString => UNTERMINATED_STRING,
        }
    }
}

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in characters)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Locate a byte offset within `source`
    ///
    /// Offsets past the end are clamped to the end of the buffer, and offsets
    /// inside a multibyte character are rounded down to its first byte.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_messages() {
        assert_eq!(LexError::UnexpectedCharacter.to_string(), "Unexpected character.");
        assert_eq!(LexError::UnterminatedString.to_string(), "Unterminated string.");
    }

    #[test]
    fn test_message_matches_display() {
        for error in [LexError::UnexpectedCharacter, LexError::UnterminatedString] {
            assert_eq!(error.message(), error.to_string());
        }
    }

    #[test]
    fn test_source_location_display() {
        assert_eq!(SourceLocation::new(10, 5).to_string(), "10:5");
    }

    #[test]
    fn test_location_from_offset() {
        let source = "let x\n  = @;\n";
        assert_eq!(SourceLocation::from_offset(source, 0), SourceLocation::new(1, 1));
        assert_eq!(SourceLocation::from_offset(source, 4), SourceLocation::new(1, 5));
        assert_eq!(SourceLocation::from_offset(source, 10), SourceLocation::new(2, 5));
        assert_eq!(SourceLocation::from_offset(source, 999), SourceLocation::new(3, 1));
    }

    #[test]
    fn test_location_counts_characters_not_bytes() {
        let source = "é @";
        assert_eq!(SourceLocation::from_offset(source, 3), SourceLocation::new(1, 3));
        assert_eq!(SourceLocation::from_offset(source, 1), SourceLocation::new(1, 1));
    }
}
