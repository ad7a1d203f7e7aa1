//! Token definitions for the Rill language
//!
//! This module defines the closed set of token kinds produced by the scanner,
//! the token value itself, and the stable display names used for tracing.

use crate::error::LexError;
use std::fmt;

/// Byte range `[start, end)` a token covers in its source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }
}

/// What a token carries: text borrowed from the source, or a lexical error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme<'src> {
    Source(&'src str),
    Error(LexError),
}

/// A token in the Rill language
///
/// Tokens borrow from the buffer they were scanned from, so the buffer must
/// outlive every token derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: Lexeme<'src>,
    pub span: Span,
    /// Line number (1-based)
    pub line: usize,
}

impl<'src> Token<'src> {
    /// Create a token over a slice of the source
    pub fn new(kind: TokenKind, text: &'src str, span: Span, line: usize) -> Self {
        Self {
            kind,
            lexeme: Lexeme::Source(text),
            span,
            line,
        }
    }

    /// Create an error token
    pub fn error(error: LexError, span: Span, line: usize) -> Self {
        Self {
            kind: TokenKind::Error,
            lexeme: Lexeme::Error(error),
            span,
            line,
        }
    }

    /// Source text of the token, or the diagnostic message for error tokens
    pub fn text(&self) -> &'src str {
        match self.lexeme {
            Lexeme::Source(text) => text,
            Lexeme::Error(error) => error.message(),
        }
    }

    pub fn lex_error(&self) -> Option<LexError> {
        match self.lexeme {
            Lexeme::Error(error) => Some(error),
            Lexeme::Source(_) => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Token kinds in the Rill language
///
/// The discriminant order is part of the interface: downstream consumers may
/// store kinds as raw `u8` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,      // (
    RightParen,     // )
    LeftBrace,      // {
    RightBrace,     // }
    Comma,          // ,
    Dot,            // .
    Semicolon,      // ;
    Plus,           // +
    Minus,          // -
    Star,           // *
    Slash,          // /
    Percent,        // %
    Bang,           // !

    // One or two character tokens
    BangEqual,      // !=
    EqualEqual,     // ==
    Greater,        // >
    GreaterEqual,   // >=
    Less,           // <
    LessEqual,      // <=
    AndAnd,         // &&
    OrOr,           // ||
    Equal,          // =

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    Let,
    Mut,
    Fn,
    Return,
    If,
    Else,
    While,
    For,
    True,
    False,
    Print,
    Println,
    Len,
    Input,
    ParseInt,
    ParseFloat,
    ToString,

    // Types
    Int,
    Float,
    Bool,
    StringType,
    Void,

    // Special
    Error,
    Eof,
}

impl TokenKind {
    /// Every kind, indexed by discriminant
    pub const ALL: [TokenKind; 49] = [
        Self::LeftParen,
        Self::RightParen,
        Self::LeftBrace,
        Self::RightBrace,
        Self::Comma,
        Self::Dot,
        Self::Semicolon,
        Self::Plus,
        Self::Minus,
        Self::Star,
        Self::Slash,
        Self::Percent,
        Self::Bang,
        Self::BangEqual,
        Self::EqualEqual,
        Self::Greater,
        Self::GreaterEqual,
        Self::Less,
        Self::LessEqual,
        Self::AndAnd,
        Self::OrOr,
        Self::Equal,
        Self::Identifier,
        Self::String,
        Self::Number,
        Self::Let,
        Self::Mut,
        Self::Fn,
        Self::Return,
        Self::If,
        Self::Else,
        Self::While,
        Self::For,
        Self::True,
        Self::False,
        Self::Print,
        Self::Println,
        Self::Len,
        Self::Input,
        Self::ParseInt,
        Self::ParseFloat,
        Self::ToString,
        Self::Int,
        Self::Float,
        Self::Bool,
        Self::StringType,
        Self::Void,
        Self::Error,
        Self::Eof,
    ];

    /// Get the keyword kind for an identifier lexeme
    ///
    /// Matching is exact and case-sensitive; `None` means the lexeme is a
    /// plain identifier.
    pub fn keyword(text: &str) -> Option<Self> {
        match text {
            "let" => Some(Self::Let),
            "mut" => Some(Self::Mut),
            "fn" => Some(Self::Fn),
            "return" => Some(Self::Return),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "while" => Some(Self::While),
            "for" => Some(Self::For),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "print" => Some(Self::Print),
            "println" => Some(Self::Println),
            "len" => Some(Self::Len),
            "input" => Some(Self::Input),
            "parse_int" => Some(Self::ParseInt),
            "parse_float" => Some(Self::ParseFloat),
            "to_string" => Some(Self::ToString),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            "string" => Some(Self::StringType),
            "void" => Some(Self::Void),
            _ => None,
        }
    }

    pub fn is_keyword(self) -> bool {
        (Self::Let as u8..=Self::Void as u8).contains(&(self as u8))
    }

    /// Look up a kind by its raw discriminant
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(usize::from(raw)).copied()
    }

    /// Stable display name used in traces and test fixtures
    pub fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Semicolon => "SEMICOLON",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::Percent => "PERCENT",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::AndAnd => "AND_AND",
            Self::OrOr => "OR_OR",
            Self::Equal => "EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Let => "LET",
            Self::Mut => "MUT",
            Self::Fn => "FN",
            Self::Return => "RETURN",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Print => "PRINT",
            Self::Println => "PRINTLN",
            Self::Len => "LEN",
            Self::Input => "INPUT",
            Self::ParseInt => "PARSE_INT",
            Self::ParseFloat => "PARSE_FLOAT",
            Self::ToString => "TO_STRING",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Bool => "BOOL",
            Self::StringType => "STRING_TYPE",
            Self::Void => "VOID",
            Self::Error => "ERROR",
            Self::Eof => "EOF",
        }
    }
}

/// Display name for a raw kind value, `"UNKNOWN"` if it names no kind
pub fn token_name(raw: u8) -> &'static str {
    TokenKind::from_raw(raw).map_or("UNKNOWN", TokenKind::name)
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
