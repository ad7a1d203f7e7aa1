//! Scanner implementation for the Rill language
//!
//! The scanner is pull-based: each call to [`Scanner::next_token`] skips
//! whitespace and comments, then produces exactly one token. Lexical errors
//! come back as error tokens and scanning continues right after them.

use super::token::{Span, Token, TokenKind};
use crate::error::LexError;

/// Scanner over a borrowed source buffer
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    start: usize,
    current: usize,
    line: usize,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scan the next token
    ///
    /// Once the input is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();
        self.start = self.current;

        if self.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let token = self.scan_token();
        match token.lex_error() {
            Some(error) => log::debug!("line {}: {}", token.line, error),
            None => log::trace!("line {}: {} {:?}", token.line, token.kind, token.text()),
        }
        token
    }

    /// Turn the scanner into an iterator that ends after the EOF token
    pub fn tokens(self) -> Tokens<'src> {
        Tokens {
            scanner: self,
            finished: false,
        }
    }

    fn scan_token(&mut self) -> Token<'src> {
        let c = self.advance();

        if is_alpha(c) {
            return self.scan_identifier();
        }
        if c.is_ascii_digit() {
            return self.scan_number();
        }

        match c {
            b'(' => self.make_token(TokenKind::LeftParen),
            b')' => self.make_token(TokenKind::RightParen),
            b'{' => self.make_token(TokenKind::LeftBrace),
            b'}' => self.make_token(TokenKind::RightBrace),
            b',' => self.make_token(TokenKind::Comma),
            b'.' => self.make_token(TokenKind::Dot),
            b';' => self.make_token(TokenKind::Semicolon),
            b'+' => self.make_token(TokenKind::Plus),
            b'-' => self.make_token(TokenKind::Minus),
            b'*' => self.make_token(TokenKind::Star),
            b'/' => self.make_token(TokenKind::Slash),
            b'%' => self.make_token(TokenKind::Percent),

            b'!' => self.make_pair(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.make_pair(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.make_pair(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.make_pair(b'=', TokenKind::GreaterEqual, TokenKind::Greater),

            // Only the doubled forms exist
            b'&' if self.match_char(b'&') => self.make_token(TokenKind::AndAnd),
            b'|' if self.match_char(b'|') => self.make_token(TokenKind::OrOr),

            b'"' => self.scan_string(),

            _ => {
                self.skip_continuation_bytes();
                self.error_token(LexError::UnexpectedCharacter)
            }
        }
    }

    /// Skip spaces, tabs, carriage returns, newlines and line comments
    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                b' ' | b'\r' | b'\t' => {
                    self.advance();
                }
                b'\n' => {
                    self.line += 1;
                    self.advance();
                }
                b'/' if self.peek_next() == b'/' => {
                    // The newline is left for the next iteration
                    while self.peek() != b'\n' && !self.is_at_end() {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) -> Token<'src> {
        while is_alpha(self.peek()) || self.peek().is_ascii_digit() {
            self.advance();
        }

        let kind = TokenKind::keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }

    /// Scan a number literal (integer or fractional)
    fn scan_number(&mut self) -> Token<'src> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    /// Scan a string literal; the opening quote is already consumed
    fn scan_string(&mut self) -> Token<'src> {
        while self.peek() != b'"' && !self.is_at_end() {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return self.error_token(LexError::UnterminatedString);
        }

        // Consume closing quote
        self.advance();
        self.make_token(TokenKind::String)
    }

    /// Consume the rest of a multibyte character so the cursor stays on a
    /// character boundary
    fn skip_continuation_bytes(&mut self) {
        while !self.is_at_end() && !self.source.is_char_boundary(self.current) {
            self.current += 1;
        }
    }

    fn make_pair(&mut self, expected: u8, matched: TokenKind, single: TokenKind) -> Token<'src> {
        let kind = if self.match_char(expected) { matched } else { single };
        self.make_token(kind)
    }

    fn make_token(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.lexeme(), self.span(), self.line)
    }

    fn error_token(&self, error: LexError) -> Token<'src> {
        Token::error(error, self.span(), self.line)
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn span(&self) -> Span {
        Span::new(self.start, self.current)
    }

    /// Advance to the next byte
    fn advance(&mut self) -> u8 {
        let c = self.peek();
        self.current += 1;
        c
    }

    /// Check if the next byte matches and consume it if so
    fn match_char(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.peek() != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    /// Peek at the current byte without consuming it; NUL at the end
    fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.current).copied().unwrap_or(b'\0')
    }

    fn peek_next(&self) -> u8 {
        self.source.as_bytes().get(self.current + 1).copied().unwrap_or(b'\0')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Iterator over a scanner's tokens, ending after the EOF token
#[derive(Debug, Clone)]
pub struct Tokens<'src> {
    scanner: Scanner<'src>,
    finished: bool,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.scanner.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
