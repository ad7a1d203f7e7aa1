//! Token trace output
//!
//! One line per token in the form `<line>: <lexeme> -> <kind-name>`, as
//! printed by the `rill` binary.

use crate::lexer::{Scanner, Token};
use std::fmt;

/// Sample program scanned when the driver is given no input
pub const SAMPLE_SOURCE: &str = "let mut x = 10;\n\
fn add(a: int, b: int) -> int {\n    \
return a + b;\n\
}\n\
if (x > 5) {\n    \
println!(\"x is greater than 5\");\n\
} else {\n    \
print!(\"x is small\");\n\
}\n";

/// Display adapter rendering a single trace line
pub struct TraceLine<'a, 'src>(pub &'a Token<'src>);

impl fmt::Display for TraceLine<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.0;
        write!(f, "{}: {} -> {}", token.line, token.text(), token.kind.name())
    }
}

/// Trace every token of `source`, EOF included
pub fn trace(source: &str) -> Vec<String> {
    Scanner::new(source)
        .tokens()
        .map(|token| TraceLine(&token).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trace_format() {
        assert_eq!(
            trace("let x\n= \"hi\";"),
            vec![
                "1: let -> LET",
                "1: x -> IDENTIFIER",
                "2: = -> EQUAL",
                "2: \"hi\" -> STRING",
                "2: ; -> SEMICOLON",
                "2:  -> EOF",
            ]
        );
    }

    #[test]
    fn test_trace_shows_error_message() {
        assert_eq!(trace("#"), vec!["1: Unexpected character. -> ERROR", "1:  -> EOF"]);
    }

    #[test]
    fn test_sample_source_layout() {
        assert!(SAMPLE_SOURCE.starts_with("let mut x = 10;\nfn add("));
        assert!(SAMPLE_SOURCE.contains("\n    return a + b;\n"));
        assert_eq!(SAMPLE_SOURCE.lines().count(), 9);
    }
}
