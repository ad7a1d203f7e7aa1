//! Diagnostic formatting for lexical errors
//!
//! Renders an error token against the source it came from, with the
//! offending line, its neighbours, and a caret under the failing column.

use super::{LexError, SourceLocation};
use crate::lexer::Token;
use colored::Colorize;

/// Diagnostic information for displaying a lexical error with context
pub struct Diagnostic<'src> {
    error: LexError,
    location: SourceLocation,
    source: &'src str,
}

impl<'src> Diagnostic<'src> {
    /// Create a diagnostic for an error token, located in `source`
    ///
    /// Returns `None` for tokens that carry no error.
    pub fn for_token(token: &Token<'_>, source: &'src str) -> Option<Self> {
        let error = token.lex_error()?;
        Some(Self {
            error,
            location: SourceLocation::from_offset(source, token.span.start),
            source,
        })
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}: ", "Lex Error".red().bold()));
        output.push_str(self.error.message());
        output.push('\n');
        output.push_str(&format!("  {} {}\n", "-->".blue().bold(), self.location));

        output.push_str(&self.format_source_context());

        output
    }

    fn format_source_context(&self) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = self.source.lines().collect();
        let location = self.location;

        if location.line == 0 || location.line > lines.len() {
            return output;
        }

        let line_idx = location.line - 1;
        let line_num_width = (location.line + 1).to_string().len();

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", location.line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        let indicator_padding = " ".repeat(line_num_width + 2 + location.column);
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn plain(diag: &Diagnostic<'_>) -> String {
        colored::control::set_override(false);
        diag.format()
    }

    #[test]
    fn test_diagnostic_header() {
        let source = "@";
        let tokens = tokenize(source);
        let diag = Diagnostic::for_token(&tokens[0], source).unwrap();
        let formatted = plain(&diag);
        assert!(formatted.starts_with("Lex Error: Unexpected character.\n"));
        assert!(formatted.contains("--> 1:1"));
    }

    #[test]
    fn test_location_past_last_line_has_no_context() {
        let source = "x\n";
        let diag = Diagnostic {
            error: LexError::UnterminatedString,
            location: SourceLocation::from_offset(source, source.len()),
            source,
        };
        let formatted = plain(&diag);
        assert!(formatted.contains("--> 2:1"));
        assert!(!formatted.contains('^'));
    }

    #[test]
    fn test_diagnostic_for_error_token() {
        let source = "let x = 42;\nlet y = @;\nlet z = 10;";
        let tokens = tokenize(source);
        let error = tokens
            .iter()
            .find(|t| t.lex_error().is_some())
            .and_then(|t| Diagnostic::for_token(t, source))
            .unwrap();

        assert_eq!(error.location(), SourceLocation::new(2, 9));
        let formatted = plain(&error);
        assert!(formatted.contains("let x = 42;"));
        assert!(formatted.contains("let y = @;"));
        assert!(formatted.contains("let z = 10;"));
        let caret_line = formatted.lines().find(|l| l.trim() == "^").unwrap();
        let source_line = formatted.lines().find(|l| l.contains("let y")).unwrap();
        assert_eq!(caret_line.find('^'), source_line.find('@'));
    }

    #[test]
    fn test_unterminated_string_points_at_opening_quote() {
        let source = "print(\"oops\nmore";
        let tokens = tokenize(source);
        let diag = Diagnostic::for_token(&tokens[2], source).unwrap();
        assert_eq!(diag.location(), SourceLocation::new(1, 7));
    }

    #[test]
    fn test_no_diagnostic_for_ordinary_token() {
        let source = "let";
        let tokens = tokenize(source);
        assert!(Diagnostic::for_token(&tokens[0], source).is_none());
    }
}
