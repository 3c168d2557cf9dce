//! Diagnostic construction and terminal rendering.

use crate::ErrorCode;
use std::fmt::Write as _;
use taut_ir::Span;

/// Diagnostic severity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

/// A labeled span inside a diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// A diagnostic: code, severity, message, and labeled spans.
///
/// Built with the fluent constructors, rendered with [`Diagnostic::render`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
}

impl Diagnostic {
    /// Create an error diagnostic with the code's generic description as
    /// its message.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: code.description().to_string(),
            labels: Vec::new(),
        }
    }

    /// Replace the generic message with a specific one.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach a labeled span. The first label is the primary one.
    #[must_use]
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
        });
        self
    }

    /// Render against the normalized formula text.
    ///
    /// Formulas are single-line, so rendering shows the whole source with a
    /// caret underline beneath the primary label:
    ///
    /// ```text
    /// error[E1001]: expected `)`, found end of formula
    ///   | (X ∈ A ∧ (X ∈ B
    ///   |                 ^ here
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}[{}]: {}",
            self.severity.as_str(),
            self.code,
            self.message
        );

        if let Some(label) = self.labels.first() {
            let _ = writeln!(out, "  | {source}");
            let col = source
                .get(..label.span.start as usize)
                .map_or(0, |prefix| prefix.chars().count());
            let width = source
                .get(label.span.to_range())
                .map_or(1, |text| text.chars().count().max(1));
            let _ = writeln!(
                out,
                "  | {}{} {}",
                " ".repeat(col),
                "^".repeat(width),
                label.message
            );
        }

        for label in self.labels.iter().skip(1) {
            let _ = writeln!(out, "  = note: {} (at {})", label.message, label.span);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_underlines_the_primary_label() {
        let diag = Diagnostic::error(ErrorCode::E1001)
            .with_message("expected `)`, found AND")
            .with_label(Span::new(4, 7), "here");
        let rendered = diag.render("(A) AND");
        assert_eq!(
            rendered,
            "error[E1001]: expected `)`, found AND\n  | (A) AND\n  |     ^^^ here\n"
        );
    }

    #[test]
    fn render_without_labels_is_just_the_header() {
        let diag = Diagnostic::error(ErrorCode::E2001).with_message("set `A` not in formula");
        assert_eq!(diag.render(""), "error[E2001]: set `A` not in formula\n");
    }

    #[test]
    fn caret_column_counts_chars_not_bytes() {
        // `∈` is three bytes but one column.
        let source = "X ∈ A B";
        let diag = Diagnostic::error(ErrorCode::E1005).with_label(Span::new(8, 9), "here");
        let rendered = diag.render(source);
        let caret_line = rendered.lines().nth(2).unwrap_or("");
        assert_eq!(caret_line, "  |       ^ here");
    }

    #[test]
    fn default_message_is_the_code_description() {
        let diag = Diagnostic::error(ErrorCode::E1003);
        assert_eq!(diag.message, "unclosed delimiter");
    }
}
