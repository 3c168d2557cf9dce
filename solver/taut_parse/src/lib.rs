//! Recursive descent parser for taut formulas.
//!
//! Produces an [`Expr`] tree from a lexed token stream. Parsing is
//! all-or-nothing: the first error aborts and no partial tree escapes.

mod cursor;
mod grammar;

pub use cursor::Cursor;

use taut_ir::{Expr, Span, Token};
use tracing::trace;

/// Parser state.
pub struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a lexed token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse the full token stream into a formula.
    ///
    /// Any unconsumed token after a complete expression is a trailing-input
    /// error naming the token and its offset.
    pub fn parse_formula(mut self) -> Result<Expr, ParseError> {
        trace!(tokens = self.cursor.token_count(), "parsing formula");
        let expr = self.expr()?;
        if !self.cursor.at_end() {
            return Err(ParseError::new(
                taut_diagnostic::ErrorCode::E1005,
                format!(
                    "trailing input: unexpected {} after a complete formula",
                    self.cursor.current_kind()
                ),
                self.cursor.current_span(),
            ));
        }
        Ok(expr)
    }
}

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: taut_diagnostic::ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error in the normalized formula text.
    pub span: Span,
    /// Optional context for suggestions.
    pub context: Option<String>,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(
        code: taut_diagnostic::ErrorCode,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// Add context for better error messages.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Convert to a full Diagnostic for rendering.
    pub fn to_diagnostic(&self) -> taut_diagnostic::Diagnostic {
        taut_diagnostic::Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"))
    }
}

/// Parse a lexed token stream into a formula.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse_formula()
}

/// Lex and parse a formula string in one step.
pub fn parse_formula(source: &str) -> Result<Expr, ParseError> {
    let tokens = taut_lexer::lex(source);
    parse(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use taut_diagnostic::ErrorCode;
    use taut_ir::BinaryOp;

    fn member(name: &str) -> Expr {
        Expr::Membership(name.to_string())
    }

    fn parse_ok(source: &str) -> Expr {
        match parse_formula(source) {
            Ok(expr) => expr,
            Err(e) => panic!("unexpected parse error for {source:?}: {e:?}"),
        }
    }

    fn parse_err(source: &str) -> ParseError {
        match parse_formula(source) {
            Err(e) => e,
            Ok(expr) => panic!("expected parse error for {source:?}, got {expr}"),
        }
    }

    #[test]
    fn bare_name_is_implicit_membership() {
        assert_eq!(parse_ok("A"), member("A"));
        assert_eq!(parse_ok("x ∈ A"), member("A"));
        assert_eq!(parse_ok("x A"), member("A"));
    }

    #[test]
    fn conjunction_is_left_associative() {
        assert_eq!(
            parse_ok("A ∧ B ∧ C"),
            Expr::binary(
                Expr::binary(member("A"), BinaryOp::And, member("B")),
                BinaryOp::And,
                member("C"),
            )
        );
    }

    #[test]
    fn implication_is_right_associative() {
        assert_eq!(
            parse_ok("A -> B -> C"),
            Expr::binary(
                member("A"),
                BinaryOp::Implies,
                Expr::binary(member("B"), BinaryOp::Implies, member("C")),
            )
        );
    }

    #[test]
    fn precedence_and_binds_tighter_than_or() {
        assert_eq!(
            parse_ok("A ∨ B ∧ C"),
            Expr::binary(
                member("A"),
                BinaryOp::Or,
                Expr::binary(member("B"), BinaryOp::And, member("C")),
            )
        );
    }

    #[test]
    fn precedence_equiv_is_loosest() {
        assert_eq!(
            parse_ok("A ≡ B → C"),
            Expr::binary(
                member("A"),
                BinaryOp::Equiv,
                Expr::binary(member("B"), BinaryOp::Implies, member("C")),
            )
        );
    }

    #[test]
    fn negation_stacks_and_binds_tightest() {
        assert_eq!(
            parse_ok("¬¬A ∧ B"),
            Expr::binary(
                Expr::Not(Box::new(Expr::Not(Box::new(member("A"))))),
                BinaryOp::And,
                member("B"),
            )
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            parse_ok("(A ∨ B) ∧ C"),
            Expr::binary(
                Expr::binary(member("A"), BinaryOp::Or, member("B")),
                BinaryOp::And,
                member("C"),
            )
        );
    }

    #[test]
    fn mixed_notations_parse_identically() {
        assert_eq!(parse_ok("(x ∈ P) → (x ∈ A)"), parse_ok("P IMPLIES A"));
        assert_eq!(parse_ok("!P \\/ Q"), parse_ok("¬P ∨ Q"));
    }

    #[test]
    fn missing_operand_is_expected_expression() {
        assert_eq!(parse_err("A ∧").code, ErrorCode::E1002);
        assert_eq!(parse_err("").code, ErrorCode::E1002);
    }

    #[test]
    fn unclosed_group_is_reported() {
        let err = parse_err("(A ∧ B");
        assert_eq!(err.code, ErrorCode::E1003);
        assert!(err.message.contains("`)`"));
    }

    #[test]
    fn trailing_input_is_reported_with_offset() {
        let err = parse_err("A B");
        assert_eq!(err.code, ErrorCode::E1005);
        assert_eq!(err.span.start, 2);
    }

    #[test]
    fn membership_without_set_name_is_reported() {
        assert_eq!(parse_err("x ∈ ∧ B").code, ErrorCode::E1004);
        assert_eq!(parse_err("x ∈").code, ErrorCode::E1004);
    }

    #[test]
    fn error_converts_to_diagnostic() {
        let err = parse_err("(A");
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E1003);
        assert_eq!(diag.labels.len(), 1);
    }
}
