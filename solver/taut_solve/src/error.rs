//! Solver error types.
//!
//! Parse and validation failures are hard errors; an unsatisfiable
//! problem is not: it comes back as a normal [`crate::Solution`] with
//! `length == -1`, because "no segment exists" is an expected outcome,
//! not a defect in the input.

use crate::eval::EvalError;
use taut_diagnostic::{Diagnostic, ErrorCode};
use taut_ir::Span;
use taut_parse::ParseError;
use thiserror::Error;

/// Errors from solver construction and evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The formula failed to parse.
    #[error("syntax error: {message}")]
    Syntax {
        code: ErrorCode,
        message: String,
        span: Span,
    },
    /// The target set never appears in the formula.
    #[error("target set `{target}` is not referenced by the formula")]
    TargetNotInFormula { target: String },
    /// A non-target set has no segment.
    #[error("set `{name}` is not defined")]
    UndefinedSet { name: String },
}

impl From<ParseError> for SolveError {
    fn from(e: ParseError) -> Self {
        SolveError::Syntax {
            code: e.code,
            message: e.message,
            span: e.span,
        }
    }
}

impl From<EvalError> for SolveError {
    fn from(e: EvalError) -> Self {
        match e {
            EvalError::UndefinedSet { name } => SolveError::UndefinedSet { name },
        }
    }
}

impl SolveError {
    /// Convert to a Diagnostic for rendering against the normalized
    /// formula text.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SolveError::Syntax {
                code,
                message,
                span,
            } => Diagnostic::error(*code)
                .with_message(message)
                .with_label(*span, "here"),
            SolveError::TargetNotInFormula { target } => Diagnostic::error(ErrorCode::E2001)
                .with_message(format!(
                    "target set `{target}` is not referenced by the formula"
                )),
            SolveError::UndefinedSet { name } => Diagnostic::error(ErrorCode::E2002)
                .with_message(format!("set `{name}` is not defined")),
        }
    }
}
