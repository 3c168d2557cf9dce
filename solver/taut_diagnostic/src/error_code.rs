//! Error codes for all solver diagnostics.

use std::fmt;

/// Error codes, phase-prefixed:
/// - E1xxx: parser errors
/// - E2xxx: solver validation errors
///
/// The lexer has no codes: it is maximally lenient and drops anything it
/// cannot tokenize.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected set name
    E1004,
    /// Trailing input after a complete formula
    E1005,

    // Solver Errors (E2xxx)
    /// Target set not referenced by the formula
    E2001,
    /// Undefined set name
    E2002,
}

impl ErrorCode {
    /// The code as it appears in rendered diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
        }
    }

    /// One-line summary of the error class.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected set name",
            ErrorCode::E1005 => "trailing input after a complete formula",
            ErrorCode::E2001 => "target set not referenced by the formula",
            ErrorCode::E2002 => "undefined set name",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
