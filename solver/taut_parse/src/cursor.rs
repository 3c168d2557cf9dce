//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, checking, and consumption. The grammar
//! lives in `grammar.rs`; nothing here knows about precedence.

use super::ParseError;
use taut_diagnostic::ErrorCode;
use taut_ir::{Span, Token, TokenKind};

/// Cursor over a lexed token slice.
///
/// Invariant: the slice is non-empty and its last token is `Eof` (the
/// lexer guarantees both), so `current` is always valid and `advance`
/// never walks past the end.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Total number of tokens, including the trailing `Eof`.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        debug_assert!(self.pos < self.tokens.len(), "cursor position out of bounds");
        &self.tokens[self.pos]
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Check if the cursor has reached the `Eof` token.
    #[inline]
    pub fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token's kind matches.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. Stops at `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.pos];
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token only if it matches `kind`.
    ///
    /// A mismatch produces `E1001` naming the expected and actual kinds
    /// and the offending span.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::new(
                ErrorCode::E1001,
                format!("expected {}, found {}", kind, self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Consume a set-name token and return its name.
    pub fn expect_set_name(&mut self) -> Result<String, ParseError> {
        if let TokenKind::SetName(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::new(
                ErrorCode::E1004,
                format!("expected set name, found {}", self.current_kind()),
                self.current_span(),
            ))
        }
    }
}
