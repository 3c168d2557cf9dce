//! Raw token conversion.
//!
//! Converts raw logos tokens to the final `TokenKind`.

use crate::RawToken;
use taut_ir::TokenKind;

/// Convert a raw token to a `TokenKind`. Identifier text is owned by the
/// resulting token; every operator spelling collapses to its kind here.
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Not => TokenKind::Not,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Implies => TokenKind::Implies,
        RawToken::Equiv => TokenKind::Equiv,
        RawToken::Xor => TokenKind::Xor,
        RawToken::In => TokenKind::In,
        RawToken::FreeVar => TokenKind::FreeVar,
        RawToken::Ident => TokenKind::SetName(slice.to_string()),
    }
}
