//! Lexer for the taut formula language, built on logos.
//!
//! Tokenization is maximally lenient: whitespace is skipped, and any
//! character that matches no rule is dropped silently. Malformed input
//! surfaces later as parser errors. Every operator accepts its
//! mathematical symbol, ASCII digraph, and English keyword spellings;
//! logos resolves overlaps by longest match, so `XOR` is an operator while
//! `X` alone is the free variable and `XY` is a set name.

mod convert;
mod normalize;

pub use normalize::normalize;

use convert::convert_token;
use logos::Logos;
use taut_ir::{Span, Token, TokenKind};

/// Raw token produced by logos, before conversion to `TokenKind`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[token("¬")]
    #[token("!")]
    #[token("~")]
    #[token("NOT")]
    Not,

    #[token("∧")]
    #[token("&")]
    #[token(r"/\")]
    #[token("AND")]
    And,

    #[token("∨")]
    #[token("|")]
    #[token(r"\/")]
    #[token("OR")]
    Or,

    #[token("→")]
    #[token("->")]
    #[token("=>")]
    #[token("IMPLIES")]
    Implies,

    #[token("≡")]
    #[token("↔")]
    #[token("<->")]
    #[token("<=>")]
    #[token("EQUIV")]
    #[token("IFF")]
    Equiv,

    #[token("⊕")]
    #[token("^")]
    #[token("XOR")]
    Xor,

    #[token("∈")]
    #[token("IN")]
    In,

    /// The free variable. Priority beats the identifier regex for a lone
    /// `X`; maximal munch still hands `XY` to the identifier rule.
    #[token("X", priority = 3)]
    FreeVar,

    /// Set name over the upper-cased text; Cyrillic letters are accepted
    /// so localized set names work alongside localized connectives.
    #[regex(r"[A-ZА-ЯЁ][A-ZА-ЯЁ0-9]*")]
    Ident,
}

/// Tokenize a formula.
///
/// Normalizes first (see [`normalize`]), then scans. The returned sequence
/// is always terminated by exactly one `Eof` token whose span sits at the
/// end of the normalized text.
pub fn lex(source: &str) -> Vec<Token> {
    let normalized = normalize(source);
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(&normalized);

    while let Some(result) = lexer.next() {
        let Ok(raw) = result else {
            // Unknown character: dropped, never an error.
            continue;
        };
        let span = Span::from_range(lexer.span());
        tokens.push(Token::new(convert_token(raw, lexer.slice()), span));
    }

    let end = normalized.len();
    tokens.push(Token::new(TokenKind::Eof, Span::from_range(end..end)));
    tokens
}
