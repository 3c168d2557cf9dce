//! Formula text normalization.
//!
//! Runs before tokenization: upper-cases the input, then substitutes the
//! restricted set of localized (Russian) connective keywords with their
//! English spellings. The substitution is textual, not token-aware, so it
//! also fires inside Cyrillic identifiers; set names should avoid the
//! substituted words. All downstream spans refer to the normalized text.

/// Localized keyword substitutions, longest pattern first so `ИЛИ` is
/// consumed before the single-letter `И` rule can split it.
const LOCALIZED_KEYWORDS: &[(&str, &str)] = &[("ИЛИ", "OR"), ("И", "AND"), ("В", "IN")];

/// Normalize a raw formula string for the lexer.
pub fn normalize(input: &str) -> String {
    let mut text = input.to_uppercase();
    for (localized, english) in LOCALIZED_KEYWORDS {
        if text.contains(localized) {
            text = text.replace(localized, english);
        }
    }
    text
}
