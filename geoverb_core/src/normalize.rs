//! Text normalization for form lookup and comparison.
//!
//! Search and display-form resolution both key on a canonical rendering of
//! a conjugated form: NFKC-folded, whitespace and ASCII punctuation
//! removed, lowercased. The same function is applied to stored forms at
//! load time and to queries at search time, so the two sides always agree.

use unicode_normalization::UnicodeNormalization;

/// ASCII punctuation stripped during normalization.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Normalize a form for comparison.
///
/// NFKC fold, drop whitespace and punctuation, lowercase. Idempotent:
/// normalizing an already-normalized string is a no-op.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfkc()
        .filter(|ch| !ch.is_whitespace() && !PUNCTUATION.contains(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}
