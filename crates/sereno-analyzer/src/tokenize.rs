//! Word tokenization for lexicon matching.

/// Split a text into word tokens.
///
/// A token is a maximal run of alphanumeric characters or underscores;
/// everything else separates tokens and is discarded. The check is
/// Unicode-aware, so accented Spanish letters stay inside their word
/// ("pánico" is one token, not three).
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .collect()
}
