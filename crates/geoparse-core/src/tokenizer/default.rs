// crates/geoparse-core/src/tokenizer/default.rs
use super::{clean_parts, Tokenizer};

/// Adjacent word pairs first, then every single word.
///
/// `"santa clara ca"` -> `["santa clara", "clara ca", "santa", "clara", "ca"]`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenizer;

impl Tokenizer for DefaultTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let parts = clean_parts(text);
        let mut tokens = Vec::with_capacity(parts.len() * 2);
        tokens.extend(parts.windows(2).map(|w| format!("{} {}", w[0], w[1])));
        tokens.extend(parts);
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_then_singles() {
        assert_eq!(
            DefaultTokenizer.tokenize("san francisco ca usa"),
            vec![
                "san francisco",
                "francisco ca",
                "ca usa",
                "san",
                "francisco",
                "ca",
                "usa"
            ]
        );
    }

    #[test]
    fn single_word_has_no_pairs() {
        assert_eq!(DefaultTokenizer.tokenize("glasgow"), vec!["glasgow"]);
    }
}
