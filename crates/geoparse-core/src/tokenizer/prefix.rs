// crates/geoparse-core/src/tokenizer/prefix.rs
use super::{clean_parts, Tokenizer};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words that rarely stand alone in a place name.
static PREFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "san", "santa", "santo", "sao", "los", "las", "la", "el", "le", "new", "saint", "st",
        "ste", "de", "del", "den", "mount", "mt", "fort", "ft", "port", "united", "north",
        "south", "east", "west", "great", "upper", "lower", "hong", "kuala", "buenos", "costa",
        "puerto", "sri", "abu", "tel", "rio",
    ]
    .into_iter()
    .collect()
});

/// Greedily glues a known prefix word to the word after it.
///
/// `"san francisco ca"` -> `["san francisco", "ca"]`
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixAwareTokenizer;

impl Tokenizer for PrefixAwareTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let parts = clean_parts(text);
        let mut tokens = Vec::with_capacity(parts.len());
        let mut i = 0;
        while i < parts.len() {
            let word = &parts[i];
            if i + 1 < parts.len() && PREFIXES.contains(word.to_lowercase().as_str()) {
                tokens.push(format!("{} {}", word, parts[i + 1]));
                i += 2;
            } else {
                tokens.push(word.clone());
                i += 1;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_prefix_with_following_word() {
        assert_eq!(
            PrefixAwareTokenizer.tokenize("san francisco ca usa"),
            vec!["san francisco", "ca", "usa"]
        );
        assert_eq!(
            PrefixAwareTokenizer.tokenize("new york united states"),
            vec!["new york", "united states"]
        );
    }

    #[test]
    fn trailing_prefix_stays_single() {
        assert_eq!(PrefixAwareTokenizer.tokenize("glasgow new"), vec!["glasgow", "new"]);
    }

    #[test]
    fn merged_word_is_consumed() {
        // "los" takes "angeles"; "angeles" is not emitted again.
        assert_eq!(
            PrefixAwareTokenizer.tokenize("los angeles california"),
            vec!["los angeles", "california"]
        );
    }
}
