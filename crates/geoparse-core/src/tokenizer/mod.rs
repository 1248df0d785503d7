// crates/geoparse-core/src/tokenizer/mod.rs

//! # Tokenizers
//!
//! A tokenizer turns normalized query text into an ordered list of
//! candidate keys. The resolver scans that list left to right and keeps the
//! first hit per category, so the *order* a strategy emits tokens in is
//! its whole ranking policy.

use serde::{Deserialize, Serialize};

mod default;
mod location;
mod prefix;

pub use default::DefaultTokenizer;
pub use location::LocationAwareTokenizer;
pub use prefix::PrefixAwareTokenizer;

/// Splits text into candidate lookup keys.
///
/// Implementations must return an empty vector for empty or
/// whitespace-only input and must be pure functions of their input.
pub trait Tokenizer: Send + Sync + std::fmt::Debug {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Selects one of the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    #[default]
    Default,
    PrefixAware,
    LocationAware,
}

impl TokenizerKind {
    pub fn build(self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::Default => Box::new(DefaultTokenizer),
            TokenizerKind::PrefixAware => Box::new(PrefixAwareTokenizer),
            TokenizerKind::LocationAware => Box::new(LocationAwareTokenizer),
        }
    }
}

impl std::str::FromStr for TokenizerKind {
    type Err = crate::GeoError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "default" => Ok(TokenizerKind::Default),
            "prefix_aware" | "prefix" => Ok(TokenizerKind::PrefixAware),
            "location_aware" | "location" => Ok(TokenizerKind::LocationAware),
            other => Err(crate::GeoError::InvalidArgument(format!(
                "unknown tokenizer: {other}"
            ))),
        }
    }
}

/// Shared cleanup: keep letters, digits, whitespace, `-`, `'` and `.`;
/// drop everything else, then split on whitespace.
pub(crate) fn clean_parts(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '\'' | '.'))
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_strategy_tolerates_blank_input() {
        for kind in [
            TokenizerKind::Default,
            TokenizerKind::PrefixAware,
            TokenizerKind::LocationAware,
        ] {
            let t = kind.build();
            assert!(t.tokenize("").is_empty(), "{kind:?}");
            assert!(t.tokenize("   \t ").is_empty(), "{kind:?}");
        }
    }

    #[test]
    fn cleanup_keeps_hyphen_apostrophe_period() {
        assert_eq!(
            clean_parts("st. john's, winston-salem!"),
            vec!["st.", "john's", "winston-salem"]
        );
    }

    #[test]
    fn kind_parses_from_cli_spelling() {
        assert_eq!("prefix-aware".parse::<TokenizerKind>().unwrap(), TokenizerKind::PrefixAware);
        assert_eq!("Location_Aware".parse::<TokenizerKind>().unwrap(), TokenizerKind::LocationAware);
        assert!("fuzzy".parse::<TokenizerKind>().is_err());
    }
}
