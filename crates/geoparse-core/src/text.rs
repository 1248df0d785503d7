// crates/geoparse-core/src/text.rs
use crate::error::{GeoError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{P}+").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// ```rust
/// use geoparse_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Canonicalizes place text before any lookup.
///
/// Every index key and every query goes through the same `Normalizer`, so
/// both sides of a lookup always agree on spelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    /// Transliterate to ASCII with [`fold_key`] before lowercasing.
    pub fold_unicode: bool,
}

impl Normalizer {
    pub fn new(fold_unicode: bool) -> Self {
        Self { fold_unicode }
    }

    /// Trim, lowercase, strip punctuation, collapse whitespace.
    ///
    /// Fails with [`GeoError::InvalidArgument`] when `text` is empty or only
    /// whitespace. Text made only of punctuation normalizes to `""`.
    ///
    /// ```rust
    /// use geoparse_core::text::Normalizer;
    ///
    /// let n = Normalizer::default();
    /// assert_eq!(n.normalize("  Santa Clara,  CA. ").unwrap(), "santa clara ca");
    /// assert!(n.normalize("   ").is_err());
    /// ```
    pub fn normalize(&self, text: &str) -> Result<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GeoError::invalid_argument("text must not be empty"));
        }

        let lowered = if self.fold_unicode {
            fold_key(trimmed)
        } else {
            trimmed.to_lowercase()
        };
        let stripped = PUNCTUATION.replace_all(&lowered, "");
        let collapsed = WHITESPACE.replace_all(stripped.trim(), " ");
        Ok(collapsed.into_owned())
    }

    /// Index-side variant: `None` for values that would produce an empty key.
    pub(crate) fn key(&self, text: &str) -> Option<String> {
        self.normalize(text).ok().filter(|k| !k.is_empty())
    }
}

/// Normalizes with the default (non-folding) settings.
pub fn normalize(text: &str) -> Result<String> {
    Normalizer::default().normalize(text)
}
