// crates/geoparse-core/src/tokenizer/location.rs
use super::{clean_parts, Tokenizer};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Multi-word names that must never be split.
const COMPOUNDS: &[&str] = &[
    "new york",
    "new jersey",
    "new mexico",
    "new hampshire",
    "new south wales",
    "new zealand",
    "new delhi",
    "new orleans",
    "hong kong",
    "los angeles",
    "las vegas",
    "san francisco",
    "san diego",
    "san jose",
    "santa clara",
    "salt lake city",
    "rio de janeiro",
    "sao paulo",
    "buenos aires",
    "kuala lumpur",
    "abu dhabi",
    "tel aviv",
    "united kingdom",
    "united states",
    "united arab emirates",
    "northern ireland",
    "south africa",
    "south korea",
    "north carolina",
    "south carolina",
    "north dakota",
    "south dakota",
    "west virginia",
    "rhode island",
    "costa rica",
    "puerto rico",
    "saudi arabia",
    "sri lanka",
    "el salvador",
    "st louis",
];

/// Short codes worth trying before ordinary words.
static LOCATION_CODES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "us", "usa", "uk", "gb", "gbr", "ca", "can", "uae", "ny", "nyc", "la", "sf", "dc", "tx",
        "fl", "wa", "nsw", "eng", "sco", "wal", "nir", "de", "deu", "fr", "fra", "au", "aus",
        "in", "ind", "cn", "chn", "jp", "jpn",
    ]
    .into_iter()
    .collect()
});

/// Phrase-first tokenization for free-form addresses.
///
/// Emission order:
/// 1. known compound phrases present in the text,
/// 2. every 3-word window,
/// 3. adjacent pairs not already covered by an emitted compound,
/// 4. single words: location codes, then words longer than two
///    characters, then whatever is left.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationAwareTokenizer;

impl Tokenizer for LocationAwareTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let parts = clean_parts(text);
        if parts.is_empty() {
            return Vec::new();
        }
        let lowered: Vec<String> = parts.iter().map(|p| p.to_lowercase()).collect();
        let padded = format!(" {} ", lowered.join(" "));

        let mut tokens = Vec::new();

        let compounds: Vec<&str> = COMPOUNDS
            .iter()
            .copied()
            .filter(|c| padded.contains(&format!(" {c} ")))
            .collect();
        tokens.extend(compounds.iter().map(|c| c.to_string()));

        tokens.extend(parts.windows(3).map(|w| w.join(" ")));

        for (w, lw) in parts.windows(2).zip(lowered.windows(2)) {
            let pair = format!(" {} {} ", lw[0], lw[1]);
            if compounds.iter().any(|c| format!(" {c} ").contains(&pair)) {
                continue;
            }
            tokens.push(format!("{} {}", w[0], w[1]));
        }

        let mut emitted = vec![false; parts.len()];
        let passes: [&dyn Fn(&str) -> bool; 2] = [
            &|w: &str| LOCATION_CODES.contains(w),
            &|w: &str| w.chars().count() > 2,
        ];
        for accept in passes {
            for (i, word) in lowered.iter().enumerate() {
                if !emitted[i] && accept(word.as_str()) {
                    emitted[i] = true;
                    tokens.push(parts[i].clone());
                }
            }
        }
        for (i, part) in parts.iter().enumerate() {
            if !emitted[i] {
                tokens.push(part.clone());
            }
        }

        tokens
    }
}
