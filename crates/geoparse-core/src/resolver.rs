// crates/geoparse-core/src/resolver.rs

//! # Resolver
//!
//! Turns free text into at most a handful of [`SearchResult`]s.
//!
//! 1. **Direct match**: the whole normalized text is tried as a key, in a
//!    fixed order (country name, ISO3, ISO2 + state code, state name, city
//!    name). The first stage that hits answers the query.
//! 2. **Tokenized match**: the text is tokenized; an *anchor* country is
//!    picked from the tokens, then the first token naming a state and the
//!    first token naming a city each vote for their entities (and parents),
//!    restricted to the anchor country when there is one.
//! 3. **Aggregation**: the best-voted country, state and city are combined
//!    into the richest record available. A tied state prefers the chosen
//!    country, a tied city the chosen state; remaining ties go to the
//!    candidate voted for first.

use crate::alias::AliasTables;
use crate::error::Result;
use crate::index::{CityRef, CountryRef, Gazetteer, StateRef};
use crate::nearest::NearestCity;
use crate::result::SearchResult;
use crate::text::Normalizer;
use crate::tokenizer::{Tokenizer, TokenizerKind};
use crate::traits::{DatasetProvider, GeoBackend};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Everything a [`Resolver`] is configured with, fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub tokenizer: TokenizerKind,
    pub aliases: AliasTables,
    /// Transliterate names and queries to ASCII before matching.
    pub fold_unicode: bool,
    /// Let a two-letter ISO2 code anchor the country when no country name
    /// or ISO3 token is present. Off by default: ordinary two-letter words
    /// ("is", "in", "me") are ISO2 codes too.
    pub iso2_anchor: bool,
}

/// Free-text place resolver over an immutable [`Gazetteer`].
///
/// `Resolver` is `Send + Sync`; share it behind an `Arc` and call
/// [`Resolver::search`] from as many threads as needed.
#[derive(Debug)]
pub struct Resolver<B: GeoBackend> {
    gazetteer: Gazetteer<B>,
    tokenizer: Box<dyn Tokenizer>,
    iso2_anchor: bool,
}

impl<B: GeoBackend> Resolver<B> {
    /// Loads the tree from `provider`, builds the index, applies the alias
    /// tables and selects the tokenizer.
    pub fn new<P: DatasetProvider<B>>(provider: P, config: ResolverConfig) -> Result<Self> {
        let db = provider.provide()?;
        let mut gazetteer = Gazetteer::build(db, Normalizer::new(config.fold_unicode))?;
        config.aliases.apply(&mut gazetteer);
        let mut resolver = Self::with_tokenizer(gazetteer, config.tokenizer.build());
        resolver.iso2_anchor = config.iso2_anchor;
        Ok(resolver)
    }

    /// Uses an already built gazetteer and any tokenizer implementation.
    pub fn with_tokenizer(gazetteer: Gazetteer<B>, tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            gazetteer,
            tokenizer,
            iso2_anchor: false,
        }
    }

    pub fn gazetteer(&self) -> &Gazetteer<B> {
        &self.gazetteer
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// Resolves `text` to places.
    ///
    /// - `Err(InvalidArgument)` for empty or whitespace-only text.
    /// - Empty vector when the normalized text is shorter than two characters
    ///   or nothing matches.
    /// - A direct hit on a two-letter code returns the country and every
    ///   state with that code (`"CA"` -> Canada and California); a direct
    ///   hit on a state or city name returns every entity sharing it.
    /// - Otherwise at most one result.
    pub fn search(&self, text: &str) -> Result<Vec<SearchResult>> {
        let normalized = self.gazetteer.normalizer().normalize(text)?;
        if normalized.chars().count() < 2 {
            return Ok(Vec::new());
        }

        if let Some(direct) = self.direct_match(&normalized) {
            debug!(query = %normalized, results = direct.len(), "direct match");
            return Ok(direct);
        }

        Ok(self.tokenized_match(&normalized).into_iter().collect())
    }

    /// Nearest city to a point; see [`Gazetteer::nearest_city`].
    pub fn nearest_city(&self, lat: f64, lon: f64) -> Result<Option<NearestCity<'_, B>>> {
        self.gazetteer.nearest_city(lat, lon)
    }

    pub fn nearest_city_decimal(
        &self,
        lat: Decimal,
        lon: Decimal,
    ) -> Result<Option<NearestCity<'_, B>>> {
        self.gazetteer.nearest_city_decimal(lat, lon)
    }

    pub fn nearest_city_str(&self, lat: &str, lon: &str) -> Result<Option<NearestCity<'_, B>>> {
        self.gazetteer.nearest_city_str(lat, lon)
    }

    // -----------------------------------------------------------------------
    // Stage 1: direct match
    // -----------------------------------------------------------------------

    fn direct_match(&self, key: &str) -> Option<Vec<SearchResult>> {
        let g = &self.gazetteer;

        if let Some(c) = g.country_by_name.get(key) {
            return Some(vec![self.country_result(*c)]);
        }

        let len = key.chars().count();
        if len == 3 {
            if let Some(c) = g.country_by_iso3.get(key) {
                return Some(vec![self.country_result(*c)]);
            }
        }

        if len == 2 {
            let mut out: Vec<SearchResult> = g
                .country_by_iso2
                .get(key)
                .map(|c| self.country_result(*c))
                .into_iter()
                .collect();
            if let Some(states) = g.states_by_code.get(key) {
                out.extend(states.iter().map(|s| self.state_result(*s)));
            }
            if !out.is_empty() {
                return Some(out);
            }
        }

        if let Some(states) = g.states_by_name.get(key) {
            return Some(states.iter().map(|s| self.state_result(*s)).collect());
        }

        if let Some(cities) = g.cities_by_name.get(key) {
            return Some(cities.iter().map(|c| self.city_result(*c)).collect());
        }

        None
    }

    // -----------------------------------------------------------------------
    // Stage 2: tokenized match
    // -----------------------------------------------------------------------

    fn tokenized_match(&self, normalized: &str) -> Option<SearchResult> {
        let mut tokens = self.tokenizer.tokenize(normalized);
        let mut countries: Tally<CountryRef> = Tally::default();
        let mut states: Tally<StateRef> = Tally::default();
        let mut cities: Tally<CityRef> = Tally::default();

        let anchor = self.take_anchor(&mut tokens);
        if let Some(a) = anchor {
            countries.hit(a);
        }
        debug!(
            query = %normalized,
            tokens = ?tokens,
            anchor = anchor.map(|a| self.gazetteer.country(a).name()),
            "tokenized match"
        );

        let anchor_name = anchor.map(|a| self.gazetteer.country(a).name());
        let in_anchor = |country_name: &str| anchor_name.map_or(true, |n| n == country_name);

        let state_hit: Vec<StateRef> = self.first_hit(&tokens, |key| {
            let g = &self.gazetteer;
            let by_name = g.states_by_name.get(key).into_iter().flatten();
            let by_code = g.states_by_code.get(key).into_iter().flatten();
            by_name
                .chain(by_code)
                .copied()
                .filter(|r| in_anchor(g.state(*r).country_name()))
                .collect()
        });
        for r in state_hit {
            states.hit(r);
            countries.hit(r.country_ref());
        }

        let city_hit: Vec<CityRef> = self.first_hit(&tokens, |key| {
            let g = &self.gazetteer;
            g.cities_by_name
                .get(key)
                .into_iter()
                .flatten()
                .copied()
                .filter(|r| in_anchor(g.city(*r).country_name()))
                .collect()
        });
        for r in city_hit {
            cities.hit(r);
            states.hit(r.state_ref());
            countries.hit(r.country_ref());
        }

        let country = countries.top();
        let state = states.top_preferring(|s| Some(s.country_ref()) == country);
        let city = cities.top_preferring(|c| match state {
            Some(s) => c.state_ref() == s,
            None => Some(c.country_ref()) == country,
        });
        self.compose(country, state, city)
    }

    /// Removes and returns the anchor country's token.
    ///
    /// The first token that is a country name (or alias) or an ISO3 code.
    /// With `iso2_anchor` set, falls back to the first two-letter token that
    /// is an ISO2 code and not also some state's code, so `"US"` anchors but
    /// the `"CA"` of `"Santa Clara, CA"` stays a state.
    fn take_anchor(&self, tokens: &mut Vec<String>) -> Option<CountryRef> {
        let g = &self.gazetteer;
        let keys: Vec<Option<String>> = tokens.iter().map(|t| self.key(t)).collect();

        let by_name_or_iso3 = keys.iter().enumerate().find_map(|(i, k)| {
            let k = k.as_deref()?;
            g.country_by_name
                .get(k)
                .or_else(|| g.country_by_iso3.get(k))
                .map(|c| (i, *c))
        });
        let by_iso2 = || {
            if !self.iso2_anchor {
                return None;
            }
            keys.iter().enumerate().find_map(|(i, k)| {
                let k = k.as_deref()?;
                if k.chars().count() != 2 || g.states_by_code.contains_key(k) {
                    return None;
                }
                g.country_by_iso2.get(k).map(|c| (i, *c))
            })
        };

        let (i, country) = by_name_or_iso3.or_else(by_iso2)?;
        tokens.remove(i);
        Some(country)
    }

    /// Candidates of the first token for which `lookup` is non-empty.
    fn first_hit<R>(&self, tokens: &[String], lookup: impl Fn(&str) -> Vec<R>) -> Vec<R> {
        tokens
            .iter()
            .filter_map(|t| self.key(t))
            .map(|k| lookup(k.as_str()))
            .find(|hits| !hits.is_empty())
            .unwrap_or_default()
    }

    fn key(&self, token: &str) -> Option<String> {
        self.gazetteer.normalizer().key(token)
    }

    // -----------------------------------------------------------------------
    // Stage 3: aggregation
    // -----------------------------------------------------------------------

    fn compose(
        &self,
        country: Option<CountryRef>,
        state: Option<StateRef>,
        city: Option<CityRef>,
    ) -> Option<SearchResult> {
        let g = &self.gazetteer;
        match (country, state, city) {
            (None, None, None) => None,
            (None, None, Some(city)) => Some(SearchResult::city(g.city(city))),
            (None, Some(state), _) => Some(SearchResult::state(g.state(state))),
            (Some(country), state, city) => Some(SearchResult::build(
                g.country(country),
                state.map(|s| g.state(s)),
                city.map(|c| g.city(c)),
            )),
        }
    }

    fn country_result(&self, r: CountryRef) -> SearchResult {
        SearchResult::build(self.gazetteer.country(r), None, None)
    }

    fn state_result(&self, r: StateRef) -> SearchResult {
        let g = &self.gazetteer;
        SearchResult::build(g.country(r.country_ref()), Some(g.state(r)), None)
    }

    fn city_result(&self, r: CityRef) -> SearchResult {
        let g = &self.gazetteer;
        SearchResult::build(
            g.country(r.country_ref()),
            Some(g.state(r.state_ref())),
            Some(g.city(r)),
        )
    }
}

/// Vote counter that remembers first-seen order.
///
/// [`Tally::top`] returns the entry with the most votes; among equals the
/// one voted for first wins.
#[derive(Debug)]
struct Tally<K> {
    slots: HashMap<K, usize>,
    votes: Vec<(K, u32)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            votes: Vec::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> Tally<K> {
    fn hit(&mut self, key: K) {
        let slot = *self.slots.entry(key).or_insert_with(|| {
            self.votes.push((key, 0));
            self.votes.len() - 1
        });
        self.votes[slot].1 += 1;
    }

    fn top(&self) -> Option<K> {
        self.top_preferring(|_| false)
    }

    /// Like [`Tally::top`], but a tie goes to the first `preferred` entry
    /// before falling back to first-seen order.
    fn top_preferring(&self, preferred: impl Fn(&K) -> bool) -> Option<K> {
        let mut best: Option<(K, u32, bool)> = None;
        for &(k, n) in &self.votes {
            let p = preferred(&k);
            let better = match best {
                None => true,
                Some((_, b, bp)) => n > b || (n == b && p && !bp),
            };
            if better {
                best = Some((k, n, p));
            }
        }
        best.map(|(k, _, _)| k)
    }
}

#[cfg(test)]
mod tests {
    use super::Tally;

    #[test]
    fn tally_prefers_most_votes_then_first_seen() {
        let mut t: Tally<u8> = Tally::default();
        assert_eq!(t.top(), None);
        t.hit(3);
        t.hit(1);
        t.hit(1);
        t.hit(2);
        t.hit(2);
        assert_eq!(t.top(), Some(1));
        t.hit(2);
        assert_eq!(t.top(), Some(2));
    }

    #[test]
    fn tally_tie_goes_to_preferred_entry() {
        let mut t: Tally<u8> = Tally::default();
        t.hit(5);
        t.hit(7);
        t.hit(9);
        assert_eq!(t.top_preferring(|k| *k == 7), Some(7));
        assert_eq!(t.top_preferring(|_| false), Some(5));
        t.hit(5);
        assert_eq!(t.top_preferring(|k| *k == 7), Some(5));
    }
}
