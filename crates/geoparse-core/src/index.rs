// crates/geoparse-core/src/index.rs

//! # Gazetteer Index
//!
//! Owns the `Country -> State -> City` tree and the lookup maps over it.
//! Map values are positional references into the tree, so the index never
//! holds a pointer back into itself and can be shared freely once built.

use crate::common::DbStats;
use crate::error::{GeoError, Result};
use crate::model::{City, Country, GeoDb, State};
use crate::text::Normalizer;
use crate::traits::GeoBackend;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Position of a country in [`GeoDb::countries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryRef(pub usize);

/// Position of a state inside its country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateRef {
    pub country: usize,
    pub state: usize,
}

/// Position of a city inside its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityRef {
    pub country: usize,
    pub state: usize,
    pub city: usize,
}

impl StateRef {
    pub fn country_ref(&self) -> CountryRef {
        CountryRef(self.country)
    }
}

impl CityRef {
    pub fn country_ref(&self) -> CountryRef {
        CountryRef(self.country)
    }

    pub fn state_ref(&self) -> StateRef {
        StateRef {
            country: self.country,
            state: self.state,
        }
    }
}

/// A built, read-only gazetteer.
///
/// All keys are produced by the gazetteer's own [`Normalizer`]; callers
/// looking up by key must normalize with [`Gazetteer::normalizer`] first.
#[derive(Debug, Clone)]
pub struct Gazetteer<B: GeoBackend> {
    db: GeoDb<B>,
    normalizer: Normalizer,

    // 1:1
    pub(crate) country_by_name: HashMap<String, CountryRef>,
    country_by_id: HashMap<u16, CountryRef>,
    country_by_localized: HashMap<String, CountryRef>,
    pub(crate) country_by_iso2: HashMap<String, CountryRef>,
    pub(crate) country_by_iso3: HashMap<String, CountryRef>,
    state_by_id: HashMap<u32, StateRef>,
    city_by_id: HashMap<u32, CityRef>,

    // 1:n
    pub(crate) states_by_name: HashMap<String, Vec<StateRef>>,
    pub(crate) states_by_code: HashMap<String, Vec<StateRef>>,
    pub(crate) cities_by_name: HashMap<String, Vec<CityRef>>,
}

impl<B: GeoBackend> Gazetteer<B> {
    /// Indexes `db`, writing every state's and city's parent links on the way.
    ///
    /// For each country: country keys, then for each state its country link
    /// and state keys, then for each city its state/country links and city
    /// keys. Nothing is looked up before everything is written.
    ///
    /// Fails with [`GeoError::InvalidData`] on duplicate ids.
    pub fn build(mut db: GeoDb<B>, normalizer: Normalizer) -> Result<Self> {
        let mut g = Gazetteer {
            db: GeoDb::new(Vec::new()),
            normalizer,
            country_by_name: HashMap::new(),
            country_by_id: HashMap::new(),
            country_by_localized: HashMap::new(),
            country_by_iso2: HashMap::new(),
            country_by_iso3: HashMap::new(),
            state_by_id: HashMap::new(),
            city_by_id: HashMap::new(),
            states_by_name: HashMap::new(),
            states_by_code: HashMap::new(),
            cities_by_name: HashMap::new(),
        };

        for (ci, country) in db.countries.iter_mut().enumerate() {
            g.register_country(CountryRef(ci), country)?;
            let country_link = country.link();

            for (si, state) in country.states.iter_mut().enumerate() {
                let sref = StateRef {
                    country: ci,
                    state: si,
                };
                state.country = Some(country_link.clone());
                g.register_state(sref, state)?;
                let state_link = state.link();

                for (xi, city) in state.cities.iter_mut().enumerate() {
                    let cref = CityRef {
                        country: ci,
                        state: si,
                        city: xi,
                    };
                    city.state = Some(state_link.clone());
                    city.country = Some(country_link.clone());
                    g.register_city(cref, city)?;
                }
            }
        }

        g.db = db;
        let stats = g.stats();
        info!(
            countries = stats.countries,
            states = stats.states,
            cities = stats.cities,
            "gazetteer index built"
        );
        Ok(g)
    }

    fn register_country(&mut self, r: CountryRef, country: &Country<B>) -> Result<()> {
        if self.country_by_id.insert(country.id, r).is_some() {
            return Err(GeoError::InvalidData(format!(
                "duplicate country id {}",
                country.id
            )));
        }

        match self.normalizer.key(country.name()) {
            Some(k) => {
                self.country_by_name.insert(k, r);
            }
            None => warn!(id = country.id, "country without a usable name, not indexed by name"),
        }

        if let Some(k) = country.native_name().and_then(|n| self.normalizer.key(n)) {
            self.country_by_localized.insert(k, r);
        }
        for name in country.translations.values() {
            if let Some(k) = self.normalizer.key(name.as_ref()) {
                self.country_by_localized.insert(k, r);
            }
        }

        if let Some(k) = self.normalizer.key(country.iso2()) {
            self.country_by_iso2.insert(k, r);
        }
        if let Some(k) = self.normalizer.key(country.iso3()) {
            self.country_by_iso3.insert(k, r);
        }
        Ok(())
    }

    fn register_state(&mut self, r: StateRef, state: &State<B>) -> Result<()> {
        if self.state_by_id.insert(state.id, r).is_some() {
            return Err(GeoError::InvalidData(format!("duplicate state id {}", state.id)));
        }
        match self.normalizer.key(state.name()) {
            Some(k) => self.states_by_name.entry(k).or_default().push(r),
            None => warn!(id = state.id, "state without a usable name, not indexed by name"),
        }
        if let Some(k) = self.normalizer.key(state.state_code()) {
            self.states_by_code.entry(k).or_default().push(r);
        }
        Ok(())
    }

    fn register_city(&mut self, r: CityRef, city: &City<B>) -> Result<()> {
        if self.city_by_id.insert(city.id, r).is_some() {
            return Err(GeoError::InvalidData(format!("duplicate city id {}", city.id)));
        }
        match self.normalizer.key(city.name()) {
            Some(k) => self.cities_by_name.entry(k).or_default().push(r),
            None => debug!(id = city.id, "city without a usable name, not indexed by name"),
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Tree access
    // -----------------------------------------------------------------------

    pub fn db(&self) -> &GeoDb<B> {
        &self.db
    }

    pub fn normalizer(&self) -> Normalizer {
        self.normalizer
    }

    pub fn country(&self, r: CountryRef) -> &Country<B> {
        &self.db.countries[r.0]
    }

    pub fn state(&self, r: StateRef) -> &State<B> {
        &self.db.countries[r.country].states[r.state]
    }

    pub fn city(&self, r: CityRef) -> &City<B> {
        &self.db.countries[r.country].states[r.state].cities[r.city]
    }

    /// All countries in dataset order.
    pub fn countries(&self) -> &[Country<B>] {
        self.db.countries()
    }

    /// Iterate over all cities together with their state and country.
    pub fn cities(&self) -> impl Iterator<Item = (&City<B>, &State<B>, &Country<B>)> {
        self.db.iter_cities()
    }

    /// Aggregate statistics for the indexed tree.
    pub fn stats(&self) -> DbStats {
        let mut stats = DbStats {
            countries: self.db.countries.len(),
            states: 0,
            cities: 0,
        };
        for country in &self.db.countries {
            stats.states += country.states.len();
            stats.cities += country.states.iter().map(|s| s.cities.len()).sum::<usize>();
        }
        stats
    }

    // -----------------------------------------------------------------------
    // Exact-key lookups
    // -----------------------------------------------------------------------

    pub fn country_by_id(&self, id: u16) -> Option<&Country<B>> {
        self.country_by_id.get(&id).map(|r| self.country(*r))
    }

    pub fn state_by_id(&self, id: u32) -> Option<&State<B>> {
        self.state_by_id.get(&id).map(|r| self.state(*r))
    }

    pub fn city_by_id(&self, id: u32) -> Option<&City<B>> {
        self.city_by_id.get(&id).map(|r| self.city(*r))
    }

    /// Country by canonical name or any name registered as an alias.
    pub fn country_by_name(&self, name: &str) -> Option<&Country<B>> {
        let key = self.normalizer.key(name)?;
        self.country_by_name.get(&key).map(|r| self.country(*r))
    }

    /// Country by native name or any translation.
    pub fn country_by_localized_name(&self, name: &str) -> Option<&Country<B>> {
        let key = self.normalizer.key(name)?;
        self.country_by_localized.get(&key).map(|r| self.country(*r))
    }

    /// Find a country by ISO2 code, case-insensitive (e.g. "DE", "us").
    pub fn country_by_iso2(&self, iso2: &str) -> Result<Option<&Country<B>>> {
        let key = self.code_key(iso2, 2)?;
        Ok(self.country_by_iso2.get(&key).map(|r| self.country(*r)))
    }

    /// Find a country by ISO3 code, case-insensitive (e.g. "DEU", "usa").
    pub fn country_by_iso3(&self, iso3: &str) -> Result<Option<&Country<B>>> {
        let key = self.code_key(iso3, 3)?;
        Ok(self.country_by_iso3.get(&key).map(|r| self.country(*r)))
    }

    /// Find a country by code, dispatching on length: two characters are
    /// ISO2, three are ISO3. Anything else is an [`GeoError::InvalidArgument`].
    pub fn country_by_code(&self, code: &str) -> Result<Option<&Country<B>>> {
        match code.trim().chars().count() {
            2 => self.country_by_iso2(code),
            3 => self.country_by_iso3(code),
            n => Err(GeoError::invalid_argument(format!(
                "country code must have 2 or 3 characters, got {n}: {code:?}"
            ))),
        }
    }

    /// States sharing a normalized name.
    pub fn states_by_name(&self, name: &str) -> Vec<&State<B>> {
        self.normalizer
            .key(name)
            .and_then(|k| self.states_by_name.get(&k))
            .map(|refs| refs.iter().map(|r| self.state(*r)).collect())
            .unwrap_or_default()
    }

    /// Cities sharing a normalized name.
    pub fn cities_by_name(&self, name: &str) -> Vec<&City<B>> {
        self.normalizer
            .key(name)
            .and_then(|k| self.cities_by_name.get(&k))
            .map(|refs| refs.iter().map(|r| self.city(*r)).collect())
            .unwrap_or_default()
    }

    fn code_key(&self, code: &str, len: usize) -> Result<String> {
        let trimmed = code.trim();
        if trimmed.chars().count() != len {
            return Err(GeoError::invalid_argument(format!(
                "expected a {len}-letter code, got {code:?}"
            )));
        }
        self.normalizer.normalize(trimmed)
    }
}
