// crates/geoparse-core/src/raw.rs
//! Raw input structures as they come from the countries+states+cities JSON.
//!
//! NOTE: These types mirror the external dataset and are only used on the
//! way in; [`convert::from_raw`](crate::convert::from_raw) turns them into
//! the [`GeoDb`](crate::GeoDb) tree.
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct CityRaw {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateRaw {
    pub id: Option<i64>,
    pub name: String,
    /// Short state code, e.g. "CA" for California.
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub cities: Vec<CityRaw>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryRaw {
    pub id: Option<i64>,
    pub name: String,
    pub iso2: String,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
    /// translations: { "de": "Andorra", "fr": "Andorre", ... }
    #[serde(default)]
    pub translations: HashMap<String, String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub states: Vec<StateRaw>,
}

pub type CountriesRaw = Vec<CountryRaw>;
