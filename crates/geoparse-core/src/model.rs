// crates/geoparse-core/src/model.rs
use crate::traits::{DefaultBackend, GeoBackend};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// # The Nested Model
///
/// **Structure:** `GeoDb` -> `Vec<Country>` -> `Vec<State>` -> `Vec<City>`
///
/// Ownership only flows downwards. Children know their ancestors through
/// copied [`CountryLink`] / [`StateLink`] values which the
/// [`Gazetteer`](crate::Gazetteer) writes exactly once while it indexes the
/// tree.
#[derive(Clone, Debug, Serialize)]
pub struct GeoDb<B: GeoBackend> {
    pub countries: Vec<Country<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultGeoDb = GeoDb<DefaultBackend>;

/// A latitude/longitude pair kept at the dataset's decimal precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Coordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Coordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Float view for distance math. `None` only if a value is out of `f64` range.
    pub fn to_f64(&self) -> Option<(f64, f64)> {
        Some((self.latitude.to_f64()?, self.longitude.to_f64()?))
    }
}

/// Identifying fields of a country, copied onto its states and cities.
#[derive(Clone, Debug, Serialize)]
pub struct CountryLink<B: GeoBackend> {
    pub id: u16,
    pub name: B::Str,
    pub iso2: B::Str,
    pub iso3: Option<B::Str>,
    pub coordinates: Option<Coordinates>,
}

/// Identifying fields of a state, copied onto its cities.
#[derive(Clone, Debug, Serialize)]
pub struct StateLink<B: GeoBackend> {
    pub id: u32,
    pub name: B::Str,
    pub code: Option<B::Str>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Country<B: GeoBackend> {
    pub id: u16,
    pub name: B::Str,
    pub native_name: Option<B::Str>,
    pub iso2: B::Str,
    pub iso3: Option<B::Str>,
    pub coordinates: Option<Coordinates>,

    /// Language code -> localized name, e.g. `"de" -> "Vereinigtes Königreich"`.
    pub translations: HashMap<String, B::Str>,

    pub states: Vec<State<B>>,
}

#[derive(Clone, Debug, Serialize)]
pub struct State<B: GeoBackend> {
    pub id: u32,
    pub name: B::Str,
    pub code: Option<B::Str>, // e.g. "CA"
    pub coordinates: Option<Coordinates>,
    pub cities: Vec<City<B>>,

    /// Set by the gazetteer build, `None` only on a tree that was never indexed.
    pub country: Option<CountryLink<B>>,
}

#[derive(Clone, Debug, Serialize)]
pub struct City<B: GeoBackend> {
    pub id: u32,
    pub name: B::Str,
    pub coordinates: Option<Coordinates>,
    pub lat: Option<B::Float>,
    pub lng: Option<B::Float>,

    pub state: Option<StateLink<B>>,
    pub country: Option<CountryLink<B>>,
}

impl<B: GeoBackend> GeoDb<B> {
    pub fn new(countries: Vec<Country<B>>) -> Self {
        Self { countries }
    }

    /// All countries in dataset order.
    pub fn countries(&self) -> &[Country<B>] {
        &self.countries
    }

    /// Iterate over all cities together with their state and country.
    pub fn iter_cities(&self) -> impl Iterator<Item = (&City<B>, &State<B>, &Country<B>)> {
        self.countries.iter().flat_map(|country| {
            country
                .states
                .iter()
                .flat_map(move |state| state.cities.iter().map(move |city| (city, state, country)))
        })
    }

    /// Keep only the countries whose ISO2 code is listed (case-insensitive).
    pub fn retain_iso2(&mut self, iso2: &[&str]) {
        self.countries
            .retain(|c| iso2.iter().any(|code| c.iso2().eq_ignore_ascii_case(code)));
    }
}

impl<B: GeoBackend> Country<B> {
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Country display name.
    ///
    /// Always non-empty.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// ISO 3166-1 alpha-2 country code (e.g. "US", "DE").
    pub fn iso2(&self) -> &str {
        self.iso2.as_ref()
    }

    /// ISO 3166-1 alpha-3 code if available, or an empty string otherwise.
    pub fn iso3(&self) -> &str {
        self.iso3.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    pub fn native_name(&self) -> Option<&str> {
        self.native_name.as_ref().map(|s| s.as_ref())
    }

    /// Read-only slice of states/regions belonging to this country.
    pub fn states(&self) -> &[State<B>] {
        &self.states
    }

    pub(crate) fn link(&self) -> CountryLink<B> {
        CountryLink {
            id: self.id,
            name: self.name.clone(),
            iso2: self.iso2.clone(),
            iso3: self.iso3.clone(),
            coordinates: self.coordinates,
        }
    }
}

impl<B: GeoBackend> State<B> {
    pub fn id(&self) -> u32 {
        self.id
    }

    /// State/region display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Short code for the state when available (e.g. "CA") or empty string otherwise.
    pub fn state_code(&self) -> &str {
        self.code.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Read-only slice of cities belonging to this state.
    pub fn cities(&self) -> &[City<B>] {
        &self.cities
    }

    pub fn country_id(&self) -> Option<u16> {
        self.country.as_ref().map(|c| c.id)
    }

    /// Denormalized parent country name, empty before indexing.
    pub fn country_name(&self) -> &str {
        self.country.as_ref().map(|c| c.name.as_ref()).unwrap_or("")
    }

    pub fn country_iso2(&self) -> &str {
        self.country.as_ref().map(|c| c.iso2.as_ref()).unwrap_or("")
    }

    pub fn country_iso3(&self) -> &str {
        self.country
            .as_ref()
            .and_then(|c| c.iso3.as_ref())
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    pub(crate) fn link(&self) -> StateLink<B> {
        StateLink {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            coordinates: self.coordinates,
        }
    }
}

impl<B: GeoBackend> City<B> {
    pub fn id(&self) -> u32 {
        self.id
    }

    /// City display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Float coordinates as `(lat, lng)` when both are known.
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((B::float_to_f64(lat), B::float_to_f64(lng))),
            _ => None,
        }
    }

    pub fn state_id(&self) -> Option<u32> {
        self.state.as_ref().map(|s| s.id)
    }

    pub fn state_name(&self) -> &str {
        self.state.as_ref().map(|s| s.name.as_ref()).unwrap_or("")
    }

    pub fn state_code(&self) -> &str {
        self.state
            .as_ref()
            .and_then(|s| s.code.as_ref())
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    pub fn country_id(&self) -> Option<u16> {
        self.country.as_ref().map(|c| c.id)
    }

    pub fn country_name(&self) -> &str {
        self.country.as_ref().map(|c| c.name.as_ref()).unwrap_or("")
    }

    pub fn country_iso2(&self) -> &str {
        self.country.as_ref().map(|c| c.iso2.as_ref()).unwrap_or("")
    }

    pub fn country_iso3(&self) -> &str {
        self.country
            .as_ref()
            .and_then(|c| c.iso3.as_ref())
            .map(|s| s.as_ref())
            .unwrap_or("")
    }
}
