// crates/geoparse-core/src/result.rs
use crate::model::{City, Coordinates, Country, CountryLink, State, StateLink};
use crate::traits::GeoBackend;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRecord {
    pub id: u16,
    pub name: String,
    pub iso2: String,
    pub iso3: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRecord {
    pub id: u32,
    pub name: String,
    pub code: Option<String>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRecord {
    pub id: u32,
    pub name: String,
    pub coordinates: Option<Coordinates>,
}

/// One resolved place. Owned, independent of the gazetteer it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchResult {
    Country {
        country: CountryRecord,
    },
    State {
        country: CountryRecord,
        state: StateRecord,
    },
    City {
        country: CountryRecord,
        state: StateRecord,
        city: CityRecord,
    },
}

impl SearchResult {
    /// Builds the richest variant the inputs allow.
    ///
    /// A city without an explicit state falls back to the city's own parent
    /// state, so a `City` result always carries a full hierarchy.
    pub fn build<B: GeoBackend>(
        country: &Country<B>,
        state: Option<&State<B>>,
        city: Option<&City<B>>,
    ) -> Self {
        let country = CountryRecord::from_country(country);
        match (state, city) {
            (state, Some(city)) => SearchResult::City {
                country,
                state: state
                    .map(StateRecord::from_state)
                    .unwrap_or_else(|| StateRecord::from_link(city.state.as_ref())),
                city: CityRecord::from_city(city),
            },
            (Some(state), None) => SearchResult::State {
                country,
                state: StateRecord::from_state(state),
            },
            (None, None) => SearchResult::Country { country },
        }
    }

    pub fn country<B: GeoBackend>(country: &Country<B>) -> Self {
        SearchResult::Country {
            country: CountryRecord::from_country(country),
        }
    }

    /// A state with its denormalized country fields.
    pub fn state<B: GeoBackend>(state: &State<B>) -> Self {
        SearchResult::State {
            country: CountryRecord::from_link(state.country.as_ref()),
            state: StateRecord::from_state(state),
        }
    }

    /// A city with its denormalized state and country fields.
    pub fn city<B: GeoBackend>(city: &City<B>) -> Self {
        SearchResult::City {
            country: CountryRecord::from_link(city.country.as_ref()),
            state: StateRecord::from_link(city.state.as_ref()),
            city: CityRecord::from_city(city),
        }
    }

    pub fn country_record(&self) -> &CountryRecord {
        match self {
            SearchResult::Country { country }
            | SearchResult::State { country, .. }
            | SearchResult::City { country, .. } => country,
        }
    }

    pub fn state_record(&self) -> Option<&StateRecord> {
        match self {
            SearchResult::Country { .. } => None,
            SearchResult::State { state, .. } | SearchResult::City { state, .. } => Some(state),
        }
    }

    pub fn city_record(&self) -> Option<&CityRecord> {
        match self {
            SearchResult::City { city, .. } => Some(city),
            _ => None,
        }
    }

    /// "San Francisco, California, United States"
    pub fn display_name(&self) -> String {
        match self {
            SearchResult::Country { country } => country.name.clone(),
            SearchResult::State { country, state } => format!("{}, {}", state.name, country.name),
            SearchResult::City {
                country,
                state,
                city,
            } => format!("{}, {}, {}", city.name, state.name, country.name),
        }
    }
}

impl CountryRecord {
    fn from_country<B: GeoBackend>(c: &Country<B>) -> Self {
        Self {
            id: c.id(),
            name: c.name().to_owned(),
            iso2: c.iso2().to_owned(),
            iso3: c.iso3().to_owned(),
            coordinates: c.coordinates,
        }
    }

    fn from_link<B: GeoBackend>(link: Option<&CountryLink<B>>) -> Self {
        match link {
            Some(l) => Self {
                id: l.id,
                name: B::str_to_string(&l.name),
                iso2: B::str_to_string(&l.iso2),
                iso3: l.iso3.as_ref().map(B::str_to_string).unwrap_or_default(),
                coordinates: l.coordinates,
            },
            None => Self {
                id: 0,
                name: String::new(),
                iso2: String::new(),
                iso3: String::new(),
                coordinates: None,
            },
        }
    }
}

impl StateRecord {
    fn from_state<B: GeoBackend>(s: &State<B>) -> Self {
        Self {
            id: s.id(),
            name: s.name().to_owned(),
            code: s.code.as_ref().map(B::str_to_string),
            coordinates: s.coordinates,
        }
    }

    fn from_link<B: GeoBackend>(link: Option<&StateLink<B>>) -> Self {
        match link {
            Some(l) => Self {
                id: l.id,
                name: B::str_to_string(&l.name),
                code: l.code.as_ref().map(B::str_to_string),
                coordinates: l.coordinates,
            },
            None => Self {
                id: 0,
                name: String::new(),
                code: None,
                coordinates: None,
            },
        }
    }
}

impl CityRecord {
    fn from_city<B: GeoBackend>(c: &City<B>) -> Self {
        Self {
            id: c.id(),
            name: c.name().to_owned(),
            coordinates: c.coordinates,
        }
    }
}
