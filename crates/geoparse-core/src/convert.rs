// crates/geoparse-core/src/convert.rs
use crate::error::{GeoError, Result};
use crate::model::{City, Coordinates, Country, GeoDb, State};
use crate::raw::{CityRaw, CountriesRaw, StateRaw};
use crate::traits::GeoBackend;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

/// Parses an optional decimal string, trimming whitespace.
///
/// Returns `None` if the input is absent or not a decimal number.
pub fn parse_opt_decimal(s: &Option<String>) -> Option<Decimal> {
    s.as_ref().and_then(|v| Decimal::from_str(v.trim()).ok())
}

fn coordinates(lat: &Option<String>, lng: &Option<String>) -> Option<Coordinates> {
    Some(Coordinates::new(
        parse_opt_decimal(lat)?,
        parse_opt_decimal(lng)?,
    ))
}

/// Converts the raw dataset into the nested [`GeoDb`] tree.
///
/// - Coordinates are parsed once into [`Decimal`] and mirrored into the
///   backend float type.
/// - Missing ids are assigned densely in dataset order; countries start at 1.
/// - Explicit ids must fit their width (`u16` countries, `u32` states and
///   cities), otherwise the dataset is rejected with [`GeoError::InvalidData`].
///
/// Denormalized parent links are left empty; the gazetteer build fills them.
pub fn from_raw<B: GeoBackend>(raw: CountriesRaw) -> Result<GeoDb<B>> {
    let mut countries = Vec::with_capacity(raw.len());
    let mut next_state_id: u32 = 1;
    let mut next_city_id: u32 = 1;

    for (pos, c_raw) in raw.into_iter().enumerate() {
        let id = match c_raw.id {
            Some(id) => u16::try_from(id).map_err(|_| {
                GeoError::InvalidData(format!("country id {id} out of range ({})", c_raw.name))
            })?,
            None => u16::try_from(pos + 1)
                .map_err(|_| GeoError::InvalidData("too many countries".into()))?,
        };

        let mut states = Vec::with_capacity(c_raw.states.len());
        for s_raw in c_raw.states {
            states.push(convert_state(s_raw, &mut next_state_id, &mut next_city_id)?);
        }

        let translations = c_raw
            .translations
            .into_iter()
            .map(|(k, v)| (k, B::str_from(&v)))
            .collect::<HashMap<_, _>>();

        countries.push(Country {
            id,
            name: B::str_from(&c_raw.name),
            native_name: c_raw.native.as_deref().map(B::str_from),
            iso2: B::str_from(&c_raw.iso2),
            iso3: c_raw.iso3.as_deref().map(B::str_from),
            coordinates: coordinates(&c_raw.latitude, &c_raw.longitude),
            translations,
            states,
        });
    }

    Ok(GeoDb::new(countries))
}

fn convert_state<B: GeoBackend>(
    s_raw: StateRaw,
    next_state_id: &mut u32,
    next_city_id: &mut u32,
) -> Result<State<B>> {
    let id = assign_id(s_raw.id, next_state_id, "state", &s_raw.name)?;

    let mut cities = Vec::with_capacity(s_raw.cities.len());
    for city_raw in s_raw.cities {
        cities.push(convert_city(city_raw, next_city_id)?);
    }

    Ok(State {
        id,
        name: B::str_from(&s_raw.name),
        code: s_raw
            .state_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(B::str_from),
        coordinates: coordinates(&s_raw.latitude, &s_raw.longitude),
        cities,
        country: None,
    })
}

fn convert_city<B: GeoBackend>(city_raw: CityRaw, next_city_id: &mut u32) -> Result<City<B>> {
    let id = assign_id(city_raw.id, next_city_id, "city", &city_raw.name)?;
    let coordinates = coordinates(&city_raw.latitude, &city_raw.longitude);
    let floats = coordinates.and_then(|c| c.to_f64());

    Ok(City {
        id,
        name: B::str_from(&city_raw.name),
        coordinates,
        lat: floats.map(|(lat, _)| B::float_from(lat)),
        lng: floats.map(|(_, lng)| B::float_from(lng)),
        state: None,
        country: None,
    })
}

fn assign_id(raw: Option<i64>, next: &mut u32, kind: &str, name: &str) -> Result<u32> {
    let id = match raw {
        Some(id) => u32::try_from(id)
            .map_err(|_| GeoError::InvalidData(format!("{kind} id {id} out of range ({name})")))?,
        None => *next,
    };
    *next = (*next).max(id.saturating_add(1));
    Ok(id)
}

