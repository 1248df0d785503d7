// crates/geoparse-core/src/alias.rs

//! # Alias Expander
//!
//! Curated synonyms layered onto a built [`Gazetteer`]. Each table maps an
//! alias to a canonical key; an alias is only registered when its canonical
//! key already resolves in the base index.

use crate::index::Gazetteer;
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use tracing::{debug, warn};

/// Alias tables, each `alias -> canonical`.
///
/// Missing tables in a deserialized file fall back to the built-in
/// defaults of [`AliasTables::default`]; use `{}` to clear a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasTables {
    /// Alias -> canonical country name.
    pub country_names: BTreeMap<String, String>,
    /// Alias -> canonical ISO2 code.
    pub iso2: BTreeMap<String, String>,
    /// Alias -> canonical ISO3 code.
    pub iso3: BTreeMap<String, String>,
    /// Alias -> canonical state name.
    pub state_names: BTreeMap<String, String>,
    /// Alias -> canonical city name.
    pub city_names: BTreeMap<String, String>,
}

impl Default for AliasTables {
    /// The built-in UK home-nation aliases.
    fn default() -> Self {
        let table = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(a, c)| (a.to_string(), c.to_string()))
                .collect::<BTreeMap<_, _>>()
        };
        Self {
            country_names: table(&[
                ("Scotland", "United Kingdom"),
                ("England", "United Kingdom"),
                ("Northern Ireland", "United Kingdom"),
                ("Wales", "United Kingdom"),
                ("Cymru", "United Kingdom"),
            ]),
            iso2: table(&[("uk", "GB"), ("en", "GB")]),
            iso3: table(&[
                ("eng", "GBR"),
                ("sco", "GBR"),
                ("wal", "GBR"),
                ("cym", "GBR"),
                ("nil", "GBR"),
            ]),
            state_names: BTreeMap::new(),
            city_names: BTreeMap::new(),
        }
    }
}

/// What [`AliasTables::apply`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasReport {
    pub applied: usize,
    /// `(alias, canonical)` pairs whose canonical key was not in the index.
    pub skipped: Vec<(String, String)>,
}

impl AliasTables {
    /// No aliases at all.
    pub fn empty() -> Self {
        Self {
            country_names: BTreeMap::new(),
            iso2: BTreeMap::new(),
            iso3: BTreeMap::new(),
            state_names: BTreeMap::new(),
            city_names: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country_names.is_empty()
            && self.iso2.is_empty()
            && self.iso3.is_empty()
            && self.state_names.is_empty()
            && self.city_names.is_empty()
    }

    /// Reads alias tables from a JSON file.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            crate::GeoError::NotFound(format!("alias file not found at {}: {e}", path.display()))
        })?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    /// Registers every alias whose canonical key exists in `gazetteer`.
    ///
    /// Country-name, ISO2 and ISO3 aliases all land in the country-name map;
    /// state and city aliases extend the state-name and city-name maps.
    /// Unknown canonical keys are skipped with a warning, never an error.
    pub fn apply<B: GeoBackend>(&self, gazetteer: &mut Gazetteer<B>) -> AliasReport {
        let normalizer = gazetteer.normalizer();
        let key = |s: &str| normalizer.key(s);
        let mut report = AliasReport::default();

        for (table, aliases) in [
            ("country name", &self.country_names),
            ("iso2", &self.iso2),
            ("iso3", &self.iso3),
        ] {
            let source = match table {
                "iso2" => &gazetteer.country_by_iso2,
                "iso3" => &gazetteer.country_by_iso3,
                _ => &gazetteer.country_by_name,
            };
            let resolved = resolve(table, aliases, source, &key, &mut report);
            register(&mut gazetteer.country_by_name, resolved, &mut report);
        }

        let resolved = resolve(
            "state name",
            &self.state_names,
            &gazetteer.states_by_name,
            &key,
            &mut report,
        );
        register(&mut gazetteer.states_by_name, resolved, &mut report);

        let resolved = resolve(
            "city name",
            &self.city_names,
            &gazetteer.cities_by_name,
            &key,
            &mut report,
        );
        register(&mut gazetteer.cities_by_name, resolved, &mut report);

        debug!(
            applied = report.applied,
            skipped = report.skipped.len(),
            "alias tables applied"
        );
        report
    }
}

/// Looks up every canonical key in `source`; returns `(alias key, target)`.
fn resolve<V: Clone>(
    table: &str,
    aliases: &BTreeMap<String, String>,
    source: &HashMap<String, V>,
    key: &impl Fn(&str) -> Option<String>,
    report: &mut AliasReport,
) -> Vec<(String, V)> {
    let mut out = Vec::with_capacity(aliases.len());
    for (alias, canonical) in aliases {
        let target = key(canonical.as_str()).and_then(|k| source.get(&k));
        match (key(alias.as_str()), target) {
            (Some(alias_key), Some(target)) => out.push((alias_key, target.clone())),
            _ => {
                warn!(table, alias = %alias, canonical = %canonical, "alias target not found, skipping");
                report.skipped.push((alias.clone(), canonical.clone()));
            }
        }
    }
    out
}

fn register<K: Eq + Hash, V>(map: &mut HashMap<K, V>, entries: Vec<(K, V)>, report: &mut AliasReport) {
    for (k, v) in entries {
        map.insert(k, v);
        report.applied += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_home_nations() {
        let t = AliasTables::default();
        assert_eq!(t.iso2.get("uk").map(String::as_str), Some("GB"));
        assert_eq!(t.iso3.len(), 5);
        assert_eq!(
            t.country_names.get("Cymru").map(String::as_str),
            Some("United Kingdom")
        );
        assert!(t.state_names.is_empty() && t.city_names.is_empty());
    }

    #[test]
    fn empty_is_empty() {
        assert!(AliasTables::empty().is_empty());
        assert!(!AliasTables::default().is_empty());
    }
}
