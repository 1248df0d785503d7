mod common;

use common::*;
use geoparse_core::{DbStats, DefaultBackend, GeoDb, GeoError, Gazetteer, Normalizer};

#[test]
fn stats_count_the_whole_tree() {
    let g = gazetteer();
    assert_eq!(
        g.stats(),
        DbStats {
            countries: 3,
            states: 8,
            cities: 11,
        }
    );
}

#[test]
fn gazetteer_exposes_the_indexed_tree() {
    let g = gazetteer();
    let db = g.db();
    assert_eq!(db.countries().len(), 3);
    let first_city = db.iter_cities().next().map(|(city, _, _)| city).unwrap();
    assert_eq!(first_city.name(), "Glasgow");
    assert_eq!(first_city.country_name(), "United Kingdom");
}

#[test]
fn parent_links_are_written_during_build() {
    let g = gazetteer();
    let glasgow_ky = g
        .cities_by_name("glasgow")
        .into_iter()
        .find(|c| c.state_code() == "KY")
        .expect("Kentucky Glasgow");
    assert_eq!(glasgow_ky.state_name(), "Kentucky");
    assert_eq!(glasgow_ky.country_name(), "United States");
    assert_eq!(glasgow_ky.country_iso2(), "US");
    assert_eq!(glasgow_ky.country_iso3(), "USA");
    assert_eq!(glasgow_ky.country_id(), Some(233));
    assert_eq!(glasgow_ky.state_id(), Some(1419));

    for state in g.countries().iter().flat_map(|c| c.states()) {
        assert!(!state.country_name().is_empty(), "{}", state.name());
    }
}

#[test]
fn unindexed_tree_has_empty_parent_fields() {
    let db = fixture_db();
    let state = &db.countries()[0].states()[0];
    assert_eq!(state.country_name(), "");
    assert_eq!(state.country_id(), None);
}

#[test]
fn ids_are_kept_or_assigned_in_order() {
    let g = gazetteer();
    assert_eq!(g.country_by_id(39).map(|c| c.name()), Some("Canada"));
    assert_eq!(g.state_by_id(1436).map(|s| s.name()), Some("Florida"));
    // Cities carry no ids in the fixture: numbered from 1 in dataset order.
    assert_eq!(g.city_by_id(1).map(|c| c.name()), Some("Glasgow"));
    assert_eq!(g.city_by_id(1).map(|c| c.state_name()), Some("Scotland"));
    assert_eq!(g.city_by_id(11).map(|c| c.name()), Some("Nowhere Junction"));
    assert!(g.city_by_id(12).is_none());
}

#[test]
fn country_lookups_are_case_insensitive() {
    let g = gazetteer();
    assert_eq!(g.country_by_iso2("gb").unwrap().map(|c| c.id()), Some(232));
    assert_eq!(g.country_by_iso3("Usa").unwrap().map(|c| c.id()), Some(233));
    assert_eq!(g.country_by_code("can").unwrap().map(|c| c.iso2()), Some("CA"));
    assert_eq!(g.country_by_code(" ca ").unwrap().map(|c| c.iso3()), Some("CAN"));
    assert_eq!(
        g.country_by_name("united states").map(|c| c.iso2()),
        Some("US")
    );
    assert!(g.country_by_iso2("zz").unwrap().is_none());
}

#[test]
fn code_length_is_checked() {
    let g = gazetteer();
    assert!(g.country_by_iso2("GBR").unwrap_err().is_invalid_argument());
    assert!(g.country_by_iso3("GB").unwrap_err().is_invalid_argument());
    assert!(matches!(
        g.country_by_code("G"),
        Err(GeoError::InvalidArgument(_))
    ));
    assert!(g.country_by_code("").is_err());
}

#[test]
fn localized_and_native_names() {
    let g = gazetteer();
    assert_eq!(
        g.country_by_localized_name("Vereinigtes Königreich")
            .map(|c| c.iso2()),
        Some("GB")
    );
    assert_eq!(
        g.country_by_localized_name("vereinigte staaten")
            .map(|c| c.iso2()),
        Some("US")
    );
    assert_eq!(g.country_by_id(233).and_then(|c| c.native_name()), Some("United States"));
}

#[test]
fn one_to_many_lookups() {
    let g = gazetteer();
    assert_eq!(g.cities_by_name("Glasgow").len(), 2);
    assert_eq!(g.states_by_name("ONTARIO").len(), 1);
    assert!(g.states_by_name("atlantis").is_empty());
    assert!(g.cities_by_name("").is_empty());
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"[
      { "id": 1, "name": "Andorra", "iso2": "AD", "iso3": "AND" },
      { "id": 1, "name": "Austria", "iso2": "AT", "iso3": "AUT" }
    ]"#;
    let db = GeoDb::<DefaultBackend>::from_reader(json.as_bytes()).unwrap();
    let err = Gazetteer::build(db, Normalizer::default()).unwrap_err();
    assert!(matches!(err, GeoError::InvalidData(_)), "{err}");
}

#[test]
fn oversized_country_id_is_invalid_data() {
    let json = r#"[{ "id": 70000, "name": "Nowhere", "iso2": "NW" }]"#;
    let err = GeoDb::<DefaultBackend>::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, GeoError::InvalidData(_)), "{err}");
}

#[test]
fn iso2_filter_keeps_listed_countries() {
    let mut db = fixture_db();
    db.retain_iso2(&["gb", "CA"]);
    let g = Gazetteer::build(db, Normalizer::default()).unwrap();
    let codes: Vec<&str> = g.countries().iter().map(|c| c.iso2()).collect();
    assert_eq!(codes, vec!["GB", "CA"]);
    assert!(g.cities_by_name("Tallahassee").is_empty());
}

#[test]
fn iter_cities_walks_dataset_order() {
    let db = fixture_db();
    let first: Vec<(&str, &str, &str)> = db
        .iter_cities()
        .take(3)
        .map(|(city, state, country)| (city.name(), state.name(), country.name()))
        .collect();
    assert_eq!(
        first,
        vec![
            ("Glasgow", "Scotland", "United Kingdom"),
            ("London", "England", "United Kingdom"),
            ("San Francisco", "California", "United States"),
        ]
    );
}
