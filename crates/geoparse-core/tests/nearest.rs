mod common;

use common::*;
use geoparse_core::{DefaultBackend, GeoDb, Gazetteer, Normalizer};
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn finds_tallahassee() {
    let g = gazetteer();
    let hit = g.nearest_city(30.438, -84.280).unwrap().unwrap();
    assert_eq!(hit.city.name(), "Tallahassee");
    assert!(hit.distance_km < 1.0, "{}", hit.distance_km);
}

#[test]
fn stored_coordinates_give_zero_distance() {
    let g = gazetteer();
    let hit = g.nearest_city_str("51.5074", "-0.1278").unwrap().unwrap();
    assert_eq!(hit.city.name(), "London");
    assert_eq!(hit.distance_km, 0.0);

    let hit = g.nearest_city(55.86424, -4.2518).unwrap().unwrap();
    assert_eq!(hit.city.name(), "Glasgow");
    assert!(hit.distance_km < 1e-6);
}

#[test]
fn decimal_and_string_inputs_agree() {
    let r = resolver();
    let lat = Decimal::from_str("43.7").unwrap();
    let lon = Decimal::from_str("-79.4").unwrap();
    let by_decimal = r.nearest_city_decimal(lat, lon).unwrap().unwrap();
    let by_str = r.nearest_city_str("43.7", "-79.4").unwrap().unwrap();
    assert_eq!(by_decimal.city.name(), "Toronto");
    assert_eq!(by_decimal.city.id(), by_str.city.id());
    assert_eq!(by_decimal.distance_km, by_str.distance_km);
}

#[test]
fn result_carries_parent_fields() {
    let r = resolver();
    let hit = r.nearest_city(37.0, -86.0).unwrap().unwrap();
    assert_eq!(hit.city.name(), "Glasgow");
    assert_eq!(hit.city.state_name(), "Kentucky");
    assert_eq!(hit.city.country_iso3(), "USA");
}

#[test]
fn invalid_coordinates_are_rejected() {
    let g = gazetteer();
    assert!(g.nearest_city(90.5, 0.0).unwrap_err().is_invalid_argument());
    assert!(g.nearest_city(0.0, 181.0).unwrap_err().is_invalid_argument());
    assert!(g.nearest_city(f64::NAN, 0.0).unwrap_err().is_invalid_argument());
    assert!(g.nearest_city_str("abc", "1.0").unwrap_err().is_invalid_argument());
    assert!(g.nearest_city_str("", "1.0").unwrap_err().is_invalid_argument());
}

#[test]
fn no_coordinates_means_no_answer() {
    let json = r#"[{
      "name": "Nowhere", "iso2": "NW",
      "states": [{ "name": "Empty", "cities": [{ "name": "Ghost Town" }] }]
    }]"#;
    let db = GeoDb::<DefaultBackend>::from_reader(json.as_bytes()).unwrap();
    let g = Gazetteer::build(db, Normalizer::default()).unwrap();
    assert!(g.nearest_city(0.0, 0.0).unwrap().is_none());
}
