#![allow(dead_code)]

use geoparse_core::{
    AliasTables, DefaultBackend, GeoDb, Gazetteer, Normalizer, Resolver, ResolverConfig,
    TokenizerKind,
};

/// Small countries+states+cities extract in the upstream dataset layout.
///
/// Two Glasgows (Scotland and Kentucky) and a state code ("CA") that is
/// also another country's ISO2 code.
pub const FIXTURE: &str = r#"[
  {
    "id": 232,
    "name": "United Kingdom",
    "iso2": "GB",
    "iso3": "GBR",
    "native": "United Kingdom",
    "translations": { "de": "Vereinigtes Königreich", "fr": "Royaume-Uni" },
    "latitude": "54.00000000",
    "longitude": "-2.00000000",
    "states": [
      {
        "id": 2335,
        "name": "Scotland",
        "state_code": "SCT",
        "latitude": "56.49067120",
        "longitude": "-4.20264580",
        "cities": [
          { "name": "Glasgow", "latitude": "55.86424000", "longitude": "-4.25180000" }
        ]
      },
      {
        "id": 2336,
        "name": "England",
        "state_code": "ENG",
        "cities": [
          { "name": "London", "latitude": "51.5074", "longitude": "-0.1278" }
        ]
      }
    ]
  },
  {
    "id": 233,
    "name": "United States",
    "iso2": "US",
    "iso3": "USA",
    "native": "United States",
    "translations": { "de": "Vereinigte Staaten" },
    "latitude": "38.00000000",
    "longitude": "-97.00000000",
    "states": [
      {
        "id": 1416,
        "name": "California",
        "state_code": "CA",
        "latitude": "36.77826100",
        "longitude": "-119.41793240",
        "cities": [
          { "name": "San Francisco", "latitude": "37.77493000", "longitude": "-122.41942000" },
          { "name": "Los Angeles", "latitude": "34.05223000", "longitude": "-118.24368000" },
          { "name": "Santa Clara", "latitude": "37.35411000", "longitude": "-121.95524000" }
        ]
      },
      {
        "id": 1436,
        "name": "Florida",
        "state_code": "FL",
        "cities": [
          { "name": "Tallahassee", "latitude": "30.43826000", "longitude": "-84.28073000" }
        ]
      },
      {
        "id": 1419,
        "name": "Kentucky",
        "state_code": "KY",
        "cities": [
          { "name": "Glasgow", "latitude": "36.99588000", "longitude": "-85.91192000" }
        ]
      },
      {
        "id": 1452,
        "name": "New York",
        "state_code": "NY",
        "cities": [
          { "name": "New York", "latitude": "40.71427000", "longitude": "-74.00597000" }
        ]
      }
    ]
  },
  {
    "id": 39,
    "name": "Canada",
    "iso2": "CA",
    "iso3": "CAN",
    "native": "Canada",
    "translations": { "fr": "Canada" },
    "states": [
      {
        "id": 866,
        "name": "Ontario",
        "state_code": "ON",
        "cities": [
          { "name": "Toronto", "latitude": "43.70011000", "longitude": "-79.41630000" }
        ]
      },
      {
        "id": 873,
        "name": "Quebec",
        "state_code": "QC",
        "cities": [
          { "name": "Montréal", "latitude": "45.50884000", "longitude": "-73.58781000" },
          { "name": "Nowhere Junction" }
        ]
      }
    ]
  }
]"#;

pub fn fixture_db() -> GeoDb<DefaultBackend> {
    GeoDb::from_reader(FIXTURE.as_bytes()).expect("fixture parses")
}

pub fn gazetteer() -> Gazetteer<DefaultBackend> {
    Gazetteer::build(fixture_db(), Normalizer::default()).expect("fixture indexes")
}

pub fn resolver_with(config: ResolverConfig) -> Resolver<DefaultBackend> {
    Resolver::new(fixture_db(), config).expect("resolver builds")
}

pub fn resolver() -> Resolver<DefaultBackend> {
    resolver_with(ResolverConfig::default())
}

pub fn resolver_with_tokenizer(tokenizer: TokenizerKind) -> Resolver<DefaultBackend> {
    resolver_with(ResolverConfig {
        tokenizer,
        ..ResolverConfig::default()
    })
}

pub fn resolver_without_aliases() -> Resolver<DefaultBackend> {
    resolver_with(ResolverConfig {
        aliases: AliasTables::empty(),
        ..ResolverConfig::default()
    })
}
