//! Error handling with geoparse-core
//!
//! Queries never fail because nothing matched; only bad input is an error.

use geoparse_core::prelude::*;

fn main() -> Result<()> {
    println!("=== geoparse: error handling ===\n");

    // Example 1: a missing dataset is NotFound
    println!("--- Example 1: Loading a dataset that does not exist ---");
    match Resolver::<StandardBackend>::new(
        JsonFile::new("does-not-exist.json.gz"),
        ResolverConfig::default(),
    ) {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(GeoError::NotFound(msg)) => println!("  not found: {msg}"),
        Err(e) => return Err(e),
    }
    println!();

    let db: GeoDb<StandardBackend> = GeoDb::from_reader(
        r#"[{ "name": "United Kingdom", "iso2": "GB", "iso3": "GBR",
              "states": [{ "name": "Scotland", "state_code": "SCT",
                           "cities": [{ "name": "Glasgow",
                                        "latitude": "55.86424", "longitude": "-4.25180" }] }] }]"#
            .as_bytes(),
    )?;
    let resolver: Resolver<StandardBackend> = Resolver::new(db, ResolverConfig::default())?;

    // Example 2: blank input is InvalidArgument, too-short and unknown input is empty
    println!("--- Example 2: Search input edge cases ---");
    for text in ["", "   ", "A", "Atlantis"] {
        match resolver.search(text) {
            Ok(hits) => println!("  {text:?}: {} result(s)", hits.len()),
            Err(e) if e.is_invalid_argument() => println!("  {text:?}: rejected ({e})"),
            Err(e) => return Err(e),
        }
    }
    println!();

    // Example 3: country codes must have two or three letters
    println!("--- Example 3: Country codes ---");
    for code in ["GB", "gbr", "ZZ", "G", "GBRX"] {
        match resolver.gazetteer().country_by_code(code) {
            Ok(Some(c)) => println!("  {code:?}: {}", c.name()),
            Ok(None) => println!("  {code:?}: no such country"),
            Err(e) => println!("  {code:?}: {e}"),
        }
    }
    println!();

    // Example 4: coordinates are validated
    println!("--- Example 4: Nearest city with bad coordinates ---");
    for (lat, lon) in [("55.9", "-4.2"), ("95.0", "0.0"), ("north", "west")] {
        match resolver.nearest_city_str(lat, lon) {
            Ok(Some(hit)) => println!("  ({lat}, {lon}): {}", hit.city.name()),
            Ok(None) => println!("  ({lat}, {lon}): no city with coordinates"),
            Err(e) => println!("  ({lat}, {lon}): {e}"),
        }
    }

    Ok(())
}
