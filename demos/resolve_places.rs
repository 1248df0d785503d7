//! Resolve a handful of free-text places and a coordinate pair.
//!
//! Pass the dataset path as the first argument
//! (default: countries+states+cities.json.gz):
//!
//! ```text
//! cargo run --example resolve_places -- path/to/countries+states+cities.json.gz
//! ```

use geoparse_core::prelude::*;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "countries+states+cities.json.gz".to_string());

    println!("=== geoparse: resolving places ===\n");

    let resolver: Resolver<StandardBackend> = Resolver::new(
        JsonFile::new(&path),
        ResolverConfig {
            tokenizer: TokenizerKind::LocationAware,
            ..ResolverConfig::default()
        },
    )?;
    let stats = resolver.gazetteer().stats();
    println!(
        "Loaded {} countries, {} states, {} cities from {path}\n",
        stats.countries, stats.states, stats.cities
    );

    for text in [
        "San Francisco, CA, USA",
        "Glasgow Scotland",
        "GB, Glasgow",
        "GBR",
        "CA",
        "new york ny usa",
    ] {
        let results = resolver.search(text)?;
        println!("{text:?}");
        if results.is_empty() {
            println!("  (no match)");
        }
        for r in &results {
            let kind = match r {
                SearchResult::Country { .. } => "country",
                SearchResult::State { .. } => "state",
                SearchResult::City { .. } => "city",
            };
            println!("  {kind:<8} {}", r.display_name());
        }
    }

    println!("\n--- Nearest city ---");
    if let Some(hit) = resolver.nearest_city_str("30.4380", "-84.2807")? {
        println!(
            "  {}, {} ({:.2} km away)",
            hit.city.name(),
            hit.city.country_name(),
            hit.distance_km
        );
    }

    Ok(())
}
