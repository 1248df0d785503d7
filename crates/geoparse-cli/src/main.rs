//! geoparse-cli: command-line front end for geoparse-core
//!
//! Usage examples
//! --------------
//!
//! - Resolve a place
//!   $ geoparse-cli search "San Francisco, CA, USA"
//!   $ geoparse-cli --tokenizer location-aware search "new york ny usa" --json
//!
//! - Nearest city to a coordinate pair
//!   $ geoparse-cli nearest 30.4380 -84.2807
//!
//! - Country by code, dataset stats, tokenizer output
//!   $ geoparse-cli country gbr
//!   $ geoparse-cli --filter=GB,US stats
//!   $ geoparse-cli --tokenizer prefix tokenize "san jose costa rica"
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geoparse_core::{AliasTables, JsonFile, Resolver, ResolverConfig, StandardBackend};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATASET: &str = "countries+states+cities.json.gz";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    debug!(?args, "parsed arguments");

    // Tokenize needs no dataset
    if let Commands::Tokenize { text } = &args.command {
        for token in args.tokenizer.build().tokenize(text) {
            println!("{token}");
        }
        return Ok(());
    }

    let input_path = args.input.as_deref().unwrap_or(DEFAULT_DATASET);
    let mut dataset = JsonFile::new(input_path);
    if let Some(filter) = &args.filter {
        dataset = dataset.with_filter(
            filter
                .split(',')
                .map(|x| x.trim())
                .filter(|x| !x.is_empty()),
        );
    }

    let aliases = match &args.aliases {
        Some(path) => AliasTables::load_from_path(path)
            .with_context(|| format!("failed to load alias tables from {path}"))?,
        None => AliasTables::default(),
    };
    let config = ResolverConfig {
        tokenizer: args.tokenizer,
        aliases,
        fold_unicode: args.fold_unicode,
        iso2_anchor: args.iso2_anchor,
    };
    let dataset_path = dataset.path().display().to_string();

    let resolver: Resolver<StandardBackend> = Resolver::new(dataset, config)
        .with_context(|| format!("failed to load dataset {dataset_path}"))?;

    match args.command {
        Commands::Search { text, json } => {
            let results = resolver.search(&text)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No match for: {text}");
            } else {
                for r in &results {
                    println!("{}", r.display_name());
                }
            }
        }

        Commands::Nearest { lat, lon } => match resolver.nearest_city_str(&lat, &lon)? {
            Some(hit) => {
                let city = hit.city;
                println!(
                    "{}, {}, {} ({:.1} km)",
                    city.name(),
                    city.state_name(),
                    city.country_name(),
                    hit.distance_km
                );
            }
            None => eprintln!("No city with coordinates in the dataset"),
        },

        Commands::Country { code } => match resolver.gazetteer().country_by_code(&code)? {
            Some(c) => {
                println!("Country: {}", c.name());
                println!("ISO2: {}", c.iso2());
                println!("ISO3: {}", c.iso3());
                if let Some(native) = c.native_name() {
                    println!("Native name: {native}");
                }
                println!("States: {}", c.states().len());
            }
            None => eprintln!("No country found for: {code}"),
        },

        Commands::Stats => {
            let stats = resolver.gazetteer().stats();
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  States/Regions: {}", stats.states);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Tokenize { .. } => unreachable!("handled before loading"),
    }

    Ok(())
}
