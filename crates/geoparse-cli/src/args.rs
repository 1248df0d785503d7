use clap::{Parser, Subcommand};
use geoparse_core::TokenizerKind;

/// CLI arguments for geoparse-cli
#[derive(Debug, Parser)]
#[command(
    name = "geoparse",
    version,
    about = "Resolve free-text place names and find nearest cities in a countries/states/cities dataset"
)]
pub struct CliArgs {
    /// Path to the dataset, `.json` or `.json.gz` (default: countries+states+cities.json.gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional comma-separated list of ISO2 country codes to load (e.g. GB,US)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    /// JSON file with alias tables; tables it omits keep their built-in defaults
    #[arg(short = 'a', long = "aliases", global = true)]
    pub aliases: Option<String>,

    /// Tokenizer strategy: default, prefix-aware or location-aware
    #[arg(short = 't', long = "tokenizer", global = true, default_value = "default")]
    pub tokenizer: TokenizerKind,

    /// Transliterate names and queries to ASCII before matching
    #[arg(long = "fold-unicode", global = true)]
    pub fold_unicode: bool,

    /// Let a two-letter ISO2 code (e.g. "US") pick the country when no country name is given
    #[arg(long = "iso2-anchor", global = true)]
    pub iso2_anchor: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve free text to countries, states and cities
    Search {
        /// Text to resolve (e.g. "San Francisco, CA, USA")
        text: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the city closest to a coordinate pair
    Nearest {
        /// Latitude in decimal degrees
        #[arg(allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees
        #[arg(allow_hyphen_values = true)]
        lon: String,
    },

    /// Lookup a country by ISO2 or ISO3 code
    Country {
        /// ISO2 or ISO3 code (e.g. GB, USA)
        code: String,
    },

    /// Show a summary of the loaded dataset
    Stats,

    /// Show the tokens the selected tokenizer produces for some text
    Tokenize {
        text: String,
    },
}
