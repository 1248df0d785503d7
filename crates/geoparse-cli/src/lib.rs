//! geoparse-cli
//! ============
//!
//! Command-line interface for the `geoparse-core` place resolver.
//!
//! This crate primarily provides a binary (`geoparse-cli`). The small
//! library target only exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! geoparse-cli --help
//! geoparse-cli -i countries+states+cities.json.gz search "Glasgow Scotland"
//! geoparse-cli nearest 51.5074 -0.1278
//! geoparse-cli --tokenizer location-aware tokenize "new york ny usa"
//! ```
//!
//! For programmatic access use [`geoparse-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
