// crates/geoparse-core/src/lib.rs

//! # geoparse-core
//!
//! Resolves free-text location strings ("San Francisco, CA, USA",
//! "Glasgow Scotland", "GBR") to structured country / state / city records
//! drawn from a countries+states+cities gazetteer, and answers
//! nearest-city queries for a coordinate pair.
//!
//! ```no_run
//! use geoparse_core::prelude::*;
//!
//! # fn main() -> geoparse_core::Result<()> {
//! let resolver: Resolver<DefaultBackend> = Resolver::new(
//!     JsonFile::new("countries+states+cities.json.gz"),
//!     ResolverConfig::default(),
//! )?;
//! for hit in resolver.search("San Francisco, CA, USA")? {
//!     println!("{}", hit.display_name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod alias;
pub mod common;
pub mod convert;
pub mod error;
pub mod index;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod nearest;
pub mod prelude;
// Shared raw input, only used on the way in
#[doc(hidden)]
pub mod raw;
pub mod resolver;
pub mod result;
pub mod text;
pub mod tokenizer;
pub mod traits;

// Re-exports
pub use crate::alias::{AliasReport, AliasTables};
pub use crate::common::DbStats;
pub use crate::error::{GeoError, Result};
pub use crate::index::{CityRef, CountryRef, Gazetteer, StateRef};
#[cfg(feature = "json")]
pub use crate::loader::JsonFile;
pub use crate::model::{
    City, Coordinates, Country, CountryLink, DefaultGeoDb, GeoDb, State, StateLink,
};
pub use crate::nearest::{haversine_km, NearestCity};
pub use crate::resolver::{Resolver, ResolverConfig};
pub use crate::result::{CityRecord, CountryRecord, SearchResult, StateRecord};
pub use crate::text::{fold_key, normalize, Normalizer};
pub use crate::tokenizer::{
    DefaultTokenizer, LocationAwareTokenizer, PrefixAwareTokenizer, Tokenizer, TokenizerKind,
};
pub use crate::traits::{DatasetProvider, DefaultBackend, GeoBackend, StandardBackend};
