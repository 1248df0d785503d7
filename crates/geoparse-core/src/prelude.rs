//! geoparse-core prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::alias::{AliasReport, AliasTables};
pub use crate::error::{GeoError, Result};
#[cfg(feature = "json")]
pub use crate::loader::JsonFile;
pub use crate::model::{City, Country, DefaultGeoDb, GeoDb, State};
pub use crate::resolver::{Resolver, ResolverConfig};
pub use crate::result::SearchResult;
pub use crate::tokenizer::{Tokenizer, TokenizerKind};
pub use crate::traits::{DatasetProvider, DefaultBackend, GeoBackend, StandardBackend};
