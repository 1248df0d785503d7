// crates/geoparse-core/src/traits.rs
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the gazetteer tree.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally without changing the accessors, which always
/// hand out `&str` / `f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static`; a built
/// [`Gazetteer`](crate::Gazetteer) is shared read-only across threads.
pub trait GeoBackend: Clone + Send + Sync + 'static {
    type Str: Clone + Send + Sync + std::fmt::Debug + Serialize + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize;

    /// Convert an `&str` into the backend string representation.
    fn str_from(s: &str) -> Self::Str;
    /// Convert an `f64` into the backend float representation.
    fn float_from(f: f64) -> Self::Float;

    /// Convert backend string to owned Rust `String`.
    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }

    /// Convert backend float to plain `f64`.
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Default backend: plain `String` + `f64`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

/// Convenient alias used in demos and the CLI.
pub type StandardBackend = DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }

    #[inline]
    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// Where the gazetteer tree comes from.
///
/// The resolver never reads files itself; it asks a provider for a fully
/// materialized `Country -> State -> City` tree exactly once, at
/// construction time.
pub trait DatasetProvider<B: GeoBackend> {
    fn provide(self) -> crate::Result<crate::GeoDb<B>>;
}

/// An already materialized tree provides itself.
impl<B: GeoBackend> DatasetProvider<B> for crate::GeoDb<B> {
    fn provide(self) -> crate::Result<crate::GeoDb<B>> {
        Ok(self)
    }
}
