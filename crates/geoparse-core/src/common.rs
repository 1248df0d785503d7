// crates/geoparse-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the gazetteer.
///
/// Returned by [`Gazetteer::stats`](crate::Gazetteer::stats); the counts
/// reflect the tree after any ISO2 filtering applied at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
}
