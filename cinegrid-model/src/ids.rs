//! Strongly typed identifiers for remote catalog entities.

use serde::{Deserialize, Serialize};

/// Strongly typed ID for movies, wrapping the remote catalog's numeric id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl MovieId {
    /// Raw numeric value as used in API paths.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MovieId {
    fn from(raw: u64) -> Self {
        MovieId(raw)
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
