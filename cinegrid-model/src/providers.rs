//! Watch-provider availability records, keyed by country code upstream.

use serde::{Deserialize, Serialize};

/// A single streaming/rental provider entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchProvider {
    pub provider_id: u64,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub display_priority: u32,
}

/// Provider availability for one country.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountryProviders {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Vec<WatchProvider>,
    #[serde(default)]
    pub rent: Vec<WatchProvider>,
    #[serde(default)]
    pub buy: Vec<WatchProvider>,
}

impl CountryProviders {
    /// True when no acquisition option exists for this country.
    pub fn is_empty(&self) -> bool {
        self.flatrate.is_empty() && self.rent.is_empty() && self.buy.is_empty()
    }
}
