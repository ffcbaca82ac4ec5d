//! Core data model definitions shared across cinegrid crates.

pub mod details;
pub mod error;
pub mod filter_types;
pub mod ids;
pub mod movie;
pub mod providers;

// Intentionally curated re-exports for downstream consumers.
pub use details::{GenreInfo, MovieDetails, Video};
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{DiscoverFilter, UiGenre};
pub use ids::MovieId;
pub use movie::{ApiEnvelope, Movie, Page};
pub use providers::{CountryProviders, WatchProvider};
