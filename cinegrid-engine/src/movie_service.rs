//! High-level catalog operations over [`ApiClient`].

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use cinegrid_model::{
    CountryProviders, DiscoverFilter, Movie, MovieDetails, MovieId, Page, Video,
};

use crate::api_client::ApiClient;
use crate::preview::Fetch;

/// Movie endpoints of the catalog proxy: discover listing, per-movie details,
/// provider availability and trailers.
#[derive(Debug, Clone)]
pub struct MovieService {
    api: ApiClient,
}

impl MovieService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// One page of the filtered discover listing.
    pub async fn discover(&self, filter: &DiscoverFilter, page: u32) -> Result<Page<Movie>> {
        self.api
            .get_json(
                "movies/discover",
                &[
                    ("page", page.to_string()),
                    ("genres", filter.genres_param()),
                    ("rate", filter.min_rating().to_string()),
                ],
            )
            .await
    }

    /// Detail payload for the hover preview card.
    pub async fn details(&self, id: MovieId) -> Result<MovieDetails> {
        self.api.get_json(&format!("movies/{id}"), &[]).await
    }

    /// Watch-provider availability, keyed by country code.
    pub async fn providers(&self, id: MovieId) -> Result<HashMap<String, CountryProviders>> {
        self.api
            .get_json(&format!("movies/{id}/providers"), &[])
            .await
    }

    /// Videos attached to the movie; see `cinegrid_model::details::best_trailer`
    /// for picking one.
    pub async fn videos(&self, id: MovieId) -> Result<Vec<Video>> {
        self.api.get_json(&format!("movies/{id}/videos"), &[]).await
    }
}

#[async_trait]
impl Fetch<MovieId, MovieDetails> for MovieService {
    async fn fetch(&self, id: MovieId) -> Result<MovieDetails> {
        self.details(id).await
    }
}
