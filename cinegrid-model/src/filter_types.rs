//! Filter state for the discover grid: genre set plus a rating floor.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UiGenre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Mystery,
    Romance,
    ScienceFiction,
    Thriller,
    War,
    Western,
}

impl UiGenre {
    pub fn all() -> &'static [UiGenre] {
        use UiGenre::*;
        &[
            Action,
            Adventure,
            Animation,
            Comedy,
            Crime,
            Documentary,
            Drama,
            Family,
            Fantasy,
            History,
            Horror,
            Music,
            Mystery,
            Romance,
            ScienceFiction,
            Thriller,
            War,
            Western,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiGenre::Action => "Action",
            UiGenre::Adventure => "Adventure",
            UiGenre::Animation => "Animation",
            UiGenre::Comedy => "Comedy",
            UiGenre::Crime => "Crime",
            UiGenre::Documentary => "Documentary",
            UiGenre::Drama => "Drama",
            UiGenre::Family => "Family",
            UiGenre::Fantasy => "Fantasy",
            UiGenre::History => "History",
            UiGenre::Horror => "Horror",
            UiGenre::Music => "Music",
            UiGenre::Mystery => "Mystery",
            UiGenre::Romance => "Romance",
            UiGenre::ScienceFiction => "Science Fiction",
            UiGenre::Thriller => "Thriller",
            UiGenre::War => "War",
            UiGenre::Western => "Western",
        }
    }

    /// The catalog's numeric genre id.
    pub fn tmdb_id(&self) -> u64 {
        match self {
            UiGenre::Action => 28,
            UiGenre::Adventure => 12,
            UiGenre::Animation => 16,
            UiGenre::Comedy => 35,
            UiGenre::Crime => 80,
            UiGenre::Documentary => 99,
            UiGenre::Drama => 18,
            UiGenre::Family => 10751,
            UiGenre::Fantasy => 14,
            UiGenre::History => 36,
            UiGenre::Horror => 27,
            UiGenre::Music => 10402,
            UiGenre::Mystery => 9648,
            UiGenre::Romance => 10749,
            UiGenre::ScienceFiction => 878,
            UiGenre::Thriller => 53,
            UiGenre::War => 10752,
            UiGenre::Western => 37,
        }
    }
}

impl fmt::Display for UiGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Selected genre set and minimum-rating threshold for the discover endpoint.
///
/// Genres are kept in a sorted set so two filters with the same selection
/// compare equal regardless of toggle order; equality is what the feed uses
/// to decide whether to reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverFilter {
    genres: BTreeSet<u64>,
    min_rating: u8,
}

impl Default for DiscoverFilter {
    fn default() -> Self {
        Self {
            genres: BTreeSet::new(),
            min_rating: 50,
        }
    }
}

impl DiscoverFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the genre if absent, remove it if present.
    pub fn toggle_genre(&mut self, genre: UiGenre) {
        let id = genre.tmdb_id();
        if !self.genres.remove(&id) {
            self.genres.insert(id);
        }
    }

    /// Rating floor on a 0..=100 scale.
    pub fn set_min_rating(&mut self, rating: u8) -> Result<()> {
        if rating > 100 {
            return Err(ModelError::InvalidRating(rating));
        }
        self.min_rating = rating;
        Ok(())
    }

    pub fn min_rating(&self) -> u8 {
        self.min_rating
    }

    pub fn selected_genres(&self) -> impl Iterator<Item = u64> + '_ {
        self.genres.iter().copied()
    }

    pub fn has_genre(&self, genre: UiGenre) -> bool {
        self.genres.contains(&genre.tmdb_id())
    }

    /// Comma-joined sorted genre ids, as the discover endpoint expects.
    /// Empty string when no genre is selected.
    pub fn genres_param(&self) -> String {
        let mut out = String::new();
        for (i, id) in self.genres.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&id.to_string());
        }
        out
    }
}
