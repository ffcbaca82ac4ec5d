//! Detail-level payloads shown in the hover preview card.

use serde::{Deserialize, Serialize};

/// A genre as returned inside detail payloads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenreInfo {
    pub id: u64,
    pub name: String,
}

/// Detail payload for the preview card: runtime, genres and the odd extra.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<GenreInfo>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
}

impl MovieDetails {
    /// Runtime formatted as `1h 37m`, or `None` when the catalog has no runtime.
    pub fn runtime_label(&self) -> Option<String> {
        let minutes = self.runtime?;
        if minutes == 0 {
            return None;
        }
        let (h, m) = (minutes / 60, minutes % 60);
        Some(if h > 0 {
            format!("{h}h {m}m")
        } else {
            format!("{m}m")
        })
    }
}

/// One video attached to a movie (trailer, teaser, clip...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub official: bool,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Video {
    fn is_youtube_trailer(&self) -> bool {
        self.site.eq_ignore_ascii_case("youtube") && self.video_type.eq_ignore_ascii_case("trailer")
    }
}

/// Pick the video most suitable as "the" trailer: official YouTube trailers
/// first, then any YouTube trailer, then whatever is left.
pub fn best_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| v.is_youtube_trailer() && v.official)
        .or_else(|| videos.iter().find(|v| v.is_youtube_trailer()))
        .or_else(|| videos.first())
}
