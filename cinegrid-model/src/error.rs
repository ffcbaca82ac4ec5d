use crate::ids::MovieId;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid rating threshold {0}, expected 0..=100")]
    InvalidRating(u8),
    #[error("movie {0} has no usable trailer")]
    NoTrailer(MovieId),
    #[error("malformed page: page {page} of {total_pages}")]
    MalformedPage { page: u32, total_pages: u32 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
