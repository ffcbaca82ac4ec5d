//! Accumulates discover pages into a deduplicated, insertion-ordered list.

use std::collections::HashSet;

use cinegrid_model::{DiscoverFilter, Movie, MovieId, Page};

/// The discover grid's backing collection: movies accumulated across pages,
/// keyed by id, reset whenever the filter changes.
#[derive(Debug)]
pub struct MovieFeed {
    filter: DiscoverFilter,
    movies: Vec<Movie>,
    seen: HashSet<MovieId>,
    next_page: u32,
    total_pages: Option<u32>,
}

impl Default for MovieFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieFeed {
    pub fn new() -> Self {
        Self {
            filter: DiscoverFilter::default(),
            movies: Vec::new(),
            seen: HashSet::new(),
            next_page: 1,
            total_pages: None,
        }
    }

    pub fn filter(&self) -> &DiscoverFilter {
        &self.filter
    }

    /// Switch filters. A genuine change clears the accumulated movies and
    /// rewinds the cursor to the first page; returns whether a reset happened.
    pub fn apply_filter(&mut self, filter: DiscoverFilter) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.movies.clear();
        self.seen.clear();
        self.next_page = 1;
        self.total_pages = None;
        true
    }

    /// Merge a freshly fetched page, appending only unseen ids. The remote
    /// list shifts between requests, so overlapping pages are expected.
    pub fn merge_page(&mut self, page: Page<Movie>) {
        self.total_pages = Some(page.total_pages);
        self.next_page = page.page + 1;
        for movie in page.results {
            if self.seen.insert(movie.id) {
                self.movies.push(movie);
            }
        }
    }

    /// Page the next fetch should ask for.
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// More pages exist (optimistically true before the first response).
    pub fn has_more(&self) -> bool {
        self.total_pages.is_none_or(|total| self.next_page <= total)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
