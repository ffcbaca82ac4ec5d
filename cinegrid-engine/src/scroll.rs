//! Sentinel-driven load-more trigger for the discover grid.
//!
//! The view marks its last rendered card as the sentinel; when that element
//! scrolls into view the trigger fires the load-more callback, gated so a
//! burst of visibility events or a re-render mid-load never double-fires.

/// Identity of a sentinel element. List re-renders move the sentinel to a new
/// element, which gets a fresh id; events from the old one are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentinelId(pub u64);

/// Invokes a caller-supplied callback when the observed sentinel becomes
/// visible, as long as more pages exist and no load is in flight.
pub struct ScrollTrigger {
    observed: Option<SentinelId>,
    loading: bool,
    has_more: bool,
    load_more: Box<dyn FnMut() + Send>,
}

impl std::fmt::Debug for ScrollTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollTrigger")
            .field("observed", &self.observed)
            .field("loading", &self.loading)
            .field("has_more", &self.has_more)
            .finish_non_exhaustive()
    }
}

impl ScrollTrigger {
    pub fn new(load_more: impl FnMut() + Send + 'static) -> Self {
        Self {
            observed: None,
            loading: false,
            has_more: true,
            load_more: Box::new(load_more),
        }
    }

    /// Observe a new sentinel, disconnecting the previous one. No-op while a
    /// load is in flight; the caller re-attaches after the load settles.
    pub fn attach(&mut self, sentinel: SentinelId) {
        if self.loading {
            return;
        }
        self.observed = Some(sentinel);
    }

    pub fn detach(&mut self) {
        self.observed = None;
    }

    /// The sentinel crossed into the viewport. Returns whether the callback
    /// fired; firing marks a load in flight until [`Self::finish_load`].
    pub fn sentinel_visible(&mut self, sentinel: SentinelId) -> bool {
        if self.observed != Some(sentinel) || self.loading || !self.has_more {
            return false;
        }
        self.loading = true;
        (self.load_more)();
        true
    }

    /// The triggered load settled; `has_more` reflects the fetched page.
    pub fn finish_load(&mut self, has_more: bool) {
        self.loading = false;
        self.has_more = has_more;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }
}
