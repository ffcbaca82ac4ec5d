//! State for a category carousel row.

/// Card width the grid renders at, used for page-sized scroll jumps.
const CARD_WIDTH: f32 = 200.0;
const CARD_SPACING: f32 = 15.0;
/// Space reserved for the nav buttons flanking the row.
const NAV_SPACE: f32 = 100.0;
const MIN_ITEMS: usize = 2;
const MAX_ITEMS: usize = 8;

/// Scroll state for one carousel section.
#[derive(Debug, Clone)]
pub struct CarouselState {
    /// Current scroll position in pixels
    pub scroll_position: f32,
    /// Maximum scroll position (content width - viewport width)
    pub max_scroll: f32,
    /// Number of items to show at once (for button scrolling)
    pub items_per_page: usize,
    /// Total number of items
    pub total_items: usize,
}

impl CarouselState {
    pub fn new(total_items: usize) -> Self {
        Self {
            scroll_position: 0.0,
            max_scroll: 0.0,
            items_per_page: 5,
            total_items,
        }
    }

    /// Recompute items per page for the available width. Called from the
    /// (debounced) resize handler.
    pub fn update_items_per_page(&mut self, available_width: f32) {
        let usable_width = available_width - NAV_SPACE;
        let items_that_fit =
            ((usable_width + CARD_SPACING) / (CARD_WIDTH + CARD_SPACING)) as usize;
        self.items_per_page = items_that_fit.clamp(MIN_ITEMS, MAX_ITEMS);
    }

    pub fn can_go_left(&self) -> bool {
        self.scroll_position > 0.0
    }

    pub fn can_go_right(&self) -> bool {
        self.scroll_position < self.max_scroll
    }

    /// Scroll back by one page worth of items.
    pub fn go_left(&mut self) {
        if self.can_go_left() {
            self.scroll_position = (self.scroll_position - self.page_width()).max(0.0);
        }
    }

    /// Scroll forward by one page worth of items, clamped to the end.
    pub fn go_right(&mut self) {
        if self.can_go_right() {
            self.scroll_position = (self.scroll_position + self.page_width()).min(self.max_scroll);
        }
    }

    /// Sync from an actual scroll event (drag, wheel).
    pub fn record_scroll(&mut self, position: f32, max_scroll: f32) {
        self.max_scroll = max_scroll.max(0.0);
        self.scroll_position = position.clamp(0.0, self.max_scroll);
    }

    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
    }

    fn page_width(&self) -> f32 {
        self.items_per_page as f32 * (CARD_WIDTH + CARD_SPACING)
    }
}
