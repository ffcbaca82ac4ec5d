//! Pure placement policy for the enlarged preview card.

/// Bounding box of the hovered card, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
}

/// Viewport width and scroll offsets at hover time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub scroll_x: f32,
    pub scroll_y: f32,
}

impl Viewport {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}

/// Which edge the preview grows from during its scale-up animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewOrigin {
    Left,
    Right,
    Center,
}

/// Computed anchor for the preview card. `width` is the card width; the
/// preview itself is `width * PREVIEW_SCALE` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPosition {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub origin: PreviewOrigin,
}

/// How much larger the preview is than the card it covers.
pub const PREVIEW_SCALE: f32 = 1.5;

/// The preview floats this many pixels above the card's top edge.
const VERTICAL_LIFT: f32 = 50.0;

/// Place the preview so it never escapes the viewport at grid edges.
///
/// Cards within a third of a preview-width of the viewport's left edge pin
/// the preview's left edge to the card's left edge; symmetrically on the
/// right. Everything else centers the preview over the card.
pub fn preview_position(anchor: AnchorRect, viewport: Viewport) -> PreviewPosition {
    let card_left = anchor.left + viewport.scroll_x;
    let card_right = card_left + anchor.width;
    let preview_width = anchor.width * PREVIEW_SCALE;

    let screen_left = viewport.scroll_x;
    let screen_right = viewport.scroll_x + viewport.width;

    let (left, origin) = if card_left <= screen_left + preview_width / 3.0 {
        (card_left, PreviewOrigin::Left)
    } else if card_right >= screen_right - preview_width / 3.0 {
        (card_right - preview_width, PreviewOrigin::Right)
    } else {
        (
            card_left + anchor.width / 2.0 - preview_width / 2.0,
            PreviewOrigin::Center,
        )
    };

    PreviewPosition {
        top: anchor.top + viewport.scroll_y - VERTICAL_LIFT,
        left,
        width: anchor.width,
        origin,
    }
}
