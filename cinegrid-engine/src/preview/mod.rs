//! Hover preview: placement policy plus the timer/cache state machine.

mod engine;
mod position;

pub use engine::{
    Fetch, PreviewEngine, PreviewPhase, PreviewSnapshot, PreviewTiming, Previewable,
};
pub use position::{
    AnchorRect, PREVIEW_SCALE, PreviewOrigin, PreviewPosition, Viewport, preview_position,
};

use cinegrid_model::{Movie, MovieId};

impl Previewable for Movie {
    type Id = MovieId;

    fn id(&self) -> MovieId {
        self.id
    }
}
