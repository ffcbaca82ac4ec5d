//! Client-side engine for the cinegrid movie-discovery app.
//!
//! Everything here is headless: presentation layers render from the state
//! these types expose and feed pointer/scroll events back in. The centerpiece
//! is [`preview::PreviewEngine`], the hover-preview state machine; around it
//! sit the discover feed, the infinite-scroll trigger, carousel paging state
//! and the catalog API client.

pub mod api_client;
pub mod carousel;
pub mod config;
pub mod feed;
pub mod movie_service;
pub mod preview;
pub mod scroll;

pub use api_client::ApiClient;
pub use carousel::CarouselState;
pub use config::Config;
pub use feed::MovieFeed;
pub use movie_service::MovieService;
pub use preview::{
    AnchorRect, Fetch, PreviewEngine, PreviewOrigin, PreviewPhase, PreviewPosition,
    PreviewSnapshot, PreviewTiming, Previewable, Viewport, preview_position,
};
pub use scroll::{ScrollTrigger, SentinelId};
