//! Timer-driven scenarios for the hover preview engine, run on a paused
//! tokio clock so the real debounce/transition constants elapse instantly.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use cinegrid_engine::preview::{
    AnchorRect, Fetch, PreviewEngine, PreviewPhase, Previewable, Viewport,
};

#[derive(Debug, Clone, PartialEq)]
struct Card {
    id: u64,
}

impl Previewable for Card {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Details {
    for_id: u64,
}

struct FakeFetcher {
    calls: AtomicUsize,
    latency: Duration,
    fail: AtomicBool,
}

impl FakeFetcher {
    fn new(latency: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            latency,
            fail: AtomicBool::new(false),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetch<u64, Details> for FakeFetcher {
    async fn fetch(&self, id: u64) -> anyhow::Result<Details> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("synthetic fetch failure for {id}");
        }
        Ok(Details { for_id: id })
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn anchor() -> AnchorRect {
    AnchorRect {
        top: 100.0,
        left: 400.0,
        width: 200.0,
    }
}

fn viewport() -> Viewport {
    Viewport::new(1000.0)
}

fn spawn_hover(engine: &PreviewEngine<Card, Details>, id: u64) {
    let engine = engine.clone();
    tokio::spawn(async move {
        engine.hover(Card { id }, anchor(), viewport()).await;
    });
}

/// Long enough for any fetch latency, open delay and transition to elapse.
async fn settle() {
    tokio::time::sleep(Duration::from_secs(5)).await;
}

#[tokio::test(start_paused = true)]
async fn lingering_hover_opens_with_matching_content() {
    let fetcher = FakeFetcher::new(Duration::from_millis(40));
    let engine = PreviewEngine::new(fetcher.clone() as Arc<dyn Fetch<u64, Details>>);

    spawn_hover(&engine, 7);
    settle().await;

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, PreviewPhase::Open);
    assert_eq!(snapshot.hovered_id(), Some(7));
    assert_eq!(snapshot.content, Some(Details { for_id: 7 }));
    assert!(snapshot.position.is_some());
}

#[tokio::test(start_paused = true)]
async fn sweeping_across_items_publishes_only_the_last() {
    let fetcher = FakeFetcher::new(Duration::from_millis(40));
    let engine = PreviewEngine::new(fetcher.clone() as Arc<dyn Fetch<u64, Details>>);

    // Pointer grazes 1 and 2 well inside the open delay, then rests on 3.
    spawn_hover(&engine, 1);
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_ne!(engine.phase(), PreviewPhase::Open);

    spawn_hover(&engine, 2);
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_ne!(engine.phase(), PreviewPhase::Open);

    spawn_hover(&engine, 3);
    settle().await;

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, PreviewPhase::Open);
    assert_eq!(snapshot.hovered_id(), Some(3));
    assert_eq!(snapshot.content, Some(Details { for_id: 3 }));
}

#[tokio::test(start_paused = true)]
async fn repeat_hover_hits_the_cache() {
    let fetcher = FakeFetcher::new(Duration::from_millis(40));
    let engine = PreviewEngine::new(fetcher.clone() as Arc<dyn Fetch<u64, Details>>);

    spawn_hover(&engine, 42);
    settle().await;
    assert_eq!(fetcher.calls(), 1);

    engine.unhover();
    settle().await;
    assert_eq!(engine.phase(), PreviewPhase::Idle);

    spawn_hover(&engine, 42);
    settle().await;

    assert_eq!(fetcher.calls(), 1, "second hover must resolve from cache");
    assert_eq!(engine.snapshot().content, Some(Details { for_id: 42 }));
}

#[tokio::test(start_paused = true)]
async fn superseded_fetch_still_warms_the_cache() {
    let fetcher = FakeFetcher::new(Duration::from_millis(40));
    let engine = PreviewEngine::new(fetcher.clone() as Arc<dyn Fetch<u64, Details>>);

    // Leave 1 while its fetch is still in flight.
    spawn_hover(&engine, 1);
    tokio::time::sleep(Duration::from_millis(10)).await;
    spawn_hover(&engine, 2);
    settle().await;

    assert_eq!(engine.snapshot().hovered_id(), Some(2));
    assert_eq!(engine.cached_len(), 2);

    // Returning to 1 reuses the warmed entry instead of refetching.
    spawn_hover(&engine, 1);
    settle().await;
    assert_eq!(fetcher.calls(), 2);
    assert_eq!(engine.snapshot().content, Some(Details { for_id: 1 }));
}

#[tokio::test(start_paused = true)]
async fn unhover_plays_exit_then_resets_to_idle() {
    let fetcher = FakeFetcher::new(Duration::from_millis(10));
    let engine = PreviewEngine::new(fetcher.clone() as Arc<dyn Fetch<u64, Details>>);

    spawn_hover(&engine, 5);
    settle().await;
    assert_eq!(engine.phase(), PreviewPhase::Open);

    engine.unhover();
    // Past the grace period, inside the transition: exiting, content intact.
    tokio::time::sleep(Duration::from_millis(350)).await;
    let exiting = engine.snapshot();
    assert_eq!(exiting.phase, PreviewPhase::Exiting);
    assert!(exiting.content.is_some());

    settle().await;
    let idle = engine.snapshot();
    assert_eq!(idle.phase, PreviewPhase::Idle);
    assert!(idle.item.is_none());
    assert!(idle.position.is_none());
    assert!(idle.content.is_none());
}

#[tokio::test(start_paused = true)]
async fn cancel_unhover_keeps_the_preview_open() {
    let fetcher = FakeFetcher::new(Duration::from_millis(10));
    let engine = PreviewEngine::new(fetcher.clone() as Arc<dyn Fetch<u64, Details>>);

    spawn_hover(&engine, 5);
    settle().await;
    assert_eq!(engine.phase(), PreviewPhase::Open);

    // Pointer moves from the card onto the preview card itself.
    engine.unhover();
    tokio::time::sleep(Duration::from_millis(100)).await;
    engine.cancel_unhover();

    settle().await;
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, PreviewPhase::Open);
    assert_eq!(snapshot.hovered_id(), Some(5));

    // Idempotent with no timer pending.
    engine.cancel_unhover();
    assert_eq!(engine.phase(), PreviewPhase::Open);
}

#[tokio::test(start_paused = true)]
async fn quick_unhover_cancel_cycle_never_flickers() {
    let fetcher = FakeFetcher::new(Duration::from_millis(10));
    let engine = PreviewEngine::new(fetcher.clone() as Arc<dyn Fetch<u64, Details>>);

    spawn_hover(&engine, 9);
    tokio::time::sleep(Duration::from_millis(100)).await;
    let before = engine.phase();

    engine.unhover();
    tokio::time::sleep(Duration::from_millis(50)).await;
    engine.cancel_unhover();
    tokio::time::sleep(Duration::from_secs(2)).await;

    // Exit never started; the phase is wherever the hover left it.
    let after = engine.phase();
    assert_ne!(after, PreviewPhase::Exiting);
    assert_ne!(after, PreviewPhase::Idle);
    assert_eq!(before, PreviewPhase::Pending);
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_leaves_preview_pending_and_unopened() {
    init_tracing();
    let fetcher = FakeFetcher::new(Duration::from_millis(40));
    fetcher.fail.store(true, Ordering::SeqCst);
    let engine = PreviewEngine::new(fetcher.clone() as Arc<dyn Fetch<u64, Details>>);

    spawn_hover(&engine, 13);
    settle().await;

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, PreviewPhase::Pending);
    assert!(snapshot.content.is_none());
    assert_eq!(engine.cached_len(), 0);

    // A fresh hover after the failure clears retries naturally.
    fetcher.fail.store(false, Ordering::SeqCst);
    spawn_hover(&engine, 13);
    settle().await;
    assert_eq!(engine.phase(), PreviewPhase::Open);
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn switching_from_an_open_preview_plays_the_exit_first() {
    let fetcher = FakeFetcher::new(Duration::from_millis(10));
    let engine = PreviewEngine::new(fetcher.clone() as Arc<dyn Fetch<u64, Details>>);

    spawn_hover(&engine, 1);
    settle().await;
    assert_eq!(engine.phase(), PreviewPhase::Open);

    spawn_hover(&engine, 2);
    tokio::time::sleep(Duration::from_millis(150)).await;
    // Mid-transition: the old preview is exiting, nothing published for 2 yet.
    let handoff = engine.snapshot();
    assert_eq!(handoff.phase, PreviewPhase::Exiting);
    assert_eq!(handoff.hovered_id(), Some(1));

    settle().await;
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, PreviewPhase::Open);
    assert_eq!(snapshot.hovered_id(), Some(2));
    assert_eq!(snapshot.content, Some(Details { for_id: 2 }));
}
