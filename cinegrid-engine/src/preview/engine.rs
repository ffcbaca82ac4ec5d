//! The hover-preview state machine.
//!
//! Pointer events arrive faster than detail fetches resolve, so every async
//! continuation in here captures the target id it was launched for and
//! re-checks it against the engine's current target before touching shared
//! state. Stale continuations drop their results silently; only the content
//! belonging to the last hovered item is ever published.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::position::{AnchorRect, PreviewPosition, Viewport, preview_position};

/// Anything the preview engine can target: an entity with a stable id.
pub trait Previewable: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + std::fmt::Display + Send + Sync + 'static;

    fn id(&self) -> Self::Id;
}

/// Injected detail fetcher, decoupled from any transport.
#[async_trait]
pub trait Fetch<Id, D>: Send + Sync {
    async fn fetch(&self, id: Id) -> anyhow::Result<D>;
}

/// Where the preview is in its open/close lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewPhase {
    #[default]
    Idle,
    /// Hover registered; content not yet published.
    Pending,
    /// Content resolved and visible.
    Open,
    /// Close animation playing before returning to `Idle`.
    Exiting,
}

/// Timer constants for the engine. Defaults match the shipped UI; tests and
/// embedders can shrink them.
#[derive(Debug, Clone, Copy)]
pub struct PreviewTiming {
    /// Debounce before an available preview actually opens, so items the
    /// pointer only grazes never flash.
    pub open_delay: Duration,
    /// Grace period after unhover, long enough to move the pointer from the
    /// card onto the preview itself.
    pub exit_grace: Duration,
    /// Duration of the open/close animation.
    pub transition: Duration,
}

impl Default for PreviewTiming {
    fn default() -> Self {
        Self {
            open_delay: Duration::from_millis(500),
            exit_grace: Duration::from_millis(200),
            transition: Duration::from_millis(300),
        }
    }
}

/// What a view reads each frame.
#[derive(Debug, Clone)]
pub struct PreviewSnapshot<I, D> {
    pub item: Option<I>,
    pub position: Option<PreviewPosition>,
    pub content: Option<D>,
    pub phase: PreviewPhase,
}

impl<I: Previewable, D> PreviewSnapshot<I, D> {
    pub fn is_open(&self) -> bool {
        self.phase == PreviewPhase::Open
    }

    pub fn is_exiting(&self) -> bool {
        self.phase == PreviewPhase::Exiting
    }

    pub fn hovered_id(&self) -> Option<I::Id> {
        self.item.as_ref().map(Previewable::id)
    }
}

struct EngineState<I, D> {
    item: Option<I>,
    position: Option<PreviewPosition>,
    content: Option<D>,
    phase: PreviewPhase,
}

impl<I, D> Default for EngineState<I, D> {
    fn default() -> Self {
        Self {
            item: None,
            position: None,
            content: None,
            phase: PreviewPhase::Idle,
        }
    }
}

struct Inner<I: Previewable, D> {
    state: Mutex<EngineState<I, D>>,
    /// Id captured at hover time; the staleness guard for every continuation.
    current: Mutex<Option<I::Id>>,
    /// Session-lifetime detail cache, written at most once per key.
    cache: DashMap<I::Id, D>,
    fetcher: Arc<dyn Fetch<I::Id, D>>,
    timing: PreviewTiming,
    /// Pending unhover grace timer / exit transition, abortable by a new hover.
    exit_task: Mutex<Option<JoinHandle<()>>>,
    /// Pending open-debounce timer.
    open_task: Mutex<Option<JoinHandle<()>>>,
}

impl<I: Previewable, D> Drop for Inner<I, D> {
    fn drop(&mut self) {
        for slot in [&self.exit_task, &self.open_task] {
            if let Some(handle) = slot.lock().take() {
                handle.abort();
            }
        }
    }
}

/// Coordinates when the detail preview for the item under the pointer
/// appears and disappears. Cheap to clone; all clones share state.
pub struct PreviewEngine<I: Previewable, D> {
    inner: Arc<Inner<I, D>>,
}

impl<I: Previewable, D> Clone for PreviewEngine<I, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I: Previewable, D> std::fmt::Debug for PreviewEngine<I, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewEngine")
            .field("phase", &self.inner.state.lock().phase)
            .field("cached", &self.inner.cache.len())
            .finish()
    }
}

impl<I, D> PreviewEngine<I, D>
where
    I: Previewable,
    D: Clone + Send + Sync + 'static,
{
    pub fn new(fetcher: Arc<dyn Fetch<I::Id, D>>) -> Self {
        Self::with_timing(fetcher, PreviewTiming::default())
    }

    pub fn with_timing(fetcher: Arc<dyn Fetch<I::Id, D>>, timing: PreviewTiming) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(EngineState::default()),
                current: Mutex::new(None),
                cache: DashMap::new(),
                fetcher,
                timing,
                exit_task: Mutex::new(None),
                open_task: Mutex::new(None),
            }),
        }
    }

    /// Pointer entered `item`'s card.
    ///
    /// Supersedes any in-flight hover: earlier continuations notice the
    /// target change and abandon themselves. Never returns an error; fetch
    /// failures are logged and the preview simply does not open.
    pub async fn hover(&self, item: I, anchor: AnchorRect, viewport: Viewport) {
        self.abort_slot(&self.inner.exit_task);
        self.abort_slot(&self.inner.open_task);

        let id = item.id();
        *self.inner.current.lock() = Some(id);

        // A preview for another item is still on screen: play its close
        // animation before the new one mounts.
        let needs_exit = {
            let mut state = self.inner.state.lock();
            let other_item = state.item.as_ref().map(Previewable::id) != Some(id);
            if other_item && matches!(state.phase, PreviewPhase::Open | PreviewPhase::Exiting) {
                state.phase = PreviewPhase::Exiting;
                true
            } else {
                false
            }
        };
        if needs_exit {
            tokio::time::sleep(self.inner.timing.transition).await;
            if self.current_target() != Some(id) {
                return;
            }
        }

        let position = preview_position(anchor, viewport);
        {
            let mut state = self.inner.state.lock();
            state.item = Some(item);
            state.position = Some(position);
            state.content = None;
            state.phase = PreviewPhase::Pending;
        }

        // Clone out of the cache before any await; a shard guard must not
        // live across a suspension point.
        let cached = self.inner.cache.get(&id).map(|hit| hit.value().clone());
        let details = match cached {
            Some(details) => details,
            None => match self.inner.fetcher.fetch(id).await {
                Ok(details) => {
                    // Cache even if this hover lost the race; the next hover
                    // of the same item resolves synchronously.
                    self.inner
                        .cache
                        .entry(id)
                        .or_insert_with(|| details.clone());
                    details
                }
                Err(err) => {
                    if self.current_target() == Some(id) {
                        tracing::warn!(item = %id, error = %err, "preview detail fetch failed");
                    }
                    return;
                }
            }
        };
        if self.current_target() != Some(id) {
            return;
        }

        // Debounce the actual open so grazed items never flash.
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.timing.open_delay).await;
            if *inner.current.lock() != Some(id) {
                return;
            }
            let mut state = inner.state.lock();
            state.content = Some(details);
            state.phase = PreviewPhase::Open;
        });
        if let Some(old) = self.inner.open_task.lock().replace(handle) {
            old.abort();
        }
    }

    /// Pointer left the hovered card. Starts the grace timer; if nothing
    /// cancels it, the preview plays its exit animation and resets.
    pub fn unhover(&self) {
        self.abort_slot(&self.inner.open_task);

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.timing.exit_grace).await;
            // Grace elapsed: the exit is committed. Drop our own handle so a
            // late cancel_unhover can no longer abort the transition.
            inner.exit_task.lock().take();

            {
                let mut state = inner.state.lock();
                if state.phase == PreviewPhase::Idle {
                    return;
                }
                state.phase = PreviewPhase::Exiting;
            }
            tokio::time::sleep(inner.timing.transition).await;
            let mut state = inner.state.lock();
            if state.phase == PreviewPhase::Exiting {
                *state = EngineState::default();
            }
        });
        if let Some(old) = self.inner.exit_task.lock().replace(handle) {
            old.abort();
        }
    }

    /// Pointer reached the preview card itself; keep it open. Idempotent.
    pub fn cancel_unhover(&self) {
        self.abort_slot(&self.inner.exit_task);
    }

    pub fn snapshot(&self) -> PreviewSnapshot<I, D> {
        let state = self.inner.state.lock();
        PreviewSnapshot {
            item: state.item.clone(),
            position: state.position,
            content: state.content.clone(),
            phase: state.phase,
        }
    }

    pub fn phase(&self) -> PreviewPhase {
        self.inner.state.lock().phase
    }

    /// Number of detail payloads cached this session.
    pub fn cached_len(&self) -> usize {
        self.inner.cache.len()
    }

    fn current_target(&self) -> Option<I::Id> {
        *self.inner.current.lock()
    }

    fn abort_slot(&self, slot: &Mutex<Option<JoinHandle<()>>>) {
        if let Some(handle) = slot.lock().take() {
            handle.abort();
        }
    }
}
