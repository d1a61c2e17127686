// ============================================================================
// LOAD TASK - single-shot feed load owned by one mounted component
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{AbortController, AbortSignal};

use crate::models::{collection_from_value, LoadState};
use crate::services::feed_client::FeedSource;
use crate::services::load_observer::{LoadEvent, LoadObserver};

/// Cancellation handle shared between the spawned load and the component's
/// effect cleanup. Cancelling aborts the request (when an `AbortController`
/// is attached) and makes any late result be dropped.
#[derive(Clone, Default)]
pub struct LoadTask {
    cancelled: Rc<Cell<bool>>,
    controller: Option<AbortController>,
}

impl LoadTask {
    /// Task without a browser abort controller; only the late result is dropped
    pub fn new() -> Self {
        Self::default()
    }

    /// Task that also aborts the in-flight request when cancelled
    pub fn with_abort() -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::warn!("⚠️ AbortController unavailable, request will not be aborted: {:?}", e);
                None
            }
        };
        Self {
            cancelled: Rc::new(Cell::new(false)),
            controller,
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Runs one load. Returns the state to store, or `None` if the task was
/// cancelled and the component must not be touched.
pub async fn run_load<S, O>(source: &S, locator: &str, task: &LoadTask, observer: &O) -> Option<LoadState>
where
    S: FeedSource,
    O: LoadObserver + ?Sized,
{
    if task.is_cancelled() {
        return None;
    }

    observer.on_event(&LoadEvent::Started { locator });

    let signal = task.signal();
    let result = source.fetch(locator, signal.as_ref()).await;

    if task.is_cancelled() {
        log::debug!("🚫 [FEED] {} finished after teardown, result dropped", locator);
        return None;
    }

    let state = match result.and_then(|raw| collection_from_value(raw.clone()).map(|c| (raw, c))) {
        Ok((raw, collection)) => {
            observer.on_event(&LoadEvent::Loaded {
                locator,
                raw: &raw,
                entries: collection.len(),
            });
            LoadState::loaded(collection)
        }
        Err(error) => {
            observer.on_event(&LoadEvent::Failed { locator, error: &error });
            LoadState::Failed(error)
        }
    };

    Some(state)
}
