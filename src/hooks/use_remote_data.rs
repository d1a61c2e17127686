// ============================================================================
// USE REMOTE DATA HOOK - one GET per mount
// ============================================================================
// Fetches on mount, never refetches. The load is cancelled (request aborted,
// late result dropped) when the component unmounts.
// ============================================================================

use yew::prelude::*;

use crate::hooks::load_observer_context::use_load_observer;
use crate::models::LoadState;
use crate::services::{run_load, HttpFeedSource, LoadTask};

#[derive(Clone, PartialEq)]
pub struct UseRemoteDataHandle {
    pub state: LoadState,
}

/// Loads the JSON feed at `locator`. The first render always sees
/// `LoadState::Pending`; the locator is read once, at mount.
#[hook]
pub fn use_remote_data(locator: AttrValue) -> UseRemoteDataHandle {
    let state = use_state(LoadState::default);
    let observer = use_load_observer();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let task = LoadTask::with_abort();

            {
                let task = task.clone();
                yew::platform::spawn_local(async move {
                    let source = HttpFeedSource::new();
                    if let Some(next) = run_load(&source, &locator, &task, &observer).await {
                        state.set(next);
                    }
                });
            }

            move || task.cancel()
        });
    }

    UseRemoteDataHandle {
        state: (*state).clone(),
    }
}
