use std::rc::Rc;

use serde_json::Value;

use crate::error::FetchError;

/// Diagnostic events of one feed load
#[derive(Debug)]
pub enum LoadEvent<'a> {
    /// Emitted before the request goes out; no data yet
    Started { locator: &'a str },
    Loaded { locator: &'a str, raw: &'a Value, entries: usize },
    Failed { locator: &'a str, error: &'a FetchError },
}

pub trait LoadObserver {
    fn on_event(&self, event: &LoadEvent<'_>);
}

/// Writes one log line per event through the `log` facade
pub struct ConsoleObserver;

impl LoadObserver for ConsoleObserver {
    fn on_event(&self, event: &LoadEvent<'_>) {
        match event {
            LoadEvent::Started { locator } => {
                log::info!("⏳ [FEED] {} -> no data yet", locator);
            }
            LoadEvent::Loaded { locator, raw, entries } => {
                log::info!("✅ [FEED] {} -> {} entries: {}", locator, entries, raw);
            }
            LoadEvent::Failed { locator, error } => {
                log::error!("❌ [FEED] {} -> {}", locator, error);
            }
        }
    }
}

pub struct NoopObserver;

impl LoadObserver for NoopObserver {
    fn on_event(&self, _event: &LoadEvent<'_>) {}
}

/// Shareable observer, compared by identity so it can live in a Yew context
#[derive(Clone)]
pub struct ObserverHandle(Rc<dyn LoadObserver>);

impl ObserverHandle {
    pub fn new(observer: impl LoadObserver + 'static) -> Self {
        Self(Rc::new(observer))
    }

    pub fn console() -> Self {
        Self::new(ConsoleObserver)
    }

    pub fn noop() -> Self {
        Self::new(NoopObserver)
    }

    /// Observer matching the configured logging switch
    pub fn from_config() -> Self {
        if crate::config::CONFIG.is_logging_enabled() {
            Self::console()
        } else {
            Self::noop()
        }
    }
}

impl LoadObserver for ObserverHandle {
    fn on_event(&self, event: &LoadEvent<'_>) {
        self.0.on_event(event);
    }
}

impl PartialEq for ObserverHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
