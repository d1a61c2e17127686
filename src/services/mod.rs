pub mod feed_client;
pub mod load_observer;
pub mod load_task;

pub use feed_client::{FeedSource, HttpFeedSource};
pub use load_observer::{ConsoleObserver, LoadEvent, LoadObserver, NoopObserver, ObserverHandle};
pub use load_task::{run_load, LoadTask};
