pub mod load_observer_context;
pub mod use_remote_data;

pub use load_observer_context::{use_load_observer, LoadObserverProvider};
pub use use_remote_data::{use_remote_data, UseRemoteDataHandle};
