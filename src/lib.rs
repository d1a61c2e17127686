// ============================================================================
// FEED LISTS - Yew front-end
// ============================================================================
// - Components: App -> GenericFeed / YogaFeed -> FeedList (markup only)
// - Hooks: use_remote_data (one GET per mount), load observer context
// - Services: HTTP feed source, cancellable load task, load diagnostics
// - Models: Entry, LoadState, FeedLayout
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;

pub use components::App;
pub use config::CONFIG;
pub use error::FetchError;

/// Installs the panic hook and the console logger. Safe to call once at startup.
pub fn init_diagnostics() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
}
