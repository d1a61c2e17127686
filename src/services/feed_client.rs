// ============================================================================
// FEED CLIENT - HTTP only (stateless)
// ============================================================================
// One GET per call, body parsed as JSON. No retry, no cache.
// ============================================================================

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::AbortSignal;

use crate::error::FetchError;

/// Where feeds come from. The hook uses `HttpFeedSource`; tests plug in stubs.
#[allow(async_fn_in_trait)]
pub trait FeedSource {
    async fn fetch(&self, locator: &str, signal: Option<&AbortSignal>) -> Result<Value, FetchError>;
}

#[derive(Clone, Default)]
pub struct HttpFeedSource;

impl HttpFeedSource {
    pub fn new() -> Self {
        Self
    }
}

impl FeedSource for HttpFeedSource {
    async fn fetch(&self, locator: &str, signal: Option<&AbortSignal>) -> Result<Value, FetchError> {
        log::debug!("📡 GET {}", locator);

        let response = Request::get(locator)
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
