use thiserror::Error;

/// Why a feed could not be loaded. Kept `Clone + PartialEq` so it can sit
/// inside a `LoadState` that flows through component props.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {text}")]
    Status { status: u16, text: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unexpected feed shape: {0}")]
    Shape(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => FetchError::Parse(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
