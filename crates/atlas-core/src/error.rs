// crates/atlas-core/src/error.rs

use thiserror::Error;

/// Unified error type for directory lookups, remote fetches and the
/// favorites store.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// A required identifier (user id, country code, ...) was empty.
    #[error("missing required argument: {0}")]
    InvalidArgument(&'static str),

    /// No country matched the given name or code.
    #[error("not found: {0}")]
    NotFound(String),

    /// A favorites write was attempted without a signed-in user.
    #[error("not signed in")]
    Unauthenticated,

    /// Transport-level failure talking to the country data provider.
    #[cfg(feature = "client")]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The data provider answered, but not with a success status.
    #[error("upstream returned status {status} for {url}")]
    Upstream { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific document store failure.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
