//! Error types for the telemetry relay.
//!
//! Configuration errors are fatal at startup. Store and delivery errors are
//! per-iteration and never stop the delivery loop.

use thiserror::Error;

/// Store location or credential missing or unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable unset or empty.
    #[error("{0} must be set as an environment variable")]
    Missing(&'static str),

    /// Store URL does not parse.
    #[error("invalid store URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Anon key contains bytes that cannot go into an HTTP header.
    #[error("SUPABASE_ANON_KEY is not a valid header value")]
    InvalidKey,

    /// HTTP client could not be built from the configuration.
    #[error("failed to build store client: {0}")]
    Client(#[source] reqwest::Error),
}

/// A single insert into the store failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure (DNS, connect, timeout, TLS).
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store rejected insert ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// One delivery-loop iteration did not persist its snapshot.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
