//! # Error Types
//!
//! Transport and decode errors for the catalog client.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Failure Classes (from the call sites)                 │
//! │                                                                         │
//! │  (a) Transport failure      ──► ClientError::Network                   │
//! │      DNS, refused connection, dropped socket                           │
//! │                                                                         │
//! │  (b) Decode failure         ──► ClientError::Decode                    │
//! │      Catalog body is not a product array (e.g. an HTML error page)     │
//! │                                                                         │
//! │  (c) Validation failure     ──► hada_core::ValidationError             │
//! │      Caught before any network call; never reaches this crate          │
//! │                                                                         │
//! │  A non-2xx status is NOT a failure class: mutation responses are       │
//! │  ignored outright, and the catalog read only fails when the body       │
//! │  refuses to decode. No failure is fatal and none is retried.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors from talking to the remote inventory API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connection, DNS, dropped socket).
    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be decoded as the expected shape.
    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Convenience type alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;
