//! # Client Configuration
//!
//! Where the remote inventory API lives.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variable (highest priority)                            │
//! │     HADA_API_BASE=http://localhost:5000                                │
//! │                                                                         │
//! │  2. Default Value                                                      │
//! │     The production deployment URL                                      │
//! │                                                                         │
//! │  There is no config file: the original client ships one hard-coded     │
//! │  base URL, and the env override exists for development and tests.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No request timeout is configured anywhere: the client relies on the HTTP
//! stack's platform default, and operations run to completion without
//! cancellation support.

/// Production deployment of the ColorHada inventory server.
pub const DEFAULT_API_BASE: &str = "https://sistema-libreria-er9e.onrender.com";

/// Environment variable that overrides the API base URL.
pub const API_BASE_ENV: &str = "HADA_API_BASE";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote API, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL.
    ///
    /// A trailing slash is stripped so endpoint paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        ClientConfig { base_url }
    }

    /// Builds the configuration from the environment, falling back to the
    /// production default.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_ENV) {
            Ok(url) if !url.is_empty() => ClientConfig::new(url),
            _ => ClientConfig::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_API_BASE)
    }
}
