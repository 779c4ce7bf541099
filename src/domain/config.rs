//! Server configuration consumed by the launch core.
//!
//! The library never reads files or environment variables; callers build or
//! deserialize [`Config`] and pass it into every service call.

use serde::{Deserialize, Serialize};

/// Path prefix under which the file store serves tool binaries.
pub const PUBLIC_PATH_PREFIX: &str = "public/";

/// Top-level configuration for the launch core.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Client-facing settings.
    #[serde(default)]
    pub client: ClientConfig,
}

/// Settings describing how clients reach the server fleet.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URLs clients may download from. Tool resolution uses the first
    /// entry; an empty list makes every tool resolution fail.
    pub server_urls: Vec<String>,
}

impl Config {
    /// Convenience constructor for a config with the given server URLs.
    #[must_use]
    pub fn with_server_urls<S: Into<String>>(urls: impl IntoIterator<Item = S>) -> Self {
        Self {
            client: ClientConfig {
                server_urls: urls.into_iter().map(Into::into).collect(),
            },
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
