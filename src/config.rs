// src/config.rs
// =============================================================================
// Client configuration.
//
// Everything has a sensible default so `ClientConfig::default()` talks to the
// public GitHub API. The CLI overrides fields from flags and environment.
// =============================================================================

use std::time::Duration;
use url::Url;

use crate::error::Result;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base of the REST API, without a trailing slash
    pub api_url: String,
    /// Sent as the User-Agent header (GitHub rejects requests without one)
    pub user_agent: String,
    /// Per-request timeout for the HTTP transport
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: format!("github-org-client/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Checks that `api_url` is a real URL
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api_url)?;
        Ok(())
    }

    // Builds the URL for an organization.
    //
    // Example:
    //   "google" -> "https://api.github.com/orgs/google"
    pub fn org_url(&self, org_name: &str) -> String {
        format!("{}/orgs/{}", self.api_url.trim_end_matches('/'), org_name)
    }
}
