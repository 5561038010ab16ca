// src/github/transport.rs
// =============================================================================
// The HTTP primitive the client is built on: GET a URL and parse JSON.
//
// It is a trait so GithubOrgClient never touches the network directly:
// - HttpTransport is the real one (reqwest)
// - tests plug in a stub that replays recorded payloads
//
// Rust concepts:
// - Traits: An interface other types can implement
// - async-trait: Traits with async methods (needs a macro on stable Rust)
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

const API_VERSION: &str = "2022-11-28";

#[async_trait]
pub trait Transport: Send + Sync {
    /// GETs `url` and returns the decoded JSON body
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// reqwest-backed transport for the real GitHub API
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    // Builds the HTTP client once; reqwest pools connections behind it.
    //
    // GitHub asks every request to carry a User-Agent, the JSON media type
    // and the API version it was written against.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(API_VERSION),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::payload(url, e))
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why Send + Sync on the trait?
//    - The client is used from async code on a multi-threaded runtime
//    - #[async_trait] returns boxed futures that must be Send
//    - A transport shared by reference therefore has to be Sync too
//
// 2. Why read text() then parse, instead of response.json()?
//    - A body that is not JSON becomes ClientError::Payload with the URL,
//      instead of a generic reqwest decode error
// -----------------------------------------------------------------------------
