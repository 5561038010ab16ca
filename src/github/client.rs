// src/github/client.rs
// =============================================================================
// GithubOrgClient: reads one GitHub organization and its public repositories.
//
// How it works:
// 1. org() GETs https://api.github.com/orgs/{name} the first time it is
//    called and keeps the result for the lifetime of the client
// 2. public_repos_url() reads `repos_url` out of that cached payload
// 3. repos_payload() GETs the repos URL once, also cached
// 4. public_repos() turns the payload into names, optionally keeping only
//    repos with a given license key
//
// Every call is sequential. The only state is the two cached payloads.
// =============================================================================

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, trace};

use super::transport::{HttpTransport, Transport};
use super::types::{Org, Repo};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

pub struct GithubOrgClient<T: Transport = HttpTransport> {
    org_name: String,
    config: ClientConfig,
    transport: T,
    org: OnceCell<Org>,
    repos: OnceCell<Vec<Repo>>,
}

impl GithubOrgClient<HttpTransport> {
    /// Client for `org_name` on the real API described by `config`
    pub fn from_config(org_name: &str, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(org_name, config, transport)
    }
}

impl<T: Transport> GithubOrgClient<T> {
    pub fn with_transport(org_name: &str, config: ClientConfig, transport: T) -> Result<Self> {
        if org_name.is_empty() {
            return Err(ClientError::EmptyOrgName);
        }

        Ok(Self {
            org_name: org_name.to_string(),
            config,
            transport,
            org: OnceCell::new(),
            repos: OnceCell::new(),
        })
    }

    /// Client whose org payload is already known, so org() never fetches
    pub fn with_org(org_name: &str, config: ClientConfig, transport: T, org: Org) -> Result<Self> {
        let mut client = Self::with_transport(org_name, config, transport)?;
        client.org = OnceCell::new_with(Some(org));
        Ok(client)
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The URL org() fetches from
    pub fn org_url(&self) -> String {
        self.config.org_url(&self.org_name)
    }

    // Organization metadata, fetched on first access only.
    //
    // A failed fetch leaves the cell empty, so the next call tries again.
    pub async fn org(&self) -> Result<&Org> {
        if self.org.initialized() {
            trace!(org = %self.org_name, "org payload cache hit");
        }

        self.org
            .get_or_try_init(|| async {
                let url = self.org_url();
                debug!(org = %self.org_name, %url, "fetching org payload");
                let payload = self.transport.get_json(&url).await?;
                serde_json::from_value::<Org>(payload).map_err(|e| ClientError::payload(&url, e))
            })
            .await
    }

    /// The org's `repos_url`, read from the cached org payload
    pub async fn public_repos_url(&self) -> Result<&str> {
        Ok(self.org().await?.repos_url.as_str())
    }

    /// Every repository in the org's repos payload, in payload order
    pub async fn repos_payload(&self) -> Result<&[Repo]> {
        let repos = self
            .repos
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?.to_string();
                debug!(org = %self.org_name, %url, "fetching repos payload");
                let payload = self.transport.get_json(&url).await?;
                parse_repos(&url, payload)
            })
            .await?;

        Ok(repos.as_slice())
    }

    // Names of the org's public repositories.
    //
    // With `license` set, only repos whose license key matches exactly are
    // kept. Repos without a license are skipped, not treated as errors.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let repos = self.repos_payload().await?;

        let names = repos
            .iter()
            .filter(|repo| license.map_or(true, |key| Self::has_license(repo, key)))
            .map(|repo| repo.name.clone())
            .collect();

        Ok(names)
    }

    /// True when `repo.license.key == license_key`
    pub fn has_license(repo: &Repo, license_key: &str) -> bool {
        repo.license
            .as_ref()
            .and_then(|license| license.key.as_deref())
            .is_some_and(|key| key == license_key)
    }
}

fn parse_repos(url: &str, payload: Value) -> Result<Vec<Repo>> {
    serde_json::from_value(payload).map_err(|e| ClientError::payload(url, e))
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. What is OnceCell?
//    - A slot that starts empty and is filled at most once
//    - get_or_try_init runs the async closure only while the slot is empty
//    - After that, every call returns a reference to the stored value
//
// 2. Why is the client generic over T: Transport?
//    - Production code uses the default, HttpTransport
//    - Tests pass a stub that returns canned JSON and records the URLs asked for
//
// 3. Why is has_license an associated function (no &self)?
//    - It only looks at the repo it is given
// -----------------------------------------------------------------------------
