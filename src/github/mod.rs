// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Submodules:
// - transport: the one HTTP primitive we need (GET a URL, parse JSON)
// - types: typed views of the organization and repository payloads
// - client: GithubOrgClient, which caches the org payload and lists repos
// =============================================================================

mod client;
mod transport;
mod types;

// Re-export so callers write `github::GithubOrgClient`
pub use client::GithubOrgClient;
pub use transport::{HttpTransport, Transport};
pub use types::{License, Org, Repo};
