// src/lib.rs
// =============================================================================
// Library root for github-org-client.
//
// The library exposes:
// - GithubOrgClient: reads an organization and its public repositories
// - Transport / HttpTransport: the single "GET some JSON" primitive
// - ClientConfig: where the API lives and how we talk to it
// - ClientError: everything that can go wrong
//
// The binary in src/main.rs is only a thin command-line wrapper around this.
// =============================================================================

pub mod config;
pub mod error;
pub mod github;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use github::{GithubOrgClient, HttpTransport, License, Org, Repo, Transport};
