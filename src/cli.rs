// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - org:   show an organization's metadata
// - repos: list an organization's public repositories
//
// Global flags pick the API endpoint, request timeout and log level.
// =============================================================================

use clap::{Args, Parser, Subcommand};
use github_org_client::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use github_org_client::ClientConfig;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "github-org-client",
    version,
    about = "Look up GitHub organizations and their public repositories",
    long_about = "github-org-client reads an organization's metadata from the GitHub REST API \
                  and lists its public repositories, optionally filtered by license."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Base URL of the GitHub REST API
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

impl GlobalArgs {
    // Turns the flags into a ClientConfig, keeping the default User-Agent
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show an organization's metadata
    ///
    /// Example: github-org-client org google
    Org {
        /// Organization login (e.g., google)
        org: String,

        /// Print the full payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// List an organization's public repositories
    ///
    /// Example: github-org-client repos google --license apache-2.0
    Repos {
        /// Organization login (e.g., google)
        org: String,

        /// Only list repos with this license key (exact match, e.g. apache-2.0)
        #[arg(long)]
        license: Option<String>,

        /// Print the repo names as a JSON array
        #[arg(long)]
        json: bool,
    },
}
