// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, filtered by RUST_LOG or --log-level)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use github_org_client::{ClientConfig, GithubOrgClient, HttpTransport, Org};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli.global.log_level);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout stays clean for --json output
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.global.client_config();

    match cli.command {
        Commands::Org { org, json } => handle_org(&org, config, json).await,
        Commands::Repos { org, license, json } => {
            handle_repos(&org, config, license.as_deref(), json).await
        }
    }
}

// Handles the 'org' subcommand
async fn handle_org(org_name: &str, config: ClientConfig, json: bool) -> Result<()> {
    let client = GithubOrgClient::from_config(org_name, config)?;
    let org = client
        .org()
        .await
        .with_context(|| format!("could not fetch organization '{}'", org_name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(org)?);
    } else {
        print_org(org_name, org);
    }
    Ok(())
}

// Handles the 'repos' subcommand
async fn handle_repos(
    org_name: &str,
    config: ClientConfig,
    license: Option<&str>,
    json: bool,
) -> Result<()> {
    let client = GithubOrgClient::from_config(org_name, config)?;
    let names = client
        .public_repos(license)
        .await
        .with_context(|| format!("could not list repositories of '{}'", org_name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    // The payload is cached, so this does not hit the network again
    let repos = client.repos_payload().await?;
    println!("{:<40} {:<20}", "REPOSITORY", "LICENSE");
    println!("{}", "=".repeat(60));
    let listed = repos.iter().filter(|repo| {
        license.map_or(true, |key| GithubOrgClient::<HttpTransport>::has_license(repo, key))
    });
    for repo in listed {
        let license_key = repo
            .license
            .as_ref()
            .and_then(|license| license.key.as_deref())
            .unwrap_or("-");
        println!("{:<40} {:<20}", repo.name, license_key);
    }

    println!();
    match license {
        Some(key) => println!("📋 {} of {} repositories use {}", names.len(), repos.len(), key),
        None => println!("📋 Total: {}", names.len()),
    }
    Ok(())
}

fn print_org(org_name: &str, org: &Org) {
    let login = org.login().unwrap_or(org_name);
    println!("🏢 {}", login);
    if let Some(name) = org.name() {
        println!("   Name:        {}", name);
    }
    if let Some(description) = org.description() {
        println!("   Description: {}", description);
    }
    if let Some(html_url) = org.html_url() {
        println!("   Profile:     {}", html_url);
    }
    println!("   Repos URL:   {}", org.repos_url);
}
