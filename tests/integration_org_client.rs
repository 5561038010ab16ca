// tests/integration_org_client.rs
// =============================================================================
// End-to-end runs of GithubOrgClient against recorded GitHub payloads.
//
// Each scenario in tests/fixtures/test_payload.json holds:
// - org_payload:    what GET /orgs/{org} returned
// - repos_payload:  what GET {repos_url} returned
// - expected_repos: every repo name, in payload order
// - apache2_repos:  the names whose license key is "apache-2.0"
//
// The replay transport hands back org_payload then repos_payload and nothing
// else, so any extra request fails the test.
// =============================================================================

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use github_org_client::{ClientConfig, ClientError, GithubOrgClient, Result, Transport};
use serde::Deserialize;
use serde_json::Value;

const TEST_PAYLOAD: &str = include_str!("fixtures/test_payload.json");

#[derive(Debug, Deserialize)]
struct Scenario {
    org_payload: Value,
    repos_payload: Value,
    expected_repos: Vec<String>,
    apache2_repos: Vec<String>,
}

struct ReplayTransport {
    responses: Mutex<VecDeque<Value>>,
    calls: Mutex<Vec<String>>,
}

impl ReplayTransport {
    fn new(responses: Vec<Value>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for ReplayTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(url.to_string());
        let next = self.responses.lock().unwrap().pop_front();
        next.ok_or_else(|| ClientError::Status {
            url: url.to_string(),
            status: 500,
        })
    }
}

fn scenarios() -> Vec<Scenario> {
    serde_json::from_str(TEST_PAYLOAD).expect("fixture file should parse")
}

fn org_name(scenario: &Scenario) -> String {
    scenario.org_payload["login"]
        .as_str()
        .expect("fixture org has a login")
        .to_string()
}

fn replay_client(scenario: &Scenario) -> GithubOrgClient<ReplayTransport> {
    let transport = ReplayTransport::new(vec![
        scenario.org_payload.clone(),
        scenario.repos_payload.clone(),
    ]);
    GithubOrgClient::with_transport(&org_name(scenario), ClientConfig::default(), transport)
        .expect("fixture org name is not empty")
}

#[tokio::test]
async fn test_public_repos() {
    for scenario in scenarios() {
        let client = replay_client(&scenario);
        let repos = client.public_repos(None).await.unwrap();
        assert_eq!(repos, scenario.expected_repos, "org {}", org_name(&scenario));
    }
}

#[tokio::test]
async fn test_public_repos_with_license() {
    for scenario in scenarios() {
        let client = replay_client(&scenario);
        let repos = client.public_repos(Some("apache-2.0")).await.unwrap();
        assert_eq!(repos, scenario.apache2_repos, "org {}", org_name(&scenario));
    }
}

#[tokio::test]
async fn test_listing_twice_uses_two_requests() {
    for scenario in scenarios() {
        let client = replay_client(&scenario);

        assert_eq!(client.public_repos(None).await.unwrap(), scenario.expected_repos);
        assert_eq!(
            client.public_repos(Some("apache-2.0")).await.unwrap(),
            scenario.apache2_repos
        );

        let name = org_name(&scenario);
        let calls = client_calls(&client);
        assert_eq!(
            calls,
            vec![
                format!("https://api.github.com/orgs/{}", name),
                scenario.org_payload["repos_url"].as_str().unwrap().to_string(),
            ]
        );
    }
}

#[tokio::test]
async fn test_org_payload_round_trips() {
    for scenario in scenarios() {
        let client = replay_client(&scenario);
        let org = client.org().await.unwrap();
        assert_eq!(serde_json::to_value(org).unwrap(), scenario.org_payload);
    }
}

fn client_calls(client: &GithubOrgClient<ReplayTransport>) -> Vec<String> {
    client.transport().calls.lock().unwrap().clone()
}
