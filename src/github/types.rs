// src/github/types.rs
// =============================================================================
// Typed views of the GitHub payloads we read.
//
// Only the fields the client actually uses are named. Everything else the API
// sends is kept in `extra`, so an Org or Repo can be printed back out as the
// full mapping it came from.
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Organization metadata from `GET /orgs/{org}`
//
// Only `repos_url` is typed. The rest stays in `extra` exactly as sent,
// including keys whose value is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Org {
    /// Where the org's public repositories are listed
    pub repos_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Org {
    pub fn login(&self) -> Option<&str> {
        self.str_field("login")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    pub fn html_url(&self) -> Option<&str> {
        self.str_field("html_url")
    }

    // None when the key is missing, null, or not a string
    fn str_field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// One entry of the repos payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    // GitHub sends `"license": null` for unlicensed repos
    #[serde(default)]
    pub license: Option<License>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spdx_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_org_keeps_unknown_fields() {
        let org: Org = serde_json::from_value(json!({
            "login": "google",
            "id": 1342004,
            "repos_url": "https://api.github.com/orgs/google/repos",
        }))
        .unwrap();

        assert_eq!(org.login(), Some("google"));
        assert_eq!(org.repos_url, "https://api.github.com/orgs/google/repos");
        assert_eq!(org.extra.get("id"), Some(&json!(1342004)));
    }

    #[test]
    fn test_org_keeps_null_fields() {
        let payload = json!({
            "login": "x",
            "name": null,
            "description": null,
            "html_url": null,
            "repos_url": "u",
        });
        let org: Org = serde_json::from_value(payload.clone()).unwrap();

        assert_eq!(org.login(), Some("x"));
        assert_eq!(org.description(), None);
        assert_eq!(org.name(), None);
        assert_eq!(serde_json::to_value(&org).unwrap(), payload);
    }

    #[test]
    fn test_org_requires_repos_url() {
        let result = serde_json::from_value::<Org>(json!({ "login": "google" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_repo_license_variants() {
        let with_license: Repo = serde_json::from_value(json!({
            "name": "dagger",
            "license": { "key": "apache-2.0", "spdx_id": "Apache-2.0" },
        }))
        .unwrap();
        assert_eq!(
            with_license.license.and_then(|l| l.key).as_deref(),
            Some("apache-2.0")
        );

        let null_license: Repo =
            serde_json::from_value(json!({ "name": "site", "license": null })).unwrap();
        assert!(null_license.license.is_none());

        let no_license: Repo = serde_json::from_value(json!({ "name": "google" })).unwrap();
        assert!(no_license.license.is_none());
    }
}
