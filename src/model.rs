use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Subset of `GET /users/{username}` the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileSummary {
    #[serde(rename = "public_repos")]
    pub public_repo_count: u32,
}

/// One entry of `GET /users/{username}/repos`. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "language", default)]
    pub primary_language: Option<String>,
    #[serde(rename = "fork", default)]
    pub is_fork: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
    #[serde(rename = "stargazers_count")]
    pub star_count: u32,
    #[serde(rename = "forks_count")]
    pub fork_count: u32,
    #[serde(rename = "updated_at")]
    pub last_updated_at: DateTime<Utc>,
    #[serde(rename = "html_url")]
    pub web_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
