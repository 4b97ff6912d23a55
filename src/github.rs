use std::sync::Arc;

use anyhow::{Context, bail};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{ProfileSummary, RepositoryRecord};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const REPOS_PER_PAGE: &str = "100";
const CLIENT_USER_AGENT: &str = "portfolio-projects";

/// Data acquisition failure. Every variant is handled the same way by the
/// loader; they only differ in what gets logged.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error requesting {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub API returned HTTP {status} for {endpoint}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("Failed to parse {endpoint} response: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the loader gets its profile and repositories from.
pub trait ProfileSource {
    /// Resolves only after both the profile and the repository list have
    /// completed. Either one failing fails the whole fetch.
    async fn fetch(
        &self,
        username: &str,
    ) -> Result<(ProfileSummary, Vec<RepositoryRecord>), FetchError>;
}

/// Unauthenticated GitHub REST client.
#[derive(Clone)]
pub struct GithubClient {
    base: Arc<Url>,
    http: Arc<Client>,
}

impl GithubClient {
    pub fn new(api_base: &str) -> anyhow::Result<Self> {
        let base =
            Url::parse(api_base).with_context(|| format!("Invalid API base URL {api_base}"))?;
        if base.cannot_be_a_base() {
            bail!("API base URL {api_base} cannot carry a path");
        }
        Ok(Self {
            base: Arc::new(base),
            http: Arc::new(Client::new()),
        })
    }

    /// `GET /users/{username}`
    pub async fn profile(&self, username: &str) -> Result<ProfileSummary, FetchError> {
        let url = self.url(&["users", username]);
        let body = self.get("profile", url, &[]).await?;
        decode_profile(&body)
    }

    /// `GET /users/{username}/repos`, one page of the most recently updated.
    pub async fn repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>, FetchError> {
        let url = self.url(&["users", username, "repos"]);
        let query = [("sort", "updated"), ("per_page", REPOS_PER_PAGE)];
        let body = self.get("repositories", url, &query).await?;
        decode_repositories(&body)
    }

    /// Appends percent-encoded path segments to the API base, so a username
    /// containing `/`, `?` or `#` stays a single segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = (*self.base).clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Single attempt: no retry, no timeout beyond the transport's own.
    async fn get(
        &self,
        endpoint: &'static str,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, FetchError> {
        let transport = |source| FetchError::Transport { endpoint, source };

        let resp = self
            .http
            .get(url)
            .query(query)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(transport)?;
        Ok(body.to_vec())
    }
}

impl ProfileSource for GithubClient {
    async fn fetch(
        &self,
        username: &str,
    ) -> Result<(ProfileSummary, Vec<RepositoryRecord>), FetchError> {
        // Both requests are in flight before either is awaited.
        let (profile, repos) = tokio::join!(self.profile(username), self.repositories(username));
        Ok((profile?, repos?))
    }
}

pub fn decode_profile(body: &[u8]) -> Result<ProfileSummary, FetchError> {
    decode("profile", body)
}

pub fn decode_repositories(body: &[u8]) -> Result<Vec<RepositoryRecord>, FetchError> {
    decode("repositories", body)
}

fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(body).map_err(|source| FetchError::Parse { endpoint, source })
}
