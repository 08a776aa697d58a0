use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub caps `per_page` at 100, and that single page is all we ever ask for
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

/// Unauthenticated, read-only client for the two endpoints the portfolio needs.
///
/// One attempt per call. A failed request is reported, never retried.
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE.to_string())
    }

    /// For GitHub Enterprise or a local stand-in server
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(concat!(
                "gitfolio/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the public profile of `owner`
    pub async fn get_user(&self, owner: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, owner);
        self.get_json(&url, &[]).await
    }

    /// Fetch one page of `owner`'s repositories, most recently updated first
    pub async fn list_user_repos(&self, owner: &str, per_page: u32) -> Result<Vec<GitHubRepo>> {
        let url = format!("{}/users/{}/repos", self.base_url, owner);
        let per_page = per_page.min(MAX_PER_PAGE).to_string();
        self.get_json(&url, &[("per_page", per_page.as_str()), ("sort", "updated")])
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFound(url.to_string()));
        }

        if is_rate_limited(&response) {
            return Err(GitHubError::RateLimitExceeded);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        // Go through text so a malformed body surfaces as ParseError
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// GitHub answers an exhausted quota with 403 or 429 and zero remaining calls
fn is_rate_limited(response: &reqwest::Response) -> bool {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    status == reqwest::StatusCode::FORBIDDEN
        && response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false)
}

/// `GET /users/{owner}` payload, only the fields we read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub public_repos: Option<u64>,
}

/// One entry of `GET /users/{owner}/repos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub updated_at: Option<String>,
    pub pushed_at: Option<String>,
    pub default_branch: Option<String>,
    #[serde(default)]
    pub fork: bool,
}
