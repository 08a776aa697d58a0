use serde::{Deserialize, Serialize};

/// One repository as the remote source describes it. Read-only once loaded.
///
/// Timestamps stay as the strings GitHub sent; the sorter and the formatter
/// parse them where they are used, so a bad timestamp never sinks a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub default_branch: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub updated_at: Option<String>,
    pub pushed_at: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

/// The owner's public profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub public_repos: Option<u64>,
}

impl From<gitfolio_api::GitHubRepo> for RepositoryRecord {
    fn from(gh: gitfolio_api::GitHubRepo) -> Self {
        Self {
            name: gh.name,
            full_name: gh.full_name,
            html_url: gh.html_url,
            default_branch: gh.default_branch,
            description: gh.description,
            language: gh.language,
            topics: gh.topics,
            stargazers_count: gh.stargazers_count,
            forks_count: gh.forks_count,
            updated_at: gh.updated_at,
            pushed_at: gh.pushed_at,
            fork: gh.fork,
        }
    }
}

impl From<gitfolio_api::GitHubUser> for Profile {
    fn from(gh: gitfolio_api::GitHubUser) -> Self {
        Self {
            login: gh.login,
            name: gh.name,
            avatar_url: gh.avatar_url,
            html_url: gh.html_url,
            public_repos: gh.public_repos,
        }
    }
}
