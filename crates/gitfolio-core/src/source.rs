// Where profile and repository data come from
use async_trait::async_trait;
use gitfolio_api::github::{GitHubClient, MAX_PER_PAGE};

use crate::{
    models::{Profile, RepositoryRecord},
    Result,
};

/// Read-only access to one owner's profile and repositories.
///
/// The loader only talks to this trait, so tests can hand it canned data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch_profile(&self) -> Result<Profile>;
    async fn fetch_repositories(&self) -> Result<Vec<RepositoryRecord>>;
}

/// GitHub-backed source for a fixed owner
pub struct GitHubSource {
    client: GitHubClient,
    owner: String,
}

impl GitHubSource {
    pub fn new(client: GitHubClient, owner: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
        }
    }
}

#[async_trait]
impl RepositorySource for GitHubSource {
    async fn fetch_profile(&self) -> Result<Profile> {
        let user = self.client.get_user(&self.owner).await?;
        Ok(user.into())
    }

    async fn fetch_repositories(&self) -> Result<Vec<RepositoryRecord>> {
        let repos = self
            .client
            .list_user_repos(&self.owner, MAX_PER_PAGE)
            .await?;

        Ok(repos.into_iter().map(RepositoryRecord::from).collect())
    }
}
