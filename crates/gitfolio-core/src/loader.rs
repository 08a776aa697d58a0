use tracing::info;

use crate::models::{Profile, RepositoryRecord};
use crate::source::RepositorySource;
use crate::surface::COUNT_PLACEHOLDER;
use crate::Result;

/// Both halves of a successful fetch
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub profile: Profile,
    pub repositories: Vec<RepositoryRecord>,
}

/// Request profile and repositories together.
///
/// Either failure fails the whole fetch and the other result is dropped;
/// there is no partial success.
pub async fn fetch(source: &dyn RepositorySource) -> Result<LoadedData> {
    let (profile, repositories) =
        tokio::try_join!(source.fetch_profile(), source.fetch_repositories())?;

    info!(
        "Fetched profile '{}' and {} repositories",
        profile.login,
        repositories.len()
    );

    Ok(LoadedData {
        profile,
        repositories,
    })
}

/// Forks never enter the working set
pub fn without_forks(repositories: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    repositories.into_iter().filter(|r| !r.fork).collect()
}

/// The profile's public repo count wins; the fetched list length is the fallback.
///
/// The two can disagree (the list is capped at one page and includes forks).
pub fn display_count(profile: &Profile, repositories: Option<&[RepositoryRecord]>) -> String {
    profile
        .public_repos
        .or_else(|| repositories.map(|r| r.len() as u64))
        .map(|n| n.to_string())
        .unwrap_or_else(|| COUNT_PLACEHOLDER.to_string())
}
