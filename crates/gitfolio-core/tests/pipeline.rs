use async_trait::async_trait;
use gitfolio_core::{
    Error, Locale, MemoryPreferenceStore, Portfolio, Profile, RepositoryRecord,
    RepositorySource, ThemePreference, PAGE_SIZE,
};

/// Canned source: each half either answers or fails
struct FakeSource {
    profile: Option<Profile>,
    repositories: Option<Vec<RepositoryRecord>>,
}

#[async_trait]
impl RepositorySource for FakeSource {
    async fn fetch_profile(&self) -> gitfolio_core::Result<Profile> {
        self.profile
            .clone()
            .ok_or_else(|| Error::ConfigError("profile unavailable".to_string()))
    }

    async fn fetch_repositories(&self) -> gitfolio_core::Result<Vec<RepositoryRecord>> {
        self.repositories
            .clone()
            .ok_or_else(|| Error::ConfigError("repositories unavailable".to_string()))
    }
}

fn create_test_repo(i: usize, fork: bool) -> RepositoryRecord {
    RepositoryRecord {
        name: format!("project-{:02}", i),
        full_name: format!("octocat/project-{:02}", i),
        html_url: format!("https://github.com/octocat/project-{:02}", i),
        default_branch: Some("main".to_string()),
        description: Some(format!("Project number {}", i)),
        language: Some("Rust".to_string()),
        topics: vec!["portfolio".to_string()],
        stargazers_count: Some(i as u64 * 100),
        forks_count: Some(i as u64),
        updated_at: Some(format!("2024-02-{:02}T12:00:00Z", i + 1)),
        pushed_at: Some(format!("2024-03-{:02}T12:00:00Z", i + 1)),
        fork,
    }
}

fn profile() -> Profile {
    Profile {
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        avatar_url: Some("https://avatars.githubusercontent.com/u/583231".to_string()),
        html_url: Some("https://github.com/octocat".to_string()),
        public_repos: Some(25),
    }
}

fn portfolio(locale: Locale) -> Portfolio {
    Portfolio::new(locale, Box::new(MemoryPreferenceStore::new()))
}

#[tokio::test]
async fn test_load_excludes_forks_and_sorts() {
    let mut repos: Vec<RepositoryRecord> = (0..12).map(|i| create_test_repo(i, false)).collect();
    repos.push(create_test_repo(20, true));
    repos.push(create_test_repo(21, true));

    let source = FakeSource {
        profile: Some(profile()),
        repositories: Some(repos),
    };

    let mut p = portfolio(Locale::EnUs);
    p.load(&source).await;

    let all = p.view().all_repositories();
    assert_eq!(all.len(), 12);
    assert!(all.iter().all(|r| !r.fork));
    assert_eq!(all[0].name, "project-11");
    assert_eq!(all[11].name, "project-00");

    let surface = p.surface();
    assert_eq!(surface.repo_count, "25");
    assert_eq!(surface.cards.len(), PAGE_SIZE);
    assert_eq!(surface.status, "Showing 9 of 12.");
    assert!(surface.load_more_visible);
    assert_eq!(
        surface.avatar.src.as_deref(),
        Some("https://avatars.githubusercontent.com/u/583231")
    );
}

#[tokio::test]
async fn test_twenty_repositories_paginate() {
    let source = FakeSource {
        profile: Some(profile()),
        repositories: Some((0..20).map(|i| create_test_repo(i, false)).collect()),
    };

    let mut p = portfolio(Locale::PtBr);
    p.load(&source).await;
    p.apply_filter("");

    assert_eq!(p.surface().cards.len(), 9);
    assert_eq!(p.surface().status, "Mostrando 9 de 20.");
    assert!(p.surface().load_more_visible);

    p.load_more();
    assert_eq!(p.surface().cards.len(), 18);
    assert_eq!(p.surface().status, "Mostrando 18 de 20.");

    p.load_more();
    assert_eq!(p.surface().cards.len(), 20);
    assert_eq!(p.surface().status, "Mostrando 20 de 20.");
    assert!(!p.surface().load_more_visible);
}

#[tokio::test]
async fn test_filter_with_no_matches() {
    let source = FakeSource {
        profile: Some(profile()),
        repositories: Some((0..12).map(|i| create_test_repo(i, false)).collect()),
    };

    let mut p = portfolio(Locale::EnUs);
    p.load(&source).await;
    p.apply_filter("zzz");

    assert!(p.view().visible_subset().is_empty());
    assert!(p.surface().cards.is_empty());
    assert_eq!(p.surface().status, "No repositories found.");
    assert!(!p.surface().load_more_visible);
}

#[tokio::test]
async fn test_repository_failure_keeps_previous_data() {
    let good = FakeSource {
        profile: Some(profile()),
        repositories: Some((0..4).map(|i| create_test_repo(i, false)).collect()),
    };
    let broken = FakeSource {
        profile: Some(profile()),
        repositories: None,
    };

    let mut p = portfolio(Locale::PtBr);
    p.load(&good).await;
    let before = p.view().all_repositories().to_vec();

    p.load(&broken).await;

    assert_eq!(
        p.surface().status,
        "Não foi possível carregar os repositórios agora. Confira direto no GitHub."
    );
    assert!(!p.surface().load_more_visible);
    assert_eq!(p.view().all_repositories(), before.as_slice());
}

#[tokio::test]
async fn test_failure_on_first_load_leaves_nothing() {
    let broken = FakeSource {
        profile: None,
        repositories: Some(vec![create_test_repo(1, false)]),
    };

    let mut p = portfolio(Locale::EnUs);
    p.load(&broken).await;

    assert!(p.view().all_repositories().is_empty());
    assert!(p.surface().cards.is_empty());
    assert_eq!(p.surface().repo_count, "—");
    assert!(p.surface().avatar.src.is_none());
}

#[tokio::test]
async fn test_count_falls_back_to_list_length() {
    let source = FakeSource {
        profile: Some(Profile {
            public_repos: None,
            ..profile()
        }),
        repositories: Some(vec![create_test_repo(1, false), create_test_repo(2, true)]),
    };

    let mut p = portfolio(Locale::EnUs);
    p.load(&source).await;

    // list length before fork removal
    assert_eq!(p.surface().repo_count, "2");
    assert_eq!(p.surface().status, "Showing 1 of 1.");
}

#[tokio::test]
async fn test_star_badge_compact() {
    let mut repo = create_test_repo(1, false);
    repo.stargazers_count = Some(1500);
    let source = FakeSource {
        profile: Some(profile()),
        repositories: Some(vec![repo]),
    };

    let mut p = portfolio(Locale::PtBr);
    p.load(&source).await;

    let card = &p.surface().cards[0];
    assert!(card.meta.iter().any(|b| b.text == "★ 1,5 mil"));
    assert_eq!(card.code.url, "https://github.com/octocat/project-01/tree/main");
}

#[test]
fn test_theme_slot_absent_then_toggle() {
    let mut p = portfolio(Locale::EnUs);
    p.init_theme();
    assert_eq!(p.theme(), ThemePreference::Dark);

    p.toggle_theme();
    assert_eq!(p.theme(), ThemePreference::Light);
    assert_eq!(p.surface().theme_icon, "☀");
}
