use crate::format::{format_compact_number, format_date};
use crate::locale::Locale;
use crate::models::RepositoryRecord;

/// What one repository looks like on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Repository name, links to `title_url`
    pub title: String,
    pub title_url: String,
    pub description: String,
    pub meta: Vec<Badge>,
    pub open: CardLink,
    pub code: CardLink,
}

/// An outbound link. Always opened in the external browser, which sends no referrer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Language,
    Stars,
    Forks,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub text: String,
}

impl CardView {
    pub fn badge(&self, kind: BadgeKind) -> Option<&Badge> {
        self.meta.iter().find(|b| b.kind == kind)
    }
}

/// Build the card for one record. Pure; mounting it is the caller's job.
pub fn render_card(record: &RepositoryRecord, locale: Locale) -> CardView {
    let mut meta = Vec::with_capacity(4);

    if let Some(language) = record.language.as_deref().filter(|l| !l.is_empty()) {
        meta.push(Badge {
            kind: BadgeKind::Language,
            text: language.to_string(),
        });
    }

    meta.push(Badge {
        kind: BadgeKind::Stars,
        text: format!(
            "★ {}",
            format_compact_number(record.stargazers_count.unwrap_or(0), locale)
        ),
    });
    meta.push(Badge {
        kind: BadgeKind::Forks,
        text: format!(
            "⑂ {}",
            format_compact_number(record.forks_count.unwrap_or(0), locale)
        ),
    });

    if let Some(updated) = record.updated_at.as_deref().filter(|u| !u.is_empty()) {
        meta.push(Badge {
            kind: BadgeKind::Updated,
            text: locale.updated(&format_date(updated, locale)),
        });
    }

    let description = record
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(locale.no_description())
        .to_string();

    CardView {
        title: record.name.clone(),
        title_url: record.html_url.clone(),
        description,
        meta,
        open: CardLink {
            label: locale.open_label().to_string(),
            url: record.html_url.clone(),
        },
        code: CardLink {
            label: locale.code_label().to_string(),
            url: code_url(record),
        },
    }
}

/// Tree view of the default branch when we know it, the repository page otherwise
pub fn code_url(record: &RepositoryRecord) -> String {
    match record.default_branch.as_deref().filter(|b| !b.is_empty()) {
        Some(branch) => format!("{}/tree/{}", record.html_url, branch),
        None => record.html_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> RepositoryRecord {
        RepositoryRecord {
            name: "gitfolio".to_string(),
            full_name: "octocat/gitfolio".to_string(),
            html_url: "https://github.com/octocat/gitfolio".to_string(),
            default_branch: Some("main".to_string()),
            description: Some("Portfolio in the terminal".to_string()),
            language: Some("Rust".to_string()),
            stargazers_count: Some(1500),
            forks_count: Some(12),
            updated_at: Some("2024-01-05T10:00:00Z".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_card() {
        let card = render_card(&full_record(), Locale::PtBr);

        assert_eq!(card.title, "gitfolio");
        assert_eq!(card.title_url, "https://github.com/octocat/gitfolio");
        assert_eq!(card.description, "Portfolio in the terminal");
        let texts: Vec<&str> = card.meta.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Rust", "★ 1,5 mil", "⑂ 12", "Atualizado em 05 de jan. de 2024"]
        );
        assert_eq!(card.open.label, "Abrir");
        assert_eq!(card.open.url, "https://github.com/octocat/gitfolio");
        assert_eq!(card.code.label, "Código");
        assert_eq!(card.code.url, "https://github.com/octocat/gitfolio/tree/main");
    }

    #[test]
    fn test_sparse_card() {
        let record = RepositoryRecord {
            name: "bare".to_string(),
            full_name: "octocat/bare".to_string(),
            html_url: "https://github.com/octocat/bare".to_string(),
            ..Default::default()
        };
        let card = render_card(&record, Locale::EnUs);

        assert_eq!(card.description, "No description.");
        assert!(card.badge(BadgeKind::Language).is_none());
        assert!(card.badge(BadgeKind::Updated).is_none());
        assert_eq!(card.badge(BadgeKind::Stars).unwrap().text, "★ 0");
        assert_eq!(card.badge(BadgeKind::Forks).unwrap().text, "⑂ 0");
        assert_eq!(card.code.url, card.open.url);
    }

    #[test]
    fn test_unparseable_update_keeps_label() {
        let record = RepositoryRecord {
            updated_at: Some("garbage".to_string()),
            ..full_record()
        };
        let card = render_card(&record, Locale::EnUs);
        assert_eq!(card.badge(BadgeKind::Updated).unwrap().text, "Updated ");
    }

    #[test]
    fn test_en_us_star_badge() {
        let card = render_card(&full_record(), Locale::EnUs);
        assert_eq!(card.badge(BadgeKind::Stars).unwrap().text, "★ 1.5K");
    }
}
