use crate::models::RepositoryRecord;

/// Case-insensitive substring match over a record's text fields.
///
/// A blank query matches everything. Fields joined: name, full name,
/// description, language and every topic, skipping empty ones.
pub fn matches(record: &RepositoryRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    search_text(record).contains(&needle)
}

/// The lowercase haystack `matches` searches in
pub fn search_text(record: &RepositoryRecord) -> String {
    let fields = [
        Some(record.name.as_str()),
        Some(record.full_name.as_str()),
        record.description.as_deref(),
        record.language.as_deref(),
    ];

    fields
        .into_iter()
        .flatten()
        .chain(record.topics.iter().map(String::as_str))
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RepositoryRecord {
        RepositoryRecord {
            name: "gitfolio".to_string(),
            full_name: "octocat/gitfolio".to_string(),
            html_url: "https://github.com/octocat/gitfolio".to_string(),
            description: Some("Terminal Portfolio".to_string()),
            language: Some("Rust".to_string()),
            topics: vec!["tui".to_string(), "GitHub-API".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_query_matches() {
        assert!(matches(&record(), ""));
        assert!(matches(&record(), "   "));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let r = record();
        assert!(matches(&r, "PORTFOLIO"));
        assert!(matches(&r, "  rust "));
        assert!(matches(&r, "octocat/git"));
        assert!(matches(&r, "github-api"));
        assert!(!matches(&r, "python"));
    }

    #[test]
    fn test_match_spans_field_separator() {
        // fields are joined with a single space, so a query can straddle them
        assert!(matches(&record(), "portfolio rust"));
        assert!(!matches(&record(), "portfoliorust"));
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let r = RepositoryRecord {
            name: "bare".to_string(),
            full_name: "octocat/bare".to_string(),
            description: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(search_text(&r), "bare octocat/bare");
        assert!(!matches(&r, "none"));
    }
}
