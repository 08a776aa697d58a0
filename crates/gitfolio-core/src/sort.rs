use chrono::{DateTime, Utc};

use crate::format::parse_timestamp;
use crate::models::RepositoryRecord;

/// Most recent activity: last push, else last update, else the epoch.
///
/// An empty string counts as absent. A present timestamp that doesn't parse
/// also sorts as the epoch.
pub fn activity_timestamp(record: &RepositoryRecord) -> DateTime<Utc> {
    [record.pushed_at.as_deref(), record.updated_at.as_deref()]
        .into_iter()
        .flatten()
        .find(|raw| !raw.is_empty())
        .and_then(parse_timestamp)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// New vector, newest activity first. Equal timestamps keep their input order.
pub fn sort_by_recency<'a, I>(records: I) -> Vec<RepositoryRecord>
where
    I: IntoIterator<Item = &'a RepositoryRecord>,
{
    let mut sorted: Vec<RepositoryRecord> = records.into_iter().cloned().collect();
    sorted.sort_by_key(|r| std::cmp::Reverse(activity_timestamp(r)));
    sorted
}
