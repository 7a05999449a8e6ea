use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::shared::query::QueryParams;

pub const DEFAULT_STATS_DAYS: i64 = 30;
pub const DEFAULT_TRANSACTIONS_LIMIT: u32 = 50;

/// `startDate`/`endDate` window of `GET /api/admin/transactions/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl StatsRange {
    /// The `days` days ending at `now`.
    pub fn last_days(days: i64, now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::days(days),
            end: now,
        }
    }

    pub fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("startDate", self.start.to_rfc3339_opts(SecondsFormat::Millis, true))
            .push("endDate", self.end.to_rfc3339_opts(SecondsFormat::Millis, true));
        q
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentTransactionsQuery {
    pub limit: u32,
    pub offset: u32,
}

impl Default for RecentTransactionsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TRANSACTIONS_LIMIT,
            offset: 0,
        }
    }
}

impl RecentTransactionsQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("limit", self.limit).push("offset", self.offset);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stats_range_query() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let range = StatsRange::last_days(30, now);
        assert_eq!(
            range.to_query().to_query_string(),
            "startDate=2024-03-01T12%3A00%3A00.000Z&endDate=2024-03-31T12%3A00%3A00.000Z"
        );
    }

    #[test]
    fn test_recent_defaults() {
        assert_eq!(
            RecentTransactionsQuery::default().to_query().to_query_string(),
            "limit=50&offset=0"
        );
    }
}
