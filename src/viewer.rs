// src/viewer.rs
//! Terminal rendering of a database snapshot, with search and retries.

use crate::constants::{CLIENT_FETCH_RETRIES, CLIENT_RETRY_BASE_DELAY_MS};
use crate::error::AppError;
use crate::formatting::table::{render_records, RenderConfig};
use crate::formatting::{filter_records, RecordFilter};
use crate::gateway::{DatabaseSnapshot, NotionGateway};
use crate::types::NotionId;
use chrono::DateTime;
use std::fmt::Write;
use std::time::Duration;

const NO_RECORDS: &str = "No records found";
const HINT_FILTERED: &str = "Try adjusting your search criteria.";
const HINT_EMPTY: &str = "This database appears to be empty.";

/// Fetches snapshots through a gateway, retrying failed fetches.
pub struct Viewer {
    gateway: NotionGateway,
    retries: u32,
    base_delay: Duration,
}

impl Viewer {
    pub fn new(gateway: NotionGateway) -> Self {
        Self {
            gateway,
            retries: CLIENT_FETCH_RETRIES,
            base_delay: Duration::from_millis(CLIENT_RETRY_BASE_DELAY_MS),
        }
    }

    /// Sets the first retry delay. Each later retry waits twice as long.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Fetches a snapshot, retrying up to `CLIENT_FETCH_RETRIES` more times.
    ///
    /// Invalid input is never retried.
    pub async fn fetch(&self, id: &NotionId) -> Result<DatabaseSnapshot, AppError> {
        let mut attempt = 0;
        loop {
            match self.gateway.retrieve_database(id).await {
                Ok(snapshot) => return Ok(snapshot),
                Err(e) if attempt < self.retries && !e.is_invalid_input() => {
                    let delay = self.base_delay * 2u32.pow(attempt);
                    attempt += 1;
                    log::warn!(
                        "Fetching {} failed ({}), retry {}/{} in {:?}",
                        id,
                        e,
                        attempt,
                        self.retries,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Fetches and renders a database in one step.
    pub async fn show(
        &self,
        id: &NotionId,
        filter: &RecordFilter,
        config: RenderConfig,
    ) -> Result<String, AppError> {
        let snapshot = self.fetch(id).await?;
        Ok(render_snapshot(&snapshot, filter, config))
    }
}

/// Renders the header, the filtered table, and an empty state when needed.
pub fn render_snapshot(
    snapshot: &DatabaseSnapshot,
    filter: &RecordFilter,
    config: RenderConfig,
) -> String {
    let visible = filter_records(&snapshot.records, filter);
    let mut out = String::new();

    let _ = writeln!(out, "# {}", snapshot.database.display_title());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} records · Last updated {}",
        snapshot.record_count,
        format_timestamp(&snapshot.last_updated)
    );
    let _ = writeln!(
        out,
        "Showing {} of {} records",
        visible.len(),
        snapshot.records.len()
    );
    let _ = writeln!(out);

    if visible.is_empty() {
        let hint = if filter.is_empty() {
            HINT_EMPTY
        } else {
            HINT_FILTERED
        };
        let _ = writeln!(out, "{}", NO_RECORDS);
        let _ = writeln!(out, "{}", hint);
        return out;
    }

    out.push_str(&render_records(&snapshot.database, &visible, config));
    out
}

fn format_timestamp(rfc3339: &str) -> String {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|_| rfc3339.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockNotionRepository, NotionRepository};
    use crate::formatting::SearchScope;
    use crate::model::{Database, Record};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    /// Fails the first `failures` database retrievals, then defers to the mock.
    struct FlakyRepository {
        failures: u32,
        calls: AtomicU32,
        inner: MockNotionRepository,
    }

    impl FlakyRepository {
        fn new(failures: u32) -> Arc<Self> {
            Arc::new(Self {
                failures,
                calls: AtomicU32::new(0),
                inner: MockNotionRepository::new(),
            })
        }
    }

    #[async_trait::async_trait]
    impl NotionRepository for FlakyRepository {
        async fn retrieve_database(&self, id: &NotionId) -> Result<Database, AppError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
                return Err(AppError::MalformedResponse("connection reset".into()));
            }
            self.inner.retrieve_database(id).await
        }

        async fn query_records(&self, id: &NotionId, n: usize) -> Result<Vec<Record>, AppError> {
            self.inner.query_records(id, n).await
        }

        async fn list_child_databases(&self, page: &NotionId) -> Result<Vec<NotionId>, AppError> {
            self.inner.list_child_databases(page).await
        }
    }

    fn id() -> NotionId {
        NotionId::parse(crate::api::mock::MOCK_DATABASE_ID).unwrap()
    }

    fn viewer(repo: Arc<FlakyRepository>) -> Viewer {
        Viewer::new(NotionGateway::new(repo, None)).with_retry_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_retries_twice_then_succeeds() {
        let repo = FlakyRepository::new(2);
        let snapshot = viewer(repo.clone()).fetch(&id()).await.unwrap();
        assert_eq!(snapshot.record_count, 10);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_three_attempts() {
        let repo = FlakyRepository::new(5);
        let err = viewer(repo.clone()).fetch(&id()).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_search_narrows_rows() {
        let snapshot = viewer(FlakyRepository::new(0)).fetch(&id()).await.unwrap();
        let filter = RecordFilter::new("bill", SearchScope::Property("Name".into()));
        let out = render_snapshot(&snapshot, &filter, RenderConfig::default());

        assert!(out.starts_with("# Piggy Bank Transactions\n"));
        assert!(out.contains("Showing 2 of 10 records"));
        assert!(out.contains("| **Electricity Bill** | `Utilities` | -120.25 | 2023-10-10 | `Completed` |"));
        assert!(out.contains("**Internet Bill**"));
        assert!(!out.contains("Movie Night"));
    }

    #[tokio::test]
    async fn test_empty_states() {
        let snapshot = viewer(FlakyRepository::new(0)).fetch(&id()).await.unwrap();
        let filter = RecordFilter::new("zzz", SearchScope::All);
        let out = render_snapshot(&snapshot, &filter, RenderConfig::default());
        assert!(out.contains("Showing 0 of 10 records"));
        assert!(out.ends_with("No records found\nTry adjusting your search criteria.\n"));

        let mut empty = snapshot.clone();
        empty.records.clear();
        empty.record_count = 0;
        let out = render_snapshot(&empty, &RecordFilter::default(), RenderConfig::default());
        assert!(out.ends_with("No records found\nThis database appears to be empty.\n"));
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2023-10-25T08:05:00.123Z"),
            "2023-10-25 08:05:00 UTC"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
