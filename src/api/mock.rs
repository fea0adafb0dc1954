// src/api/mock.rs
//! An offline workspace holding one demo database.
//!
//! Used by `--mock` so the viewer can be tried without an integration secret.
//! Every database ID resolves to the same "Piggy Bank Transactions" ledger.

use crate::error::AppError;
use crate::model::{Database, PropertyKind, PropertyTypeValue, Record};
use crate::types::{DateValue, NotionId, RichTextItem, SelectOption};

/// ID the mock workspace lists its demo database under.
pub const MOCK_DATABASE_ID: &str = "5a1e0000000040008000000000000000";

const MOCK_DATABASE_TITLE: &str = "Piggy Bank Transactions";

/// (name, category, amount, date, status)
const TRANSACTIONS: [(&str, &str, f64, &str, &str); 10] = [
    ("Initial Deposit", "Income", 1500.0, "2023-10-01", "Completed"),
    ("Weekly Groceries", "Groceries", -75.5, "2023-10-05", "Completed"),
    ("Movie Night", "Entertainment", -25.0, "2023-10-07", "Completed"),
    ("Electricity Bill", "Utilities", -120.25, "2023-10-10", "Completed"),
    ("Bus Fare", "Transport", -15.75, "2023-10-12", "Pending"),
    ("Freelance Payment", "Income", 500.0, "2023-10-15", "Completed"),
    ("Contribution to Savings", "Savings", -200.0, "2023-10-16", "Completed"),
    ("Internet Bill", "Utilities", -60.0, "2023-10-20", "Completed"),
    ("Concert Tickets", "Entertainment", -150.0, "2023-10-22", "Cancelled"),
    ("Dinner with Friends", "Entertainment", -55.4, "2023-10-25", "Completed"),
];

#[derive(Debug, Clone, Default)]
pub struct MockNotionRepository;

impl MockNotionRepository {
    pub fn new() -> Self {
        Self
    }

    fn database(id: &NotionId) -> Database {
        Database::new(id.clone(), MOCK_DATABASE_TITLE)
            .with_property("Name", PropertyKind::Title)
            .with_property("Category", PropertyKind::Select)
            .with_property("Amount", PropertyKind::Number)
            .with_property("Date", PropertyKind::Date)
            .with_property("Status", PropertyKind::Select)
    }

    fn records() -> Result<Vec<Record>, AppError> {
        TRANSACTIONS
            .iter()
            .enumerate()
            .map(|(i, (name, category, amount, date, status))| {
                let id = NotionId::parse(&format!("5a1e00000000400080000000000000{:02x}", i + 1))?;
                Ok(Record::new(id)
                    .with_property(
                        "Name",
                        PropertyTypeValue::Title(vec![RichTextItem::plain_text(name)]),
                    )
                    .with_property(
                        "Category",
                        PropertyTypeValue::Select(Some(SelectOption::named(category))),
                    )
                    .with_property("Amount", PropertyTypeValue::Number(Some(*amount)))
                    .with_property("Date", PropertyTypeValue::Date(Some(DateValue::on(date))))
                    .with_property(
                        "Status",
                        PropertyTypeValue::Select(Some(SelectOption::named(status))),
                    ))
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for MockNotionRepository {
    async fn retrieve_database(&self, id: &NotionId) -> Result<Database, AppError> {
        log::debug!("Mock workspace serving demo database for {}", id);
        Ok(Self::database(id))
    }

    async fn query_records(
        &self,
        _id: &NotionId,
        page_size: usize,
    ) -> Result<Vec<Record>, AppError> {
        let mut records = Self::records()?;
        records.truncate(page_size);
        Ok(records)
    }

    async fn list_child_databases(&self, _page: &NotionId) -> Result<Vec<NotionId>, AppError> {
        Ok(vec![NotionId::parse(MOCK_DATABASE_ID)?])
    }
}
