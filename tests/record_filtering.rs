// tests/record_filtering.rs
//! Search and table rendering over the demo ledger.

use notion_viewer::api::mock::MOCK_DATABASE_ID;
use notion_viewer::formatting::table::{CellValue, RenderConfig};
use notion_viewer::{
    derive_columns, display_value, filter_records, render_snapshot, MockNotionRepository,
    NotionGateway, NotionId, RecordFilter, SearchScope, TableBuilder,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

async fn ledger() -> notion_viewer::DatabaseSnapshot {
    let gateway = NotionGateway::new(Arc::new(MockNotionRepository::new()), None);
    gateway
        .retrieve_database(&NotionId::parse(MOCK_DATABASE_ID).unwrap())
        .await
        .unwrap()
}

fn names(records: &[notion_viewer::Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| display_value(r.property("Name")))
        .collect()
}

#[tokio::test]
async fn search_all_matches_any_property() {
    let snapshot = ledger().await;

    let hits = filter_records(&snapshot.records, &RecordFilter::new("ENTERTAIN", SearchScope::All));
    assert_eq!(
        names(&hits),
        vec!["Movie Night", "Concert Tickets", "Dinner with Friends"]
    );

    // Amounts are searched as their display string.
    let hits = filter_records(&snapshot.records, &RecordFilter::new("-15.75", SearchScope::All));
    assert_eq!(names(&hits), vec!["Bus Fare"]);
}

#[tokio::test]
async fn scoped_search_ignores_other_properties() {
    let snapshot = ledger().await;
    let scope: SearchScope = "Status".parse().unwrap();

    let hits = filter_records(&snapshot.records, &RecordFilter::new("pend", scope.clone()));
    assert_eq!(names(&hits), vec!["Bus Fare"]);

    let hits = filter_records(&snapshot.records, &RecordFilter::new("bus", scope));
    assert!(hits.is_empty());
}

#[tokio::test]
async fn filtering_never_reorders_or_invents_records() {
    let snapshot = ledger().await;
    let filter = RecordFilter::new("e", SearchScope::All);

    let once = filter_records(&snapshot.records, &filter);
    assert!(once.len() <= snapshot.records.len());
    assert_eq!(filter_records(&once, &filter), once);

    let positions: Vec<usize> = once
        .iter()
        .map(|hit| snapshot.records.iter().position(|r| r.id == hit.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[tokio::test]
async fn table_cells_follow_schema() {
    let snapshot = ledger().await;
    let columns: Vec<String> = derive_columns(&snapshot.database, &snapshot.records)
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(columns, vec!["Name", "Category", "Amount", "Date", "Status"]);

    let table = TableBuilder::new(&snapshot.database, &snapshot.records).build();
    assert_eq!(table.row_count(), 10);

    let bus_fare = &table.rows[4].cells;
    assert_eq!(bus_fare[0], CellValue::Title("Bus Fare".into()));
    assert_eq!(bus_fare[2], CellValue::Text("-15.75".into()));
    assert_eq!(bus_fare[3], CellValue::Date("2023-10-12".into()));
    match &bus_fare[4] {
        CellValue::Badge { label, color } => {
            assert_eq!(label, "Pending");
            assert_eq!(*color, notion_viewer::Color::for_badge("Pending"));
        }
        other => panic!("expected a badge, got {:?}", other),
    }
}

#[tokio::test]
async fn rendered_view_reports_counts() {
    let snapshot = ledger().await;
    let out = render_snapshot(
        &snapshot,
        &RecordFilter::new("income", SearchScope::Property("Category".into())),
        RenderConfig::default(),
    );

    assert!(out.contains("10 records · Last updated "));
    assert!(out.contains("Showing 2 of 10 records"));
    assert!(out.contains("| Name | Category | Amount | Date | Status |\n| --- | --- | ---: | :---: | --- |\n"));
    assert!(out.contains("| **Initial Deposit** | `Income` | 1500 | 2023-10-01 | `Completed` |"));
    assert!(out.contains("| **Freelance Payment** | `Income` | 500 | 2023-10-15 | `Completed` |"));
}
