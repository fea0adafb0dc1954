// tests/property_extraction.rs
//! Parses captured Notion responses and checks the strings users see.

use notion_viewer::api::parser::{parse_database_response, parse_query_response};
use notion_viewer::api::ApiResponse;
use notion_viewer::{display_value, property_names, Color, PropertyKind, PropertyTypeValue};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

fn ok(body: &str) -> ApiResponse<String> {
    ApiResponse {
        data: body.to_string(),
        status: StatusCode::OK,
        url: "https://api.notion.com/v1/test".to_string(),
    }
}

#[test]
fn database_schema_keeps_declared_order() {
    let db = parse_database_response(ok(include_str!("fixtures/database_budget.json"))).unwrap();

    assert_eq!(db.display_title(), "Household Budget");
    assert_eq!(
        property_names(&db, &[]),
        vec!["Name", "Amount", "Category", "Tags", "Paid", "Due", "Owner", "Receipt", "Stage"]
    );
    assert_eq!(db.properties["Stage"].kind, PropertyKind::Unknown("status".into()));
    assert_eq!(db.id.to_hyphenated(), "a02dd81a-36b6-4c1b-9c74-bb5c7c2e8ea2");
}

#[test]
fn populated_properties_render_display_strings() {
    let records = parse_query_response(ok(include_str!("fixtures/query_budget.json"))).unwrap();
    let groceries = &records[0];

    let shown: Vec<(&str, String)> = groceries
        .properties
        .iter()
        .map(|(name, value)| (name.as_str(), display_value(Some(value))))
        .collect();

    assert_eq!(
        shown,
        vec![
            ("Name", "Weekly Groceries".to_string()),
            ("Amount", "-75.5".to_string()),
            ("Category", "Groceries".to_string()),
            ("Tags", "Food, Weekly".to_string()),
            ("Paid", "Yes".to_string()),
            ("Due", "2023-10-05".to_string()),
            ("Owner", "Ada Lovelace".to_string()),
            ("Receipt", "https://example.com/receipts/1".to_string()),
            ("Stage", "".to_string()),
        ]
    );
}

#[test]
fn empty_payloads_render_as_empty_strings() {
    let records = parse_query_response(ok(include_str!("fixtures/query_budget.json"))).unwrap();
    let electricity = &records[1];

    for name in ["Category", "Tags", "Due", "Owner", "Receipt", "Stage"] {
        assert_eq!(
            display_value(electricity.property(name)),
            "",
            "property {} should be empty",
            name
        );
    }
    assert_eq!(display_value(electricity.property("Amount")), "0");
    assert_eq!(display_value(electricity.property("Paid")), "No");
    assert_eq!(display_value(electricity.property("Missing")), "");
}

#[test]
fn unknown_option_colors_fall_back_to_default() {
    let records = parse_query_response(ok(include_str!("fixtures/query_budget.json"))).unwrap();
    match &records[0].property("Tags").unwrap().type_specific_value {
        PropertyTypeValue::MultiSelect(options) => {
            assert_eq!(options[0].color, Color::Orange);
            assert_eq!(options[1].color, Color::Default);
        }
        other => panic!("expected multi_select, got {:?}", other),
    }
}

#[test]
fn records_serialize_back_to_notion_shape() {
    let records = parse_query_response(ok(include_str!("fixtures/query_budget.json"))).unwrap();
    let json = serde_json::to_value(&records[0]).unwrap();

    assert_eq!(json["id"], "5f0c1a2b-0000-4000-8000-000000000001");
    assert_eq!(json["object"], "page");
    assert_eq!(json["properties"]["Amount"]["type"], "number");
    assert_eq!(json["properties"]["Stage"]["status"]["name"], "Done");
    assert_eq!(json["properties"]["Name"]["title"][0]["plain_text"], "Weekly Groceries");
}

#[test]
fn null_property_does_not_fail_the_page() {
    let body = r#"{
        "object": "list",
        "results": [
            {
                "object": "page",
                "id": "6b1d2c3e-0000-4000-8000-00000000000a",
                "properties": {
                    "Name": {"id": "title", "type": "title", "title": [{"plain_text": "Rent"}]},
                    "Ghost": null
                }
            }
        ],
        "next_cursor": null,
        "has_more": false
    }"#;

    let records = parse_query_response(ok(body)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(display_value(records[0].property("Name")), "Rent");
    assert_eq!(display_value(records[0].property("Ghost")), "");
}
