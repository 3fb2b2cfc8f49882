use super::configure_routes;
use super::template::{find_entries, merge_entries};
use crate::config::ServerConfig;
use actix_web::test::{call_and_read_body_json, init_service, TestRequest};
use actix_web::{web, App};
use common::model::field::TemplateEntry;
use common::requests::{DataTemplateRequest, DataTemplateUpdate, Envelope};
use serde_json::Value;
use tempfile::TempDir;

const TEMPLATE: &str = "\
Name,Contact Details,1
Email,Contact Details,1
age,Numeric,3
churn,Response Variable,9
broken
income,Numeric,three
";

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn returns_requested_rows_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data_template.csv");
    std::fs::write(&path, TEMPLATE).unwrap();

    let entries = find_entries(&path, &names(&["churn", "Name", "missing", "income", "broken"])).unwrap();
    let found: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.code)).collect();
    assert_eq!(found, vec![("Name", 1), ("churn", 9)]);
}

#[test]
fn names_are_matched_exactly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data_template.csv");
    std::fs::write(&path, TEMPLATE).unwrap();

    assert!(find_entries(&path, &names(&["Age", " age"])).unwrap().is_empty());
}

#[test]
fn missing_template_has_no_suggestions() {
    let dir = TempDir::new().unwrap();
    let entries = find_entries(&dir.path().join("absent.csv"), &names(&["age"])).unwrap();
    assert!(entries.is_empty());
}

fn entry(name: &str, label: &str, code: i32) -> TemplateEntry {
    TemplateEntry {
        name: name.into(),
        label: label.into(),
        code,
    }
}

#[test]
fn merge_replaces_changed_rows_and_appends_new_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data_template.csv");
    std::fs::write(&path, TEMPLATE).unwrap();

    let changed = merge_entries(
        &path,
        &[
            entry("age", "Numeric", 3),
            entry("churn", "Yes/No", 5),
            entry("region", "Categorical", 2),
        ],
    )
    .unwrap();
    assert_eq!(changed, 2);

    let entries = find_entries(&path, &names(&["age", "churn", "region", "Name"])).unwrap();
    assert_eq!(
        entries,
        vec![
            entry("Name", "Contact Details", 1),
            entry("age", "Numeric", 3),
            entry("churn", "Yes/No", 5),
            entry("region", "Categorical", 2),
        ]
    );

    // Unrelated rows, malformed ones included, survive the rewrite.
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("broken\n"));
    assert!(text.contains("income,Numeric,three\n"));
}

#[test]
fn merge_without_changes_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data_template.csv");
    std::fs::write(&path, TEMPLATE).unwrap();

    let changed = merge_entries(&path, &[entry("age", "Numeric", 3)]).unwrap();
    assert_eq!(changed, 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), TEMPLATE);
}

#[test]
fn merge_creates_missing_template() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data_template.csv");

    merge_entries(&path, &[entry("age", "Numeric", 3)]).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "age,Numeric,3\n");
}

#[actix_web::test]
async fn update_endpoint_learns_types_for_later_lookups() {
    let dir = TempDir::new().unwrap();
    let config = ServerConfig {
        data_template_path: dir.path().join("data_template.csv"),
        credentials_path: dir.path().join("ga.json"),
        ..ServerConfig::default()
    };

    let app = init_service(
        App::new()
            .app_data(web::Data::new(config))
            .service(configure_routes()),
    )
    .await;

    let req = TestRequest::post()
        .uri("/api/v1/data_template/update")
        .set_json(DataTemplateUpdate {
            data: vec![entry("age", "Numeric", 3), entry("churn", "Response Variable", 9)],
        })
        .to_request();
    let body: Value = call_and_read_body_json(&app, req).await;
    assert_eq!(body, serde_json::json!({"success": true}));

    let req = TestRequest::post()
        .uri("/api/v1/data_template/details")
        .set_json(DataTemplateRequest {
            data: names(&["churn"]),
        })
        .to_request();
    let body: Envelope<Vec<TemplateEntry>> = call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap(), vec![entry("churn", "Response Variable", 9)]);
}

#[actix_web::test]
async fn details_endpoint_wraps_rows_in_envelope() {
    let dir = TempDir::new().unwrap();
    let config = ServerConfig {
        data_template_path: dir.path().join("data_template.csv"),
        credentials_path: dir.path().join("ga.json"),
        ..ServerConfig::default()
    };
    std::fs::write(&config.data_template_path, TEMPLATE).unwrap();

    let app = init_service(
        App::new()
            .app_data(web::Data::new(config))
            .service(configure_routes()),
    )
    .await;

    let req = TestRequest::post()
        .uri("/api/v1/data_template/details")
        .set_json(DataTemplateRequest {
            data: names(&["age", "Email"]),
        })
        .to_request();
    let body: Envelope<Vec<TemplateEntry>> = call_and_read_body_json(&app, req).await;

    assert!(body.success);
    assert_eq!(
        body.data.unwrap(),
        vec![
            TemplateEntry {
                name: "Email".into(),
                label: "Contact Details".into(),
                code: 1,
            },
            TemplateEntry {
                name: "age".into(),
                label: "Numeric".into(),
                code: 3,
            },
        ]
    );
}
