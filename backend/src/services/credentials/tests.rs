use super::configure_routes;
use super::store::{validate_filename, StoreError};
use crate::config::ServerConfig;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test::{call_and_read_body_json, init_service, TestRequest};
use actix_web::{web, App};
use common::requests::Envelope;
use serde_json::Value;
use tempfile::TempDir;

const BOUNDARY: &str = "dashboard-test-boundary";

fn config_in(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        credentials_path: dir.path().join("google_analytics_cred.json"),
        data_template_path: dir.path().join("data_template.csv"),
        open_browser: false,
        ..ServerConfig::default()
    }
}

fn multipart_body(part_name: &str, filename: &str, contents: &str) -> String {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{n}\"; filename=\"{f}\"\r\nContent-Type: application/octet-stream\r\n\r\n{c}\r\n--{b}--\r\n",
        b = BOUNDARY,
        n = part_name,
        f = filename,
        c = contents
    )
}

fn upload_request(part_name: &str, filename: &str, contents: &str) -> TestRequest {
    TestRequest::post()
        .uri("/api/v1/ga/cred_set")
        .insert_header((
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        ))
        .set_payload(multipart_body(part_name, filename, contents))
}

#[actix_web::test]
async fn check_reports_missing_then_installed_file() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let app = init_service(
        App::new()
            .app_data(web::Data::new(config.clone()))
            .service(configure_routes()),
    )
    .await;

    let req = TestRequest::get().uri("/api/v1/ga/check_cred").to_request();
    let body: Envelope<Value> = call_and_read_body_json(&app, req).await;
    assert!(body.success);
    assert_eq!(body.result, Some(false));

    std::fs::write(&config.credentials_path, "{}").unwrap();
    let req = TestRequest::get().uri("/api/v1/ga/check_cred").to_request();
    let body: Envelope<Value> = call_and_read_body_json(&app, req).await;
    assert_eq!(body.result, Some(true));
}

#[actix_web::test]
async fn upload_replaces_and_remove_deletes() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    std::fs::write(&config.credentials_path, "old").unwrap();
    let app = init_service(
        App::new()
            .app_data(web::Data::new(config.clone()))
            .service(configure_routes()),
    )
    .await;

    let req = upload_request("file", "service-account.JSON", r#"{"type":"service_account"}"#)
        .to_request();
    let body: Envelope<Value> = call_and_read_body_json(&app, req).await;
    assert!(body.success, "{:?}", body.error);
    assert_eq!(
        std::fs::read_to_string(&config.credentials_path).unwrap(),
        r#"{"type":"service_account"}"#
    );

    let req = TestRequest::get().uri("/api/v1/ga/cred_remove").to_request();
    let body: Envelope<Value> = call_and_read_body_json(&app, req).await;
    assert!(body.success);
    assert!(!config.credentials_path.exists());

    let req = TestRequest::get().uri("/api/v1/ga/cred_remove").to_request();
    let body: Envelope<Value> = call_and_read_body_json(&app, req).await;
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some("No credentials file is installed."));
}

#[actix_web::test]
async fn upload_rejections_are_reported_in_envelope() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let app = init_service(
        App::new()
            .app_data(web::Data::new(config.clone()))
            .service(configure_routes()),
    )
    .await;

    let cases = [
        (
            upload_request("file", "notes.txt", "x"),
            "Invalid file format. File must be of type json",
        ),
        (upload_request("file", "", "x"), "No selected file."),
        (upload_request("other", "ga.json", "{}"), "No file part."),
    ];

    for (req, expected) in cases {
        let body: Envelope<Value> = call_and_read_body_json(&app, req.to_request()).await;
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some(expected));
    }
    assert!(!config.credentials_path.exists());
}

#[test]
fn filename_validation_follows_extension_rules() {
    assert!(validate_filename("ga.json", &["json"]).is_ok());
    assert!(validate_filename("ga.backup.Json", &["json"]).is_ok());
    assert!(matches!(
        validate_filename("json", &["json"]),
        Err(StoreError::InvalidExtension(_))
    ));
    assert!(matches!(
        validate_filename("", &["json"]),
        Err(StoreError::EmptyFilename)
    ));
}
