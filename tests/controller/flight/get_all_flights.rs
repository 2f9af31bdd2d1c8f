//! Tests for the list-all-records endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{NaiveDate, NaiveTime};
use tower::ServiceExt;

use flightlog::server::{data::flight::FlightRepository, model::flight::FlightRecord};

use crate::setup::{body_bytes, test_setup, test_setup_without_tables};

fn get_all_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/all")
        .body(Body::empty())
        .unwrap()
}

/// Expect an empty JSON array when nothing has been persisted
#[tokio::test]
async fn returns_empty_array_without_records() {
    let test = test_setup().await;

    let response = test.app.clone().oneshot(get_all_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, serde_json::json!([]));
}

/// Expect a database failure on the list endpoint to render a database
/// error body, not the upload pipeline's processing prefix
#[tokio::test]
async fn database_failure_renders_database_error_body() {
    let test = test_setup_without_tables().await;

    let response = test.app.clone().oneshot(get_all_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("Database error:"));
    assert!(!body.starts_with("Error processing file:"));
}

/// Expect persisted records back in the documented camelCase shape
#[tokio::test]
async fn returns_persisted_records() {
    let test = test_setup().await;

    let record = FlightRecord {
        registration_id: Some(100),
        date: NaiveDate::from_ymd_opt(2024, 5, 1),
        time_start: NaiveTime::from_hms_opt(10, 15, 0),
        time_end: NaiveTime::from_hms_opt(11, 20, 0),
        region: Some("Московский".to_string()),
        lat: Some(55.7558),
        lon: Some(37.6176),
        flight_type: Some("BLA".to_string()),
        purpose: Some("training".to_string()),
        main_reg_number: Some("REG-001".to_string()),
    };
    FlightRepository::new(&test.state.db)
        .save_all(vec![record])
        .await
        .unwrap();

    let response = test.app.clone().oneshot(get_all_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_slice(&body_bytes(response).await).unwrap();

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert!(entry["id"].as_i64().unwrap() > 0);
    assert_eq!(entry["registrationId"], 100);
    assert_eq!(entry["date"], "2024-05-01");
    assert_eq!(entry["timeStart"], "10:15:00");
    assert_eq!(entry["timeEnd"], "11:20:00");
    assert_eq!(entry["region"], "Московский");
    assert_eq!(entry["flightType"], "BLA");
    assert_eq!(entry["purpose"], "training");
    assert_eq!(entry["mainRegNumber"], "REG-001");
}

/// Expect records with absent optional fields to serialize as nulls
#[tokio::test]
async fn absent_fields_serialize_as_null() {
    let test = test_setup().await;

    let record = FlightRecord {
        registration_id: Some(7),
        ..Default::default()
    };
    FlightRepository::new(&test.state.db)
        .save_all(vec![record])
        .await
        .unwrap();

    let response = test.app.clone().oneshot(get_all_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_slice(&body_bytes(response).await).unwrap();

    let entry = &body.as_array().unwrap()[0];
    assert_eq!(entry["registrationId"], 7);
    assert_eq!(entry["date"], serde_json::Value::Null);
    assert_eq!(entry["mainRegNumber"], serde_json::Value::Null);
}
