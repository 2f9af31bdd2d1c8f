//! Tests for the upload-and-parse endpoint.
//!
//! Drives the real router with multipart requests: upload validation,
//! transform failure with guaranteed cleanup, and the full happy path
//! through persistence.

use axum::http::StatusCode;
use tower::ServiceExt;

use crate::setup::{
    body_bytes, multipart_request, test_setup, upload_request, workbook_bytes,
};

/// Expect 400 with the exact rejection body for a non-.xlsx filename,
/// with no filesystem or store side effects
#[tokio::test]
async fn rejects_non_excel_filename() {
    let test = test_setup().await;
    test.with_copy_transform();

    let request = upload_request("flights.csv", &workbook_bytes(1));
    let response = test.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_bytes(response).await,
        b"Only Excel files (.xlsx) are allowed"
    );

    assert!(!test.config.input_path().exists());
    assert!(!test.config.output_path().exists());

    let all = flightlog::server::data::flight::FlightRepository::new(&test.state.db)
        .find_all()
        .await
        .unwrap();
    assert!(all.is_empty());
}

/// Expect 400 when the file field carries no bytes
#[tokio::test]
async fn rejects_empty_file() {
    let test = test_setup().await;

    let request = upload_request("flights.xlsx", b"");
    let response = test.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_bytes(response).await, b"Please select a file to upload");
}

/// Expect 400 when the multipart payload has no `file` field at all
#[tokio::test]
async fn rejects_missing_file_field() {
    let test = test_setup().await;

    let request = multipart_request("attachment", "flights.xlsx", &workbook_bytes(1));
    let response = test.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_bytes(response).await, b"Please select a file to upload");
}

/// Expect 500 with the error detail when the transform script fails,
/// and both fixed temp paths removed afterwards
#[tokio::test]
async fn transform_failure_returns_500_and_cleans_up() {
    let test = test_setup().await;
    test.with_failing_transform(1);

    let request = upload_request("flights.xlsx", &workbook_bytes(1));
    let response = test.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("Error processing file:"));
    assert!(body.contains("exit code"));

    assert!(!test.config.input_path().exists());
    assert!(!test.config.output_path().exists());
}

/// Expect the full pipeline to process a 3-row spreadsheet end to end
#[tokio::test]
async fn processes_three_row_spreadsheet() {
    let test = test_setup().await;
    test.with_copy_transform();

    let request = upload_request("flights_may.xlsx", &workbook_bytes(3));
    let response = test.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["message"], "File processed successfully");
    assert_eq!(body["originalFileName"], "flights_may.xlsx");
    assert_eq!(body["recordsProcessed"], 3);

    assert!(!test.config.input_path().exists());
    assert!(!test.config.output_path().exists());

    let all = flightlog::server::data::flight::FlightRepository::new(&test.state.db)
        .find_all()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    for model in &all {
        assert!(model.registration_id.is_some());
        assert!(model.date.is_some());
        assert!(model.main_reg_number.is_some());
    }
}

/// Expect overlapping uploads to serialize on the single-slot parsing
/// directory: both must succeed, with neither colliding on the fixed
/// input path while the other's transform is still running
#[tokio::test]
async fn overlapping_uploads_serialize_instead_of_racing() {
    let test = test_setup().await;
    test.with_slow_copy_transform();

    let first = test
        .app
        .clone()
        .oneshot(upload_request("flights_a.xlsx", &workbook_bytes(2)));
    let second = test
        .app
        .clone()
        .oneshot(upload_request("flights_b.xlsx", &workbook_bytes(2)));

    let (first, second) = tokio::join!(first, second);

    assert_eq!(first.unwrap().status(), StatusCode::OK);
    assert_eq!(second.unwrap().status(), StatusCode::OK);

    assert!(!test.config.input_path().exists());
    assert!(!test.config.output_path().exists());

    let all = flightlog::server::data::flight::FlightRepository::new(&test.state.db)
        .find_all()
        .await
        .unwrap();
    assert_eq!(all.len(), 4);
}

/// Expect a second upload to succeed after the first cleaned up the fixed paths
#[tokio::test]
async fn sequential_uploads_reuse_the_fixed_paths() {
    let test = test_setup().await;
    test.with_copy_transform();

    for _ in 0..2 {
        let request = upload_request("flights.xlsx", &workbook_bytes(2));
        let response = test.app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let all = flightlog::server::data::flight::FlightRepository::new(&test.state.db)
        .find_all()
        .await
        .unwrap();
    assert_eq!(all.len(), 4);
}
