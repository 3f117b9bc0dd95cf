//! Tests for the capture endpoints.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{TimeZone, Utc};
use foodex::{
    model::capture::{CaptureResponseDto, CreateCaptureDto, UpdateCaptureDto},
    server::controller::capture::{
        create_capture, delete_capture, get_capture, list_captures, update_capture,
    },
};

use super::*;

/// Tests successful capture creation against seeded parents.
///
/// Expected: Ok with 201 Created response echoing the new capture
#[tokio::test]
async fn success_creating_capture() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .build()
        .await?;

    let dto = CreateCaptureDto {
        food: "food_1".to_string(),
        date: Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap(),
        user: "user_1".to_string(),
        image_url: "https://bucket.test/captures/cap_1".to_string(),
    };

    let result = create_capture(State(test.into_app_state()), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: CaptureResponseDto = serde_json::from_slice(&bytes).unwrap();
    assert!(body.success);
    assert_eq!(body.result.capture.food, "food_1");

    Ok(())
}

/// Tests listing seeded captures.
///
/// Expected: Ok with 200 OK response containing both captures
#[tokio::test]
async fn success_listing_captures() -> Result<(), TestError> {
    let date = Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap();

    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .with_mock_capture("cap_1", "food_1", "user_1", date)
        .with_mock_capture("cap_2", "food_1", "user_1", date)
        .build()
        .await?;

    let result = list_captures(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["result"]["captures"].as_array().unwrap().len(), 2);

    Ok(())
}

/// Tests updating a capture's image URL without touching other fields.
///
/// Expected: Ok with 200 OK response carrying the new URL and original food
#[tokio::test]
async fn success_updating_capture_image_url() -> Result<(), TestError> {
    let date = Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap();

    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .with_mock_capture("cap_1", "food_1", "user_1", date)
        .build()
        .await?;

    let dto = UpdateCaptureDto {
        image_url: Some("https://bucket.test/captures/retaken".to_string()),
        ..Default::default()
    };

    let result = update_capture(
        State(test.into_app_state()),
        Path("cap_1".to_string()),
        Json(dto),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: CaptureResponseDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body.result.capture.image_url,
        "https://bucket.test/captures/retaken"
    );
    assert_eq!(body.result.capture.food, "food_1");

    Ok(())
}

/// Tests not-found handling when fetching a missing capture.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn error_fetching_missing_capture() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;

    let result = get_capture(State(test.into_app_state()), Path("missing".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deletion of an existing capture.
///
/// Expected: Ok with 200 OK response and the capture gone afterwards
#[tokio::test]
async fn success_deleting_capture() -> Result<(), TestError> {
    let date = Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap();

    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .with_mock_capture("cap_1", "food_1", "user_1", date)
        .build()
        .await?;

    let result = delete_capture(State(test.into_app_state()), Path("cap_1".to_string())).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_capture(State(test.into_app_state()), Path("cap_1".to_string())).await;
    assert!(result.is_err());

    Ok(())
}
