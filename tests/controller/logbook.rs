//! Tests for the logbook and feed projection endpoints.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{TimeZone, Utc};
use foodex::server::controller::logbook::{get_feed, get_logbook};

use super::*;

/// Tests the logbook projection for a user with captures and a favorite.
///
/// Seeds two captures on different days plus a favorite on one food, then
/// checks newest-first ordering, favorite marking, and date formatting.
///
/// Expected: Ok with 200 OK response, newest capture first
#[tokio::test]
async fn success_projecting_logbook() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_food("food_2", "Soup")
        .with_mock_user("user_1", "ada")
        .with_mock_capture(
            "cap_1",
            "food_1",
            "user_1",
            Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap(),
        )
        .with_mock_capture(
            "cap_2",
            "food_2",
            "user_1",
            Utc.with_ymd_and_hms(2024, 3, 8, 9, 30, 0).unwrap(),
        )
        .with_mock_favorite("user_1", "food_1")
        .build()
        .await?;

    let result = get_logbook(State(test.into_app_state()), Path("user_1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let entries = body["result"]["logbook"].as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "cap_2");
    assert_eq!(entries[0]["food_name"], "Soup");
    assert_eq!(entries[0]["capture_date"], "3/8/2024, 09:30");
    assert_eq!(entries[0]["is_favorite"], false);
    assert_eq!(entries[1]["id"], "cap_1");
    assert_eq!(entries[1]["food_name"], "Taco");
    assert_eq!(entries[1]["is_favorite"], true);

    Ok(())
}

/// Tests that the logbook only contains the requested user's captures.
///
/// Expected: Ok with 200 OK response containing one entry
#[tokio::test]
async fn logbook_is_scoped_to_user() -> Result<(), TestError> {
    let date = Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap();

    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .with_mock_user("user_2", "brin")
        .with_mock_capture("cap_1", "food_1", "user_1", date)
        .with_mock_capture("cap_2", "food_1", "user_2", date)
        .build()
        .await?;

    let result = get_logbook(State(test.into_app_state()), Path("user_1".to_string())).await;

    let resp = result.unwrap().into_response();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let entries = body["result"]["logbook"].as_array().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "cap_1");

    Ok(())
}

/// Tests the cross-user feed with usernames resolved.
///
/// Expected: Ok with 200 OK response containing every capture with its
/// capturing user's name
#[tokio::test]
async fn success_projecting_feed() -> Result<(), TestError> {
    let date = Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap();

    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .with_mock_user("user_2", "brin")
        .with_mock_capture("cap_1", "food_1", "user_1", date)
        .with_mock_capture("cap_2", "food_1", "user_2", date)
        .build()
        .await?;

    let result = get_feed(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let entries = body["result"]["feed"].as_array().unwrap();

    assert_eq!(entries.len(), 2);
    let usernames: Vec<&str> = entries
        .iter()
        .map(|e| e["username"].as_str().unwrap())
        .collect();
    assert!(usernames.contains(&"ada"));
    assert!(usernames.contains(&"brin"));

    Ok(())
}

/// Tests failure handling when the source tables do not exist.
///
/// Expected: Err with 500 Internal Server Error response
#[tokio::test]
async fn error_when_sources_fail() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_logbook(State(test.into_app_state()), Path("user_1".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
