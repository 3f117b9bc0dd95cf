//! Tests for the user endpoints.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodex::{
    model::user::{CreateUserDto, UpdateUserDto, UserResponseDto},
    server::controller::user::{create_user, delete_user, get_user, list_users, update_user},
};

use super::*;

/// Tests listing users when the table is empty.
///
/// Expected: Ok with 200 OK response and an empty list
#[tokio::test]
async fn success_listing_no_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;

    let result = list_users(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["result"]["users"], serde_json::json!([]));

    Ok(())
}

/// Tests successful user creation and fetching the created row back.
///
/// Expected: Ok with 201 Created, then Ok with 200 OK for the fetch
#[tokio::test]
async fn success_creating_and_fetching_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;

    let dto = CreateUserDto {
        username: "ada".to_string(),
    };

    let result = create_user(State(test.into_app_state()), Json(dto)).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: UserResponseDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.result.user.username, "ada");

    let result = get_user(State(test.into_app_state()), Path(body.result.user.id)).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests updating an existing user's name.
///
/// Expected: Ok with 200 OK response carrying the new username
#[tokio::test]
async fn success_updating_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_user("user_1", "ada")
        .build()
        .await?;

    let dto = UpdateUserDto {
        username: Some("lovelace".to_string()),
    };

    let result = update_user(
        State(test.into_app_state()),
        Path("user_1".to_string()),
        Json(dto),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: UserResponseDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.result.user.username, "lovelace");

    Ok(())
}

/// Tests not-found handling when deleting a missing user.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn error_deleting_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;

    let result = delete_user(State(test.into_app_state()), Path("missing".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
