//! Tests for the favorite endpoints.
//!
//! Favorites are a pure (user, food) relation, so these tests focus on
//! idempotent creation, per-user listing, and delete-by-pair semantics.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodex::{
    model::favorite::CreateFavoriteDto,
    server::controller::favorite::{
        create_favorite, delete_favorite, list_favorites, list_favorites_by_user,
    },
};

use super::*;

/// Tests that favoriting the same (user, food) pair twice stores one row.
///
/// Expected: Ok with 201 Created both times, list contains a single favorite
#[tokio::test]
async fn creating_favorite_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .build()
        .await?;

    for _ in 0..2 {
        let dto = CreateFavoriteDto {
            user: "user_1".to_string(),
            food: "food_1".to_string(),
        };

        let result = create_favorite(State(test.into_app_state()), Json(dto)).await;
        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let result = list_favorites(State(test.into_app_state())).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["result"]["favorites"].as_array().unwrap().len(), 1);

    Ok(())
}

/// Tests that per-user listing excludes other users' favorites.
///
/// Expected: Ok with 200 OK response containing only the first user's rows
#[tokio::test]
async fn listing_favorites_is_scoped_to_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_food("food_2", "Soup")
        .with_mock_user("user_1", "ada")
        .with_mock_user("user_2", "brin")
        .with_mock_favorite("user_1", "food_1")
        .with_mock_favorite("user_1", "food_2")
        .with_mock_favorite("user_2", "food_1")
        .build()
        .await?;

    let result =
        list_favorites_by_user(State(test.into_app_state()), Path("user_1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let favorites = body["result"]["favorites"].as_array().unwrap();
    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|f| f["user"] == "user_1"));

    Ok(())
}

/// Tests removing an existing favorite pair.
///
/// Expected: Ok with 200 OK response, pair no longer listed
#[tokio::test]
async fn success_deleting_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .with_mock_favorite("user_1", "food_1")
        .build()
        .await?;

    let result = delete_favorite(
        State(test.into_app_state()),
        Path(("user_1".to_string(), "food_1".to_string())),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result =
        list_favorites_by_user(State(test.into_app_state()), Path("user_1".to_string())).await;
    let resp = result.unwrap().into_response();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["result"]["favorites"].as_array().unwrap().is_empty());

    Ok(())
}

/// Tests not-found handling when removing a pair that was never favorited.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn error_deleting_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .build()
        .await?;

    let result = delete_favorite(
        State(test.into_app_state()),
        Path(("user_1".to_string(), "food_1".to_string())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
