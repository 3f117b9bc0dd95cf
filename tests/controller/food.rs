//! Tests for the food catalog endpoints.
//!
//! Verifies listing, creation, lookup by id and by unique name, capture
//! counting, updates, and deletion including not-found handling.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{TimeZone, Utc};
use foodex::{
    model::food::{CreateFoodDto, FoodResponseDto, FoodsResponseDto, UpdateFoodDto},
    server::controller::food::{
        create_food, delete_food, get_food, get_food_by_name, get_food_captures, list_foods,
        update_food,
    },
};

use super::*;

/// Tests successful listing of seeded foods.
///
/// Expected: Ok with 200 OK response containing both foods
#[tokio::test]
async fn success_listing_foods() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_food("food_2", "Soup")
        .build()
        .await?;

    let result = list_foods(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: FoodsResponseDto = serde_json::from_slice(&bytes).unwrap();
    assert!(body.success);
    assert_eq!(body.result.foods.len(), 2);

    Ok(())
}

/// Tests successful food creation.
///
/// Expected: Ok with 201 Created response echoing the new food
#[tokio::test]
async fn success_creating_food() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;

    let dto = CreateFoodDto {
        foodname: "Ramen".to_string(),
        rarity: 3,
        origin: "Japan".to_string(),
        description: "Wheat noodles in broth".to_string(),
    };

    let result = create_food(State(test.into_app_state()), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: FoodResponseDto = serde_json::from_slice(&bytes).unwrap();
    assert!(body.success);
    assert_eq!(body.result.food.foodname, "Ramen");

    Ok(())
}

/// Tests not-found handling when fetching a missing food by id.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn error_fetching_missing_food() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;

    let result = get_food(State(test.into_app_state()), Path("missing".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests successful lookup of a food by its unique name.
///
/// Expected: Ok with 200 OK response containing the matching food
#[tokio::test]
async fn success_fetching_food_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .build()
        .await?;

    let result = get_food_by_name(State(test.into_app_state()), Path("Taco".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: FoodResponseDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.result.food.id, "food_1");

    Ok(())
}

/// Tests capture counting scoped to a single food across users.
///
/// Seeds two captures of one food by different users and one capture of
/// another food, then counts captures for the first food only.
///
/// Expected: Ok with 200 OK response reporting two captures
#[tokio::test]
async fn success_counting_captures_for_food() -> Result<(), TestError> {
    let date = Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap();

    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_mock_food("food_2", "Soup")
        .with_mock_user("user_1", "ada")
        .with_mock_user("user_2", "brin")
        .with_mock_capture("cap_1", "food_1", "user_1", date)
        .with_mock_capture("cap_2", "food_1", "user_2", date)
        .with_mock_capture("cap_3", "food_2", "user_1", date)
        .build()
        .await?;

    let result = get_food_captures(State(test.into_app_state()), Path("food_1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["result"]["captures"], 2);

    Ok(())
}

/// Tests not-found handling when updating a missing food.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn error_updating_missing_food() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;

    let dto = UpdateFoodDto {
        rarity: Some(5),
        ..Default::default()
    };

    let result = update_food(
        State(test.into_app_state()),
        Path("missing".to_string()),
        Json(dto),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deletion of an existing food followed by a repeat delete.
///
/// Expected: Ok with 200 OK on the first delete, Err with 404 Not Found on
/// the second
#[tokio::test]
async fn delete_food_then_repeat_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .build()
        .await?;

    let result = delete_food(State(test.into_app_state()), Path("food_1".to_string())).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = delete_food(State(test.into_app_state()), Path("food_1".to_string())).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
