//! Tests for the constellation item endpoints.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::{Constellation, ConstellationItem};
use foodex::{
    model::constellation::CreateConstellationItemDto,
    server::controller::constellation_item::{
        create_item, delete_item, list_items, list_items_by_constellation,
    },
};

use super::*;

/// Tests that adding the same food to a constellation twice stores one row.
///
/// Expected: Ok with 201 Created both times, list contains a single item
#[tokio::test]
async fn creating_item_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_table(Constellation)
        .with_table(ConstellationItem)
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .with_mock_constellation("const_1", "user_1")
        .build()
        .await?;

    for _ in 0..2 {
        let dto = CreateConstellationItemDto {
            food: "food_1".to_string(),
            constellation: "const_1".to_string(),
        };

        let result = create_item(State(test.into_app_state()), Json(dto)).await;
        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let result = list_items(State(test.into_app_state())).await;
    let resp = result.unwrap().into_response();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["result"]["items"].as_array().unwrap().len(), 1);

    Ok(())
}

/// Tests that per-constellation listing excludes other constellations' items.
///
/// Expected: Ok with 200 OK response containing only the first
/// constellation's items
#[tokio::test]
async fn listing_items_is_scoped_to_constellation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_table(Constellation)
        .with_table(ConstellationItem)
        .with_mock_food("food_1", "Taco")
        .with_mock_food("food_2", "Soup")
        .with_mock_user("user_1", "ada")
        .with_mock_constellation("const_1", "user_1")
        .with_mock_constellation("const_2", "user_1")
        .with_mock_constellation_item("food_1", "const_1")
        .with_mock_constellation_item("food_2", "const_1")
        .with_mock_constellation_item("food_1", "const_2")
        .build()
        .await?;

    let result = list_items_by_constellation(
        State(test.into_app_state()),
        Path("const_1".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let items = body["result"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["constellation"] == "const_1"));

    Ok(())
}

/// Tests removing an existing item by constellation and food.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_deleting_item() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_table(Constellation)
        .with_table(ConstellationItem)
        .with_mock_food("food_1", "Taco")
        .with_mock_user("user_1", "ada")
        .with_mock_constellation("const_1", "user_1")
        .with_mock_constellation_item("food_1", "const_1")
        .build()
        .await?;

    let result = delete_item(
        State(test.into_app_state()),
        Path(("const_1".to_string(), "food_1".to_string())),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests not-found handling when removing an item that does not exist.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn error_deleting_missing_item() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_table(Constellation)
        .with_table(ConstellationItem)
        .build()
        .await?;

    let result = delete_item(
        State(test.into_app_state()),
        Path(("const_1".to_string(), "food_1".to_string())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
