//! Tests for the constellation endpoints.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::{Constellation, ConstellationItem};
use foodex::{
    model::constellation::{ConstellationResponseDto, CreateConstellationDto},
    server::controller::constellation::{
        create_constellation, delete_constellation, get_constellation, list_constellations,
    },
};

use super::*;

/// Tests successful constellation creation for an existing user.
///
/// Expected: Ok with 201 Created response carrying the owning user
#[tokio::test]
async fn success_creating_constellation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_table(Constellation)
        .with_table(ConstellationItem)
        .with_mock_user("user_1", "ada")
        .build()
        .await?;

    let dto = CreateConstellationDto {
        user: "user_1".to_string(),
    };

    let result = create_constellation(State(test.into_app_state()), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: ConstellationResponseDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.result.constellation.user, "user_1");

    Ok(())
}

/// Tests listing seeded constellations.
///
/// Expected: Ok with 200 OK response containing both constellations
#[tokio::test]
async fn success_listing_constellations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_table(Constellation)
        .with_table(ConstellationItem)
        .with_mock_user("user_1", "ada")
        .with_mock_constellation("const_1", "user_1")
        .with_mock_constellation("const_2", "user_1")
        .build()
        .await?;

    let result = list_constellations(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body["result"]["constellations"].as_array().unwrap().len(),
        2
    );

    Ok(())
}

/// Tests not-found handling when fetching a missing constellation.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn error_fetching_missing_constellation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_table(Constellation)
        .with_table(ConstellationItem)
        .build()
        .await?;

    let result =
        get_constellation(State(test.into_app_state()), Path("missing".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deletion of an existing constellation.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_deleting_constellation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_table(Constellation)
        .with_table(ConstellationItem)
        .with_mock_user("user_1", "ada")
        .with_mock_constellation("const_1", "user_1")
        .build()
        .await?;

    let result =
        delete_constellation(State(test.into_app_state()), Path("const_1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
