//! Tests for the food recognition endpoint.
//!
//! Drives the recognizeFood handler against a mock vision model endpoint and
//! verifies detection filtering, payload validation, and upstream error
//! handling.

use axum::{
    body::to_bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodex::{
    model::detection::{RecognitionResponseDto, RecognizeFoodRequestDto},
    server::controller::recognition::recognize_food,
};
use foodex_test_utils::constant::TEST_BUCKET_PREFIX;

use super::*;

// "hello" as base64, enough to pass payload validation.
static TEST_IMAGE: &str = "aGVsbG8=";

/// Tests a successful recognition round-trip.
///
/// The mock model returns one plain detection and one relabeled sentinel;
/// under the default exclude policy only the plain detection survives.
///
/// Expected: Ok with 200 OK response containing one detection and an image
/// URL under the test bucket prefix
#[tokio::test]
async fn success_recognizing_food() -> Result<(), TestError> {
    let detections = serde_json::json!([
        factory::mock_detection([100, 200, 300, 400], "Taco", Some(0), 0),
        factory::mock_detection([0, 0, 50, 50], "Unknown Food", None, 1),
    ]);

    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_mock_food("food_1", "Taco")
        .with_detection_endpoint(detections, 1)
        .build()
        .await?;

    let request = RecognizeFoodRequestDto {
        image: TEST_IMAGE.to_string(),
        mimetype: "image/jpeg".to_string(),
    };

    let result = recognize_food(State(test.into_app_state()), Json(request)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: RecognitionResponseDto = serde_json::from_slice(&bytes).unwrap();
    assert!(body.success);
    assert_eq!(body.result.detections.len(), 1);
    assert_eq!(body.result.detections[0].label, "Taco");
    assert!(body.result.image_url.starts_with(TEST_BUCKET_PREFIX));

    test.assert_mocks();

    Ok(())
}

/// Tests payload validation for images that are not valid base64.
///
/// Expected: Err with 400 Bad Request response, model never called
#[tokio::test]
async fn error_on_invalid_base64_image() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;

    let request = RecognizeFoodRequestDto {
        image: "not base64!!".to_string(),
        mimetype: "image/jpeg".to_string(),
    };

    let result = recognize_food(State(test.into_app_state()), Json(request)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests upstream failure handling when the model answers with a 500.
///
/// Expected: Err with 502 Bad Gateway response
#[tokio::test]
async fn error_on_upstream_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_failing_detection_endpoint(500, 1)
        .build()
        .await?;

    let request = RecognizeFoodRequestDto {
        image: TEST_IMAGE.to_string(),
        mimetype: "image/jpeg".to_string(),
    };

    let result = recognize_food(State(test.into_app_state()), Json(request)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    test.assert_mocks();

    Ok(())
}
