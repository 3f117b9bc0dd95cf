use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        detection::{RecognitionResponseDto, RecognizeFoodRequestDto},
    },
    server::{error::Error, model::app::AppState, service::recognition::RecognitionService},
};

pub static RECOGNITION_TAG: &str = "recognition";

/// Recognize foods in a photo
///
/// Takes a base64-encoded image, runs detection against the vision
/// model, and returns the detections decorated with overlay rectangles
/// plus a freshly minted image identity for the upcoming upload.
#[utoipa::path(
    post,
    path = "/api/recognizeFood",
    tag = RECOGNITION_TAG,
    request_body = RecognizeFoodRequestDto,
    responses(
        (status = 200, description = "Success when recognizing foods", body = RecognitionResponseDto),
        (status = 400, description = "Invalid image payload", body = ErrorDto),
        (status = 502, description = "Detection API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recognize_food(
    State(state): State<AppState>,
    Json(request): Json<RecognizeFoodRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let service = RecognitionService::new(
        &state.db,
        &state.detection_client,
        &state.bucket_prefix,
        state.relabel_policy,
    );

    let recognition = service.recognize(request).await?;

    Ok((
        StatusCode::OK,
        Json(RecognitionResponseDto::new(
            recognition.image_id,
            recognition.image_url,
            recognition.detections,
        )),
    ))
}
