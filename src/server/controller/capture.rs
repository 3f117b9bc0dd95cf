use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        capture::{CaptureResponseDto, CapturesResponseDto, CreateCaptureDto, UpdateCaptureDto},
    },
    server::{data::capture::CaptureRepository, error::Error, model::app::AppState},
};

pub static CAPTURE_TAG: &str = "capture";

/// List all captures
#[utoipa::path(
    get,
    path = "/api/captures",
    tag = CAPTURE_TAG,
    responses(
        (status = 200, description = "Success when listing captures", body = CapturesResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_captures(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let captures = CaptureRepository::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(CapturesResponseDto::new(
            captures.into_iter().map(Into::into).collect(),
        )),
    ))
}

/// Create a new capture
#[utoipa::path(
    post,
    path = "/api/captures",
    tag = CAPTURE_TAG,
    request_body = CreateCaptureDto,
    responses(
        (status = 201, description = "Success when creating a capture", body = CaptureResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_capture(
    State(state): State<AppState>,
    Json(dto): Json<CreateCaptureDto>,
) -> Result<impl IntoResponse, Error> {
    let capture = CaptureRepository::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CaptureResponseDto::new(capture.into())),
    ))
}

/// Get a capture by id
#[utoipa::path(
    get,
    path = "/api/captures/{id}",
    tag = CAPTURE_TAG,
    responses(
        (status = 200, description = "Success when fetching a capture", body = CaptureResponseDto),
        (status = 404, description = "Capture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_capture(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let capture = CaptureRepository::new(&state.db)
        .get(&id)
        .await?
        .ok_or(Error::NotFound("Capture"))?;

    Ok((
        StatusCode::OK,
        Json(CaptureResponseDto::new(capture.into())),
    ))
}

/// Update a capture
#[utoipa::path(
    put,
    path = "/api/captures/{id}",
    tag = CAPTURE_TAG,
    request_body = UpdateCaptureDto,
    responses(
        (status = 200, description = "Success when updating a capture", body = CaptureResponseDto),
        (status = 404, description = "Capture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_capture(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateCaptureDto>,
) -> Result<impl IntoResponse, Error> {
    let capture = CaptureRepository::new(&state.db)
        .update(&id, dto)
        .await?
        .ok_or(Error::NotFound("Capture"))?;

    Ok((
        StatusCode::OK,
        Json(CaptureResponseDto::new(capture.into())),
    ))
}

/// Delete a capture
#[utoipa::path(
    delete,
    path = "/api/captures/{id}",
    tag = CAPTURE_TAG,
    responses(
        (status = 200, description = "Success when deleting a capture", body = DeletedDto),
        (status = 404, description = "Capture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_capture(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let result = CaptureRepository::new(&state.db).delete(&id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("Capture"));
    }

    Ok((StatusCode::OK, Json(DeletedDto::ok())))
}
