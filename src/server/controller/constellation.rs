use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        constellation::{
            ConstellationResponseDto, ConstellationsResponseDto, CreateConstellationDto,
            UpdateConstellationDto,
        },
    },
    server::{data::constellation::ConstellationRepository, error::Error, model::app::AppState},
};

pub static CONSTELLATION_TAG: &str = "constellation";

/// List all constellations
#[utoipa::path(
    get,
    path = "/api/constellations",
    tag = CONSTELLATION_TAG,
    responses(
        (status = 200, description = "Success when listing constellations", body = ConstellationsResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_constellations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let constellations = ConstellationRepository::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(ConstellationsResponseDto::new(
            constellations.into_iter().map(Into::into).collect(),
        )),
    ))
}

/// Create a new constellation
#[utoipa::path(
    post,
    path = "/api/constellations",
    tag = CONSTELLATION_TAG,
    request_body = CreateConstellationDto,
    responses(
        (status = 201, description = "Success when creating a constellation", body = ConstellationResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_constellation(
    State(state): State<AppState>,
    Json(dto): Json<CreateConstellationDto>,
) -> Result<impl IntoResponse, Error> {
    let constellation = ConstellationRepository::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ConstellationResponseDto::new(constellation.into())),
    ))
}

/// Get a constellation by id
#[utoipa::path(
    get,
    path = "/api/constellations/{id}",
    tag = CONSTELLATION_TAG,
    responses(
        (status = 200, description = "Success when fetching a constellation", body = ConstellationResponseDto),
        (status = 404, description = "Constellation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_constellation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let constellation = ConstellationRepository::new(&state.db)
        .get(&id)
        .await?
        .ok_or(Error::NotFound("Constellation"))?;

    Ok((
        StatusCode::OK,
        Json(ConstellationResponseDto::new(constellation.into())),
    ))
}

/// Update a constellation
#[utoipa::path(
    put,
    path = "/api/constellations/{id}",
    tag = CONSTELLATION_TAG,
    request_body = UpdateConstellationDto,
    responses(
        (status = 200, description = "Success when updating a constellation", body = ConstellationResponseDto),
        (status = 404, description = "Constellation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_constellation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateConstellationDto>,
) -> Result<impl IntoResponse, Error> {
    let constellation = ConstellationRepository::new(&state.db)
        .update(&id, dto)
        .await?
        .ok_or(Error::NotFound("Constellation"))?;

    Ok((
        StatusCode::OK,
        Json(ConstellationResponseDto::new(constellation.into())),
    ))
}

/// Delete a constellation
#[utoipa::path(
    delete,
    path = "/api/constellations/{id}",
    tag = CONSTELLATION_TAG,
    responses(
        (status = 200, description = "Success when deleting a constellation", body = DeletedDto),
        (status = 404, description = "Constellation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_constellation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let result = ConstellationRepository::new(&state.db).delete(&id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("Constellation"));
    }

    Ok((StatusCode::OK, Json(DeletedDto::ok())))
}
