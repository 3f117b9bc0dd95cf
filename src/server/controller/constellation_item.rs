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
            ConstellationItemResponseDto, ConstellationItemsResponseDto,
            CreateConstellationItemDto,
        },
    },
    server::{
        data::constellation_item::ConstellationItemRepository, error::Error, model::app::AppState,
    },
};

pub static CONSTELLATION_ITEM_TAG: &str = "constellation-item";

/// List all constellation items
#[utoipa::path(
    get,
    path = "/api/constellation-items",
    tag = CONSTELLATION_ITEM_TAG,
    responses(
        (status = 200, description = "Success when listing constellation items", body = ConstellationItemsResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let items = ConstellationItemRepository::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(ConstellationItemsResponseDto::new(
            items.into_iter().map(Into::into).collect(),
        )),
    ))
}

/// Add a food to a constellation. Adding the same membership twice
/// succeeds and keeps a single row.
#[utoipa::path(
    post,
    path = "/api/constellation-items",
    tag = CONSTELLATION_ITEM_TAG,
    request_body = CreateConstellationItemDto,
    responses(
        (status = 201, description = "Success when creating a constellation item", body = ConstellationItemResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(dto): Json<CreateConstellationItemDto>,
) -> Result<impl IntoResponse, Error> {
    let item = ConstellationItemRepository::new(&state.db)
        .create(dto)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ConstellationItemResponseDto::new(item.into())),
    ))
}

/// List one constellation's items
#[utoipa::path(
    get,
    path = "/api/constellation-items/constellation/{id}",
    tag = CONSTELLATION_ITEM_TAG,
    responses(
        (status = 200, description = "Success when listing a constellation's items", body = ConstellationItemsResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_items_by_constellation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let items = ConstellationItemRepository::new(&state.db)
        .list_by_constellation(&id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ConstellationItemsResponseDto::new(
            items.into_iter().map(Into::into).collect(),
        )),
    ))
}

/// Remove a food from a constellation
#[utoipa::path(
    delete,
    path = "/api/constellation-items/constellation/{constellation_id}/food/{food_id}",
    tag = CONSTELLATION_ITEM_TAG,
    responses(
        (status = 200, description = "Success when deleting a constellation item", body = DeletedDto),
        (status = 404, description = "Constellation item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path((constellation_id, food_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let result = ConstellationItemRepository::new(&state.db)
        .delete(&food_id, &constellation_id)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("Constellation item"));
    }

    Ok((StatusCode::OK, Json(DeletedDto::ok())))
}
