use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        favorite::{CreateFavoriteDto, FavoriteResponseDto, FavoritesResponseDto},
    },
    server::{data::favorite::FavoriteRepository, error::Error, model::app::AppState},
};

pub static FAVORITE_TAG: &str = "favorite";

/// List all favorites
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Success when listing favorites", body = FavoritesResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteRepository::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(FavoritesResponseDto::new(
            favorites.into_iter().map(Into::into).collect(),
        )),
    ))
}

/// Mark a food as a favorite for a user. Marking the same pair twice
/// succeeds and keeps a single row.
#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Success when creating a favorite", body = FavoriteResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    Json(dto): Json<CreateFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteRepository::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteResponseDto::new(favorite.into())),
    ))
}

/// List one user's favorites
#[utoipa::path(
    get,
    path = "/api/favorites/user/{user_id}",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Success when listing a user's favorites", body = FavoritesResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteRepository::new(&state.db)
        .list_by_user(&user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoritesResponseDto::new(
            favorites.into_iter().map(Into::into).collect(),
        )),
    ))
}

/// Remove a (user, food) favorite
#[utoipa::path(
    delete,
    path = "/api/favorites/user/{user_id}/food/{food_id}",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Success when deleting a favorite", body = DeletedDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    Path((user_id, food_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let result = FavoriteRepository::new(&state.db)
        .delete(&user_id, &food_id)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("Favorite"));
    }

    Ok((StatusCode::OK, Json(DeletedDto::ok())))
}
