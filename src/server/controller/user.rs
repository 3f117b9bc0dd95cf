use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        user::{CreateUserDto, UpdateUserDto, UserResponseDto, UsersResponseDto},
    },
    server::{data::user::UserRepository, error::Error, model::app::AppState},
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = UsersResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserRepository::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(UsersResponseDto::new(
            users.into_iter().map(Into::into).collect(),
        )),
    ))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Success when creating a user", body = UserResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserRepository::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(UserResponseDto::new(user.into()))))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when fetching a user", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = UserRepository::new(&state.db)
        .get(&id)
        .await?
        .ok_or(Error::NotFound("User"))?;

    Ok((StatusCode::OK, Json(UserResponseDto::new(user.into()))))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Success when updating a user", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserRepository::new(&state.db)
        .update(&id, dto)
        .await?
        .ok_or(Error::NotFound("User"))?;

    Ok((StatusCode::OK, Json(UserResponseDto::new(user.into()))))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when deleting a user", body = DeletedDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let result = UserRepository::new(&state.db).delete(&id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("User"));
    }

    Ok((StatusCode::OK, Json(DeletedDto::ok())))
}
