use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        food::{
            CreateFoodDto, FoodCapturesResponseDto, FoodResponseDto, FoodsResponseDto,
            UpdateFoodDto,
        },
    },
    server::{
        data::{capture::CaptureRepository, food::FoodRepository},
        error::Error,
        model::app::AppState,
    },
};

pub static FOOD_TAG: &str = "food";

/// List all foods
#[utoipa::path(
    get,
    path = "/api/foods",
    tag = FOOD_TAG,
    responses(
        (status = 200, description = "Success when listing foods", body = FoodsResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_foods(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let foods = FoodRepository::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(FoodsResponseDto::new(
            foods.into_iter().map(Into::into).collect(),
        )),
    ))
}

/// Create a new food
#[utoipa::path(
    post,
    path = "/api/foods",
    tag = FOOD_TAG,
    request_body = CreateFoodDto,
    responses(
        (status = 201, description = "Success when creating a food", body = FoodResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_food(
    State(state): State<AppState>,
    Json(dto): Json<CreateFoodDto>,
) -> Result<impl IntoResponse, Error> {
    let food = FoodRepository::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(FoodResponseDto::new(food.into()))))
}

/// Get a food by id
#[utoipa::path(
    get,
    path = "/api/foods/{id}",
    tag = FOOD_TAG,
    responses(
        (status = 200, description = "Success when fetching a food", body = FoodResponseDto),
        (status = 404, description = "Food not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let food = FoodRepository::new(&state.db)
        .get(&id)
        .await?
        .ok_or(Error::NotFound("Food"))?;

    Ok((StatusCode::OK, Json(FoodResponseDto::new(food.into()))))
}

/// Get a food by its unique name
#[utoipa::path(
    get,
    path = "/api/foods/foodByName/{foodname}",
    tag = FOOD_TAG,
    responses(
        (status = 200, description = "Success when fetching a food by name", body = FoodResponseDto),
        (status = 404, description = "Food not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_food_by_name(
    State(state): State<AppState>,
    Path(foodname): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let food = FoodRepository::new(&state.db)
        .find_by_name(&foodname)
        .await?
        .ok_or(Error::NotFound("Food"))?;

    Ok((StatusCode::OK, Json(FoodResponseDto::new(food.into()))))
}

/// Count captures of a food across all users
#[utoipa::path(
    get,
    path = "/api/foods/{id}/captures",
    tag = FOOD_TAG,
    responses(
        (status = 200, description = "Success when counting captures", body = FoodCapturesResponseDto),
        (status = 404, description = "Food not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_food_captures(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    FoodRepository::new(&state.db)
        .get(&id)
        .await?
        .ok_or(Error::NotFound("Food"))?;

    let captures = CaptureRepository::new(&state.db).count_by_food(&id).await?;

    Ok((StatusCode::OK, Json(FoodCapturesResponseDto::new(captures))))
}

/// Update a food
#[utoipa::path(
    put,
    path = "/api/foods/{id}",
    tag = FOOD_TAG,
    request_body = UpdateFoodDto,
    responses(
        (status = 200, description = "Success when updating a food", body = FoodResponseDto),
        (status = 404, description = "Food not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateFoodDto>,
) -> Result<impl IntoResponse, Error> {
    let food = FoodRepository::new(&state.db)
        .update(&id, dto)
        .await?
        .ok_or(Error::NotFound("Food"))?;

    Ok((StatusCode::OK, Json(FoodResponseDto::new(food.into()))))
}

/// Delete a food
#[utoipa::path(
    delete,
    path = "/api/foods/{id}",
    tag = FOOD_TAG,
    responses(
        (status = 200, description = "Success when deleting a food", body = DeletedDto),
        (status = 404, description = "Food not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let result = FoodRepository::new(&state.db).delete(&id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("Food"));
    }

    Ok((StatusCode::OK, Json(DeletedDto::ok())))
}
