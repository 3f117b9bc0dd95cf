use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub user: String,
    pub food: String,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            user: favorite.user,
            food: favorite.food,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFavoriteDto {
    pub user: String,
    pub food: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteResultDto {
    pub favorite: FavoriteDto,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteResponseDto {
    pub success: bool,
    pub result: FavoriteResultDto,
}

impl FavoriteResponseDto {
    pub fn new(favorite: FavoriteDto) -> Self {
        Self {
            success: true,
            result: FavoriteResultDto { favorite },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritesResultDto {
    pub favorites: Vec<FavoriteDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritesResponseDto {
    pub success: bool,
    pub result: FavoritesResultDto,
}

impl FavoritesResponseDto {
    pub fn new(favorites: Vec<FavoriteDto>) -> Self {
        Self {
            success: true,
            result: FavoritesResultDto { favorites },
        }
    }
}
