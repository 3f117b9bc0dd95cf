use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FoodDto {
    pub id: String,
    pub foodname: String,
    /// Small positive integer used only for display repetition of a symbol.
    pub rarity: i32,
    pub origin: String,
    pub description: String,
}

impl From<entity::food::Model> for FoodDto {
    fn from(food: entity::food::Model) -> Self {
        Self {
            id: food.id,
            foodname: food.foodname,
            rarity: food.rarity,
            origin: food.origin,
            description: food.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFoodDto {
    pub foodname: String,
    pub rarity: i32,
    pub origin: String,
    pub description: String,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateFoodDto {
    pub foodname: Option<String>,
    pub rarity: Option<i32>,
    pub origin: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FoodResultDto {
    pub food: FoodDto,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FoodResponseDto {
    pub success: bool,
    pub result: FoodResultDto,
}

impl FoodResponseDto {
    pub fn new(food: FoodDto) -> Self {
        Self {
            success: true,
            result: FoodResultDto { food },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FoodsResultDto {
    pub foods: Vec<FoodDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FoodsResponseDto {
    pub success: bool,
    pub result: FoodsResultDto,
}

impl FoodsResponseDto {
    pub fn new(foods: Vec<FoodDto>) -> Self {
        Self {
            success: true,
            result: FoodsResultDto { foods },
        }
    }
}

/// Result for `GET /api/foods/{id}/captures`: the total capture count
/// across all users for one food.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FoodCapturesResultDto {
    pub captures: u64,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FoodCapturesResponseDto {
    pub success: bool,
    pub result: FoodCapturesResultDto,
}

impl FoodCapturesResponseDto {
    pub fn new(captures: u64) -> Self {
        Self {
            success: true,
            result: FoodCapturesResultDto { captures },
        }
    }
}
