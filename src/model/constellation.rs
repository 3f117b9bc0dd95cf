use serde::{Deserialize, Serialize};

/// A user-curated grouping of foods, displayed as a star figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConstellationDto {
    pub id: String,
    pub user: String,
}

impl From<entity::constellation::Model> for ConstellationDto {
    fn from(constellation: entity::constellation::Model) -> Self {
        Self {
            id: constellation.id,
            user: constellation.user,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateConstellationDto {
    pub user: String,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateConstellationDto {
    pub user: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConstellationResultDto {
    pub constellation: ConstellationDto,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConstellationResponseDto {
    pub success: bool,
    pub result: ConstellationResultDto,
}

impl ConstellationResponseDto {
    pub fn new(constellation: ConstellationDto) -> Self {
        Self {
            success: true,
            result: ConstellationResultDto { constellation },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConstellationsResultDto {
    pub constellations: Vec<ConstellationDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConstellationsResponseDto {
    pub success: bool,
    pub result: ConstellationsResultDto,
}

impl ConstellationsResponseDto {
    pub fn new(constellations: Vec<ConstellationDto>) -> Self {
        Self {
            success: true,
            result: ConstellationsResultDto { constellations },
        }
    }
}

/// Membership of one food in one constellation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConstellationItemDto {
    pub food: String,
    pub constellation: String,
}

impl From<entity::constellation_item::Model> for ConstellationItemDto {
    fn from(item: entity::constellation_item::Model) -> Self {
        Self {
            food: item.food,
            constellation: item.constellation,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateConstellationItemDto {
    pub food: String,
    pub constellation: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConstellationItemResultDto {
    pub item: ConstellationItemDto,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConstellationItemResponseDto {
    pub success: bool,
    pub result: ConstellationItemResultDto,
}

impl ConstellationItemResponseDto {
    pub fn new(item: ConstellationItemDto) -> Self {
        Self {
            success: true,
            result: ConstellationItemResultDto { item },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConstellationItemsResultDto {
    pub items: Vec<ConstellationItemDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConstellationItemsResponseDto {
    pub success: bool,
    pub result: ConstellationItemsResultDto,
}

impl ConstellationItemsResponseDto {
    pub fn new(items: Vec<ConstellationItemDto>) -> Self {
        Self {
            success: true,
            result: ConstellationItemsResultDto { items },
        }
    }
}
