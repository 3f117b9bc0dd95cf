use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CaptureDto {
    pub id: String,
    pub food: String,
    /// When the capture happened, not when the row was written.
    pub date: DateTime<Utc>,
    pub user: String,
    pub image_url: String,
}

impl From<entity::capture::Model> for CaptureDto {
    fn from(capture: entity::capture::Model) -> Self {
        Self {
            id: capture.id,
            food: capture.food,
            date: capture.date,
            user: capture.user,
            image_url: capture.image_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCaptureDto {
    pub food: String,
    pub date: DateTime<Utc>,
    pub user: String,
    pub image_url: String,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateCaptureDto {
    pub food: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub user: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CaptureResultDto {
    pub capture: CaptureDto,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CaptureResponseDto {
    pub success: bool,
    pub result: CaptureResultDto,
}

impl CaptureResponseDto {
    pub fn new(capture: CaptureDto) -> Self {
        Self {
            success: true,
            result: CaptureResultDto { capture },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CapturesResultDto {
    pub captures: Vec<CaptureDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CapturesResponseDto {
    pub success: bool,
    pub result: CapturesResultDto,
}

impl CapturesResponseDto {
    pub fn new(captures: Vec<CaptureDto>) -> Self {
        Self {
            success: true,
            result: CapturesResultDto { captures },
        }
    }
}
