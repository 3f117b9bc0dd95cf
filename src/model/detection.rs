use serde::{Deserialize, Serialize};

use crate::model::overlay::OverlayRect;

/// One detected item in a submitted photo.
///
/// `box_2d` is `[y_min, x_min, y_max, x_max]` on the vision model's
/// 0..=1000 normalized grid. `rel_id` points into the known-food list
/// the model was prompted with; `None` means the model matched nothing.
/// `relabel` is 1 when the model invented a label outside that list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Detection {
    pub box_2d: [i32; 4],
    pub label: String,
    pub rel_id: Option<i64>,
    pub relabel: i32,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecognizeFoodRequestDto {
    /// Base64-encoded image bytes, no data-URL prefix.
    pub image: String,
    pub mimetype: String,
}

/// A detection decorated for display: percentage-space rectangle plus
/// whether tapping it should open a capture card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DetectionDto {
    pub box_2d: [i32; 4],
    pub label: String,
    pub rel_id: Option<i64>,
    pub relabel: i32,
    pub overlay: OverlayRect,
    pub interactive: bool,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecognitionResultDto {
    pub image_id: String,
    pub image_url: String,
    pub detections: Vec<DetectionDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecognitionResponseDto {
    pub success: bool,
    pub result: RecognitionResultDto,
}

impl RecognitionResponseDto {
    pub fn new(image_id: String, image_url: String, detections: Vec<DetectionDto>) -> Self {
        Self {
            success: true,
            result: RecognitionResultDto {
                image_id,
                image_url,
                detections,
            },
        }
    }
}
