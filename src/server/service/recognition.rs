use base64::Engine as _;
use sea_orm::DatabaseConnection;

use crate::model::detection::{DetectionDto, RecognizeFoodRequestDto};
use crate::model::overlay::{self, OverlayRect, RelabelPolicy};
use crate::server::data::food::FoodRepository;
use crate::server::detection::DetectionClient;
use crate::server::error::Error;

/// Outcome of recognizing one photo: a minted image identity plus the
/// decorated detections to draw over it.
#[derive(Debug)]
pub struct Recognition {
    pub image_id: String,
    pub image_url: String,
    pub detections: Vec<DetectionDto>,
}

/// Service running photo recognition end to end: validate the upload,
/// gather known food names, call the vision model, and decorate the
/// detections for the overlay.
pub struct RecognitionService<'a> {
    db: &'a DatabaseConnection,
    detection_client: &'a DetectionClient,
    bucket_prefix: &'a str,
    relabel_policy: RelabelPolicy,
}

impl<'a> RecognitionService<'a> {
    /// Creates a new instance of [`RecognitionService`]
    pub fn new(
        db: &'a DatabaseConnection,
        detection_client: &'a DetectionClient,
        bucket_prefix: &'a str,
        relabel_policy: RelabelPolicy,
    ) -> Self {
        Self {
            db,
            detection_client,
            bucket_prefix,
            relabel_policy,
        }
    }

    pub async fn recognize(&self, request: RecognizeFoodRequestDto) -> Result<Recognition, Error> {
        if request.image.is_empty() {
            return Err(Error::Validation("image must not be empty".to_string()));
        }
        if request.mimetype.is_empty() {
            return Err(Error::Validation("mimetype must not be empty".to_string()));
        }
        if base64::engine::general_purpose::STANDARD
            .decode(&request.image)
            .is_err()
        {
            return Err(Error::Validation(
                "image must be valid base64".to_string(),
            ));
        }

        let food_repository = FoodRepository::new(self.db);
        let known_foods: Vec<String> = food_repository
            .list()
            .await?
            .into_iter()
            .map(|food| food.foodname)
            .collect();

        let detections = self
            .detection_client
            .detect(&request.image, &request.mimetype, &known_foods)
            .await?;

        // Image upload itself happens out of band; the server only mints
        // the identity the client will upload under.
        let image_id = uuid::Uuid::new_v4().to_string();
        let image_url = format!("{}/{}", self.bucket_prefix.trim_end_matches('/'), image_id);

        let detections = detections
            .iter()
            .filter(|detection| overlay::is_visible(detection, self.relabel_policy))
            .map(|detection| DetectionDto {
                box_2d: detection.box_2d,
                label: detection.label.clone(),
                rel_id: detection.rel_id,
                relabel: detection.relabel,
                overlay: OverlayRect::from_box(&detection.box_2d),
                interactive: overlay::is_interactive(detection, self.relabel_policy),
            })
            .collect();

        Ok(Recognition {
            image_id,
            image_url,
            detections,
        })
    }
}
