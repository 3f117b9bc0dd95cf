//! Factory functions for generating mock database models and detection payloads.
//!
//! Pure functions for creating in-memory model instances and raw detection
//! JSON with standard test values. None of these touch the database or the
//! mock server, which makes them suitable for unit tests.

use chrono::{DateTime, Utc};

use crate::model::{CaptureModel, FoodModel, UserModel};

/// Create a mock food database model for testing.
///
/// Returns a FoodModel with standard test values for rarity, origin, and
/// description.
///
/// # Arguments
/// - `food_id` - The food row id
/// - `foodname` - The unique display name of the food
///
/// # Returns
/// - `FoodModel` - A food model with test data
pub fn mock_food_model(food_id: &str, foodname: &str) -> FoodModel {
    FoodModel {
        id: food_id.to_string(),
        foodname: foodname.to_string(),
        rarity: 1,
        origin: "Mexico".to_string(),
        description: "A mock food for testing".to_string(),
    }
}

/// Create a mock user database model for testing.
pub fn mock_user_model(user_id: &str, username: &str) -> UserModel {
    UserModel {
        id: user_id.to_string(),
        username: username.to_string(),
    }
}

/// Create a mock capture database model for testing.
///
/// The image URL is derived from the capture id under a placeholder bucket
/// host, matching what the database fixtures insert.
pub fn mock_capture_model(
    capture_id: &str,
    food_id: &str,
    user_id: &str,
    date: DateTime<Utc>,
) -> CaptureModel {
    CaptureModel {
        id: capture_id.to_string(),
        food: food_id.to_string(),
        date,
        user: user_id.to_string(),
        image_url: format!("https://bucket.test/captures/{capture_id}"),
    }
}

/// Create a raw detection JSON object as the vision model would return it.
///
/// The box uses the model's normalized 0..=1000 coordinate grid in
/// `[y_min, x_min, y_max, x_max]` order.
///
/// # Arguments
/// - `box_2d` - Bounding box on the normalized grid
/// - `label` - Display label for the detection
/// - `rel_id` - Optional index into the known-foods list sent in the prompt
/// - `relabel` - Non-zero when the model renamed an unrecognized item
///
/// # Returns
/// - `serde_json::Value` - A single detection object
pub fn mock_detection(
    box_2d: [i32; 4],
    label: &str,
    rel_id: Option<i64>,
    relabel: i32,
) -> serde_json::Value {
    serde_json::json!({
        "box_2d": box_2d,
        "label": label,
        "rel_id": rel_id,
        "relabel": relabel,
    })
}
