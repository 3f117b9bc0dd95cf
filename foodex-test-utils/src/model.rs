//! Database model type aliases for test utilities.
//!
//! Convenient aliases for the SeaORM entity models used throughout the test
//! utilities. These match the entities in the main foodex crate to keep tests
//! consistent.

/// Type alias for the food catalog database model.
pub type FoodModel = entity::food::Model;

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the capture database model.
pub type CaptureModel = entity::capture::Model;

/// Type alias for the favorite relation database model.
pub type FavoriteModel = entity::favorite::Model;

/// Type alias for the constellation database model.
pub type ConstellationModel = entity::constellation::Model;

/// Type alias for the constellation item database model.
pub type ConstellationItemModel = entity::constellation_item::Model;
