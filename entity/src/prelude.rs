pub use super::capture::Entity as Capture;
pub use super::constellation::Entity as Constellation;
pub use super::constellation_item::Entity as ConstellationItem;
pub use super::favorite::Entity as Favorite;
pub use super::food::Entity as Food;
pub use super::user::Entity as User;
