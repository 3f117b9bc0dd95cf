//! Wire DTOs and pure domain logic shared between the server and thin
//! clients.

pub mod api;
pub mod capture;
pub mod constellation;
pub mod detection;
pub mod favorite;
pub mod food;
pub mod lifecycle;
pub mod logbook;
pub mod overlay;
pub mod user;
