pub mod capture;
pub mod constellation;
pub mod constellation_item;
pub mod favorite;
pub mod food;
pub mod prelude;
pub mod user;
