//! Data access layer repositories.
//!
//! One repository per table. Repositories own nothing beyond a borrowed
//! database connection and return `DbErr` directly; translation into API
//! errors happens in controllers and services.

pub mod capture;
pub mod constellation;
pub mod constellation_item;
pub mod favorite;
pub mod food;
pub mod user;
