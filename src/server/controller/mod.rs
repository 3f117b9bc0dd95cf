//! HTTP request handlers.
//!
//! Controllers stay thin: decode the request, call a repository or
//! service, wrap the outcome in the response envelope. Everything else
//! lives in `data` and `service`.

pub mod capture;
pub mod constellation;
pub mod constellation_item;
pub mod favorite;
pub mod food;
pub mod logbook;
pub mod recognition;
pub mod user;
