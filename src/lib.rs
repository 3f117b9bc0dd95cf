//! Foodex backend and domain core.
//!
//! The `model` module holds wire DTOs and the pure domain logic shared
//! with clients (logbook/feed projection, capture-card lifecycle,
//! detection overlay projection). The `server` module holds the axum
//! HTTP application: configuration, routing, controllers, repositories,
//! services, and the detection-model client.

pub mod model;
pub mod server;
