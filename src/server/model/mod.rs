//! Server-internal models shared across controllers and services.

pub mod app;
