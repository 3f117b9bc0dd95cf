//! Server application core modules.
//!
//! This module contains all server-side functionality for the Foodex backend,
//! including HTTP routing, database operations, the vision-model detection
//! client, and the logbook and recognition services built on top of them.

pub mod config;
pub mod controller;
pub mod data;
pub mod detection;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
