//! Test fixture modules for database and HTTP mock creation.
//!
//! This module contains fixture utilities for creating test data and mock HTTP
//! endpoints during test execution. Each submodule covers one aspect of the
//! system:
//!
//! - `data` - database rows for foods, users, captures, favorites, and constellations
//! - `detection` - mock vision model endpoints in the generateContent shape
//! - `factory` - pure factory functions for in-memory models and detection payloads

pub mod data;
pub mod detection;
pub mod factory;
