//! Service layer.
//!
//! Services coordinate repositories and the detection client into the
//! higher-level operations controllers expose: logbook and feed projection,
//! and photo recognition.

pub mod logbook;
pub mod recognition;
