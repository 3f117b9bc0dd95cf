//! Test configuration constants for detection client setup.
//!
//! This module defines standard constant values used across all tests when
//! pointing a detection client at a mock server. These values are not real
//! credentials but placeholder values for testing purposes.

/// Mock vision model API key for testing.
///
/// Placeholder key used when creating test detection clients. Not a real credential.
pub static TEST_DETECTION_API_KEY: &str = "test-api-key";

/// Vision model name used in test detection clients.
///
/// The mock generateContent endpoint is registered under this model name, so
/// the client and the mock must agree on it.
pub static TEST_DETECTION_MODEL: &str = "test-model";

/// Base URL prefix for capture image uploads in tests.
///
/// Recognized images get their public URL built from this prefix. Points at a
/// placeholder bucket host, nothing is actually uploaded during tests.
pub static TEST_BUCKET_PREFIX: &str = "https://bucket.test/captures";
