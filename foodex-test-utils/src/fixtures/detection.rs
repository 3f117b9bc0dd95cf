//! Mock vision model endpoint creation utilities.
//!
//! Methods for registering generateContent endpoints on the mockito server.
//! The endpoints answer in the Gemini response shape, with the detection list
//! serialized as JSON text inside the first candidate part, and verify they
//! were called the expected number of times.

use mockito::{Matcher, Mock};

use crate::{constant::TEST_DETECTION_MODEL, TestSetup};

impl TestSetup {
    pub fn detection(&mut self) -> DetectionFixtures<'_> {
        DetectionFixtures { setup: self }
    }
}

pub struct DetectionFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl<'a> DetectionFixtures<'a> {
    /// Create a mock generateContent endpoint returning the given detections.
    ///
    /// The endpoint is registered under [`TEST_DETECTION_MODEL`], so detection
    /// clients built for tests must use the same model name. The mock verifies
    /// it was called exactly `expected_requests` times.
    ///
    /// # Arguments
    /// - `detections` - JSON array of raw detections to return from the model
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint that will be automatically verified
    pub fn create_detection_endpoint(
        &mut self,
        detections: serde_json::Value,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": detections.to_string() }] }
            }]
        });

        self.setup
            .server
            .mock(
                "POST",
                format!("/v1beta/models/{TEST_DETECTION_MODEL}:generateContent").as_str(),
            )
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock generateContent endpoint that fails with the given status.
    ///
    /// Used to exercise upstream error handling. The mock verifies it was
    /// called exactly `expected_requests` times.
    pub fn create_failing_detection_endpoint(
        &mut self,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(
                "POST",
                format!("/v1beta/models/{TEST_DETECTION_MODEL}:generateContent").as_str(),
            )
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body("upstream failure")
            .expect(expected_requests)
            .create()
    }
}
