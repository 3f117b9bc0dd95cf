use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum DetectionError {
    /// The vision model API returned a non-success status.
    #[error("Detection API returned an error: {0}")]
    Upstream(String),
    /// The vision model answered, but with a payload that could not be
    /// interpreted as detections.
    #[error("Detection API returned an unusable payload: {0}")]
    Payload(String),
    /// Transport-level failure talking to the vision model API.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// All detection failures surface as 502 Bad Gateway: the request was
/// fine, the upstream was not.
impl IntoResponse for DetectionError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto::new("Food recognition service unavailable")),
        )
            .into_response()
    }
}
