use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request.
///
/// `success` is always `false`; kept explicit so every response carries
/// the same envelope shape.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    /// The error message
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// The response for delete operations, which carry no result payload.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletedDto {
    pub success: bool,
}

impl DeletedDto {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
