use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        logbook::{FeedResponseDto, LogbookResponseDto, Projection},
    },
    server::{error::Error, model::app::AppState, service::logbook::LogbookService},
};

pub static LOGBOOK_TAG: &str = "logbook";

/// Get one user's projected logbook, newest capture first
#[utoipa::path(
    get,
    path = "/api/logbook/{user_id}",
    tag = LOGBOOK_TAG,
    responses(
        (status = 200, description = "Success when projecting the logbook", body = LogbookResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_logbook(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = LogbookService::new(&state.db);

    match service.logbook(&user_id).await {
        Projection::Ready(entries) => {
            Ok((StatusCode::OK, Json(LogbookResponseDto::new(entries))).into_response())
        }
        Projection::Failed(message) => Err(Error::Internal(message)),
        // A server-side projection always resolves; sources cannot still
        // be loading once the fetches have joined.
        Projection::Loading => Err(Error::Internal("projection never resolved".to_string())),
    }
}

/// Get the projected cross-user feed in store order
#[utoipa::path(
    get,
    path = "/api/feed",
    tag = LOGBOOK_TAG,
    responses(
        (status = 200, description = "Success when projecting the feed", body = FeedResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feed(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = LogbookService::new(&state.db);

    match service.feed().await {
        Projection::Ready(entries) => {
            Ok((StatusCode::OK, Json(FeedResponseDto::new(entries))).into_response())
        }
        Projection::Failed(message) => Err(Error::Internal(message)),
        Projection::Loading => Err(Error::Internal("projection never resolved".to_string())),
    }
}
