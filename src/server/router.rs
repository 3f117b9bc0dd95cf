//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations
//! collected into a single OpenAPI document, with Swagger UI served at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and
/// Swagger UI documentation.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Foodex", description = "Foodex API"), tags(
        (name = controller::food::FOOD_TAG, description = "Food catalog routes"),
        (name = controller::capture::CAPTURE_TAG, description = "Capture routes"),
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite routes"),
        (name = controller::constellation::CONSTELLATION_TAG, description = "Constellation routes"),
        (name = controller::constellation_item::CONSTELLATION_ITEM_TAG, description = "Constellation membership routes"),
        (name = controller::recognition::RECOGNITION_TAG, description = "Photo recognition routes"),
        (name = controller::logbook::LOGBOOK_TAG, description = "Logbook and feed projection routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::food::list_foods, controller::food::create_food))
        .routes(routes!(
            controller::food::get_food,
            controller::food::update_food,
            controller::food::delete_food
        ))
        .routes(routes!(controller::food::get_food_by_name))
        .routes(routes!(controller::food::get_food_captures))
        .routes(routes!(
            controller::capture::list_captures,
            controller::capture::create_capture
        ))
        .routes(routes!(
            controller::capture::get_capture,
            controller::capture::update_capture,
            controller::capture::delete_capture
        ))
        .routes(routes!(controller::user::list_users, controller::user::create_user))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::favorite::list_favorites,
            controller::favorite::create_favorite
        ))
        .routes(routes!(controller::favorite::list_favorites_by_user))
        .routes(routes!(controller::favorite::delete_favorite))
        .routes(routes!(
            controller::constellation::list_constellations,
            controller::constellation::create_constellation
        ))
        .routes(routes!(
            controller::constellation::get_constellation,
            controller::constellation::update_constellation,
            controller::constellation::delete_constellation
        ))
        .routes(routes!(
            controller::constellation_item::list_items,
            controller::constellation_item::create_item
        ))
        .routes(routes!(controller::constellation_item::list_items_by_constellation))
        .routes(routes!(controller::constellation_item::delete_item))
        .routes(routes!(controller::recognition::recognize_food))
        .routes(routes!(controller::logbook::get_logbook))
        .routes(routes!(controller::logbook::get_feed))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
