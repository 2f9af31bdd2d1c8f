//! HTTP routing and OpenAPI documentation configuration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `POST /upload-and-parse` - Upload and process a flight log spreadsheet
/// - `GET /all` - List all persisted flight records
///
/// Interactive API documentation is served at `/api/docs`, with the OpenAPI
/// specification at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Flightlog", description = "Flight log ingestion API"), tags(
        (name = controller::flight::FLIGHT_TAG, description = "Flight log API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::flight::upload_and_parse))
        .routes(routes!(controller::flight::get_all_flights))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
