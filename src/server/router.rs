//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::builder().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Exchange credentials for an access token
/// - `POST /api/auth/register` - Register a staff account
/// - `GET /api/auth/me` - Current user
/// - `GET /api/users`, `GET /api/users/{user_id}` - Staff users
/// - `GET|POST /api/shelters`, `GET /api/shelters/{shelter_id}` - Shelters
/// - `GET /api/shelters/{shelter_id}/{residents,events,alerts,research}` - Records of a shelter
/// - `GET|POST /api/residents`, `/api/events`, `/api/alerts`, `/api/research`
/// - `GET /api/dashboard/stats` - Dashboard statistics
/// - `GET /health`, `GET /api` - Unauthenticated liveness and metadata
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Haven", description = "Shelter network administration API"),
        modifiers(&BearerSecurity),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Login, registration and current user"),
            (name = controller::user::USER_TAG, description = "Staff users"),
            (name = controller::shelter::SHELTER_TAG, description = "Shelters and their records"),
            (name = controller::resident::RESIDENT_TAG, description = "Residents"),
            (name = controller::event::EVENT_TAG, description = "Shelter events"),
            (name = controller::alert::ALERT_TAG, description = "Risk alerts"),
            (name = controller::research::RESEARCH_TAG, description = "Research data"),
            (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard statistics"),
            (name = controller::health::HEALTH_TAG, description = "Liveness and metadata"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::get_current_user))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(
            controller::shelter::get_shelters,
            controller::shelter::create_shelter
        ))
        .routes(routes!(controller::shelter::get_shelter))
        .routes(routes!(controller::shelter::get_shelter_residents))
        .routes(routes!(controller::shelter::get_shelter_events))
        .routes(routes!(controller::shelter::get_shelter_alerts))
        .routes(routes!(controller::shelter::get_shelter_research))
        .routes(routes!(
            controller::resident::get_residents,
            controller::resident::create_resident
        ))
        .routes(routes!(
            controller::event::get_events,
            controller::event::create_event
        ))
        .routes(routes!(
            controller::alert::get_alerts,
            controller::alert::create_alert
        ))
        .routes(routes!(
            controller::research::get_research,
            controller::research::create_research
        ))
        .routes(routes!(controller::dashboard::get_dashboard_stats))
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::health::api_info))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
