//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, visits};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gateman API",
        version = "1.0.0",
        description = "Visitor check-in/check-out REST API for building gate kiosks",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Visits
        visits::check_in,
        visits::check_out,
        visits::active_visitors,
        visits::history,
    ),
    components(
        schemas(
            // Visits
            crate::models::kiosk::KioskProfile,
            crate::models::visit::VisitStatus,
            crate::models::visit::VisitRecord,
            crate::models::visit::CheckInRequest,
            crate::models::visit::CheckOutRequest,
            crate::models::visit::HistoryQuery,
            visits::VisitView,
            visits::VisitResponse,
            visits::ActiveVisitorsResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "visits", description = "Visitor check-in, check-out and lists")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_visit_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/{profile}/check-in"));
        assert!(paths.iter().any(|p| p.as_str() == "/{profile}/visitors/history"));
    }
}
