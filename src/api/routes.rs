//! Router assembly.
//!
//! Binds the five resource endpoints under the `/api` prefix and stacks the
//! boundary layers: request tracing, the process-wide inbound timeout, and
//! (optionally) permissive CORS.

use axum::{
    error_handling::HandleErrorLayer,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    BoxError, Json, Router,
};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::services::ResourceService;

use super::handlers::{
    create_resource_handler, delete_resource_handler, get_resource_handler,
    list_resources_handler, update_resource_handler,
};

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct ApiState {
    pub resources: ResourceService,
}

impl ApiState {
    pub fn new(resources: ResourceService) -> Self {
        Self { resources }
    }
}

/// Build the application router with all routes and boundary layers.
pub fn build_router(state: ApiState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route(
            "/api/resource",
            post(create_resource_handler)
                .get(list_resources_handler)
                .put(update_resource_handler),
        )
        .route(
            "/api/resource/{id}",
            get(get_resource_handler).delete(delete_resource_handler),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(HandleErrorLayer::new(handle_boundary_error))
                .layer(TimeoutLayer::new(config.request_timeout())),
        );

    if config.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Translate middleware-level failures. The inbound timeout aborts with a
/// 503 without cancelling any in-flight persistence work.
async fn handle_boundary_error(err: BoxError) -> impl IntoResponse {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "message": "Request timed out" })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "message": err.to_string() })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn timeout_errors_map_to_503() {
        let err: BoxError = Box::new(tower::timeout::error::Elapsed::new());
        let response = handle_boundary_error(err).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn other_boundary_errors_map_to_500() {
        let err: BoxError = "broken pipe".into();
        let response = handle_boundary_error(err).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
