// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{content, slugs},
    openapi::{self, StatusResponse},
};
use axum::{
    http::Method,
    routing::{get, post},
    Extension, Router,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/slugs", post(slugs::save_slug))
        .route("/api/v1/slugs/assign", post(slugs::assign_slug))
        .route("/api/v1/slugs/check", post(slugs::check_slug))
        .route(
            "/api/v1/slugs/{slug}",
            get(slugs::resolve_slug).delete(slugs::delete_slug),
        )
        .route("/api/v1/slugs/{slug}/exists", get(slugs::slug_exists))
        // Content routes resolve slugs to resources; static routes above
        // take precedence over these captures.
        .route("/{slug}", get(content::resolve_content))
        .route("/{locale}/{slug}", get(content::resolve_localized_content))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
