// src/presentation/http/openapi.rs
use axum::{response::Redirect, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::slugs::save_slug,
        crate::presentation::http::controllers::slugs::assign_slug,
        crate::presentation::http::controllers::slugs::resolve_slug,
        crate::presentation::http::controllers::slugs::slug_exists,
        crate::presentation::http::controllers::slugs::delete_slug,
        crate::presentation::http::controllers::slugs::check_slug,
        crate::presentation::http::controllers::content::resolve_content,
        crate::presentation::http::controllers::content::resolve_localized_content,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::slugs::SaveSlugRequest,
            crate::presentation::http::controllers::slugs::AssignSlugRequest,
            crate::presentation::http::controllers::slugs::CheckSlugRequest,
            crate::presentation::http::controllers::slugs::CheckSlugResponse,
            crate::presentation::http::controllers::slugs::ExistsResponse,
            crate::presentation::http::controllers::content::ContentResponse,
            crate::application::dto::SlugDto
        )
    ),
    tags(
        (name = "Slugs", description = "Slug persistence and resolution endpoints"),
        (name = "Content", description = "Slug-addressed content routes"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Waypost API",
        description = "Locale-aware slug directory",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
