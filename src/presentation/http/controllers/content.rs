// src/presentation/http/controllers/content.rs
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::matcher::{RouteParams, DEFAULT_SLUG_PARAM, LOCALE_PARAM};
use crate::presentation::http::state::HttpState;
use axum::{extract::Path, Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// What a matched content route answers with. Slug-shaped when the
/// candidate keeps the slug capture, id-shaped when it rewrites to a
/// resource id.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContentResponse {
    pub resource: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/{slug}",
    params(("slug" = String, Path, description = "Slug text")),
    responses(
        (status = 200, description = "The resource the slug resolves to.", body = ContentResponse),
        (status = 404, description = "No content answers to this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn resolve_content(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ContentResponse>> {
    let params: RouteParams = [(DEFAULT_SLUG_PARAM, slug.as_str())].into_iter().collect();
    respond(&state, params).await
}

#[utoipa::path(
    get,
    path = "/{locale}/{slug}",
    params(
        ("locale" = String, Path, description = "Locale segment"),
        ("slug" = String, Path, description = "Slug text")
    ),
    responses(
        (status = 200, description = "The resource the slug resolves to.", body = ContentResponse),
        (status = 404, description = "No content answers to this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn resolve_localized_content(
    Extension(state): Extension<HttpState>,
    Path((locale, slug)): Path<(String, String)>,
) -> HttpResult<Json<ContentResponse>> {
    let params: RouteParams = [
        (LOCALE_PARAM, locale.as_str()),
        (DEFAULT_SLUG_PARAM, slug.as_str()),
    ]
    .into_iter()
    .collect();
    respond(&state, params).await
}

async fn respond(state: &HttpState, params: RouteParams) -> HttpResult<Json<ContentResponse>> {
    let directory = state.services.directory();
    let Some(matched) = state
        .content_routes
        .try_match(&directory, &params)
        .await
        .into_http()?
    else {
        return Err(HttpError::not_found("no content answers to this slug"));
    };

    let candidate = matched.candidate;
    let resource = candidate.resource_key().to_string();
    let body = match candidate.id_param() {
        Some(id_param) => ContentResponse {
            resource,
            slug: None,
            id: matched.params.get(id_param).map(ToString::to_string),
        },
        None => ContentResponse {
            resource,
            slug: matched
                .params
                .get(candidate.slug_param())
                .map(ToString::to_string),
            id: None,
        },
    };
    Ok(Json(body))
}
