// src/presentation/http/controllers/slugs.rs
use crate::application::{
    commands::slugs::{AssignSlugCommand, DeleteSlugCommand, SaveSlugCommand},
    dto::SlugDto,
    error::ApplicationError,
    queries::slugs::{ResolveSlugQuery, SlugExistsQuery},
    validation::SkipPolicy,
};
use crate::domain::slug::Locale;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveSlugRequest {
    pub slug: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub resource_key: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignSlugRequest {
    /// Display text to slugify, not a finished slug.
    pub text: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub resource_key: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LocaleParams {
    /// Locale scope; empty means locale-independent.
    #[serde(default)]
    pub locale: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckSlugRequest {
    pub value: String,
    /// Dotted field key, e.g. "slug.de". Its last segment supplies the
    /// locale unless `locale` is set explicitly.
    #[serde(default)]
    pub field_key: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    /// Previously stored value; submitting it unchanged always passes.
    #[serde(default)]
    pub unchanged: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckSlugResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/slugs",
    request_body = SaveSlugRequest,
    responses(
        (status = 200, description = "Slug saved.", body = SlugDto),
        (status = 400, description = "Invalid slug, locale or resource fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn save_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SaveSlugRequest>,
) -> HttpResult<Json<SlugDto>> {
    let command = SaveSlugCommand {
        slug: payload.slug,
        locale: payload.locale,
        resource_key: payload.resource_key,
        resource_id: payload.resource_id,
    };

    state
        .services
        .slug_commands
        .save_slug(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/slugs/assign",
    request_body = AssignSlugRequest,
    responses(
        (status = 200, description = "Text slugified, made unique for the locale and saved.", body = SlugDto),
        (status = 400, description = "Invalid locale or resource fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn assign_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<AssignSlugRequest>,
) -> HttpResult<Json<SlugDto>> {
    let command = AssignSlugCommand {
        text: payload.text,
        locale: payload.locale,
        resource_key: payload.resource_key,
        resource_id: payload.resource_id,
    };

    state
        .services
        .slug_commands
        .assign_slug(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/slugs/{slug}",
    params(("slug" = String, Path, description = "Slug text"), LocaleParams),
    responses(
        (status = 200, description = "The resolved slug.", body = SlugDto),
        (status = 404, description = "No resource answers to this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn resolve_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> HttpResult<Json<SlugDto>> {
    state
        .services
        .slug_queries
        .resolve_slug(ResolveSlugQuery {
            slug,
            locale: params.locale,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/slugs/{slug}/exists",
    params(("slug" = String, Path, description = "Slug text"), LocaleParams),
    responses(
        (status = 200, description = "Whether any resource claims the slug.", body = ExistsResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn slug_exists(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> HttpResult<Json<ExistsResponse>> {
    let exists = state
        .services
        .slug_queries
        .slug_exists(SlugExistsQuery {
            slug,
            locale: params.locale,
        })
        .await
        .into_http()?;

    Ok(Json(ExistsResponse { exists }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/slugs/{slug}",
    params(("slug" = String, Path, description = "Slug text"), LocaleParams),
    responses(
        (status = 200, description = "Slug deleted (or was never stored).", body = crate::presentation::http::openapi::StatusResponse),
        (status = 400, description = "Invalid slug or locale.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn delete_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .slug_commands
        .delete_slug(DeleteSlugCommand {
            slug,
            locale: params.locale,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/slugs/check",
    request_body = CheckSlugRequest,
    responses(
        (status = 200, description = "Uniqueness verdict for the submitted value.", body = CheckSlugResponse),
        (status = 400, description = "Invalid locale.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn check_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CheckSlugRequest>,
) -> HttpResult<Json<CheckSlugResponse>> {
    let locale = payload
        .locale
        .map(Locale::new)
        .transpose()
        .map_err(ApplicationError::from)
        .into_http()?;

    let skip = payload
        .unchanged
        .map_or(SkipPolicy::Never, SkipPolicy::ValueEquals);

    let rule = state.services.unique_slug_rule(locale, skip);
    let valid = rule
        .passes(&payload.value, payload.field_key.as_deref())
        .await
        .into_http()?;

    let message = if valid {
        None
    } else {
        let attribute = payload.field_key.as_deref().unwrap_or("slug");
        Some(rule.render_message(attribute))
    };

    Ok(Json(CheckSlugResponse { valid, message }))
}
