// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt as _;
use waypost::domain::slug::{ResourceId, Slug, SlugRepository};
use waypost::presentation::http::matcher::SlugMatches;

mod support;
use support::{
    array_resource, directory_with, fixed_now, key, locale, make_router, read_json,
    repository_resource, route_table, services_over, services_with_clock, sqlite_repository, text,
    FixedClock,
};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Router over an empty database with no extra resources registered.
async fn bare_router() -> axum::Router {
    let repo = sqlite_repository().await;
    let directory = directory_with(vec![repository_resource(repo.clone(), 100)]);
    make_router(services_over(repo, directory), route_table(&["page"]))
}

#[tokio::test]
async fn health_returns_ok() {
    let app = bare_router().await;

    let (status, body) = read_json(app.oneshot(get("/health")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_lists_the_slug_endpoints() {
    let app = bare_router().await;

    let (status, body) = read_json(app.oneshot(get("/openapi.json")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body.get("paths").and_then(Value::as_object).unwrap();
    assert!(paths.contains_key("/api/v1/slugs"));
    assert!(paths.contains_key("/{locale}/{slug}"));
}

#[tokio::test]
async fn content_routes_match_array_resources_in_order() {
    let repo = sqlite_repository().await;
    let directory = directory_with(vec![
        array_resource(&["about-cars"], Some("blog")),
        array_resource(&["red-pen"], Some("product")),
    ]);
    let app = make_router(
        services_over(repo, directory),
        route_table(&["blog", "product"]),
    );

    let (status, body) = read_json(app.clone().oneshot(get("/about-cars")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "resource": "blog", "slug": "about-cars" }));

    let (status, body) = read_json(app.clone().oneshot(get("/red-pen")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "resource": "product", "slug": "red-pen" }));

    let (status, _) = read_json(app.oneshot(get("/green-pen")).await.unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn id_candidates_answer_with_the_rewritten_id() {
    let repo = sqlite_repository().await;
    let directory = directory_with(vec![array_resource(&["about-cars"], Some("blog"))]);

    let mut table = route_table(&[]);
    table.push(SlugMatches::new(key("blog")).with_id_param("id"));
    let app = make_router(services_over(repo, directory), table);

    let (status, body) = read_json(app.oneshot(get("/about-cars")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    // Array entries carry no resource id; the sentinel takes its place.
    assert_eq!(body, json!({ "resource": "blog", "id": "0" }));
}

#[tokio::test]
async fn stored_rows_resolve_locale_independently_on_content_routes() {
    let repo = sqlite_repository().await;
    repo.save(
        Slug::new(text("about-us"), locale("en"))
            .with_resource_key(key("blog"))
            .with_resource_id(ResourceId::from(5)),
    )
    .await
    .unwrap();

    let directory = directory_with(vec![repository_resource(repo.clone(), 100)]);
    let app = make_router(services_over(repo, directory), route_table(&["blog"]));

    // The row is "en"; the candidate has no locale parameter, so the
    // locale segment does not constrain the match.
    let (status, body) = read_json(app.clone().oneshot(get("/de/about-us")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "resource": "blog", "slug": "about-us" }));

    let (status, _) = read_json(app.oneshot(get("/team")).await.unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assigning_suffixes_until_the_locale_is_free() {
    let repo = sqlite_repository().await;
    let directory = directory_with(vec![repository_resource(repo.clone(), 100)]);
    let app = make_router(services_over(repo, directory), route_table(&["page"]));

    let assign = |loc: &str| {
        post(
            "/api/v1/slugs/assign",
            json!({ "text": "über uns", "locale": loc, "resource_key": "page" }),
        )
    };

    let (status, body) = read_json(app.clone().oneshot(assign("de")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "uber-uns");
    assert_eq!(body["locale"], "de");

    // Taken for "de" only; exact resolution leaves "de-CH" free.
    let (status, body) = read_json(app.clone().oneshot(assign("de-CH")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "uber-uns");

    let (status, body) = read_json(app.oneshot(assign("de-CH")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "uber-uns-1");
}

#[tokio::test]
async fn untransliterable_text_falls_back_to_a_timestamped_slug() {
    let repo = sqlite_repository().await;
    let directory = directory_with(vec![repository_resource(repo.clone(), 100)]);
    let app = make_router(
        services_with_clock(repo, directory, Arc::new(FixedClock)),
        route_table(&["page"]),
    );

    let (status, body) = read_json(
        app.oneshot(post(
            "/api/v1/slugs/assign",
            json!({ "text": "***", "locale": "" }),
        ))
        .await
        .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], format!("slug-{}", fixed_now().timestamp()));
    assert_eq!(body["locale"], "");
}

#[tokio::test]
async fn slugs_round_trip_through_the_admin_api() {
    let app = bare_router().await;

    let (status, body) = read_json(
        app.clone()
            .oneshot(post(
                "/api/v1/slugs",
                json!({
                    "slug": "spring-sale",
                    "locale": "en",
                    "resource_key": "campaign",
                    "resource_id": "9"
                }),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "spring-sale");

    let (status, body) = read_json(
        app.clone()
            .oneshot(get("/api/v1/slugs/spring-sale?locale=en"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resource_key"], "campaign");
    assert_eq!(body["resource_id"], "9");

    let (status, body) = read_json(
        app.clone()
            .oneshot(get("/api/v1/slugs/spring-sale/exists?locale=en"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "exists": true }));

    let (status, body) = read_json(
        app.clone()
            .oneshot(delete("/api/v1/slugs/spring-sale?locale=en"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "deleted" }));

    let (status, _) = read_json(
        app.clone()
            .oneshot(get("/api/v1/slugs/spring-sale?locale=en"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = read_json(
        app.oneshot(get("/api/v1/slugs/spring-sale/exists?locale=en"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "exists": false }));
}

#[tokio::test]
async fn malformed_locales_are_rejected() {
    let app = bare_router().await;

    let (status, body) = read_json(
        app.oneshot(get("/api/v1/slugs/about-us?locale=de_CH"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn check_endpoint_reports_collisions_per_locale() {
    let repo = sqlite_repository().await;
    repo.save(Slug::new(text("login"), locale("en")).with_resource_key(key("page")))
        .await
        .unwrap();

    let directory = directory_with(vec![repository_resource(repo.clone(), 100)]);
    let app = make_router(services_over(repo, directory), route_table(&["page"]));

    let (status, body) = read_json(
        app.clone()
            .oneshot(post(
                "/api/v1/slugs/check",
                json!({ "value": "login", "field_key": "slug.en" }),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "valid": false, "message": "The slug.en is not unique." })
    );

    // Unchanged value: the edit case passes without a lookup.
    let (status, body) = read_json(
        app.clone()
            .oneshot(post(
                "/api/v1/slugs/check",
                json!({ "value": "login", "field_key": "slug.en", "unchanged": "login" }),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "valid": true }));

    let (status, body) = read_json(
        app.oneshot(post(
            "/api/v1/slugs/check",
            json!({ "value": "login", "field_key": "slug.de" }),
        ))
        .await
        .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "valid": true }));
}
