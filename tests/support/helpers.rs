// tests/support/helpers.rs
use axum::body;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use waypost::application::ports::time::Clock;
use waypost::application::services::ApplicationServices;
use waypost::domain::slug::{
    ArrayResource, ColumnExtractor, Locale, LocaleResolution, LocaleScopedPredicate, RecordStore,
    RepositoryResource, ResourceKey, SlugDirectory, SlugResource, SlugText,
};
use waypost::infrastructure::database;
use waypost::infrastructure::repositories::SqliteSlugRepository;
use waypost::infrastructure::time::SystemClock;
use waypost::infrastructure::util::DefaultSlugGenerator;
use waypost::presentation::http::matcher::{SlugMatches, SlugRouteTable};
use waypost::presentation::http::routes::build_router;
use waypost::presentation::http::state::HttpState;

/// In-memory database with the schema applied. A single-connection pool:
/// every checkout of a fresh `sqlite::memory:` connection would otherwise
/// see its own empty database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    pool
}

pub async fn sqlite_repository() -> Arc<SqliteSlugRepository> {
    Arc::new(SqliteSlugRepository::new(Arc::new(memory_pool().await)))
}

pub fn text(value: &str) -> SlugText {
    SlugText::new(value).expect("valid slug text")
}

pub fn locale(value: &str) -> Locale {
    Locale::new(value).expect("valid locale")
}

pub fn key(value: &str) -> ResourceKey {
    ResourceKey::new(value).expect("valid resource key")
}

pub fn array_resource(slugs: &[&str], resource_key: Option<&str>) -> Arc<ArrayResource> {
    Arc::new(ArrayResource::new(
        slugs.iter().map(|slug| text(slug)).collect(),
        resource_key.map(key),
    ))
}

/// The production wiring for slug rows: locale-exact lookups with
/// row-level key/id extraction.
pub fn repository_resource(store: Arc<dyn RecordStore>, priority: i32) -> Arc<RepositoryResource> {
    Arc::new(
        RepositoryResource::new(store)
            .with_extractor(Arc::new(ColumnExtractor::default()))
            .with_predicate(Arc::new(LocaleScopedPredicate::default()))
            .with_locale_resolution(LocaleResolution::Exact)
            .with_priority(priority),
    )
}

pub fn directory_with(resources: Vec<Arc<dyn SlugResource>>) -> Arc<SlugDirectory> {
    let directory = Arc::new(SlugDirectory::new());
    for resource in resources {
        directory.add_resource(resource);
    }
    directory
}

/// Services over a SQLite repository and the given directory, with the
/// production slugifier and clock.
pub fn services_over(
    repository: Arc<SqliteSlugRepository>,
    directory: Arc<SlugDirectory>,
) -> Arc<ApplicationServices> {
    services_with_clock(repository, directory, Arc::new(SystemClock))
}

/// Same as [`services_over`], with a caller-chosen clock.
pub fn services_with_clock(
    repository: Arc<SqliteSlugRepository>,
    directory: Arc<SlugDirectory>,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        repository,
        directory,
        Arc::new(DefaultSlugGenerator),
        clock,
    ))
}

/// Content candidates for the given resource keys, tried in order.
pub fn route_table(keys: &[&str]) -> SlugRouteTable {
    let mut table = SlugRouteTable::new();
    for route_key in keys {
        table.push(SlugMatches::new(key(route_key)));
    }
    table
}

pub fn make_router(
    services: Arc<ApplicationServices>,
    content_routes: SlugRouteTable,
) -> axum::Router {
    build_router(HttpState {
        services,
        content_routes: Arc::new(content_routes),
    })
}

pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read response body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
