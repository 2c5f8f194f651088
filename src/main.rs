use anyhow::Result;
use axum::{body::Body, ServiceExt};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waypost::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use waypost::config::AppConfig;
use waypost::domain::slug::{ResourceDefinition, ResourceKey, ResourceRegistry, SlugDirectory};
use waypost::infrastructure::{
    database,
    repositories::SqliteSlugRepository,
    resources::{AppResourceResolver, REPOSITORY_RESOURCE},
    time::SystemClock,
    util,
};
use waypost::presentation::http::{
    matcher::{SlugMatches, SlugRouteTable},
    routes::build_router,
    state::HttpState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let repository = Arc::new(SqliteSlugRepository::new(Arc::clone(&pool)));

    let directory = Arc::new(SlugDirectory::new());
    let resolver = Arc::new(AppResourceResolver::new(repository.clone()));
    let mut registry = ResourceRegistry::new().with_resolver(resolver);
    for name in config.resources() {
        let args = if name.as_str() == REPOSITORY_RESOURCE {
            vec![(
                "priority".to_string(),
                config.repository_priority().to_string(),
            )]
        } else {
            Vec::new()
        };
        registry.register(ResourceDefinition::deferred_with(name.clone(), args));
    }
    registry.resolve_into(&directory)?;
    tracing::info!(resources = directory.len(), "slug directory ready");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = util::select_slug_generator(config.slugifier())?;

    let services = Arc::new(ApplicationServices::new(
        repository,
        Arc::clone(&directory),
        slugger,
        clock,
    ));

    let mut content_routes = SlugRouteTable::new();
    for key in config.route_keys() {
        content_routes.push(SlugMatches::new(ResourceKey::new(key.clone())?));
    }

    let state = HttpState {
        services,
        content_routes: Arc::new(content_routes),
    };

    let app = build_router(state);
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
