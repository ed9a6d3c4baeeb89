pub mod api;
pub mod config;
pub mod model;
pub mod seed;
pub mod store;
pub mod view;

pub use api::handlers;
pub use api::routes;

pub use model::*;

pub use seed::{load_seed_data, run_seed, seed_database, SeedError, SeedOptions, SeedReport};

pub use store::{MemoryStore, PostgresStore, Store};

pub use view::{render_homepage, Homepage};

/// Install the env_logger backend: `info` by default, sqlx clamped to `warn`.
/// `RUST_LOG` takes precedence when set.
pub fn init_logging() {
    use log::LevelFilter;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .filter_module("sqlx", LevelFilter::Warn);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}

/// Build the storefront router around a store
pub fn app<S: Store + 'static>(
    store: std::sync::Arc<S>,
    homepage: Homepage,
    assets_dir: &str,
) -> axum::Router {
    let state = api::handlers::AppContext::new(store, homepage);
    api::routes::create_router(assets_dir).with_state(state)
}

/// Connect, migrate, optionally seed (`LOAD_SEED_DATA=true`) and serve the storefront
pub async fn run_server(config: &crate::config::AppConfig) -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    println!("Connecting to PostgreSQL...");
    let store =
        crate::store::PostgresStore::new(&config.database_url(), config.max_connections()).await?;

    println!("Running database migrations...");
    store.migrate().await?;

    let store = Arc::new(store);

    // Populate demo data on startup (optional)
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        println!("Loading seed data...");
        let report = seed::load_seed_data(&*store, config.seed.clone()).await?;
        println!(
            "Seed data loaded: {} records created",
            report.records_created()
        );
    }

    let app = app(store, Homepage::bundled()?, &config.assets.dir);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Storefront running on http://{}", bind_address);
    log::info!("Serving assets from {}", config.assets.dir);

    serve(listener, app).await?;

    Ok(())
}
