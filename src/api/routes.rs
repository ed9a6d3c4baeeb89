use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::api::handlers::{self, AppState};
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>(assets_dir: &str) -> Router<AppState<S>> {
    Router::new()
        .route("/", get(handlers::home_page::<S>))
        .route("/health", get(handlers::health_check::<S>))
        .nest_service("/images", ServeDir::new(format!("{}/images", assets_dir)))
}
