use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use serde::Serialize;
use std::sync::Arc;

use crate::store::traits::Store;
use crate::view::{render_document, Homepage};

/// Shared state handed to every handler
#[derive(Debug)]
pub struct AppContext<S> {
    pub store: Arc<S>,
    pub homepage: Homepage,
}

pub type AppState<S> = Arc<AppContext<S>>;

impl<S> AppContext<S> {
    pub fn new(store: Arc<S>, homepage: Homepage) -> AppState<S> {
        Arc::new(Self { store, homepage })
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

pub async fn home_page<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    render_document(&state.homepage).map(Html).map_err(|e| {
        log::error!("Failed to render homepage: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to render homepage")),
        )
    })
}

/// Health check that round-trips to the store
pub async fn health_check<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.ping().await {
        Ok(()) => Ok(Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            log::warn!("Health check failed: {:#}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(&format!("{:#}", e))),
            ))
        }
    }
}
