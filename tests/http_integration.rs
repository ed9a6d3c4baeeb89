use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use storefront::store::{MemoryStore, Store};
use storefront::{app, Homepage};
use tokio::net::TcpListener;

// Test client wrapper for making requests against a spawned server
struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(&format!("{}{}", self.base_url, path))
            .send()
            .await
    }
}

async fn spawn_server(store: Arc<MemoryStore>) -> TestClient {
    let homepage = Homepage::bundled().expect("bundled banners should parse");
    let router = app(store, homepage, "public");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    TestClient::new(format!("http://{}", addr))
}

#[tokio::test]
async fn test_homepage_is_served_as_html() {
    let client = spawn_server(Arc::new(MemoryStore::new())).await;

    let response = client.get("/").await.expect("Failed to fetch homepage");
    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.unwrap();
    let banners = Homepage::bundled().unwrap().banners.len();
    assert_eq!(body.matches(r#"class="carousel-slide""#).count(), banners);
    assert_eq!(body.matches("brand-cell").count(), 5);
    assert_eq!(body.matches("product-cell").count(), 10);
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let store = Arc::new(MemoryStore::new());
    let client = spawn_server(store.clone()).await;

    let response = client.get("/health").await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");

    store.close().await;

    let response = client.get("/health").await.unwrap();
    assert_eq!(response.status().as_u16(), 503);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("closed"));
}

#[tokio::test]
async fn test_missing_asset_is_not_found() {
    let client = spawn_server(Arc::new(MemoryStore::new())).await;

    let response = client.get("/images/brands/nope.png").await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_router_answers_without_network() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let router = app(
        Arc::new(MemoryStore::new()),
        Homepage::new(Vec::new()),
        "public",
    );
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}
