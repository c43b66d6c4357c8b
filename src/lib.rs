pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod repository;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::Router;
use middleware::cors_layer;
use repository::memory::InMemoryRatings;
use state::AppState;
use tower_http::trace::TraceLayer;

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let repository = Arc::new(InMemoryRatings::new());
    let state = AppState::new(repository);

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .fallback(|| async { "404 Not Found" });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(9000);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind address");

    tracing::info!("Coffee ratings API listening on port {port}");

    axum::serve(listener, app).await.unwrap();
}
