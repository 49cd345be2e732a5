use axum::{Router, http::StatusCode, routing::get};

use crate::application::http::server::app_state::AppState;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health))
}

async fn health() -> StatusCode {
    StatusCode::OK
}
