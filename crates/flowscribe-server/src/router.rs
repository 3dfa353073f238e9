//! Axum router setup for the Flowscribe server

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    ServerState,
    handlers::{generate_code, health_check},
};

/// Create the axum router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = cors_layer(&state.config.allow_origin);
    Router::new()
        .route("/generate-code", post(generate_code))
        .route("/api/health", get(health_check))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);
    match origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
            layer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServerConfig;

    #[test]
    fn test_router_creation() {
        let state = Arc::new(ServerState::new(ServerConfig::default()));
        let _router = create_router(state);
    }

    #[test]
    fn test_router_tolerates_bad_origin() {
        let config = ServerConfig {
            allow_origin: "bad\norigin".to_string(),
            ..ServerConfig::default()
        };
        let _router = create_router(Arc::new(ServerState::new(config)));
    }
}
