//! HTTP server exposing the diagram translator

pub mod handlers;
pub mod router;

use anyhow::Context;
use flowscribe_ai::CodeGenerator;
use std::sync::Arc;

/// Default origin of the diagram editor front end.
pub const DEFAULT_ALLOW_ORIGIN: &str = "http://localhost:3000";

/// Listener and CORS settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin allowed to call the API from a browser
    pub allow_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allow_origin: DEFAULT_ALLOW_ORIGIN.to_string(),
        }
    }
}

/// Shared, read-only state handed to every request
pub struct ServerState {
    pub config: ServerConfig,
    /// Absent when the server only produces pseudocode
    pub generator: Option<Arc<dyn CodeGenerator>>,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            generator: None,
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }
}

pub struct FlowscribeServer {
    state: Arc<ServerState>,
}

impl FlowscribeServer {
    pub fn new(state: ServerState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    pub fn state(&self) -> Arc<ServerState> {
        Arc::clone(&self.state)
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.state.config.host, self.state.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        tracing::info!("Listening on http://{}", listener.local_addr()?);
        let app = router::create_router(self.state());
        axum::serve(listener, app).await.context("Server error")?;
        Ok(())
    }
}
