//! REST API handlers for the Flowscribe server

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use flowscribe_ai::{CodeGenRequest, DEFAULT_LANGUAGE};
use flowscribe_core::{Diagnostic, translate};
use serde::{Deserialize, Serialize};

use crate::ServerState;

/// Query parameters for code generation
#[derive(Debug, Default, Deserialize)]
pub struct GenerateParams {
    /// Target language, defaults to python
    pub language: Option<String>,
}

/// Response structure for the generate-code API
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub pseudocode: Vec<String>,
    pub code: Option<String>,
    pub provider: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Error body for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

fn error_response(status: StatusCode, code: &str, error: String) -> Response {
    (
        status,
        Json(ErrorResponse {
            error,
            code: code.to_string(),
        }),
    )
        .into_response()
}

/// Translate an uploaded diagram (raw XML body) and optionally generate code
pub async fn generate_code(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<GenerateParams>,
    body: String,
) -> Response {
    let translation = match translate(&body) {
        Ok(translation) => translation,
        Err(e) => {
            tracing::warn!("Rejected diagram: {}", e);
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.code(), e.to_string());
        }
    };

    let mut response = GenerateResponse {
        pseudocode: translation.lines.clone(),
        code: None,
        provider: None,
        diagnostics: translation.diagnostics.iter().cloned().collect(),
    };

    if let Some(generator) = &state.generator {
        let language = params.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
        let request = CodeGenRequest::from_translation(&translation, language);
        match generator.generate(&request).await {
            Ok(generated) => {
                response.code = Some(generated.code);
                response.provider = Some(generated.provider);
            }
            Err(e) => {
                tracing::error!("Code generation via {} failed: {:#}", generator.name(), e);
                return error_response(StatusCode::BAD_GATEWAY, "E_CODEGEN", format!("{:#}", e));
            }
        }
    }

    Json(response).into_response()
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    let health = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(health)
}
