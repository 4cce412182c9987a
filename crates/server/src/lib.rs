//! Responder Server
//!
//! HTTP inbound adapter for the dialogue engine, with an optional webhook for
//! outbound replies.

pub mod gateway;
pub mod http;
pub mod metrics;
pub mod state;

pub use gateway::WebhookGateway;
pub use http::create_router;
pub use metrics::{init_metrics, record_gateway_error, record_message};
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Gateway(_) => StatusCode::BAD_GATEWAY,
            ServerError::Config(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = StatusCode::from(self);
        if status.is_server_error() {
            tracing::error!(%status, error = %message, "Request failed");
        }
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<responder_config::ConfigError> for ServerError {
    fn from(err: responder_config::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl From<responder_agent::AgentError> for ServerError {
    fn from(err: responder_agent::AgentError) -> Self {
        ServerError::Config(err.to_string())
    }
}
