//! HTTP Endpoints
//!
//! REST surface standing in for the messaging gateway's inbound side.

use std::time::Duration;

use axum::{
    extract::{Json, Path, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use responder_core::{ConversationId, DialogueState};

use crate::metrics::{metrics_handler, record_message};
use crate::state::AppState;
use crate::ServerError;

const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let server = &state.config.server;
    let cors_layer = build_cors_layer(&server.cors_origins, server.cors_enabled);
    let timeout = Duration::from_secs(server.timeout_seconds);

    Router::new()
        .route("/api/messages", post(receive_message))
        .route("/api/sessions/:id", get(get_session))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty or all invalid, allows localhost:3000 only
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if parsed_origins.is_empty() {
        tracing::info!("No valid CORS origins configured, defaulting to {}", DEFAULT_ORIGIN);
        return layer.allow_origin(HeaderValue::from_static(DEFAULT_ORIGIN));
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    layer.allow_origin(parsed_origins)
}

/// Inbound message event
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub conversation_id: String,
    pub text: String,
}

/// Outcome of one inbound message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub conversation_id: String,
    /// Present when the reply is returned inline rather than forwarded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    pub language: String,
    pub rule: String,
    pub state: DialogueState,
}

/// `POST /api/messages`
///
/// 200 with the reply inline, or 202 once the reply has been handed to the
/// configured gateway.
async fn receive_message(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ServerError> {
    if request.conversation_id.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "conversation_id must not be empty".to_string(),
        ));
    }

    let id = ConversationId::new(request.conversation_id);

    let (status, reply) = match &state.gateway {
        Some(gateway) => {
            let reply = state
                .engine
                .on_message(&id, &request.text, gateway.as_ref())
                .await;
            (StatusCode::ACCEPTED, reply)
        }
        None => (StatusCode::OK, state.engine.process(&id, &request.text)),
    };

    record_message(&reply);

    let inline = status == StatusCode::OK;
    Ok((
        status,
        Json(MessageResponse {
            conversation_id: reply.conversation_id.to_string(),
            reply: inline.then_some(reply.text),
            language: reply.language.code().to_string(),
            rule: reply.rule.to_string(),
            state: reply.state,
        }),
    ))
}

/// `GET /api/sessions/:id`
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let id = ConversationId::new(id);
    let session = state.engine.session(&id);

    Json(serde_json::json!({
        "conversation_id": id,
        "pending_question": session.pending_question,
    }))
}

/// Health check
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "conversations": state.engine.store().len(),
        "gateway": state.gateway.as_ref().map(|g| g.name().to_string()),
    }))
}
