//! Prometheus metrics

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use responder_agent::Reply;

use crate::state::AppState;
use crate::ServerError;

/// Install the global Prometheus recorder
///
/// Only one recorder can be installed per process.
pub fn init_metrics() -> Result<PrometheusHandle, ServerError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Internal(format!("Failed to install metrics recorder: {}", e)))
}

/// Count a processed message by language and fired rule
pub fn record_message(reply: &Reply) {
    metrics::counter!(
        "responder_messages_total",
        "language" => reply.language.code(),
        "rule" => reply.rule
    )
    .increment(1);
}

/// Count a failed outbound delivery
pub fn record_gateway_error(gateway: &str) {
    metrics::counter!("responder_gateway_errors_total", "gateway" => gateway.to_string())
        .increment(1);
}

/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
