//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use responder_agent::{DialogueEngine, SeededChooser};
use responder_config::Settings;
use responder_core::MessageGateway;

use crate::gateway::WebhookGateway;
use crate::ServerError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub engine: Arc<DialogueEngine>,
    /// Outbound delivery; replies are returned inline when unset
    pub gateway: Option<Arc<dyn MessageGateway>>,
    /// Prometheus handle; `/metrics` answers 404 when unset
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: Settings, engine: DialogueEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            gateway: None,
            metrics: None,
        }
    }

    /// Build the engine and gateway described by the settings
    pub fn from_settings(config: Settings) -> Result<Self, ServerError> {
        let mut engine = match &config.dialogue.domain_config_path {
            Some(path) => DialogueEngine::from_path(path)?,
            None => DialogueEngine::builtin(),
        };

        if let Some(seed) = config.dialogue.rng_seed {
            engine = engine.with_chooser(Arc::new(SeededChooser::new(seed)));
        }

        let gateway = WebhookGateway::from_config(&config.gateway)?;
        if let Some(gateway) = &gateway {
            tracing::info!(url = %gateway.url(), "Replies forwarded to webhook");
        }

        let mut state = Self::new(config, engine);
        if let Some(gateway) = gateway {
            state = state.with_gateway(Arc::new(gateway));
        }
        Ok(state)
    }

    pub fn with_gateway(mut self, gateway: Arc<dyn MessageGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
