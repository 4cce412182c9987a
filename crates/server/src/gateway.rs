//! Webhook message gateway
//!
//! Forwards each reply as `POST {conversation_id, text}` to the messaging
//! process that owns the chat-network connection.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use responder_config::GatewayConfig;
use responder_core::{ConversationId, Error, MessageGateway, Result};

use crate::metrics::record_gateway_error;
use crate::ServerError;

#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    conversation_id: &'a str,
    text: &'a str,
}

/// Delivers replies to an HTTP webhook
#[derive(Debug, Clone)]
pub struct WebhookGateway {
    client: reqwest::Client,
    url: String,
}

impl WebhookGateway {
    pub fn new(url: impl Into<String>, timeout: Duration) -> std::result::Result<Self, ServerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServerError::Gateway(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Gateway for the configured webhook, or `None` when replies are returned inline
    pub fn from_config(config: &GatewayConfig) -> std::result::Result<Option<Self>, ServerError> {
        match &config.outbound_url {
            Some(url) => Self::new(url.clone(), Duration::from_millis(config.timeout_ms)).map(Some),
            None => Ok(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, conversation_id: &ConversationId, text: &str) -> reqwest::Result<()> {
        self.client
            .post(&self.url)
            .json(&OutboundMessage {
                conversation_id: conversation_id.as_str(),
                text,
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl MessageGateway for WebhookGateway {
    async fn send_reply(&self, conversation_id: &ConversationId, text: &str) -> Result<()> {
        match self.post(conversation_id, text).await {
            Ok(()) => {
                tracing::debug!(conversation_id = %conversation_id, url = %self.url, "Reply delivered");
                Ok(())
            }
            Err(e) => {
                record_gateway_error(self.name());
                Err(Error::Gateway(e.to_string()))
            }
        }
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use parking_lot::Mutex;
    use std::sync::Arc;

    type Received = Arc<Mutex<Vec<serde_json::Value>>>;

    async fn receiver(status: StatusCode) -> (String, Received) {
        let received: Received = Arc::default();
        let app = Router::new()
            .route(
                "/send",
                post(
                    move |State(received): State<Received>, Json(body): Json<serde_json::Value>| async move {
                        received.lock().push(body);
                        status
                    },
                ),
            )
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/send", addr), received)
    }

    #[test]
    fn test_from_config_without_url() {
        let config = GatewayConfig::default();
        assert!(WebhookGateway::from_config(&config).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_posts_reply() {
        let (url, received) = receiver(StatusCode::OK).await;
        let gateway = WebhookGateway::new(url, Duration::from_secs(5)).unwrap();

        gateway
            .send_reply(&ConversationId::from("94771234567@c.us"), "Hello!")
            .await
            .unwrap();

        let received = received.lock();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["conversation_id"], "94771234567@c.us");
        assert_eq!(received[0]["text"], "Hello!");
    }

    #[tokio::test]
    async fn test_error_status_is_gateway_error() {
        let (url, _received) = receiver(StatusCode::SERVICE_UNAVAILABLE).await;
        let gateway = WebhookGateway::new(url, Duration::from_secs(5)).unwrap();

        let result = gateway.send_reply(&ConversationId::from("a"), "x").await;
        assert!(matches!(result, Err(Error::Gateway(_))));
    }
}
