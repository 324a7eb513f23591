use anyhow::Result;
use contracts::ProcessMessage;
use messaging::{topics, KafkaConsumer};

use crate::correlation::CorrelationService;

/// Message subscription the engine's start event waits on.
const MESSAGE_NAME: &str = "MessageKafkaDemo";

pub async fn start(brokers: &str, correlation: CorrelationService) -> Result<()> {
    tracing::info!("📨 Start-process consumer starting...");

    let consumer = KafkaConsumer::new(brokers, "start-process-group", &[topics::START_PROCESS])?;

    consumer
        .consume(|key, payload| {
            let correlation = correlation.clone();
            async move {
                tracing::info!("Start-process consumer received message - Key: {}", key);
                handle_message(&correlation, &payload).await
            }
        })
        .await
}

async fn handle_message(correlation: &CorrelationService, payload: &str) -> Result<()> {
    match serde_json::from_str::<ProcessMessage>(payload) {
        Ok(message) => {
            correlation.correlate(MESSAGE_NAME, &message).await;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to parse message: {}", e);
            Err(anyhow::anyhow!("Parse error: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camunda::EngineClient;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn consumed_message_correlates_under_start_subscription() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/message")
                .json_body_partial(r#"{"messageName": "MessageKafkaDemo", "businessKey": "key-1"}"#);
            then.status(200).json_body(json!([]));
        });

        let correlation = CorrelationService::new(EngineClient::new(server.base_url()));
        let payload = r#"{"correlationId": "key-1", "dto": {"requester": "john", "amount": 100.0}}"#;

        handle_message(&correlation, payload).await.unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn malformed_payload_is_rejected_without_engine_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/message");
            then.status(200).json_body(json!([]));
        });

        let correlation = CorrelationService::new(EngineClient::new(server.base_url()));

        let result = handle_message(&correlation, "not-json").await;

        assert!(result.is_err());
        assert_eq!(mock.hits(), 0);
    }
}
