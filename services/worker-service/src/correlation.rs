use camunda::{CorrelationRequest, CorrelationResult, EngineClient};
use contracts::ProcessMessage;

/// Bridges consumed Kafka messages to the engine's message correlation API.
#[derive(Clone)]
pub struct CorrelationService {
    client: EngineClient,
}

impl CorrelationService {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    /// Correlates `message` under `message_name`. A message with no payload
    /// correlates without variables, one with no correlation id correlates
    /// without a business key. Returns `None` when correlation fails; the
    /// failure is logged and the message is considered handled.
    pub async fn correlate(
        &self,
        message_name: &str,
        message: &ProcessMessage,
    ) -> Option<Vec<CorrelationResult>> {
        tracing::info!("Consuming message {}", message_name);

        let request = build_request(message_name, message);

        match self.client.correlate_message(&request).await {
            Ok(results) => {
                tracing::info!(
                    "Correlation successful. Result: {}",
                    serde_json::to_string(&results).unwrap_or_default()
                );
                tracing::info!(
                    "Correlation key used: {}",
                    message.correlation_id.as_deref().unwrap_or("-")
                );
                Some(results)
            }
            Err(e) if e.status() == Some(400) => {
                tracing::error!("Issue when correlating the message: {}", e);
                None
            }
            Err(e) => {
                tracing::error!("Unknown issue occurred: {}", e);
                None
            }
        }
    }
}

fn build_request(message_name: &str, message: &ProcessMessage) -> CorrelationRequest {
    CorrelationRequest {
        message_name: message_name.to_string(),
        business_key: message.correlation_id.clone(),
        process_variables: message.payload.as_ref().map(|p| p.to_variables()),
        result_enabled: true,
    }
}
