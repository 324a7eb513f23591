use anyhow::Result;
use contracts::ProcessMessage;
use messaging::{topics, KafkaConsumer};

use crate::correlation::CorrelationService;

const MESSAGE_NAME: &str = "MessageDataFormatDemo";

pub async fn start(brokers: &str, correlation: CorrelationService) -> Result<()> {
    tracing::info!("🗂️ Data-format consumer starting...");

    let consumer = KafkaConsumer::new(brokers, "data-format-group", &[topics::DATA_FORMAT])?;

    consumer
        .consume(|key, payload| {
            let correlation = correlation.clone();
            async move {
                tracing::info!("Data-format consumer received message - Key: {}", key);
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
    async fn consumed_message_correlates_under_data_format_subscription() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/message")
                .json_body_partial(r#"{"messageName": "MessageDataFormatDemo", "businessKey": "fmt-1"}"#);
            then.status(200).json_body(json!([]));
        });

        let correlation = CorrelationService::new(EngineClient::new(server.base_url()));
        let payload = r#"{"correlationId": "fmt-1"}"#;

        handle_message(&correlation, payload).await.unwrap();

        mock.assert();
    }
}
