use anyhow::Result;
use contracts::ProcessMessage;
use messaging::{topics, KafkaConsumer};

use crate::correlation::CorrelationService;

const MESSAGE_NAME: &str = "MessageOrderDemo";

pub async fn start(brokers: &str, correlation: CorrelationService) -> Result<()> {
    tracing::info!("📦 Order-process consumer starting...");

    let consumer = KafkaConsumer::new(brokers, "order-process-group", &[topics::ORDER_PROCESS])?;

    consumer
        .consume(|key, payload| {
            let correlation = correlation.clone();
            async move {
                tracing::info!("Order-process consumer received message - Key: {}", key);
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
