use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use camunda::{TaskExecution, TaskHandler};
use contracts::ProcessMessage;
use messaging::{topics, MessagePublisher};

pub const TOPIC: &str = "publish-message";

/// Publishes the current process state back to Kafka. The business key
/// travels as the correlation id so a downstream consumer can correlate the
/// reply into the waiting process instance.
pub struct PublishMessageDelegate {
    publisher: Arc<dyn MessagePublisher>,
}

impl PublishMessageDelegate {
    pub fn new(publisher: Arc<dyn MessagePublisher>) -> Self {
        Self { publisher }
    }
}

#[async_trait]
impl TaskHandler for PublishMessageDelegate {
    async fn execute(&self, execution: &mut TaskExecution) -> Result<()> {
        tracing::info!("Publishing process state from activity {}", execution.activity_id());

        let message = ProcessMessage::from_variables(execution.business_key(), execution.variables());
        let payload = serde_json::to_string(&message)?;

        self.publisher
            .publish(topics::SERVICE_TASK, message.correlation_id.as_deref(), &payload)
            .await?;

        Ok(())
    }
}
