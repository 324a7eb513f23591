mod delegates;

use std::sync::Arc;

use camunda::{EngineClient, ExternalTaskWorker};
use common::{config, AppConfig};
use messaging::{KafkaProducer, MessagePublisher};

use delegates::customer_json::JsonCustomerCreationDelegate;
use delegates::customer_log::CustomerReadingDelegate;
use delegates::customer_xml::XmlCustomerCreationDelegate;
use delegates::delivery_email::EmailDeliveryDelegate;
use delegates::order_processing::OrderProcessingDelegate;
use delegates::publish_message::PublishMessageDelegate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    common::logging::init(&config.log_level);

    let worker_id = config::worker_id();

    tracing::info!("⚙️ Task worker {} starting...", worker_id);
    tracing::info!("Engine: {}", config.engine_url);
    tracing::info!("Kafka brokers: {}", config.kafka_brokers);

    let producer = KafkaProducer::new(&config.kafka_brokers)
        .expect("Failed to create Kafka producer");
    let publisher: Arc<dyn MessagePublisher> = Arc::new(producer);

    let worker = ExternalTaskWorker::new(EngineClient::new(&config.engine_url), worker_id)
        .register(
            delegates::publish_message::TOPIC,
            Arc::new(PublishMessageDelegate::new(publisher)),
        )
        .register(delegates::order_processing::TOPIC, Arc::new(OrderProcessingDelegate))
        .register(delegates::customer_json::TOPIC, Arc::new(JsonCustomerCreationDelegate))
        .register(delegates::customer_xml::TOPIC, Arc::new(XmlCustomerCreationDelegate))
        .register(delegates::customer_log::TOPIC, Arc::new(CustomerReadingDelegate))
        .register(delegates::delivery_email::TOPIC, Arc::new(EmailDeliveryDelegate));

    worker.run().await
}
