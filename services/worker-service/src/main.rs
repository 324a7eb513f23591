mod consumers;
mod correlation;

use camunda::EngineClient;
use common::AppConfig;
use correlation::CorrelationService;
use tokio::task;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    common::logging::init(&config.log_level);

    tracing::info!("🔧 Worker Service starting...");
    tracing::info!("Kafka brokers: {}", config.kafka_brokers);
    tracing::info!("Engine: {}", config.engine_url);

    let correlation = CorrelationService::new(EngineClient::new(&config.engine_url));

    // Spawn start-process consumer
    let start_brokers = config.kafka_brokers.clone();
    let start_correlation = correlation.clone();
    let start_task = task::spawn(async move {
        consumers::start_process::start(&start_brokers, start_correlation).await
    });

    // Spawn order-process consumer
    let order_brokers = config.kafka_brokers.clone();
    let order_correlation = correlation.clone();
    let order_task = task::spawn(async move {
        consumers::order_process::start(&order_brokers, order_correlation).await
    });

    // Spawn data-format consumer
    let format_brokers = config.kafka_brokers.clone();
    let format_task = task::spawn(async move {
        consumers::data_format::start(&format_brokers, correlation).await
    });

    // Wait for all consumers
    let _ = tokio::try_join!(start_task, order_task, format_task)?;

    Ok(())
}
