mod handlers;
mod routes;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use common::AppConfig;
use messaging::{KafkaProducer, MessagePublisher};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env();
    common::logging::init(&config.log_level);

    let producer = KafkaProducer::new(&config.kafka_brokers)
        .expect("Failed to create Kafka producer");
    let publisher: Arc<dyn MessagePublisher> = Arc::new(producer);
    let publisher = web::Data::from(publisher);

    let server_address = config.server_address();
    tracing::info!("🚪 Gateway starting on http://{}", server_address);
    tracing::info!("Kafka brokers: {}", config.kafka_brokers);

    HttpServer::new(move || {
        App::new()
            .app_data(publisher.clone())
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
}
