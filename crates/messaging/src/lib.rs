// Kafka plumbing shared by the services
pub mod kafka_consumer;
pub mod kafka_producer;
pub mod topics;

pub use kafka_consumer::KafkaConsumer;
pub use kafka_producer::{KafkaProducer, MessagePublisher};
