//! Kafka topic names shared by the gateway, the consumers and the delegates.

/// Starts the plain message process (`MessageKafkaDemo`).
pub const START_PROCESS: &str = "start-process-message-topic";

/// Starts the order process (`MessageOrderDemo`).
pub const ORDER_PROCESS: &str = "order-process-message-topic";

/// Starts the data-format process (`MessageDataFormatDemo`).
pub const DATA_FORMAT: &str = "data-format-process-message-topic";

/// Carries envelopes published by service tasks back out of the engine.
pub const SERVICE_TASK: &str = "service-task-message-topic";
