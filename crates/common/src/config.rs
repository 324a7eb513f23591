use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub service_name: String,
    pub server_host: String,
    pub server_port: u16,
    pub kafka_brokers: String,
    pub engine_url: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "service".to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            // 8080 is usually taken by the engine itself in local setups
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8083".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            kafka_brokers: env::var("KAFKA_BROKERS")
                .unwrap_or_else(|_| "localhost:9092".to_string()),
            engine_url: env::var("ENGINE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/engine-rest".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Identity reported to the engine when locking external tasks. Falls back to
/// the container hostname so parallel workers stay distinguishable.
pub fn worker_id() -> String {
    env::var("WORKER_ID")
        .or_else(|_| env::var("HOSTNAME"))
        .unwrap_or_else(|_| "task-worker-1".to_string())
}
