use actix_web::{web, HttpResponse, Responder};
use contracts::ProcessMessage;
use messaging::{topics, MessagePublisher};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    instance: String,
}

pub async fn health_check() -> impl Responder {
    let hostname = std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string());

    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: "gateway".to_string(),
        instance: hostname,
    })
}

pub async fn start_process(
    publisher: web::Data<dyn MessagePublisher>,
    message: web::Json<ProcessMessage>,
) -> impl Responder {
    publish_envelope(publisher.get_ref(), topics::START_PROCESS, message.into_inner()).await
}

pub async fn order_process(
    publisher: web::Data<dyn MessagePublisher>,
    message: web::Json<ProcessMessage>,
) -> impl Responder {
    publish_envelope(publisher.get_ref(), topics::ORDER_PROCESS, message.into_inner()).await
}

pub async fn data_format_process(
    publisher: web::Data<dyn MessagePublisher>,
    message: web::Json<ProcessMessage>,
) -> impl Responder {
    publish_envelope(publisher.get_ref(), topics::DATA_FORMAT, message.into_inner()).await
}

/// The message key is the correlation id so retries for the same process
/// instance land on the same partition.
async fn publish_envelope(
    publisher: &dyn MessagePublisher,
    topic: &str,
    message: ProcessMessage,
) -> HttpResponse {
    tracing::info!(
        "Publishing process message to {} (correlationId: {})",
        topic,
        message.correlation_id.as_deref().unwrap_or("-")
    );

    let key = message.correlation_id.clone();
    let result: anyhow::Result<()> = async {
        let payload = serde_json::to_string(&message)?;
        publisher.publish(topic, key.as_deref(), &payload).await
    }
    .await;

    match result {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => {
            tracing::error!("Failed to publish to {}: {}", topic, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to publish message: {}", e)
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use contracts::ProcessPayload;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingPublisher {
        records: Mutex<Vec<(String, Option<String>, String)>>,
    }

    #[async_trait]
    impl MessagePublisher for RecordingPublisher {
        async fn publish(&self, topic: &str, key: Option<&str>, payload: &str) -> anyhow::Result<()> {
            self.records.lock().unwrap().push((
                topic.to_string(),
                key.map(str::to_string),
                payload.to_string(),
            ));
            Ok(())
        }
    }

    struct FailingPublisher;

    #[async_trait]
    impl MessagePublisher for FailingPublisher {
        async fn publish(&self, _: &str, _: Option<&str>, _: &str) -> anyhow::Result<()> {
            anyhow::bail!("broker unreachable")
        }
    }

    fn sample_message() -> ProcessMessage {
        ProcessMessage {
            correlation_id: Some("order-1".to_string()),
            payload: Some(ProcessPayload {
                requester: Some("john".to_string()),
                amount: Some(500.0),
                pre_approved: Some(true),
                processed: None,
            }),
        }
    }

    async fn post(
        publisher: Arc<dyn MessagePublisher>,
        uri: &str,
        message: &ProcessMessage,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(publisher))
                .configure(crate::routes::configure),
        )
        .await;
        let request = test::TestRequest::post().uri(uri).set_json(message).to_request();
        test::call_service(&app, request).await
    }

    #[actix_web::test]
    async fn start_endpoint_publishes_envelope_to_start_topic() {
        let publisher = Arc::new(RecordingPublisher::default());
        let message = sample_message();

        let response = post(publisher.clone(), "/message-process/start", &message).await;

        assert!(response.status().is_success());
        let records = publisher.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        let (topic, key, payload) = &records[0];
        assert_eq!(topic, topics::START_PROCESS);
        assert_eq!(key.as_deref(), Some("order-1"));
        let envelope: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(envelope["correlationId"], "order-1");
        assert_eq!(envelope["dto"]["requester"], "john");
        assert_eq!(envelope["dto"]["preApproved"], true);
    }

    #[actix_web::test]
    async fn order_endpoint_publishes_to_order_topic() {
        let publisher = Arc::new(RecordingPublisher::default());

        let response = post(publisher.clone(), "/message-process/order", &sample_message()).await;

        assert!(response.status().is_success());
        let records = publisher.records.lock().unwrap();
        assert_eq!(records[0].0, topics::ORDER_PROCESS);
    }

    #[actix_web::test]
    async fn dataformat_endpoint_publishes_to_data_format_topic() {
        let publisher = Arc::new(RecordingPublisher::default());

        let response =
            post(publisher.clone(), "/message-process/dataformat", &sample_message()).await;

        assert!(response.status().is_success());
        let records = publisher.records.lock().unwrap();
        assert_eq!(records[0].0, topics::DATA_FORMAT);
    }

    #[actix_web::test]
    async fn message_without_correlation_id_is_published_without_key() {
        let publisher = Arc::new(RecordingPublisher::default());
        let message = ProcessMessage {
            correlation_id: None,
            payload: Some(ProcessPayload::default()),
        };

        let response = post(publisher.clone(), "/message-process/start", &message).await;

        assert!(response.status().is_success());
        let records = publisher.records.lock().unwrap();
        assert_eq!(records[0].1, None);
    }

    #[actix_web::test]
    async fn publish_failure_returns_internal_server_error() {
        let response =
            post(Arc::new(FailingPublisher), "/message-process/start", &sample_message()).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn health_reports_service_name() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(
                    Arc::new(RecordingPublisher::default()) as Arc<dyn MessagePublisher>
                ))
                .configure(crate::routes::configure),
        )
        .await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "gateway");
    }
}
