use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use camunda::{TaskExecution, TaskHandler};
use contracts::VariableValue;

pub const TOPIC: &str = "send-delivery-email";

/// Sends the delivery confirmation email once an order has been delivered.
/// There is no real mail integration; the mail body is logged and the send
/// delay simulated.
pub struct EmailDeliveryDelegate;

#[async_trait]
impl TaskHandler for EmailDeliveryDelegate {
    async fn execute(&self, execution: &mut TaskExecution) -> Result<()> {
        tracing::info!(
            "Starting email delivery process for order: {}",
            execution.business_key().unwrap_or("-")
        );

        let customer_email = customer_email(execution);
        let order_id = order_id(execution);
        let customer_name = customer_name(execution);

        send_delivery_confirmation(&customer_email, &order_id, &customer_name).await;

        execution.set_variable("emailSent", VariableValue::boolean(true));
        execution.set_variable(
            "emailSentTimestamp",
            VariableValue::string(common::time::iso_now()),
        );

        tracing::info!("Delivery confirmation email sent successfully for order: {}", order_id);
        Ok(())
    }
}

fn customer_email(execution: &TaskExecution) -> String {
    match execution.string_variable("customerEmail") {
        Some(email) if !email.trim().is_empty() => email,
        _ => "customer@example.com".to_string(),
    }
}

/// Order id falls back to the business key, then to an id derived from the
/// process instance.
fn order_id(execution: &TaskExecution) -> String {
    if let Some(order_id) = execution.string_variable("orderId") {
        if !order_id.trim().is_empty() {
            return order_id;
        }
    }
    match execution.business_key() {
        Some(key) => key.to_string(),
        None => format!("ORDER-{}", execution.process_instance_id()),
    }
}

fn customer_name(execution: &TaskExecution) -> String {
    match execution.string_variable("customerName") {
        Some(name) if !name.trim().is_empty() => name,
        _ => "Valued Customer".to_string(),
    }
}

async fn send_delivery_confirmation(customer_email: &str, order_id: &str, customer_name: &str) {
    tracing::info!("Sending delivery confirmation email to: {}", customer_email);
    tracing::info!("  To: {}", customer_email);
    tracing::info!("  Subject: Your Order {} Has Been Delivered!", order_id);
    tracing::info!("  Dear {},", customer_name);
    tracing::info!("  Great news! Your order {} has been successfully delivered.", order_id);
    tracing::info!("  Thank you for choosing our service. We hope you enjoy your purchase!");

    // Simulated mail service round trip
    tokio::time::sleep(Duration::from_millis(500)).await;

    tracing::info!("Email delivery simulation completed for order: {}", order_id);
}
