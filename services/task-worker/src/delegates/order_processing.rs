use anyhow::Result;
use async_trait::async_trait;
use camunda::{TaskExecution, TaskHandler};
use contracts::VariableValue;
use serde_json::{Map, Value};

pub const TOPIC: &str = "process-order";

/// Lifts order details out of the consumed `dto` payload into first-class
/// process variables for the approval form. Orders under 1000 are
/// pre-approved.
pub struct OrderProcessingDelegate;

#[async_trait]
impl TaskHandler for OrderProcessingDelegate {
    async fn execute(&self, execution: &mut TaskExecution) -> Result<()> {
        tracing::info!(
            "Processing order data for process instance: {}",
            execution.process_instance_id()
        );

        let dto = execution.variable("dto").map(|v| v.value.clone());

        match dto {
            Some(Value::Object(dto)) => {
                if let Some(customer_id) = string_field(&dto, "customerId") {
                    tracing::info!("Set customerId: {}", customer_id);
                    execution.set_variable("customerId", VariableValue::string(customer_id));
                }

                if let Some(order_value) = long_field(&dto, "orderValue") {
                    let order_ok = order_value < 1000;
                    tracing::info!("Set orderValue: {} (orderOk: {})", order_value, order_ok);
                    execution.set_variable("orderValue", VariableValue::long(order_value));
                    execution.set_variable("orderOk", VariableValue::boolean(order_ok));
                }

                if let Some(customer_email) = string_field(&dto, "customerEmail") {
                    tracing::info!("Set customerEmail: {}", customer_email);
                    execution.set_variable("customerEmail", VariableValue::string(customer_email));
                }

                execution.set_variable(
                    "orderProcessedAt",
                    VariableValue::string(common::time::iso_now()),
                );
            }
            _ => {
                tracing::warn!("No order payload found in process variables");
                execution.set_variable("orderOk", VariableValue::boolean(true));
                execution.set_variable("customerId", VariableValue::string("unknown"));
                execution.set_variable("orderValue", VariableValue::long(0));
                execution.set_variable(
                    "customerEmail",
                    VariableValue::string("unknown@example.com"),
                );
            }
        }

        Ok(())
    }
}

fn string_field(dto: &Map<String, Value>, name: &str) -> Option<String> {
    match dto.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Order values arrive in whatever type the upstream producer used; integers,
/// floats and numeric strings all count, floats are truncated.
fn long_field(dto: &Map<String, Value>, name: &str) -> Option<i64> {
    match dto.get(name)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => match s.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Could not parse order value as number: {}", s);
                None
            }
        },
        Value::Null => None,
        other => {
            tracing::warn!("Unexpected order value type: {}", other);
            None
        }
    }
}
