use anyhow::Result;
use async_trait::async_trait;
use camunda::{TaskExecution, TaskHandler};
use contracts::{Customer, VariableValue};

pub const TOPIC: &str = "log-customer";

/// Logs the converted customer record at the end of the data-format process
/// and flags the instance as processed.
pub struct CustomerReadingDelegate;

#[async_trait]
impl TaskHandler for CustomerReadingDelegate {
    async fn execute(&self, execution: &mut TaskExecution) -> Result<()> {
        tracing::info!(
            "Reading customer data for process instance: {}",
            execution.process_instance_id()
        );

        let customer = Customer::from_variables(execution.variables());
        let customer_data = execution.string_variable("customerData");
        let data_format = execution.string_variable("dataFormat");
        let created_at = execution.string_variable("createdAt");

        tracing::info!("=== Customer Data Processing Complete ===");
        tracing::info!("Customer Name: {}", customer.full_name());
        tracing::info!(
            "Customer Details: Gender={:?}, Age={:?}, Valid={:?}, ValidationDate={:?}",
            customer.gender,
            customer.age,
            customer.is_valid,
            customer.validation_date
        );
        tracing::info!("Data Format: {}", data_format.as_deref().unwrap_or("-"));
        tracing::info!("Created At: {}", created_at.as_deref().unwrap_or("-"));
        tracing::info!("Converted Data: {}", customer_data.as_deref().unwrap_or("-"));
        tracing::info!("Process Business Key: {}", execution.business_key().unwrap_or("-"));
        tracing::info!("=== End Customer Data ===");

        execution.set_variable("customerProcessed", VariableValue::boolean(true));
        execution.set_variable("completedAt", VariableValue::string(common::time::iso_now()));

        Ok(())
    }
}
