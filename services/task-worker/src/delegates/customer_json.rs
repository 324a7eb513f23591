use anyhow::Result;
use async_trait::async_trait;
use camunda::{TaskExecution, TaskHandler};
use contracts::VariableValue;
use serde_json::json;

pub const TOPIC: &str = "create-customer-json";

/// Renders the customer form fields into a JSON document and stores it in
/// `customerData`.
pub struct JsonCustomerCreationDelegate;

#[async_trait]
impl TaskHandler for JsonCustomerCreationDelegate {
    async fn execute(&self, execution: &mut TaskExecution) -> Result<()> {
        tracing::info!(
            "Processing JSON customer creation for process instance: {}",
            execution.process_instance_id()
        );

        let firstname = execution.string_variable("firstname");
        let lastname = execution.string_variable("lastname");

        let document = json!({
            "firstname": firstname.clone().unwrap_or_default(),
            "lastname": lastname.clone().unwrap_or_default(),
            "gender": execution.string_variable("gender").unwrap_or_default(),
            "age": execution.long_variable("age").unwrap_or(0),
            "isValid": execution.bool_variable("isValid").unwrap_or(false),
            "validationDate": execution.string_variable("validationDate").unwrap_or_default(),
        });
        let customer_json = serde_json::to_string(&document)?;

        execution.set_variable("customerData", VariableValue::string(customer_json));
        execution.set_variable("dataFormat", VariableValue::string("json"));
        execution.set_variable("createdAt", VariableValue::string(common::time::iso_now()));

        tracing::info!(
            "Successfully created customer JSON for: {} {}",
            firstname.as_deref().unwrap_or(""),
            lastname.as_deref().unwrap_or("")
        );

        Ok(())
    }
}
