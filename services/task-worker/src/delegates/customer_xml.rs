use anyhow::Result;
use async_trait::async_trait;
use camunda::{TaskExecution, TaskHandler};
use contracts::VariableValue;

pub const TOPIC: &str = "create-customer-xml";

/// Renders the customer form fields into an XML document and stores it in
/// `customerData`.
pub struct XmlCustomerCreationDelegate;

#[async_trait]
impl TaskHandler for XmlCustomerCreationDelegate {
    async fn execute(&self, execution: &mut TaskExecution) -> Result<()> {
        tracing::info!(
            "Processing XML customer creation for process instance: {}",
            execution.process_instance_id()
        );

        let firstname = execution.string_variable("firstname");
        let lastname = execution.string_variable("lastname");

        let customer_xml = render_customer_xml(
            firstname.as_deref(),
            lastname.as_deref(),
            execution.string_variable("gender").as_deref(),
            execution.long_variable("age"),
            execution.bool_variable("isValid"),
            execution.string_variable("validationDate").as_deref(),
        );

        execution.set_variable("customerData", VariableValue::string(customer_xml));
        execution.set_variable("dataFormat", VariableValue::string("xml"));
        execution.set_variable("createdAt", VariableValue::string(common::time::iso_now()));

        tracing::info!(
            "Successfully created customer XML for: {} {}",
            firstname.as_deref().unwrap_or(""),
            lastname.as_deref().unwrap_or("")
        );

        Ok(())
    }
}

fn render_customer_xml(
    firstname: Option<&str>,
    lastname: Option<&str>,
    gender: Option<&str>,
    age: Option<i64>,
    is_valid: Option<bool>,
    validation_date: Option<&str>,
) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<customer>\n");
    xml.push_str(&format!("  <firstname>{}</firstname>\n", escape_xml(firstname)));
    xml.push_str(&format!("  <lastname>{}</lastname>\n", escape_xml(lastname)));
    xml.push_str(&format!("  <gender>{}</gender>\n", escape_xml(gender)));
    xml.push_str(&format!(
        "  <age>{}</age>\n",
        age.map(|a| a.to_string()).unwrap_or_default()
    ));
    xml.push_str(&format!("  <isValid>{}</isValid>\n", is_valid.unwrap_or(false)));
    xml.push_str(&format!(
        "  <validationDate>{}</validationDate>\n",
        escape_xml(validation_date)
    ));
    xml.push_str("</customer>");
    xml
}

/// Minimal escaping for the five XML special characters; a missing value
/// renders as empty element text.
fn escape_xml(value: Option<&str>) -> String {
    value
        .unwrap_or("")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegates::test_support::execution;
    use contracts::VariableMap;

    #[tokio::test]
    async fn renders_complete_customer_as_xml() {
        let mut variables = VariableMap::new();
        variables.insert("firstname".to_string(), VariableValue::string("Max"));
        variables.insert("lastname".to_string(), VariableValue::string("Mustermann"));
        variables.insert("gender".to_string(), VariableValue::string("male"));
        variables.insert("age".to_string(), VariableValue::long(42));
        variables.insert("isValid".to_string(), VariableValue::boolean(true));
        variables.insert("validationDate".to_string(), VariableValue::string("2024-03-15"));

        let mut execution = execution(Some("customer-key"), variables);
        XmlCustomerCreationDelegate.execute(&mut execution).await.unwrap();

        let data = execution.string_variable("customerData").unwrap();
        assert!(data.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(data.contains("  <firstname>Max</firstname>\n"));
        assert!(data.contains("  <lastname>Mustermann</lastname>\n"));
        assert!(data.contains("  <age>42</age>\n"));
        assert!(data.contains("  <isValid>true</isValid>\n"));
        assert!(data.contains("  <validationDate>2024-03-15</validationDate>\n"));
        assert!(data.ends_with("</customer>"));

        assert_eq!(execution.string_variable("dataFormat"), Some("xml".to_string()));
        assert!(execution.string_variable("createdAt").is_some());
    }

    #[tokio::test]
    async fn missing_fields_render_as_empty_elements() {
        let mut execution = execution(Some("customer-key"), VariableMap::new());
        XmlCustomerCreationDelegate.execute(&mut execution).await.unwrap();

        let data = execution.string_variable("customerData").unwrap();
        assert!(data.contains("<firstname></firstname>"));
        assert!(data.contains("<age></age>"));
        assert!(data.contains("<isValid>false</isValid>"));
    }

    #[tokio::test]
    async fn special_characters_are_escaped() {
        let mut variables = VariableMap::new();
        variables.insert(
            "firstname".to_string(),
            VariableValue::string("Tom & \"Jerry\" <admin>"),
        );
        variables.insert("lastname".to_string(), VariableValue::string("O'Brien"));

        let mut execution = execution(Some("customer-key"), variables);
        XmlCustomerCreationDelegate.execute(&mut execution).await.unwrap();

        let data = execution.string_variable("customerData").unwrap();
        assert!(data.contains("Tom &amp; &quot;Jerry&quot; &lt;admin&gt;"));
        assert!(data.contains("O&apos;Brien"));
    }
}
