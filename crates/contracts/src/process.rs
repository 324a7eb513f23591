use serde::{Deserialize, Serialize};

use crate::variables::{VariableMap, VariableValue};

/// Message envelope carried on every Kafka topic. `correlationId` doubles as
/// the process business key on the engine side; `dto` is the optional payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(rename = "dto", skip_serializing_if = "Option::is_none")]
    pub payload: Option<ProcessPayload>,
}

impl ProcessMessage {
    /// Builds the envelope a service task publishes back to Kafka: the process
    /// business key becomes the correlation id and the current variables
    /// become the payload.
    pub fn from_variables(business_key: Option<&str>, variables: &VariableMap) -> Self {
        Self {
            correlation_id: business_key.map(str::to_string),
            payload: Some(ProcessPayload::from_variables(variables)),
        }
    }
}

/// Payload of a process message. All fields are optional; partially filled
/// payloads are routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed: Option<bool>,
}

impl ProcessPayload {
    /// One map entry per populated field. The engine rejects null-valued
    /// variables, so `None` fields are left out entirely.
    pub fn to_variables(&self) -> VariableMap {
        let mut variables = VariableMap::new();
        if let Some(requester) = &self.requester {
            variables.insert("requester".to_string(), VariableValue::string(requester.clone()));
        }
        if let Some(amount) = self.amount {
            variables.insert("amount".to_string(), VariableValue::double(amount));
        }
        if let Some(pre_approved) = self.pre_approved {
            variables.insert("preApproved".to_string(), VariableValue::boolean(pre_approved));
        }
        if let Some(processed) = self.processed {
            variables.insert("processed".to_string(), VariableValue::boolean(processed));
        }
        variables
    }

    /// Inverse mapping, used when a delegate republishes process state.
    /// Absent or mistyped variables stay `None`.
    pub fn from_variables(variables: &VariableMap) -> Self {
        Self {
            requester: variables
                .get("requester")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            amount: variables.get("amount").and_then(VariableValue::as_double),
            pre_approved: variables.get("preApproved").and_then(VariableValue::as_bool),
            processed: variables.get("processed").and_then(VariableValue::as_bool),
        }
    }
}
