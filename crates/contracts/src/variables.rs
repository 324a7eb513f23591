use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Process variables keyed by name, in the engine's REST representation.
pub type VariableMap = HashMap<String, VariableValue>;

/// A single typed variable value as the engine's REST API exchanges it:
/// `{"value": ..., "type": "String"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableValue {
    pub value: Value,
    #[serde(rename = "type")]
    pub value_type: String,
}

impl VariableValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            value: Value::String(value.into()),
            value_type: "String".to_string(),
        }
    }

    pub fn long(value: i64) -> Self {
        Self {
            value: Value::from(value),
            value_type: "Long".to_string(),
        }
    }

    pub fn double(value: f64) -> Self {
        Self {
            value: Value::from(value),
            value_type: "Double".to_string(),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            value: Value::Bool(value),
            value_type: "Boolean".to_string(),
        }
    }

    pub fn json(value: Value) -> Self {
        Self {
            value,
            value_type: "Json".to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    pub fn as_long(&self) -> Option<i64> {
        self.value.as_i64()
    }

    pub fn as_double(&self) -> Option<f64> {
        self.value.as_f64()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_engine_wire_format() {
        let value = VariableValue::string("john.doe");
        let json = serde_json::to_value(&value).unwrap();

        assert_eq!(json["value"], "john.doe");
        assert_eq!(json["type"], "String");
    }

    #[test]
    fn deserializes_engine_payload_with_extra_fields() {
        let raw = r#"{"value": 42, "type": "Long", "valueInfo": {}}"#;
        let value: VariableValue = serde_json::from_str(raw).unwrap();

        assert_eq!(value.as_long(), Some(42));
        assert_eq!(value.value_type, "Long");
    }

    #[test]
    fn typed_getters_reject_mismatched_values() {
        let value = VariableValue::string("not-a-number");

        assert_eq!(value.as_long(), None);
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_str(), Some("not-a-number"));
    }
}
