use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::variables::{VariableMap, VariableValue};

/// Customer record moved through the data-format demo process. `gender` is
/// "female" or "male", `dataFormat` is "xml" or "json"; both come out of user
/// task forms, so nothing here is guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub is_valid: Option<bool>,
    pub validation_date: Option<NaiveDate>,
    pub data_format: Option<String>,
}

impl Customer {
    /// Collects the per-field process variables the data-format process keeps.
    /// `validationDate` arrives as an ISO date string; anything unparseable is
    /// treated as absent.
    pub fn from_variables(variables: &VariableMap) -> Self {
        Self {
            firstname: string_variable(variables, "firstname"),
            lastname: string_variable(variables, "lastname"),
            gender: string_variable(variables, "gender"),
            age: variables.get("age").and_then(VariableValue::as_long),
            is_valid: variables.get("isValid").and_then(VariableValue::as_bool),
            validation_date: variables
                .get("validationDate")
                .and_then(|v| v.as_str())
                .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()),
            data_format: string_variable(variables, "dataFormat"),
        }
    }

    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.firstname.as_deref().unwrap_or(""),
            self.lastname.as_deref().unwrap_or("")
        )
    }
}

fn string_variable(variables: &VariableMap, name: &str) -> Option<String> {
    variables.get(name).and_then(|v| v.as_str()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_variables_maps_every_field() {
        let mut variables = VariableMap::new();
        variables.insert("firstname".to_string(), VariableValue::string("Jane"));
        variables.insert("lastname".to_string(), VariableValue::string("Doe"));
        variables.insert("gender".to_string(), VariableValue::string("female"));
        variables.insert("age".to_string(), VariableValue::long(35));
        variables.insert("isValid".to_string(), VariableValue::boolean(true));
        variables.insert("validationDate".to_string(), VariableValue::string("2024-03-15"));
        variables.insert("dataFormat".to_string(), VariableValue::string("xml"));

        let customer = Customer::from_variables(&variables);

        assert_eq!(customer.firstname.as_deref(), Some("Jane"));
        assert_eq!(customer.lastname.as_deref(), Some("Doe"));
        assert_eq!(customer.gender.as_deref(), Some("female"));
        assert_eq!(customer.age, Some(35));
        assert_eq!(customer.is_valid, Some(true));
        assert_eq!(
            customer.validation_date,
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(customer.data_format.as_deref(), Some("xml"));
        assert_eq!(customer.full_name(), "Jane Doe");
    }

    #[test]
    fn from_variables_tolerates_missing_fields() {
        let mut variables = VariableMap::new();
        variables.insert("firstname".to_string(), VariableValue::string("Max"));

        let customer = Customer::from_variables(&variables);

        assert_eq!(customer.firstname.as_deref(), Some("Max"));
        assert_eq!(customer.lastname, None);
        assert_eq!(customer.age, None);
        assert_eq!(customer.validation_date, None);
    }

    #[test]
    fn unparseable_validation_date_is_dropped() {
        let mut variables = VariableMap::new();
        variables.insert("validationDate".to_string(), VariableValue::string("15.03.2024"));

        assert_eq!(Customer::from_variables(&variables).validation_date, None);
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let customer = Customer {
            firstname: Some("Jane".to_string()),
            is_valid: Some(true),
            validation_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            ..Customer::default()
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["isValid"], true);
        assert_eq!(json["validationDate"], "2024-03-15");
    }
}
