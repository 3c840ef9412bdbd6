use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

use super::category::ScanCategory;

/// One value inside the details of a scan.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailValue {
    Empty,
    Flag(bool),
    Number(Number),
    Text(String),
    List(Vec<DetailValue>),
    Group(ScanDetails),
}

impl DetailValue {
    /// Renders the value as a one-line headline, if it can serve as one.
    pub fn as_headline(&self) -> Option<String> {
        match self {
            DetailValue::Text(text) if !text.trim().is_empty() => Some(text.clone()),
            DetailValue::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}

impl From<Value> for DetailValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DetailValue::Empty,
            Value::Bool(flag) => DetailValue::Flag(flag),
            Value::Number(number) => DetailValue::Number(number),
            Value::String(text) => DetailValue::Text(text),
            Value::Array(items) => {
                DetailValue::List(items.into_iter().map(DetailValue::from).collect())
            }
            Value::Object(fields) => DetailValue::Group(ScanDetails::from(fields)),
        }
    }
}

impl From<&DetailValue> for Value {
    fn from(value: &DetailValue) -> Self {
        match value {
            DetailValue::Empty => Value::Null,
            DetailValue::Flag(flag) => Value::Bool(*flag),
            DetailValue::Number(number) => Value::Number(number.clone()),
            DetailValue::Text(text) => Value::String(text.clone()),
            DetailValue::List(items) => Value::Array(items.iter().map(Value::from).collect()),
            DetailValue::Group(details) => details.to_json(),
        }
    }
}

/// Ordered field mapping returned by the analysis provider.
///
/// Shape varies by category and is not validated; field order is kept as
/// the provider sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanDetails {
    fields: Vec<(String, DetailValue)>,
}

impl ScanDetails {
    pub fn get(&self, field: &str) -> Option<&DetailValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DetailValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), Value::from(value)))
            .collect();
        Value::Object(map)
    }
}

impl From<Map<String, Value>> for ScanDetails {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map
                .into_iter()
                .map(|(name, value)| (name, DetailValue::from(value)))
                .collect(),
        }
    }
}

/// Outcome of parsing a provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedScan {
    pub summary: String,
    pub details: ScanDetails,
}

/// A completed scan kept in the session history.
///
/// Only built from a successfully parsed provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub category: ScanCategory,
    pub image: String,
    pub summary: String,
    pub details: ScanDetails,
}

impl ScanRecord {
    pub fn new(category: ScanCategory, image: String, parsed: ParsedScan) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            category,
            image,
            summary: parsed.summary,
            details: parsed.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_keep_provider_field_order() {
        let value = json!({"zeta": 1, "alpha": 2, "mid": 3});
        let Value::Object(map) = value else {
            panic!("expected object");
        };

        let details = ScanDetails::from(map);
        let names: Vec<&str> = details.iter().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn should_convert_nested_values() {
        let value = json!({
            "macronutrientes": {"proteina": 30, "carboidratos": 45.5, "gordura": 12},
            "pecas_afetadas": ["bumper", "hood"],
            "vegano": false,
            "observacao": null
        });
        let Value::Object(map) = value.clone() else {
            panic!("expected object");
        };

        let details = ScanDetails::from(map);

        assert!(matches!(
            details.get("macronutrientes"),
            Some(DetailValue::Group(group)) if group.len() == 3
        ));
        assert_eq!(
            details.get("pecas_afetadas"),
            Some(&DetailValue::List(vec![
                DetailValue::Text("bumper".to_string()),
                DetailValue::Text("hood".to_string()),
            ]))
        );
        assert_eq!(details.get("vegano"), Some(&DetailValue::Flag(false)));
        assert_eq!(details.get("observacao"), Some(&DetailValue::Empty));
        assert_eq!(details.to_json(), value);
    }

    #[test]
    fn should_render_text_and_numbers_as_headline() {
        assert_eq!(
            DetailValue::Text("Pizza".to_string()).as_headline(),
            Some("Pizza".to_string())
        );
        assert_eq!(
            DetailValue::Number(Number::from(1200)).as_headline(),
            Some("1200".to_string())
        );
        assert_eq!(DetailValue::Text("   ".to_string()).as_headline(), None);
        assert_eq!(DetailValue::Flag(true).as_headline(), None);
        assert_eq!(DetailValue::List(vec![]).as_headline(), None);
    }

    #[test]
    fn should_give_each_record_a_fresh_id() {
        let parsed = ParsedScan {
            summary: "Pizza".to_string(),
            details: ScanDetails::default(),
        };

        let first = ScanRecord::new(ScanCategory::Food, "data:x".to_string(), parsed.clone());
        let second = ScanRecord::new(ScanCategory::Food, "data:x".to_string(), parsed);

        assert_ne!(first.id, second.id);
        assert_eq!(first.summary, "Pizza");
    }
}
