#![deny(missing_docs)]

//! # Sample Body Generation
//!
//! Synthesizes a representative JSON value from a canonical schema.
//!
//! Generation is total: every `SchemaObject`, including the empty one, yields a value.
//! Object samples are deliberately over-inclusive and populate every declared property.
//! Time-based formats read the clock passed in, so output is reproducible in tests.

use crate::oas::models::SchemaObject;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Builds a sample value using the current time for date formats.
pub fn sample_body(schema: &SchemaObject) -> Value {
    sample_body_at(schema, Utc::now())
}

/// Builds a sample value with an explicit clock.
pub fn sample_body_at(schema: &SchemaObject, now: DateTime<Utc>) -> Value {
    SampleGenerator { now }.sample(schema)
}

/// Renders the sample as 2-space pretty JSON, the form pre-filled into a body editor.
pub fn sample_body_text(schema: &SchemaObject) -> String {
    let value = sample_body(schema);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

struct SampleGenerator {
    now: DateTime<Utc>,
}

impl SampleGenerator {
    fn sample(&self, schema: &SchemaObject) -> Value {
        if let Some(example) = &schema.example {
            return example.clone();
        }

        match schema.schema_type.as_deref() {
            Some("object") => self.sample_object(schema),
            None if schema.properties.is_some() => self.sample_object(schema),
            Some("array") => match &schema.items {
                Some(items) => Value::Array(vec![self.sample(items)]),
                None => Value::Array(Vec::new()),
            },
            Some("string") => self.sample_string(schema),
            Some("integer") | Some("number") => schema
                .default
                .clone()
                .or_else(|| schema.minimum.clone().map(Value::Number))
                .unwrap_or_else(|| Value::from(0)),
            Some("boolean") => schema
                .default
                .clone()
                .filter(|d| !d.is_null())
                .unwrap_or(Value::Bool(false)),
            _ => schema.default.clone().unwrap_or(Value::Null),
        }
    }

    fn sample_object(&self, schema: &SchemaObject) -> Value {
        let mut object = Map::new();
        for (name, property) in schema.properties.iter().flatten() {
            object.insert(name.clone(), self.sample(property));
        }
        Value::Object(object)
    }

    fn sample_string(&self, schema: &SchemaObject) -> Value {
        if let Some(first) = schema.enum_values.as_ref().and_then(|e| e.first()) {
            return first.clone();
        }
        match schema.format.as_deref() {
            Some("date-time") => {
                Value::String(self.now.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Some("date") => Value::String(self.now.format("%Y-%m-%d").to_string()),
            _ => schema
                .default
                .clone()
                .unwrap_or_else(|| Value::String(String::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn typed(ty: &str) -> SchemaObject {
        SchemaObject {
            schema_type: Some(ty.to_string()),
            ..SchemaObject::default()
        }
    }

    #[test]
    fn test_empty_schema_is_null() {
        assert_eq!(sample_body(&SchemaObject::default()), Value::Null);
    }

    #[test]
    fn test_example_wins() {
        let schema = SchemaObject {
            example: Some(json!({"id": 7})),
            properties: Some(IndexMap::from([("other".to_string(), typed("string"))])),
            ..typed("object")
        };
        assert_eq!(sample_body(&schema), json!({"id": 7}));

        let explicit_null = SchemaObject {
            example: Some(Value::Null),
            ..typed("string")
        };
        assert_eq!(sample_body(&explicit_null), Value::Null);
    }

    #[test]
    fn test_object_populates_every_property() {
        let schema = SchemaObject {
            properties: Some(IndexMap::from([
                ("address".to_string(), typed("string")),
                ("chainId".to_string(), SchemaObject { default: Some(json!(229)), ..typed("integer") }),
                ("active".to_string(), typed("boolean")),
                ("tags".to_string(), SchemaObject {
                    items: Some(Box::new(typed("string"))),
                    ..typed("array")
                }),
                ("meta".to_string(), SchemaObject::default()),
            ])),
            required: Some(vec!["address".to_string()]),
            ..typed("object")
        };
        let value = sample_body(&schema);
        assert_eq!(
            value,
            json!({"address": "", "chainId": 229, "active": false, "tags": [""], "meta": null})
        );
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["address", "chainId", "active", "tags", "meta"]);
    }

    #[test]
    fn test_untyped_with_properties_is_object() {
        let schema = SchemaObject {
            properties: Some(IndexMap::from([("n".to_string(), typed("number"))])),
            ..SchemaObject::default()
        };
        assert_eq!(sample_body(&schema), json!({"n": 0}));
        assert_eq!(sample_body(&typed("object")), json!({}));
    }

    #[test]
    fn test_array_without_items() {
        assert_eq!(sample_body(&typed("array")), json!([]));
    }

    #[test]
    fn test_string_branches() {
        let now = clock();
        let enumerated = SchemaObject {
            enum_values: Some(vec![json!("asc"), json!("desc")]),
            format: Some("date".to_string()),
            ..typed("string")
        };
        assert_eq!(sample_body_at(&enumerated, now), json!("asc"));

        let date_time = SchemaObject {
            format: Some("date-time".to_string()),
            ..typed("string")
        };
        assert_eq!(sample_body_at(&date_time, now), json!("2024-03-09T14:05:07.000Z"));

        let date = SchemaObject {
            format: Some("date".to_string()),
            ..typed("string")
        };
        assert_eq!(sample_body_at(&date, now), json!("2024-03-09"));

        let defaulted = SchemaObject {
            default: Some(json!("usd")),
            ..typed("string")
        };
        assert_eq!(sample_body_at(&defaulted, now), json!("usd"));

        let empty_enum = SchemaObject {
            enum_values: Some(Vec::new()),
            ..typed("string")
        };
        assert_eq!(sample_body_at(&empty_enum, now), json!(""));
    }

    #[test]
    fn test_numeric_branches() {
        let with_min = SchemaObject {
            minimum: Some(serde_json::Number::from(5)),
            ..typed("integer")
        };
        assert_eq!(sample_body(&with_min), json!(5));

        let with_default = SchemaObject {
            default: Some(json!(2.5)),
            minimum: Some(serde_json::Number::from(1)),
            ..typed("number")
        };
        assert_eq!(sample_body(&with_default), json!(2.5));
        assert_eq!(sample_body(&typed("number")), json!(0));
    }

    #[test]
    fn test_other_types_use_default() {
        let schema = SchemaObject {
            default: Some(json!("x")),
            ..typed("file")
        };
        assert_eq!(sample_body(&schema), json!("x"));
        assert_eq!(sample_body(&typed("boolean")), json!(false));
    }

    #[test]
    fn test_boolean_null_default_falls_back_to_false() {
        let schema = SchemaObject {
            default: Some(Value::Null),
            ..typed("boolean")
        };
        assert_eq!(sample_body(&schema), json!(false));

        let declared = SchemaObject {
            default: Some(json!(true)),
            ..typed("boolean")
        };
        assert_eq!(sample_body(&declared), json!(true));
    }

    #[test]
    fn test_circular_placeholder_samples_as_empty_object() {
        let schema = SchemaObject {
            circular: true,
            ..typed("object")
        };
        assert_eq!(sample_body(&schema), json!({}));
    }

    #[test]
    fn test_sample_body_text_is_pretty() {
        let schema = SchemaObject {
            properties: Some(IndexMap::from([("id".to_string(), typed("integer"))])),
            ..typed("object")
        };
        assert_eq!(sample_body_text(&schema), "{\n  \"id\": 0\n}");
    }
}
