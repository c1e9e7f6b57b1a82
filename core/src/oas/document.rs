#![deny(missing_docs)]

//! # OpenAPI Document Parsing
//!
//! Builds the complete `ParsedSpec` from a decoded document: `info`, `servers`, `tags`,
//! `components.schemas` and every endpoint under `paths`.
//!
//! OpenAPI 3.0 and 3.1 documents are handled the same way; unknown fields are ignored.

use crate::error::{AppError, AppResult};
use crate::oas::models::{ParsedSpec, SchemaObject, SpecInfo, SpecServer, SpecTag};
use crate::oas::node::{array_field, field, object_field, scalar_text, string_field};
use crate::oas::routes::extract_endpoints;
use crate::oas::schemas::normalize_schema;
use indexmap::IndexMap;
use serde_json::Value;

/// Decodes YAML or JSON text and parses it.
///
/// Only decoding can fail; the parse itself is total.
pub fn parse_openapi_document(content: &str) -> AppResult<ParsedSpec> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI document: {}", e)))?;
    Ok(parse_openapi_spec(&yaml_to_json(raw)))
}

/// Converts a YAML tree into the JSON tree the parser reads.
///
/// Mapping keys are stringified (`200:` becomes `"200"`); keys that are neither
/// strings, numbers nor booleans are dropped. Mapping order is preserved.
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => Value::Object(
            map.into_iter()
                .filter_map(|(key, value)| {
                    let key = match key {
                        Yaml::String(s) => s,
                        Yaml::Number(n) => n.to_string(),
                        Yaml::Bool(b) => b.to_string(),
                        _ => return None,
                    };
                    Some((key, yaml_to_json(value)))
                })
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Parses an already decoded document tree.
///
/// Missing sections yield empty collections; the result is never partial.
pub fn parse_openapi_spec(root: &Value) -> ParsedSpec {
    let info = parse_info(field(root, "info").unwrap_or(&Value::Null));
    let servers = parse_servers(array_field(root, "servers"));
    let tags = parse_tags(array_field(root, "tags"));
    let schemas = parse_schemas(root);
    let endpoints = field(root, "paths")
        .map(|paths| extract_endpoints(paths, root))
        .unwrap_or_default();

    tracing::info!(
        title = %info.title,
        endpoints = endpoints.len(),
        schemas = schemas.len(),
        "parsed OpenAPI document"
    );

    ParsedSpec {
        info,
        servers,
        tags,
        endpoints,
        schemas,
    }
}

fn parse_info(raw: &Value) -> SpecInfo {
    SpecInfo {
        title: string_field(raw, "title").unwrap_or_else(|| "API".to_string()),
        description: string_field(raw, "description"),
        version: scalar_text(raw, "version").unwrap_or_else(|| "1.0.0".to_string()),
    }
}

fn parse_servers(raw: &[Value]) -> Vec<SpecServer> {
    raw.iter()
        .filter(|s| s.is_object())
        .map(|s| SpecServer {
            url: string_field(s, "url").unwrap_or_default(),
            description: string_field(s, "description"),
        })
        .collect()
}

fn parse_tags(raw: &[Value]) -> Vec<SpecTag> {
    raw.iter()
        .filter(|t| t.is_object())
        .map(|t| SpecTag {
            name: string_field(t, "name").unwrap_or_default(),
            description: string_field(t, "description"),
        })
        .collect()
}

fn parse_schemas(root: &Value) -> IndexMap<String, SchemaObject> {
    let Some(schemas) = field(root, "components").and_then(|c| object_field(c, "schemas")) else {
        return IndexMap::new();
    };
    schemas
        .iter()
        .map(|(name, schema)| (name.clone(), normalize_schema(schema, root)))
        .collect()
}
