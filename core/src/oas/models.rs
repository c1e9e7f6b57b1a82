#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! Definition of the parsed model handed to the presentation layer.
//!
//! A `ParsedSpec` is built once per document load and is never mutated afterwards;
//! reloading a document produces a new, independent value. Every type serializes to
//! camelCase JSON with unset options omitted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Canonical, reference-free schema.
///
/// Unset fields stay `None`, which is distinct from an explicit falsy value.
/// A schema with no `type` is "unknown/any".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaObject {
    /// JSON type name (`object`, `array`, `string`, `integer`, `number`, `boolean`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Format hint (e.g. `date-time`, `uuid`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// OpenAPI 3.0 `nullable`, or derived from a 3.1 `type` array containing `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    /// Default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Example value. `Some(Value::Null)` is an explicit `example: null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Allowed values, copied as declared.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Item schema for arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaObject>>,
    /// Object properties in declaration order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaObject>>,
    /// Required property names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Set on the placeholder emitted where a reference cycle or an overlong chain was cut.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub circular: bool,
}

impl SchemaObject {
    /// True when the schema carries no type and no properties.
    pub fn is_untyped(&self) -> bool {
        self.schema_type.is_none() && self.properties.is_none()
    }
}

/// The HTTP methods the playground handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Supported verbs, in extraction order.
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    /// Uppercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Lowercase name, as used for path item fields.
    pub fn key(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The source location of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSource {
    /// Path.
    Path,
    /// Query.
    Query,
    /// Header.
    Header,
    /// Cookie.
    Cookie,
}

impl ParamSource {
    /// Maps the `in` field of a parameter. Unknown locations fall back to `Query`.
    pub fn from_location(location: &str) -> Self {
        match location {
            "path" => ParamSource::Path,
            "header" => ParamSource::Header,
            "cookie" => ParamSource::Cookie,
            _ => ParamSource::Query,
        }
    }
}

/// A resolved parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedParameter {
    /// Parameter name.
    pub name: String,
    /// Location.
    #[serde(rename = "in")]
    pub location: ParamSource,
    /// Whether the parameter is required (`false` when absent).
    pub required: bool,
    /// Description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Normalized schema (empty when the parameter declares none).
    pub schema: SchemaObject,
}

/// A resolved request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRequestBody {
    /// Whether the body is required.
    pub required: bool,
    /// Description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First declared media type, `application/json` when none is declared.
    pub content_type: String,
    /// Normalized schema of that media type.
    pub schema: SchemaObject,
}

/// A resolved response entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResponse {
    /// Status code key as declared (`200`, `4XX`, `default`).
    pub status_code: String,
    /// Description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First declared media type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Normalized schema of that media type, if declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,
}

/// One (path, verb) operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEndpoint {
    /// Declared or derived identifier, unique within the document.
    pub operation_id: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path template (e.g. `/users/{id}`).
    pub path: String,
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Long description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags in declaration order.
    pub tags: Vec<String>,
    /// Whether the operation is deprecated.
    pub deprecated: bool,
    /// Path-item-level parameters followed by operation-level ones, duplicates kept.
    pub parameters: Vec<ParsedParameter>,
    /// Request body, if the operation declares one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<ParsedRequestBody>,
    /// Responses in declaration order.
    pub responses: Vec<ParsedResponse>,
}

impl ParsedEndpoint {
    /// Parameters declared at the given location, in order.
    pub fn parameters_in(&self, location: ParamSource) -> impl Iterator<Item = &ParsedParameter> {
        self.parameters
            .iter()
            .filter(move |p| p.location == location)
    }

    /// The first response whose status code starts with `2`.
    pub fn success_response(&self) -> Option<&ParsedResponse> {
        self.responses
            .iter()
            .find(|r| r.status_code.starts_with('2'))
    }
}

/// `info` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecInfo {
    /// Title (`API` when absent).
    pub title: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Version (`1.0.0` when absent).
    pub version: String,
}

/// A `servers[]` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecServer {
    /// Server URL.
    pub url: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A declared (or synthesized) tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecTag {
    /// Tag name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The fully resolved document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedSpec {
    /// `info` block.
    pub info: SpecInfo,
    /// Declared servers.
    pub servers: Vec<SpecServer>,
    /// Declared tags, in order.
    pub tags: Vec<SpecTag>,
    /// One entry per supported (path, verb).
    pub endpoints: Vec<ParsedEndpoint>,
    /// `components.schemas`, normalized, in declaration order.
    pub schemas: IndexMap<String, SchemaObject>,
}

impl ParsedSpec {
    /// Finds an endpoint by operationId.
    pub fn find_endpoint(&self, operation_id: &str) -> Option<&ParsedEndpoint> {
        self.endpoints
            .iter()
            .find(|e| e.operation_id == operation_id)
    }

    /// URL of the first declared server.
    pub fn default_server_url(&self) -> Option<&str> {
        self.servers.first().map(|s| s.url.as_str())
    }
}
