#![deny(missing_docs)]

//! # Endpoint Builder
//!
//! Turns one raw operation node into a `ParsedEndpoint`.
//! Parameters, request bodies and responses are resolved through `$ref` first.

use crate::oas::models::{
    HttpMethod, ParamSource, ParsedEndpoint, ParsedParameter, ParsedRequestBody, ParsedResponse,
    SchemaObject,
};
use crate::oas::node::{
    array_field, bool_field, field, object_field, str_field, string_field, string_list,
};
use crate::oas::resolver::resolve_ref;
use crate::oas::routes::naming::derive_operation_id;
use crate::oas::schemas::normalize_schema;
use serde_json::Value;

/// Fallback media type when a request body declares no content.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Builds the endpoint for `method` on `path`.
///
/// The operationId is the declared one or derived from (method, path); uniqueness
/// across the document is handled by the caller.
pub fn build_endpoint(
    path: &str,
    method: HttpMethod,
    path_item: &Value,
    op: &Value,
    root: &Value,
) -> ParsedEndpoint {
    let operation_id = string_field(op, "operationId")
        .unwrap_or_else(|| derive_operation_id(method, path));

    // Path-item parameters first, then the operation's own. No de-duplication.
    let parameters = array_field(path_item, "parameters")
        .iter()
        .chain(array_field(op, "parameters"))
        .map(|p| parse_parameter(p, root))
        .collect();

    let request_body = field(op, "requestBody")
        .filter(|b| !b.is_null())
        .map(|b| parse_request_body(b, root));

    let responses = object_field(op, "responses")
        .map(|responses| {
            responses
                .iter()
                .map(|(code, resp)| parse_response(code, resp, root))
                .collect()
        })
        .unwrap_or_default();

    ParsedEndpoint {
        operation_id,
        method,
        path: path.to_string(),
        summary: string_field(op, "summary"),
        description: string_field(op, "description"),
        tags: string_list(op, "tags").unwrap_or_default(),
        deprecated: bool_field(op, "deprecated").unwrap_or(false),
        parameters,
        request_body,
        responses,
    }
}

/// Resolves and maps a single parameter.
pub fn parse_parameter(raw: &Value, root: &Value) -> ParsedParameter {
    let resolved = resolve_ref(raw, root);
    ParsedParameter {
        name: string_field(resolved, "name").unwrap_or_default(),
        location: ParamSource::from_location(str_field(resolved, "in").unwrap_or_default()),
        required: bool_field(resolved, "required").unwrap_or(false),
        description: string_field(resolved, "description"),
        schema: schema_or_empty(field(resolved, "schema"), root),
    }
}

/// Resolves and maps a request body.
pub fn parse_request_body(raw: &Value, root: &Value) -> ParsedRequestBody {
    let resolved = resolve_ref(raw, root);
    let first_media = first_media_type(resolved);

    let (content_type, schema) = match first_media {
        Some((content_type, media)) => (
            content_type.to_string(),
            schema_or_empty(field(media, "schema"), root),
        ),
        None => (DEFAULT_CONTENT_TYPE.to_string(), SchemaObject::default()),
    };

    ParsedRequestBody {
        required: bool_field(resolved, "required").unwrap_or(false),
        description: string_field(resolved, "description"),
        content_type,
        schema,
    }
}

/// Resolves and maps one entry of a responses map.
pub fn parse_response(status_code: &str, raw: &Value, root: &Value) -> ParsedResponse {
    let resolved = resolve_ref(raw, root);
    let first_media = first_media_type(resolved);

    ParsedResponse {
        status_code: status_code.to_string(),
        description: string_field(resolved, "description"),
        content_type: first_media.map(|(content_type, _)| content_type.to_string()),
        schema: first_media
            .and_then(|(_, media)| field(media, "schema"))
            .map(|schema| normalize_schema(schema, root)),
    }
}

/// The first `content` entry in declaration order.
fn first_media_type(node: &Value) -> Option<(&str, &Value)> {
    object_field(node, "content")?
        .iter()
        .next()
        .map(|(key, media)| (key.as_str(), media))
}

fn schema_or_empty(schema: Option<&Value>, root: &Value) -> SchemaObject {
    schema
        .map(|s| normalize_schema(s, root))
        .unwrap_or_default()
}
