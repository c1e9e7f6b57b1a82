#![deny(missing_docs)]

//! # Routes Module
//!
//! Entry point for walking OpenAPI `paths`.
//! Produces one `ParsedEndpoint` per (path, supported verb).

pub mod builder;
pub mod naming;

use crate::oas::models::{HttpMethod, ParsedEndpoint};
use crate::oas::resolver::resolve_ref;
use crate::oas::routes::builder::build_endpoint;
use crate::oas::routes::naming::OperationIds;
use serde_json::Value;

/// Verbs OpenAPI allows on a path item that the playground does not handle.
const UNSUPPORTED_VERBS: [&str; 3] = ["options", "head", "trace"];

/// Extracts endpoints from a `paths` map, in path declaration order then verb order.
///
/// Only `GET`, `POST`, `PUT`, `PATCH` and `DELETE` are extracted; other verbs are skipped.
/// Path items that are not objects are ignored.
///
/// # Arguments
///
/// * `paths` - The `paths` node of the document.
/// * `root` - The whole document, for `$ref` resolution.
pub fn extract_endpoints(paths: &Value, root: &Value) -> Vec<ParsedEndpoint> {
    let Some(paths) = paths.as_object() else {
        return Vec::new();
    };

    let mut endpoints = Vec::new();
    let mut operation_ids = OperationIds::default();

    for (path, raw_item) in paths {
        let path_item = resolve_ref(raw_item, root);
        let Some(fields) = path_item.as_object() else {
            continue;
        };

        for verb in UNSUPPORTED_VERBS {
            if fields.contains_key(verb) {
                tracing::debug!(path = %path, verb, "skipping unsupported verb");
            }
        }

        for method in HttpMethod::ALL {
            let Some(op) = fields.get(method.key()).filter(|op| op.is_object()) else {
                continue;
            };
            let mut endpoint = build_endpoint(path, method, path_item, op, root);
            endpoint.operation_id = operation_ids.claim(endpoint.operation_id);
            endpoints.push(endpoint);
        }
    }

    endpoints
}
