#![deny(missing_docs)]

//! # OpenAPI Parsing Module
//!
//! - **node**: Pure accessors over the decoded document tree.
//! - **ref_utils** / **resolver**: `$ref` pointer handling.
//! - **schemas**: Canonical, reference-free schema normalization.
//! - **routes**: Endpoint extraction from `paths`.
//! - **tags**: Sidebar grouping.
//! - **document**: The `ParsedSpec` entry points.
//! - **models**: The parsed model.

pub mod document;
pub mod models;
pub mod node;
pub mod ref_utils;
pub mod resolver;
pub mod routes;
pub mod schemas;
pub mod tags;

pub use document::{parse_openapi_document, parse_openapi_spec};
pub use models::{
    HttpMethod, ParamSource, ParsedEndpoint, ParsedParameter, ParsedRequestBody, ParsedResponse,
    ParsedSpec, SchemaObject, SpecInfo, SpecServer, SpecTag,
};
pub use resolver::resolve_ref;
pub use routes::extract_endpoints;
pub use schemas::normalize_schema;
pub use tags::{filter_groups, group_endpoints_by_tag, TagGroup, DEFAULT_TAG};
