#![deny(missing_docs)]

//! # Apiplay Core
//!
//! Spec ingestion and request modeling for an interactive API playground.
//!
//! An OpenAPI 3.x document goes in; a fully resolved `ParsedSpec` comes out. From an
//! endpoint plus user-entered values the crate builds executable request descriptors,
//! sample bodies, and equivalent code snippets. Nothing here performs network I/O.

/// Shared error types.
pub mod error;

/// Playground configuration.
pub mod config;

/// OpenAPI (OAS) parsing.
pub mod oas;

/// Sample request bodies.
pub mod sample;

/// Request descriptor building.
pub mod request;

/// Code snippet emission.
pub mod snippets;

/// Transport boundary and response helpers.
pub mod transport;

pub use config::{AuthConfig, FeatureConfig, PlaygroundConfig};
pub use error::{AppError, AppResult};
pub use oas::{
    filter_groups, parse_openapi_document, parse_openapi_spec, HttpMethod, ParamSource,
    ParsedEndpoint, ParsedParameter, ParsedRequestBody, ParsedResponse, ParsedSpec, SchemaObject,
    SpecInfo, SpecServer, SpecTag, TagGroup,
};
pub use request::{
    build_request, build_url, AuthType, RequestDescriptor, RequestOptions, RequestState,
};
pub use sample::{sample_body, sample_body_at, sample_body_text};
pub use snippets::{emit_all, emit_snippet, SnippetStrategy, SnippetTarget};
pub use transport::{format_bytes, ResponseSnapshot, StatusClass, Transport};
