#![deny(missing_docs)]

//! # Request Building
//!
//! Merges an endpoint definition with user-entered values into a concrete
//! `RequestDescriptor` (URL, headers, optional body).
//!
//! Rules:
//! - Path parameters with a value replace every `{name}` token; empty ones leave the token as is.
//! - Empty query values are dropped; the rest are percent-encoded and joined with `&`.
//! - Auth headers come first, then `Content-Type`, then user headers (which may overwrite).
//! - `GET` never carries a body.

use crate::config::PlaygroundConfig;
use crate::error::{AppError, AppResult};
use crate::oas::models::{HttpMethod, ParsedEndpoint};
use crate::sample::sample_body_text;
use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default header carrying the token for API-key auth.
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// Characters left unescaped, matching `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// How the token is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthType {
    /// `Authorization: Bearer <token>`.
    #[default]
    Bearer,
    /// Token in a configurable header.
    ApiKey,
    /// Accepted for configuration compatibility; adds no header.
    Basic,
    /// No authentication.
    None,
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuthType::Bearer => "bearer",
            AuthType::ApiKey => "apiKey",
            AuthType::Basic => "basic",
            AuthType::None => "none",
        })
    }
}

impl FromStr for AuthType {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bearer" => Ok(AuthType::Bearer),
            "apikey" | "api-key" | "api_key" => Ok(AuthType::ApiKey),
            "basic" => Ok(AuthType::Basic),
            "none" => Ok(AuthType::None),
            other => Err(AppError::Config(format!("Unknown auth type: {}", other))),
        }
    }
}

/// Values entered by the user for one endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestState {
    /// Path parameter values by name.
    pub path_params: IndexMap<String, String>,
    /// Query parameter values by name, in entry order.
    pub query_params: IndexMap<String, String>,
    /// Extra header values by name.
    pub header_params: IndexMap<String, String>,
    /// Raw body text.
    pub body: String,
    /// Token for bearer/API-key auth.
    pub auth_token: String,
    /// Auth scheme.
    pub auth_type: AuthType,
}

impl RequestState {
    /// The initial state when `endpoint` is selected: empty values, the configured
    /// auth type, and the sample body pre-filled when a body is declared.
    pub fn for_endpoint(endpoint: &ParsedEndpoint, config: &PlaygroundConfig) -> Self {
        let body = endpoint
            .request_body
            .as_ref()
            .map(|b| sample_body_text(&b.schema))
            .unwrap_or_default();

        Self {
            body,
            auth_type: config.auth.auth_type,
            ..Self::default()
        }
    }
}

/// Options that shape header assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Header name used for `AuthType::ApiKey`.
    pub api_key_header: String,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
        }
    }
}

/// A concrete, executable request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: HttpMethod,
    /// Full URL including query string.
    pub url: String,
    /// Headers in assembly order.
    pub headers: IndexMap<String, String>,
    /// Body, when attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Percent-encodes a value the way `encodeURIComponent` does.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builds the URL: base + substituted path + query string.
pub fn build_url(base_url: &str, endpoint: &ParsedEndpoint, state: &RequestState) -> String {
    let mut path = endpoint.path.clone();
    for (name, value) in &state.path_params {
        if value.is_empty() {
            continue;
        }
        path = path.replace(&format!("{{{}}}", name), &encode_uri_component(value));
    }

    let query = state
        .query_params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", encode_uri_component(k), encode_uri_component(v)))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        format!("{}{}", base_url, path)
    } else {
        format!("{}{}?{}", base_url, path, query)
    }
}

/// Builds the full request descriptor.
///
/// # Arguments
///
/// * `base_url` - Server URL prefix (no trailing slash).
/// * `endpoint` - The selected endpoint.
/// * `state` - User-entered values.
/// * `options` - Header naming options.
pub fn build_request(
    base_url: &str,
    endpoint: &ParsedEndpoint,
    state: &RequestState,
    options: &RequestOptions,
) -> RequestDescriptor {
    let mut headers = IndexMap::new();

    if !state.auth_token.is_empty() {
        match state.auth_type {
            AuthType::Bearer => {
                headers.insert(
                    "Authorization".to_string(),
                    format!("Bearer {}", state.auth_token),
                );
            }
            AuthType::ApiKey => {
                headers.insert(options.api_key_header.clone(), state.auth_token.clone());
            }
            AuthType::Basic | AuthType::None => {}
        }
    }

    let has_body = endpoint.request_body.is_some() && !state.body.is_empty();
    if has_body {
        headers.insert("Content-Type".to_string(), "application/json".to_string());
    }

    for (name, value) in &state.header_params {
        if !value.is_empty() {
            set_header(&mut headers, name, value);
        }
    }

    let body = (has_body && endpoint.method != HttpMethod::Get).then(|| state.body.clone());

    RequestDescriptor {
        method: endpoint.method,
        url: build_url(base_url, endpoint, state),
        headers,
        body,
    }
}

/// Inserts a header, replacing the value of an existing one with the same name
/// (case-insensitive) in place.
fn set_header(headers: &mut IndexMap<String, String>, name: &str, value: &str) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
    {
        Some((_, slot)) => *slot = value.to_string(),
        None => {
            headers.insert(name.to_string(), value.to_string());
        }
    }
}
