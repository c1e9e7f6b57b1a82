#![deny(missing_docs)]

//! # Code Snippets
//!
//! Renders a request as source text for several calling conventions.
//!
//! Every target goes through `build_request` first, so URL, header and body rules are
//! exactly those of the request that would actually be sent.

pub mod curl;
pub mod fetch;
pub mod requests;

use crate::error::{AppError, AppResult};
use crate::oas::models::ParsedEndpoint;
use crate::request::{build_request, RequestDescriptor, RequestOptions, RequestState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use curl::CurlStrategy;
pub use fetch::FetchStrategy;
pub use requests::RequestsStrategy;

/// A strategy for rendering a request in one calling convention.
pub trait SnippetStrategy {
    /// Renders the request as source text.
    fn render(&self, request: &RequestDescriptor) -> String;
}

/// Supported snippet targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetTarget {
    /// Shell `curl` invocation.
    Curl,
    /// JavaScript `fetch` call.
    #[serde(alias = "js")]
    JavaScript,
    /// Python `requests` call.
    Python,
}

impl SnippetTarget {
    /// All targets in default display order.
    pub const ALL: [SnippetTarget; 3] = [
        SnippetTarget::Curl,
        SnippetTarget::JavaScript,
        SnippetTarget::Python,
    ];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            SnippetTarget::Curl => "cURL",
            SnippetTarget::JavaScript => "JavaScript",
            SnippetTarget::Python => "Python",
        }
    }

    fn strategy(self) -> &'static dyn SnippetStrategy {
        match self {
            SnippetTarget::Curl => &CurlStrategy,
            SnippetTarget::JavaScript => &FetchStrategy,
            SnippetTarget::Python => &RequestsStrategy,
        }
    }
}

impl fmt::Display for SnippetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SnippetTarget::Curl => "curl",
            SnippetTarget::JavaScript => "javascript",
            SnippetTarget::Python => "python",
        })
    }
}

impl FromStr for SnippetTarget {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "curl" | "shell" => Ok(SnippetTarget::Curl),
            "javascript" | "js" | "fetch" => Ok(SnippetTarget::JavaScript),
            "python" | "py" | "requests" => Ok(SnippetTarget::Python),
            other => Err(AppError::General(format!(
                "Unknown snippet language: {}",
                other
            ))),
        }
    }
}

/// Renders one snippet.
pub fn emit_snippet(
    target: SnippetTarget,
    base_url: &str,
    endpoint: &ParsedEndpoint,
    state: &RequestState,
    options: &RequestOptions,
) -> String {
    let request = build_request(base_url, endpoint, state, options);
    target.strategy().render(&request)
}

/// Renders several targets in the given order, sharing one request descriptor.
pub fn emit_all(
    targets: &[SnippetTarget],
    base_url: &str,
    endpoint: &ParsedEndpoint,
    state: &RequestState,
    options: &RequestOptions,
) -> Vec<(SnippetTarget, String)> {
    let request = build_request(base_url, endpoint, state, options);
    targets
        .iter()
        .map(|target| (*target, target.strategy().render(&request)))
        .collect()
}

/// Escapes a value for a single-quoted literal (JavaScript).
pub(crate) fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::models::{HttpMethod, ParsedRequestBody, SchemaObject};
    use crate::request::AuthType;

    fn endpoint(method: HttpMethod) -> ParsedEndpoint {
        ParsedEndpoint {
            operation_id: "search".to_string(),
            method,
            path: "/search".to_string(),
            summary: None,
            description: None,
            tags: Vec::new(),
            deprecated: false,
            parameters: Vec::new(),
            request_body: Some(ParsedRequestBody {
                required: false,
                description: None,
                content_type: "application/json".to_string(),
                schema: SchemaObject::default(),
            }),
            responses: Vec::new(),
        }
    }

    #[test]
    fn test_target_parsing() {
        assert_eq!("curl".parse::<SnippetTarget>().unwrap(), SnippetTarget::Curl);
        assert_eq!("JS".parse::<SnippetTarget>().unwrap(), SnippetTarget::JavaScript);
        assert_eq!("python".parse::<SnippetTarget>().unwrap(), SnippetTarget::Python);
        assert!("ruby".parse::<SnippetTarget>().is_err());
        assert_eq!(SnippetTarget::JavaScript.to_string(), "javascript");
    }

    #[test]
    fn test_all_targets_share_get_body_suppression() {
        let state = RequestState {
            body: "{\"q\": \"x\"}".to_string(),
            auth_token: "abc".to_string(),
            auth_type: AuthType::ApiKey,
            ..RequestState::default()
        };
        let snippets = emit_all(
            &SnippetTarget::ALL,
            "https://api.example.com",
            &endpoint(HttpMethod::Get),
            &state,
            &RequestOptions::default(),
        );

        assert_eq!(snippets.len(), 3);
        for (target, code) in &snippets {
            assert!(code.contains("https://api.example.com/search"), "{}", target);
            assert!(code.contains("X-API-Key"), "{}", target);
            assert!(!code.contains("\"q\""), "{} leaked a GET body", target);
        }
    }

    #[test]
    fn test_emit_snippet_matches_emit_all() {
        let state = RequestState {
            body: "{}".to_string(),
            ..RequestState::default()
        };
        let ep = endpoint(HttpMethod::Post);
        let options = RequestOptions::default();
        let single = emit_snippet(SnippetTarget::Curl, "http://h", &ep, &state, &options);
        let all = emit_all(&[SnippetTarget::Curl], "http://h", &ep, &state, &options);
        assert_eq!(single, all[0].1);
    }
}
