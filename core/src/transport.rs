#![deny(missing_docs)]

//! # Transport Boundary
//!
//! The core never performs I/O. A `Transport` executes a `RequestDescriptor` and
//! reports the outcome as a `ResponseSnapshot`; failures become synthetic snapshots
//! with status `0` rather than errors.

use crate::request::RequestDescriptor;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

/// Status text used for transport-level failures.
pub const NETWORK_ERROR_STATUS_TEXT: &str = "Network Error";

/// Executes a request.
pub trait Transport {
    /// Sends the request. Implementations must not fail; use
    /// [`ResponseSnapshot::network_error`] for connection-level problems.
    fn send(&self, request: &RequestDescriptor) -> ResponseSnapshot;
}

/// The observed outcome of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSnapshot {
    /// HTTP status, or `0` when no response was received.
    pub status: u16,
    /// Reason phrase.
    pub status_text: String,
    /// Response headers in arrival order.
    pub headers: IndexMap<String, String>,
    /// Response body text.
    pub body: String,
    /// Round-trip time in milliseconds.
    pub duration_ms: u64,
    /// Body size in bytes.
    pub size_bytes: u64,
}

/// Coarse status grouping used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx.
    Success,
    /// 3xx.
    Redirect,
    /// 4xx.
    ClientError,
    /// 5xx, `0` and anything unexpected.
    Failure,
}

impl ResponseSnapshot {
    /// A snapshot describing a request that never got a response.
    pub fn network_error(message: &str, duration_ms: u64) -> Self {
        let body = serde_json::to_string_pretty(&json!({ "error": message }))
            .unwrap_or_else(|_| message.to_string());
        Self {
            status: 0,
            status_text: NETWORK_ERROR_STATUS_TEXT.to_string(),
            headers: IndexMap::new(),
            body,
            duration_ms,
            size_bytes: 0,
        }
    }

    /// Groups the status code.
    pub fn status_class(&self) -> StatusClass {
        match self.status {
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            400..=499 => StatusClass::ClientError,
            _ => StatusClass::Failure,
        }
    }

    /// The body pretty-printed when it is JSON, otherwise as received.
    pub fn pretty_body(&self) -> String {
        serde_json::from_str::<Value>(&self.body)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_else(|| self.body.clone())
    }
}

/// Human-readable byte count: `"512 B"`, `"1.5 KB"`, `"2.0 MB"`.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
