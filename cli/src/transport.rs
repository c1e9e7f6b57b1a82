//! # HTTP Transport
//!
//! Blocking `ureq` implementation of the core `Transport` boundary.
//! Non-2xx statuses are ordinary responses; connection failures become network-error snapshots.

use std::time::{Duration, Instant};

use apiplay_core::{RequestDescriptor, ResponseSnapshot, Transport};
use indexmap::IndexMap;
use ureq::http;
use ureq::Agent;

/// Sends requests with a shared agent.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// A transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();
        Self {
            agent: Agent::new_with_config(config),
        }
    }

    fn execute(&self, request: &RequestDescriptor) -> Result<ResponseSnapshot, String> {
        let mut builder = http::Request::builder()
            .method(request.method.as_str())
            .uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let started = Instant::now();
        let response = match &request.body {
            Some(body) => {
                let req = builder.body(body.clone()).map_err(|e| e.to_string())?;
                self.agent.run(req)
            }
            None => {
                let req = builder.body(()).map_err(|e| e.to_string())?;
                self.agent.run(req)
            }
        };
        let mut response = response.map_err(|e| e.to_string())?;

        let status = response.status();
        let headers: IndexMap<String, String> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| e.to_string())?;

        Ok(ResponseSnapshot {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            size_bytes: body.len() as u64,
            body,
            duration_ms: elapsed_ms(started),
        })
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &RequestDescriptor) -> ResponseSnapshot {
        let started = Instant::now();
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        match self.execute(request) {
            Ok(snapshot) => snapshot,
            Err(message) => {
                tracing::warn!(url = %request.url, error = %message, "request failed");
                ResponseSnapshot::network_error(&message, elapsed_ms(started))
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
