//! # Send Command
//!
//! Builds the request, sends it through a `Transport`, and prints the response.

use std::time::Duration;

use apiplay_core::{
    build_request, format_bytes, ParsedEndpoint, PlaygroundConfig, ResponseSnapshot, Transport,
};

use crate::error::{CliError, CliResult};
use crate::request_args::RequestArgs;

/// Arguments for the send command.
#[derive(clap::Args, Debug, Clone)]
pub struct SendArgs {
    /// operationId of the endpoint.
    pub operation_id: String,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = 30)]
    pub timeout: u64,

    /// Request values.
    #[clap(flatten)]
    pub request: RequestArgs,
}

impl SendArgs {
    /// Timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Sends the request and prints the response.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `endpoint` - The selected endpoint.
/// * `config` - Effective playground config.
/// * `transport` - The transport that executes the request.
pub fn execute(
    args: &SendArgs,
    endpoint: &ParsedEndpoint,
    config: &PlaygroundConfig,
    transport: &impl Transport,
) -> CliResult<()> {
    if !config.features.try_it {
        return Err(CliError::General(
            "Sending requests is disabled in the config".to_string(),
        ));
    }

    let state = args.request.to_state(endpoint, config);
    let request = build_request(&config.base_url, endpoint, &state, &config.request_options());
    eprintln!("{} {}", request.method, request.url);

    let snapshot = transport.send(&request);
    print!("{}", render(&snapshot, config.features.response_headers));
    Ok(())
}

fn render(snapshot: &ResponseSnapshot, show_headers: bool) -> String {
    let mut out = format!(
        "{} {}  {} ms  {}\n",
        snapshot.status,
        snapshot.status_text,
        snapshot.duration_ms,
        format_bytes(snapshot.size_bytes)
    );
    if show_headers && !snapshot.headers.is_empty() {
        for (name, value) in &snapshot.headers {
            out.push_str(&format!("{}: {}\n", name, value));
        }
    }
    out.push('\n');
    out.push_str(&snapshot.pretty_body());
    out.push('\n');
    out
}
