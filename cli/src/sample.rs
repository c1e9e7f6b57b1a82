//! # Sample Command
//!
//! Prints the generated request body for an endpoint.

use apiplay_core::{sample_body_text, ParsedEndpoint};

use crate::error::{CliError, CliResult};

/// Arguments for the sample command.
#[derive(clap::Args, Debug, Clone)]
pub struct SampleArgs {
    /// operationId of the endpoint.
    pub operation_id: String,
}

/// Prints the sample body.
pub fn execute(endpoint: &ParsedEndpoint) -> CliResult<()> {
    println!("{}", render(endpoint)?);
    Ok(())
}

fn render(endpoint: &ParsedEndpoint) -> CliResult<String> {
    let body = endpoint.request_body.as_ref().ok_or_else(|| {
        CliError::General(format!(
            "{} {} declares no request body",
            endpoint.method, endpoint.path
        ))
    })?;
    Ok(sample_body_text(&body.schema))
}
