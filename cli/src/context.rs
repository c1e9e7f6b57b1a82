#![deny(missing_docs)]

//! # Playground Context
//!
//! Resolves the config file, the OpenAPI document and the base URL from flags,
//! environment variables and defaults.
//!
//! Base URL precedence: `--base-url` / `APIPLAY_BASE_URL`, then the config file,
//! then the document's first server when it is an absolute URL.

use std::fs;
use std::path::PathBuf;

use apiplay_core::{parse_openapi_document, ParsedEndpoint, ParsedSpec, PlaygroundConfig};
use url::Url;

use crate::error::{CliError, CliResult};

/// Where to load the playground from.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Playground config file (YAML or JSON).
    #[clap(long, env = "APIPLAY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// OpenAPI document. Overrides the config's `specPath`.
    #[clap(long, env = "APIPLAY_SPEC", global = true)]
    pub spec: Option<PathBuf>,

    /// Base URL requests are sent to.
    #[clap(long, env = "APIPLAY_BASE_URL", global = true)]
    pub base_url: Option<String>,
}

/// A loaded config together with its parsed document.
#[derive(Debug)]
pub struct Playground {
    /// Effective configuration.
    pub config: PlaygroundConfig,
    /// Parsed document.
    pub spec: ParsedSpec,
}

impl Playground {
    /// Loads config and document.
    pub fn load(args: &SourceArgs) -> CliResult<Self> {
        let file_config = match &args.config {
            Some(path) => Some(PlaygroundConfig::from_file(path)?),
            None => None,
        };

        let spec_path = args
            .spec
            .clone()
            .or_else(|| file_config.as_ref().map(|c| c.spec_path.clone()))
            .unwrap_or_else(|| PathBuf::from("openapi.yaml"));

        if !spec_path.exists() {
            return Err(CliError::General(format!(
                "OpenAPI file not found: {:?}",
                spec_path
            )));
        }
        let content = fs::read_to_string(&spec_path)?;
        let spec = parse_openapi_document(&content)?;

        let base_url = args
            .base_url
            .clone()
            .or_else(|| file_config.as_ref().map(|c| c.base_url.clone()))
            .or_else(|| absolute_server_url(&spec))
            .ok_or_else(|| {
                CliError::General(match spec.default_server_url() {
                    Some(relative) => format!(
                        "Server URL '{}' is relative: pass --base-url or set baseUrl in the config",
                        relative
                    ),
                    None => {
                        "No base URL: pass --base-url, set one in the config, or declare a server"
                            .to_string()
                    }
                })
            })?;

        let mut config = file_config.unwrap_or_else(|| PlaygroundConfig::new(base_url.clone()));
        config.base_url = base_url;
        config.spec_path = spec_path;
        if config.description.is_none() {
            config.description = spec.info.description.clone();
        }
        let config = config.validated()?;

        tracing::debug!(
            base_url = %config.base_url,
            endpoints = spec.endpoints.len(),
            "playground ready"
        );
        Ok(Self { config, spec })
    }

    /// Looks up an endpoint by operationId.
    pub fn endpoint(&self, operation_id: &str) -> CliResult<&ParsedEndpoint> {
        self.spec.find_endpoint(operation_id).ok_or_else(|| {
            CliError::General(format!("Unknown operationId: {}", operation_id))
        })
    }
}

/// The first declared server, unless it is relative to wherever the document is hosted.
fn absolute_server_url(spec: &ParsedSpec) -> Option<String> {
    let server = spec.default_server_url()?;
    match Url::parse(server) {
        Ok(_) => Some(server.to_string()),
        Err(e) => {
            tracing::debug!(server, error = %e, "ignoring non-absolute server URL");
            None
        }
    }
}
