#![deny(missing_docs)]

//! # Request Flags
//!
//! Shared `--path`, `--query`, `--header`, `--body`, `--token` and `--auth` flags,
//! turned into a `RequestState`.

use apiplay_core::{AuthType, ParsedEndpoint, PlaygroundConfig, RequestState};
use indexmap::IndexMap;

/// User-entered request values.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Path parameter as `name=value` (repeatable).
    #[clap(long = "path", value_name = "NAME=VALUE", value_parser = parse_pair)]
    pub path_params: Vec<(String, String)>,

    /// Query parameter as `name=value` (repeatable).
    #[clap(long = "query", value_name = "NAME=VALUE", value_parser = parse_pair)]
    pub query_params: Vec<(String, String)>,

    /// Extra header as `name=value` (repeatable).
    #[clap(long = "header", value_name = "NAME=VALUE", value_parser = parse_pair)]
    pub header_params: Vec<(String, String)>,

    /// Raw request body. Defaults to the generated sample.
    #[clap(long)]
    pub body: Option<String>,

    /// Auth token.
    #[clap(long, env = "APIPLAY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Auth scheme (bearer, apiKey, basic, none). Defaults to the config's.
    #[clap(long, value_parser = parse_auth)]
    pub auth: Option<AuthType>,
}

impl RequestArgs {
    /// Builds the request state, starting from the endpoint's initial state.
    pub fn to_state(&self, endpoint: &ParsedEndpoint, config: &PlaygroundConfig) -> RequestState {
        let mut state = RequestState::for_endpoint(endpoint, config);
        state.path_params = collect(&self.path_params);
        state.query_params = collect(&self.query_params);
        state.header_params = collect(&self.header_params);
        if let Some(body) = &self.body {
            state.body = body.clone();
        }
        if let Some(token) = &self.token {
            state.auth_token = token.clone();
        }
        if let Some(auth) = self.auth {
            state.auth_type = auth;
        }
        state
    }
}

fn collect(pairs: &[(String, String)]) -> IndexMap<String, String> {
    pairs.iter().cloned().collect()
}

/// Parses `name=value`; the value may be empty or contain further `=`.
fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

fn parse_auth(raw: &str) -> Result<AuthType, String> {
    raw.parse::<AuthType>().map_err(|e| e.to_string())
}
