//! # Snippet Command
//!
//! Prints equivalent code for the request in each requested language.

use apiplay_core::{emit_all, ParsedEndpoint, PlaygroundConfig, SnippetTarget};

use crate::error::{CliError, CliResult};
use crate::request_args::RequestArgs;

/// Arguments for the snippet command.
#[derive(clap::Args, Debug, Clone)]
pub struct SnippetArgs {
    /// operationId of the endpoint.
    pub operation_id: String,

    /// Target language (repeatable). Defaults to the configured languages.
    #[clap(long = "lang", value_parser = parse_target)]
    pub languages: Vec<SnippetTarget>,

    /// Request values.
    #[clap(flatten)]
    pub request: RequestArgs,
}

/// Prints the snippets.
pub fn execute(
    args: &SnippetArgs,
    endpoint: &ParsedEndpoint,
    config: &PlaygroundConfig,
) -> CliResult<()> {
    print!("{}", render(args, endpoint, config)?);
    Ok(())
}

fn render(
    args: &SnippetArgs,
    endpoint: &ParsedEndpoint,
    config: &PlaygroundConfig,
) -> CliResult<String> {
    let targets = if args.languages.is_empty() {
        if !config.features.code_snippets {
            return Err(CliError::General(
                "Code snippets are disabled in the config".to_string(),
            ));
        }
        config.features.snippet_languages.clone()
    } else {
        args.languages.clone()
    };

    let state = args.request.to_state(endpoint, config);
    let snippets = emit_all(
        &targets,
        &config.base_url,
        endpoint,
        &state,
        &config.request_options(),
    );

    let single = snippets.len() == 1;
    let mut out = String::new();
    for (target, code) in snippets {
        if !single {
            out.push_str(&format!("# {}\n", target.label()));
        }
        out.push_str(&code);
        out.push_str("\n\n");
    }
    Ok(out)
}

fn parse_target(raw: &str) -> Result<SnippetTarget, String> {
    raw.parse::<SnippetTarget>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiplay_core::parse_openapi_document;
    use pretty_assertions::assert_eq;

    const SPEC: &str = r#"
openapi: 3.0.3
info: {title: T, version: '1'}
paths:
  /wallets/{address}:
    get:
      operationId: getWallet
      parameters:
        - {name: address, in: path, required: true, schema: {type: string}}
"#;

    fn args(languages: Vec<SnippetTarget>) -> SnippetArgs {
        SnippetArgs {
            operation_id: "getWallet".to_string(),
            languages,
            request: RequestArgs {
                path_params: vec![("address".to_string(), "0xabc".to_string())],
                ..RequestArgs::default()
            },
        }
    }

    #[test]
    fn test_single_language() {
        let spec = parse_openapi_document(SPEC).unwrap();
        let config = PlaygroundConfig::new("https://api.example.com");
        let endpoint = spec.find_endpoint("getWallet").unwrap();
        let out = render(&args(vec![SnippetTarget::Curl]), endpoint, &config).unwrap();
        assert_eq!(out, "curl -X GET 'https://api.example.com/wallets/0xabc'\n\n");
    }

    #[test]
    fn test_configured_languages_with_headings() {
        let spec = parse_openapi_document(SPEC).unwrap();
        let mut config = PlaygroundConfig::new("https://api.example.com");
        config.features.snippet_languages = vec![SnippetTarget::Python, SnippetTarget::Curl];
        let endpoint = spec.find_endpoint("getWallet").unwrap();
        let out = render(&args(Vec::new()), endpoint, &config).unwrap();
        let python = out.find("# Python").unwrap();
        let curl = out.find("# cURL").unwrap();
        assert!(python < curl);

        config.features.code_snippets = false;
        assert!(render(&args(Vec::new()), endpoint, &config).is_err());
    }
}
