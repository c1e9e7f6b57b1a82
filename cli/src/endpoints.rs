//! # Endpoints Command
//!
//! Lists endpoints grouped by tag, the way a sidebar would.

use apiplay_core::{filter_groups, ParsedSpec, TagGroup};

/// Arguments for the endpoints command.
#[derive(clap::Args, Debug, Clone)]
pub struct EndpointsArgs {
    /// Only show endpoints whose path, summary or operationId contains this text.
    #[clap(long, short)]
    pub search: Option<String>,
}

/// Prints the grouped endpoint list.
pub fn execute(args: &EndpointsArgs, spec: &ParsedSpec) {
    print!("{}", render(args, spec));
}

fn render(args: &EndpointsArgs, spec: &ParsedSpec) -> String {
    let groups = spec.tag_groups();
    let groups = match &args.search {
        Some(query) => filter_groups(&groups, query),
        None => groups,
    };

    let mut out = format!("{} v{}\n", spec.info.title, spec.info.version);
    if groups.is_empty() {
        out.push_str("\nNo endpoints found.\n");
    }
    for group in &groups {
        render_group(&mut out, group);
    }
    out
}

fn render_group(out: &mut String, group: &TagGroup<'_>) {
    out.push('\n');
    match &group.tag.description {
        Some(description) => out.push_str(&format!("{}: {}\n", group.tag.name, description)),
        None => out.push_str(&format!("{}\n", group.tag.name)),
    }
    for endpoint in &group.endpoints {
        let mut line = format!("  {:<7}{}", endpoint.method, endpoint.path);
        if let Some(summary) = &endpoint.summary {
            line.push_str(&format!("  {}", summary));
        }
        line.push_str(&format!("  [{}]", endpoint.operation_id));
        if endpoint.deprecated {
            line.push_str("  (deprecated)");
        }
        out.push_str(&line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiplay_core::parse_openapi_document;
    use pretty_assertions::assert_eq;

    const SPEC: &str = r#"
openapi: 3.0.3
info: {title: Stats, version: 1.2.0}
tags:
  - name: wallets
    description: Wallet lookups
paths:
  /wallets/{address}:
    get:
      tags: [wallets]
      summary: Get wallet
      operationId: getWallet
  /health:
    get:
      deprecated: true
      operationId: health
"#;

    #[test]
    fn test_render_groups() {
        let spec = parse_openapi_document(SPEC).unwrap();
        let out = render(&EndpointsArgs { search: None }, &spec);
        assert_eq!(
            out,
            "Stats v1.2.0\n\nwallets: Wallet lookups\n  GET    /wallets/{address}  Get wallet  [getWallet]\n\ndefault\n  GET    /health  [health]  (deprecated)\n"
        );
    }

    #[test]
    fn test_render_search() {
        let spec = parse_openapi_document(SPEC).unwrap();
        let out = render(&EndpointsArgs { search: Some("HEALTH".to_string()) }, &spec);
        assert!(out.contains("/health"));
        assert!(!out.contains("wallets"));

        let none = render(&EndpointsArgs { search: Some("zzz".to_string()) }, &spec);
        assert!(none.ends_with("No endpoints found.\n"));
    }
}
