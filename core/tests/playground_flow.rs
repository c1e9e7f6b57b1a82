//! End-to-end flow against a fixture document: load, cut cycles, group by tag, build a request and emit snippets.

use apiplay_core::oas::ParamSource;
use apiplay_core::{
    build_request, emit_all, filter_groups, parse_openapi_document, sample_body, AuthType,
    HttpMethod, PlaygroundConfig, RequestState, SnippetTarget,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const FIXTURE: &str = include_str!("fixtures/wallet_stats.yaml");

#[test]
fn test_load_document() {
    let spec = parse_openapi_document(FIXTURE).unwrap();

    assert_eq!(spec.info.title, "Wallet Stats API");
    assert_eq!(spec.info.version, "2.1.0");
    assert_eq!(spec.default_server_url(), Some("https://stats.example.com/v1"));

    let ids: Vec<&str> = spec.endpoints.iter().map(|e| e.operation_id.as_str()).collect();
    assert_eq!(ids, vec!["get__wallets__address__portfolio", "addLabel", "health"]);

    let portfolio = spec.find_endpoint("get__wallets__address__portfolio").unwrap();
    let names: Vec<&str> = portfolio.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["address", "currency"]);
    assert_eq!(portfolio.parameters_in(ParamSource::Path).count(), 1);

    let codes: Vec<&str> = portfolio.responses.iter().map(|r| r.status_code.as_str()).collect();
    assert_eq!(codes, vec!["200", "404"]);
    assert_eq!(portfolio.responses[1].description.as_deref(), Some("Wallet not found"));
}

#[test]
fn test_cycles_are_cut() {
    let spec = parse_openapi_document(FIXTURE).unwrap();
    let portfolio = spec.find_endpoint("get__wallets__address__portfolio").unwrap();
    let schema = portfolio.success_response().unwrap().schema.as_ref().unwrap();

    let props = schema.properties.as_ref().unwrap();
    let total = &props["totalValue"];
    assert_eq!(total.schema_type.as_deref(), Some("number"));
    assert_eq!(total.nullable, Some(true));

    let owner = &props["owner"];
    let back = &owner.properties.as_ref().unwrap()["portfolio"];
    assert!(back.circular);
    assert!(back.properties.is_none());
    assert_eq!(back.schema_type.as_deref(), Some("object"));

    // Sampling a schema with a cut cycle terminates.
    let sample = sample_body(schema);
    assert_eq!(sample["owner"]["portfolio"], json!({}));
}

#[test]
fn test_tag_groups_and_search() {
    let spec = parse_openapi_document(FIXTURE).unwrap();
    let groups = spec.tag_groups();

    let names: Vec<&str> = groups.iter().map(|g| g.tag.name.as_str()).collect();
    assert_eq!(names, vec!["wallets", "default"]);
    assert_eq!(groups[0].endpoints.len(), 2);
    assert_eq!(groups[0].tag.description.as_deref(), Some("Wallet level data"));

    let found = filter_groups(&groups, "LABEL");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].endpoints[0].operation_id, "addLabel");
}

#[test]
fn test_build_and_emit() {
    let spec = parse_openapi_document(FIXTURE).unwrap();
    let config: PlaygroundConfig = r#"
baseUrl: https://stats.example.com/v1/
auth:
  type: apiKey
  headerName: X-Stats-Key
"#
    .parse()
    .unwrap();

    let endpoint = spec.find_endpoint("addLabel").unwrap();
    assert_eq!(endpoint.method, HttpMethod::Post);

    let mut state = RequestState::for_endpoint(endpoint, &config);
    assert_eq!(state.auth_type, AuthType::ApiKey);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&state.body).unwrap(),
        json!({"name": "treasury", "color": "#ff0000", "pinned": false})
    );

    state.path_params.insert("address".to_string(), "0x1 2".to_string());
    state.auth_token = "secret".to_string();

    let options = config.request_options();
    let request = build_request(&config.base_url, endpoint, &state, &options);
    assert_eq!(request.url, "https://stats.example.com/v1/wallets/0x1%202/labels");
    let header_names: Vec<&str> = request.headers.keys().map(String::as_str).collect();
    assert_eq!(header_names, vec!["X-Stats-Key", "Content-Type"]);
    assert_eq!(request.body.as_deref(), Some(state.body.as_str()));

    let snippets = emit_all(&SnippetTarget::ALL, &config.base_url, endpoint, &state, &options);
    for (target, code) in &snippets {
        assert!(code.contains(&request.url), "{} is missing the url", target);
        assert!(code.contains("X-Stats-Key"), "{} is missing the auth header", target);
        assert!(code.contains("treasury"), "{} is missing the body", target);
    }
}
