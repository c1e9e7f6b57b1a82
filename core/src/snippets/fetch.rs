//! # JavaScript `fetch` Snippets

use super::{escape_single_quoted, SnippetStrategy};
use crate::request::RequestDescriptor;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Renders an `await fetch(...)` call followed by JSON decoding of the response.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchStrategy;

impl SnippetStrategy for FetchStrategy {
    fn render(&self, request: &RequestDescriptor) -> String {
        let mut code = format!(
            "const response = await fetch('{}', {{\n",
            escape_single_quoted(&request.url)
        );
        code.push_str(&format!("  method: '{}',\n", request.method));
        if !request.headers.is_empty() {
            code.push_str(&format!(
                "  headers: {},\n",
                headers_literal(&request.headers).replace('\n', "\n  ")
            ));
        }
        if let Some(body) = &request.body {
            code.push_str(&format!("  body: JSON.stringify({}),\n", body));
        }
        code.push_str("});\n\nconst data = await response.json();\nconsole.log(data);");
        code
    }
}

/// Headers as a JSON object literal indented by four spaces.
fn headers_literal(headers: &IndexMap<String, String>) -> String {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    match headers.serialize(&mut serializer) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => "{}".to_string(),
    }
}
