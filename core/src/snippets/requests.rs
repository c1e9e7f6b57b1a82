//! # Python `requests` Snippets

use super::SnippetStrategy;
use crate::request::RequestDescriptor;
use serde_json::Value;

/// Renders a `requests.<method>(...)` call.
///
/// JSON bodies are rewritten as Python literals and passed through `json=`;
/// anything else is sent verbatim through `data=`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestsStrategy;

impl SnippetStrategy for RequestsStrategy {
    fn render(&self, request: &RequestDescriptor) -> String {
        let mut code = String::from("import requests\n\n");
        code.push_str(&format!("response = requests.{}(\n", request.method.key()));
        code.push_str(&format!("    {},\n", python_string(&request.url)));

        if !request.headers.is_empty() {
            let entries = request
                .headers
                .iter()
                .map(|(k, v)| format!("{}: {}", python_string(k), python_string(v)))
                .collect::<Vec<_>>()
                .join(", ");
            code.push_str(&format!("    headers={{{}}},\n", entries));
        }

        if let Some(body) = &request.body {
            match serde_json::from_str::<Value>(body) {
                Ok(value) => code.push_str(&format!("    json={},\n", python_literal(&value))),
                Err(_) => code.push_str(&format!("    data={},\n", python_string(body))),
            }
        }

        code.push_str(")\n\nprint(response.json())");
        code
    }
}

fn python_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

fn python_literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => python_string(s),
        Value::Array(items) => format!(
            "[{}]",
            items.iter().map(python_literal).collect::<Vec<_>>().join(", ")
        ),
        Value::Object(map) => format!(
            "{{{}}}",
            map.iter()
                .map(|(k, v)| format!("{}: {}", python_string(k), python_literal(v)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::models::HttpMethod;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn request(method: HttpMethod, body: Option<&str>) -> RequestDescriptor {
        RequestDescriptor {
            method,
            url: "https://api.example.com/orders".to_string(),
            headers: IndexMap::from([("Authorization".to_string(), "Bearer t".to_string())]),
            body: body.map(str::to_string),
        }
    }

    #[test]
    fn test_json_body_as_python_literal() {
        let code = RequestsStrategy.render(&request(
            HttpMethod::Post,
            Some("{\"active\": true, \"note\": null, \"ids\": [1, 2]}"),
        ));
        assert_eq!(
            code,
            "import requests\n\nresponse = requests.post(\n    \"https://api.example.com/orders\",\n    headers={\"Authorization\": \"Bearer t\"},\n    json={\"active\": True, \"note\": None, \"ids\": [1, 2]},\n)\n\nprint(response.json())"
        );
    }

    #[test]
    fn test_non_json_body_uses_data() {
        let code = RequestsStrategy.render(&request(HttpMethod::Patch, Some("a=1&b=2")));
        assert!(code.contains("requests.patch("));
        assert!(code.contains("    data=\"a=1&b=2\",\n"));
        assert!(!code.contains("json="));
    }

    #[test]
    fn test_get_without_body_or_headers() {
        let bare = RequestDescriptor {
            headers: IndexMap::new(),
            ..request(HttpMethod::Get, None)
        };
        assert_eq!(
            RequestsStrategy.render(&bare),
            "import requests\n\nresponse = requests.get(\n    \"https://api.example.com/orders\",\n)\n\nprint(response.json())"
        );
    }

    #[test]
    fn test_python_literal_nesting() {
        assert_eq!(
            python_literal(&json!({"a": {"b": [false, "x\"y"]}})),
            "{\"a\": {\"b\": [False, \"x\\\"y\"]}}"
        );
    }
}
