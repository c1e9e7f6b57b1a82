//! # cURL Snippets

use super::SnippetStrategy;
use crate::request::RequestDescriptor;

/// Renders a shell `curl` invocation, one flag per continuation line.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurlStrategy;

impl SnippetStrategy for CurlStrategy {
    fn render(&self, request: &RequestDescriptor) -> String {
        let mut lines = vec![format!(
            "curl -X {} {}",
            request.method,
            shell_quote(&request.url)
        )];

        for (name, value) in &request.headers {
            lines.push(format!("  -H {}", shell_quote(&format!("{}: {}", name, value))));
        }
        if let Some(body) = &request.body {
            lines.push(format!("  -d {}", shell_quote(body)));
        }

        lines.join(" \\\n")
    }
}

/// Wraps a value in single quotes, closing and reopening around embedded quotes.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
