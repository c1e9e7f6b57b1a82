#![deny(missing_docs)]

//! # Playground Configuration
//!
//! Branding, base URL, auth defaults and feature toggles, loaded from YAML or JSON.
//!
//! The configuration is an explicit value handed to whoever needs it; nothing reads
//! it from global state.

use crate::error::{AppError, AppResult};
use crate::request::{AuthType, RequestOptions, DEFAULT_API_KEY_HEADER};
use crate::snippets::SnippetTarget;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use url::Url;

/// Top-level playground configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundConfig {
    /// API display name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Short description / tagline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Base URL requests are sent to.
    pub base_url: String,
    /// Path of the OpenAPI document.
    #[serde(default = "default_spec_path")]
    pub spec_path: PathBuf,
    /// Authentication defaults.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Feature toggles.
    #[serde(default)]
    pub features: FeatureConfig,
}

/// Authentication defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    /// Initial auth scheme.
    #[serde(rename = "type", default)]
    pub auth_type: AuthType,
    /// Header name for API-key auth.
    #[serde(default = "default_api_key_header")]
    pub header_name: String,
    /// Placeholder text for the token input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            auth_type: AuthType::default(),
            header_name: default_api_key_header(),
            placeholder: None,
        }
    }
}

/// Feature toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureConfig {
    /// Show code snippets.
    #[serde(default = "enabled")]
    pub code_snippets: bool,
    /// Snippet targets, in display order.
    #[serde(default = "default_snippet_languages")]
    pub snippet_languages: Vec<SnippetTarget>,
    /// Show response headers.
    #[serde(default = "enabled")]
    pub response_headers: bool,
    /// Allow sending requests.
    #[serde(default = "enabled")]
    pub try_it: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            code_snippets: true,
            snippet_languages: default_snippet_languages(),
            response_headers: true,
            try_it: true,
        }
    }
}

fn default_name() -> String {
    "API".to_string()
}

fn default_spec_path() -> PathBuf {
    PathBuf::from("openapi.yaml")
}

fn default_api_key_header() -> String {
    DEFAULT_API_KEY_HEADER.to_string()
}

fn default_snippet_languages() -> Vec<SnippetTarget> {
    SnippetTarget::ALL.to_vec()
}

fn enabled() -> bool {
    true
}

impl PlaygroundConfig {
    /// A configuration with defaults everywhere except the base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            name: default_name(),
            description: None,
            base_url: base_url.into(),
            spec_path: default_spec_path(),
            auth: AuthConfig::default(),
            features: FeatureConfig::default(),
        }
    }

    /// Loads and validates a config file.
    ///
    /// A relative `specPath` is resolved against the config file's directory.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Self = content.parse()?;
        if config.spec_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.spec_path = dir.join(&config.spec_path);
            }
        }
        tracing::debug!(path = %path.display(), name = %config.name, "loaded playground config");
        Ok(config)
    }

    /// Validates the base URL and trims a trailing `/`.
    pub fn validated(mut self) -> AppResult<Self> {
        Url::parse(&self.base_url).map_err(|e| {
            AppError::Config(format!("Invalid baseUrl '{}': {}", self.base_url, e))
        })?;
        let trimmed_len = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed_len);
        Ok(self)
    }

    /// Options for the request builder derived from this config.
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            api_key_header: self.auth.header_name.clone(),
        }
    }
}

impl FromStr for PlaygroundConfig {
    type Err = AppError;

    /// Parses YAML or JSON text and validates it.
    fn from_str(content: &str) -> AppResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validated()
    }
}
