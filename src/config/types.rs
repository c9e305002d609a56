// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Default HTTP timeout for REST calls, in seconds
fn default_timeout_secs() -> u64 {
    10
}

/// Default debounce delay before recomputing suggestions
fn default_debounce_ms() -> u64 {
    150
}

fn default_max_suggestions() -> usize {
    8
}

/// REST backend configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Backend origin, e.g. "https://srm.example.com" (the "/api" prefix is added by the client)
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Search widget configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// JSON file with the local suggestion catalog
    pub catalog: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: default_debounce_ms(),
            max_suggestions: default_max_suggestions(),
            catalog: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Apply the `API_BASE_URL` override, if one is set and non-blank
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = Some(url);
        }
        self
    }

    /// Configured base URL with any trailing slash removed
    pub fn base_url(&self) -> Option<&str> {
        self.api
            .base_url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
