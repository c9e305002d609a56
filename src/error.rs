use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SrmError {
    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid job JSON: {0}")]
    InvalidJobJson(#[from] serde_json::Error),

    #[error("No API base URL configured.\n\nSet API_BASE_URL, pass --base-url, or add base_url under [api] in ~/.config/srm/config.toml")]
    ApiNotConfigured,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
