//! Deployment readiness gate
//!
//! A single `GET {base_url}/readyz`. Any 2xx is ready; everything else is
//! reported as a `ReadinessError` so the CLI can exit non-zero.

use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadinessError {
    #[error("Backend not ready: {url} returned HTTP {status}")]
    NotReady { url: String, status: u16 },

    #[error("Backend unreachable at {url}: {source}")]
    Unreachable { url: String, source: reqwest::Error },
}

pub fn readyz_url(base_url: &str) -> String {
    format!("{}/readyz", base_url.trim_end_matches('/'))
}

/// Check readiness once. Returns the HTTP status on success.
pub async fn check_ready(client: &Client, base_url: &str) -> Result<u16, ReadinessError> {
    let url = readyz_url(base_url);
    log::debug!("Checking readiness at {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| ReadinessError::Unreachable {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if status.is_success() {
        log::info!("Backend ready ({})", status.as_u16());
        Ok(status.as_u16())
    } else {
        Err(ReadinessError::NotReady {
            url,
            status: status.as_u16(),
        })
    }
}
