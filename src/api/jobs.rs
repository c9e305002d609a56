//! Async jobs REST client
//!
//! Every public call turns failures into the sentinel its signature promises
//! (`Vec::new()`, `None`, or `MutationResult::Failure`) after logging them.
//! Nothing is retried.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::ApiError;
use super::types::{Job, JobDraft, MutationResult};
use crate::suggestion::encode_component;

/// Client for `{base_url}/api/jobs` and `{base_url}/api/users/:uid/jobs`
#[derive(Debug, Clone)]
pub struct JobsClient {
    client: Client,
    api_base: String,
}

impl JobsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::error!("Failed to build HTTP client, using defaults: {}", e);
                Client::new()
            });
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            api_base: format!("{}/api", base_url.trim_end_matches('/')),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.api_base, path))
            .header("accept", "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Status { status, message })
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Parse an optional job echo; empty or non-job bodies are not errors
    async fn job_echo(response: Response) -> Option<Job> {
        let body = response.text().await.ok()?;
        serde_json::from_str(&body).ok()
    }

    async fn try_list(&self, path: &str) -> Result<Vec<Job>, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::json(response).await
    }

    async fn try_get(&self, id: &str) -> Result<Option<Job>, ApiError> {
        let path = format!("/jobs/{}", encode_component(id));
        let response = self.request(Method::GET, &path).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Self::json(response).await.map(Some)
    }

    async fn mutate(&self, request: RequestBuilder, what: &str) -> MutationResult {
        match self.send(request).await {
            Ok(response) => MutationResult::Success(Self::job_echo(response).await),
            Err(e) => {
                log::error!("Failed to {}: {}", what, e);
                MutationResult::Failure {
                    error: e.to_string(),
                }
            }
        }
    }

    /// `POST /jobs`
    pub async fn create_job(&self, draft: &JobDraft) -> MutationResult {
        self.mutate(self.request(Method::POST, "/jobs").json(draft), "create job")
            .await
    }

    /// `GET /jobs`, keeping the failure for callers that report it
    pub async fn try_list_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.try_list("/jobs").await
    }

    /// `GET /jobs`; empty on failure
    pub async fn list_jobs(&self) -> Vec<Job> {
        self.try_list_jobs().await.unwrap_or_else(|e| {
            log::error!("Failed to list jobs: {}", e);
            Vec::new()
        })
    }

    /// `GET /jobs/:id`; `None` when missing or on failure
    pub async fn get_job(&self, id: &str) -> Option<Job> {
        self.try_get(id).await.unwrap_or_else(|e| {
            log::error!("Failed to fetch job {}: {}", id, e);
            None
        })
    }

    /// `GET /users/:uid/jobs`; empty on failure
    pub async fn user_jobs(&self, user_id: &str) -> Vec<Job> {
        let path = format!("/users/{}/jobs", encode_component(user_id));
        self.try_list(&path).await.unwrap_or_else(|e| {
            log::error!("Failed to list jobs for user {}: {}", user_id, e);
            Vec::new()
        })
    }

    /// `PUT /jobs/:id`
    pub async fn update_job(&self, id: &str, draft: &JobDraft) -> MutationResult {
        let path = format!("/jobs/{}", encode_component(id));
        self.mutate(self.request(Method::PUT, &path).json(draft), "update job")
            .await
    }

    /// `DELETE /jobs/:id`
    pub async fn delete_job(&self, id: &str) -> MutationResult {
        let path = format!("/jobs/{}", encode_component(id));
        self.mutate(self.request(Method::DELETE, &path), "delete job")
            .await
    }
}
