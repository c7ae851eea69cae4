/// Connection bootstrap for the hosted backend
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

use crate::config;

use super::error::BackendError;

/// Handle to the backend, usable for both session lookup and document access.
///
/// Deliberately cheap and stateless: each operation derives a fresh handle
/// from configuration instead of sharing a singleton.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    api_token: String,
    project_id: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Build a handle from the current environment.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Config` when `PROJECT_ID` is missing or the
    /// underlying HTTP client cannot be constructed.
    pub fn from_env() -> Result<Self, BackendError> {
        let base_url = config::get_api_base_url();
        let api_token = config::get_api_token();
        let project_id = config::get_project_id();

        if project_id.trim().is_empty() {
            return Err(BackendError::Config("PROJECT_ID is not configured".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("rolectl/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| BackendError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            api_token,
            project_id,
            client,
        })
    }

    /// URL of a single document in a collection.
    pub fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/v1/projects/{}/documents/{}/{}",
            self.base_url, self.project_id, collection, id
        )
    }

    /// URL of the current-session endpoint.
    pub fn session_url(&self) -> String {
        format!("{}/v1/session", self.base_url)
    }

    /// Attach the bearer token, unless none is configured.
    pub fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_token.is_empty() {
            req
        } else {
            req.header("Authorization", format!("Bearer {}", self.api_token))
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> ApiClient {
        ApiClient {
            base_url: "https://api.example.com".to_string(),
            api_token: String::new(),
            project_id: "demo-project".to_string(),
            client: reqwest::Client::new(),
        }
    }

    #[test]
    fn test_document_url() {
        let api = test_client();
        assert_eq!(
            api.document_url("users", "abc123"),
            "https://api.example.com/v1/projects/demo-project/documents/users/abc123"
        );
    }

    #[test]
    fn test_session_url() {
        let api = test_client();
        assert_eq!(api.session_url(), "https://api.example.com/v1/session");
    }
}
