/// Session lookup against the hosted auth service
use serde::Deserialize;

use super::client::ApiClient;
use super::error::BackendError;

/// Narrow capability over "who is currently authenticated".
///
/// Passed explicitly to the verification operation so its behavior is
/// deterministic and testable without a live backend.
pub trait SessionProvider {
    fn current_user_id(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<String>, BackendError>> + Send;
}

/// Session endpoint response
#[derive(Debug, Deserialize)]
struct SessionInfo {
    uid: String,
}

/// Production session provider backed by the hosted auth API.
pub struct RemoteSession {
    api: ApiClient,
}

impl RemoteSession {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl SessionProvider for RemoteSession {
    async fn current_user_id(&self) -> Result<Option<String>, BackendError> {
        let url = self.api.session_url();

        let response = self
            .api
            .authorize(self.api.http().get(&url))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        // No authenticated identity for this handle
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let info: SessionInfo = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse JSON: {}", e)))?;

        Ok(Some(info.uid))
    }
}
