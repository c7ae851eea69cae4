/// Document access for the `users` collection
use crate::config::USERS_COLLECTION;
use crate::models::{RolePatch, UserRoleRecord};

use super::client::ApiClient;
use super::error::BackendError;

/// Narrow capability over the backend's document storage.
///
/// `merge` has upsert semantics: the document is created when absent, and
/// fields not present on the patch are left untouched on an existing one.
pub trait UserRecordStore {
    fn merge(
        &self,
        uid: &str,
        patch: &RolePatch,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;

    fn get(
        &self,
        uid: &str,
    ) -> impl std::future::Future<Output = Result<Option<UserRoleRecord>, BackendError>> + Send;
}

/// Production store backed by the hosted document API.
pub struct RemoteUserStore {
    api: ApiClient,
}

impl RemoteUserStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl UserRecordStore for RemoteUserStore {
    async fn merge(&self, uid: &str, patch: &RolePatch) -> Result<(), BackendError> {
        let url = self.api.document_url(USERS_COLLECTION, uid);

        let response = self
            .api
            .authorize(self.api.http().patch(&url))
            .json(patch)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
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

        Ok(())
    }

    async fn get(&self, uid: &str) -> Result<Option<UserRoleRecord>, BackendError> {
        let url = self.api.document_url(USERS_COLLECTION, uid);

        let response = self
            .api
            .authorize(self.api.http().get(&url))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        // A missing document is a valid outcome, not a failure
        if status == reqwest::StatusCode::NOT_FOUND {
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

        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let record: UserRoleRecord = serde_json::from_str(&text)
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse JSON: {}", e)))?;

        Ok(Some(record))
    }
}
