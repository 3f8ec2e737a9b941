//! reqwest implementation of the activities API
//!
//! Used by the terminal client and the integration tests.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{decode_board, decode_receipt, is_success, rejection, ActivityApi};
use crate::endpoints::ActivityEndpoints;
use crate::error::{ApiError, ApiResult};
use crate::model::{ActivityBoard, SignupReceipt};

/// HTTP client for a remote activities backend
pub struct HttpActivityApi {
    client: Client,
    endpoints: ActivityEndpoints,
}

impl HttpActivityApi {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str, request_timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoints: ActivityEndpoints::new(base_url),
        })
    }

    /// Read status and body, turning non-success into a classified rejection
    async fn read_success_body(response: Response) -> ApiResult<String> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if is_success(status) {
            Ok(body)
        } else {
            Err(rejection(status, &body))
        }
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Transport("request timed out".to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> ApiResult<ActivityBoard> {
        let url = self.endpoints.list();
        tracing::debug!(%url, "GET activities");

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let body = Self::read_success_body(response).await?;
        decode_board(&body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupReceipt> {
        let url = self.endpoints.signup(activity, email);
        tracing::debug!(%url, "POST signup");

        let response = self.client.post(&url).send().await.map_err(transport)?;
        let body = Self::read_success_body(response).await?;
        decode_receipt(&body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()> {
        let url = self.endpoints.unregister(activity, email);
        tracing::debug!(%url, "DELETE unregister");

        let response = self.client.delete(&url).send().await.map_err(transport)?;
        let status = response.status().as_u16();
        if is_success(status) {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Err(rejection(status, &body))
    }
}
