//! gloo-net Activity API
//!
//! Talks to the activities backend with `fetch`, relative to the page origin.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use mergington_activities::api::{decode_board, decode_receipt, is_success, rejection};
use mergington_activities::{
    ActivityApi, ActivityBoard, ActivityEndpoints, ApiError, ApiResult, SignupReceipt,
};

/// [`ActivityApi`] over the browser's `fetch`
#[derive(Clone, Default)]
pub struct GlooActivityApi {
    endpoints: ActivityEndpoints,
}

impl GlooActivityApi {
    /// Same-origin client, as served next to the backend
    pub fn same_origin() -> Self {
        Self {
            endpoints: ActivityEndpoints::relative(),
        }
    }

    async fn read_success_body(response: Response) -> ApiResult<String> {
        let status = response.status();
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

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[async_trait(?Send)]
impl ActivityApi for GlooActivityApi {
    async fn list_activities(&self) -> ApiResult<ActivityBoard> {
        let url = self.endpoints.list();
        tracing::debug!(%url, "GET activities");

        let response = Request::get(&url).send().await.map_err(transport)?;
        let body = Self::read_success_body(response).await?;
        decode_board(&body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupReceipt> {
        let url = self.endpoints.signup(activity, email);
        tracing::debug!(%url, "POST signup");

        let response = Request::post(&url).send().await.map_err(transport)?;
        let body = Self::read_success_body(response).await?;
        decode_receipt(&body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()> {
        let url = self.endpoints.unregister(activity, email);
        tracing::debug!(%url, "DELETE unregister");

        let response = Request::delete(&url).send().await.map_err(transport)?;
        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Err(rejection(status, &body))
    }
}
