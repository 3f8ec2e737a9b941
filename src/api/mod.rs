//! Activities backend API
//!
//! The [`ActivityApi`] trait is the seam between the panel controller and
//! whatever performs HTTP on the current platform. Response classification
//! lives here so every implementation maps status codes and bodies the same
//! way.

#[cfg(not(target_arch = "wasm32"))]
mod http;

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpActivityApi;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::model::{ActivityBoard, SignupReceipt};

/// The three calls the panel makes against the backend.
///
/// Futures are not required to be `Send`; the browser implementation holds
/// JS values across await points.
#[async_trait(?Send)]
pub trait ActivityApi {
    /// `GET /activities`
    async fn list_activities(&self) -> ApiResult<ActivityBoard>;

    /// `POST /activities/{activity}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupReceipt>;

    /// `DELETE /activities/{activity}/unregister?email={email}`
    ///
    /// The success body is ignored.
    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Decode a `/activities` success body
pub fn decode_board(body: &str) -> ApiResult<ActivityBoard> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a signup success body
pub fn decode_receipt(body: &str) -> ApiResult<SignupReceipt> {
    Ok(serde_json::from_str(body)?)
}

/// Classify a non-success response.
///
/// Only a non-empty string `detail` is surfaced; anything else (missing,
/// empty, structured validation errors) leaves `detail` unset. A body that
/// is not JSON at all is a decode failure.
pub fn rejection(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => {
            let detail = parsed
                .detail
                .and_then(|d| d.as_str().map(str::to_string))
                .filter(|d| !d.is_empty());
            ApiError::Rejected { status, detail }
        }
        Err(e) => ApiError::Decode(format!("status {}: {}", status, e)),
    }
}

/// True for 2xx statuses
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
